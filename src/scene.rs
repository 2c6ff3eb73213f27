use crate::camera::Camera;
use crate::hit_record::HitRecord;
use crate::hitable::list::PrimitiveList;
use crate::hitable::Primitive;
use crate::material::{Material, MaterialArena, MaterialId};
use crate::ray::Ray;

/// Everything the integrator reads: the geometry, the material arena the
/// geometry indexes into, and the camera. Grows only while being built;
/// read-only once rendering starts.
pub struct Scene {
    pub hitables: PrimitiveList,
    pub materials: MaterialArena,
    pub camera: Camera,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Scene {
            hitables: PrimitiveList::new(),
            materials: MaterialArena::new(),
            camera,
        }
    }
    pub fn add(&mut self, primitive: Primitive) {
        self.hitables.add(primitive);
    }
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.add(material)
    }
    pub fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        self.hitables.hit(ray, t_min, t_max)
    }
    pub fn material(&self, id: MaterialId) -> &Material {
        self.materials.get(id)
    }
}
