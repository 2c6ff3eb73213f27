pub mod dielectric;
pub mod diffuse_light;
pub mod lambertian;
pub mod metal;

use crate::aliases::{Color, Point3, RandGen, Vec2};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use self::dielectric::Dielectric;
use self::diffuse_light::DiffuseLight;
use self::lambertian::Lambertian;
use self::metal::Metal;

/// Handle into a MaterialArena. Primitives and hit records carry this
/// instead of a shared pointer, which keeps the scene free of refcount
/// traffic and trivially shareable across workers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MaterialId(pub(crate) u32);

/// The closed set of surface responses, dispatched by match.
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    DiffuseLight(DiffuseLight),
}

impl Material {
    /// The scattered continuation ray and its attenuation, or None when
    /// this material terminates the path (absorption, light source).
    pub fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        match self {
            Material::Lambertian(m) => m.scatter(ray, rec, rng),
            Material::Metal(m) => m.scatter(ray, rec, rng),
            Material::Dielectric(m) => m.scatter(ray, rec, rng),
            Material::DiffuseLight(_) => None,
        }
    }
    /// Emitted radiance at the surface coordinates; black for everything
    /// but light sources.
    pub fn emitted(&self, uv: &Vec2, p: &Point3) -> Color {
        match self {
            Material::DiffuseLight(m) => m.emitted(uv, p),
            _ => Color::new(0.0, 0.0, 0.0),
        }
    }
}

/// Owns every material in a scene; everything else refers to them through
/// MaterialId indices.
#[derive(Default)]
pub struct MaterialArena {
    materials: Vec<Material>,
}

impl MaterialArena {
    pub fn new() -> Self {
        MaterialArena {
            materials: Vec::new(),
        }
    }
    pub fn add(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material);
        id
    }
    pub fn get(&self, id: MaterialId) -> &Material {
        &self.materials[id.0 as usize]
    }
    pub fn len(&self) -> usize {
        self.materials.len()
    }
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
