use crate::aliases::{Point3, Vec2, Vec3};
use crate::material::MaterialId;
use crate::ray::Ray;

/// Result of an intersection query. `normal` always points against the
/// incoming ray; `front_face` remembers whether the geometric outward
/// normal already did.
#[derive(Clone, Copy)]
pub struct HitRecord {
    pub t: f32,
    pub point: Point3,
    pub tex_coord: Vec2,
    pub normal: Vec3,
    pub front_face: bool,
    pub material: MaterialId,
}

impl HitRecord {
    /// Builds a record with `outward_normal` oriented so that
    /// `dot(ray.direction, normal) <= 0` holds.
    pub fn with_face_normal(
        ray: &Ray,
        t: f32,
        point: Point3,
        tex_coord: Vec2,
        outward_normal: Vec3,
        material: MaterialId,
    ) -> Self {
        let front_face = ray.direction.dot(&outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        HitRecord {
            t,
            point,
            tex_coord,
            normal,
            front_face,
            material,
        }
    }
}
