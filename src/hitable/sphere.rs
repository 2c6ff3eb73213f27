use crate::aliases::{Point3, Vec2, Vec3};
use crate::error::SceneError;
use crate::hit_record::HitRecord;
use crate::material::MaterialId;
use crate::ray::Ray;
use std::f32::consts::PI;

pub struct Sphere {
    center: Point3,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    pub fn new(center: &Point3, radius: f32, material: MaterialId) -> Result<Self, SceneError> {
        if !radius.is_finite() || radius == 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Sphere {
            center: *center,
            radius,
            material,
        })
    }
    /// Calculates the parameter t of the ray at which it hits a sphere.
    /// Solves the half-b form of the intersection quadratic; the nearer
    /// root wins, the farther one is the fallback. Bounds are inclusive.
    pub fn hit_core(
        center: &Point3,
        radius: f32,
        ray: &Ray,
        t_min: f32,
        t_max: f32,
    ) -> Option<f32> {
        let oc = ray.origin - center;
        let a = ray.direction.dot(&ray.direction);
        let half_b = oc.dot(&ray.direction);
        let c = oc.dot(&oc) - radius * radius;
        let disc = half_b * half_b - a * c;
        if disc < 0.0 {
            return None;
        }
        let disc_rt = disc.sqrt();
        let mut t = (-half_b - disc_rt) / a;
        if t < t_min || t_max < t {
            t = (-half_b + disc_rt) / a;
            if t < t_min || t_max < t {
                return None;
            }
        }
        Some(t)
    }
    /// Converts a point on the unit sphere to a uv coordinate.
    pub fn get_uv(p: &Vec3) -> Vec2 {
        let phi = f32::atan2(p[2], p[0]);
        let theta = f32::asin(p[1].min(1.0).max(-1.0));
        Vec2::new(0.5 - 0.5 * (phi / PI), 0.5 + theta / PI)
    }
    pub fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        Sphere::hit_core(&self.center, self.radius, ray, t_min, t_max).map(|t| {
            let point = ray.evaluate(t);
            let outward = (point - self.center) / self.radius;
            HitRecord::with_face_normal(ray, t, point, Sphere::get_uv(&outward), outward, self.material)
        })
    }
}
