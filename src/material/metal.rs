use crate::aliases::{Color, RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::sampling::{reflect, rnd_in_unit_sphere};
use crate::scatter_record::ScatterRecord;

pub struct Metal {
    pub albedo: Color,
    pub fuzz: f32,
}

impl Metal {
    /// `fuzz` is clamped to at most 1 so the perturbation sphere cannot
    /// outgrow the reflection vector.
    pub fn new(albedo: &Color, fuzz: f32) -> Self {
        Metal {
            albedo: *albedo,
            fuzz: fuzz.min(1.0),
        }
    }
    pub fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        let reflected = reflect(&ray.direction.normalize(), &rec.normal);
        let fuz = if self.fuzz == 0.0 {
            Vec3::zeros()
        } else {
            self.fuzz * rnd_in_unit_sphere(rng)
        };
        let direction = reflected + fuz;
        // perturbed below the surface: the ray is absorbed
        if direction.dot(&rec.normal) <= 0.0 {
            return None;
        }
        Some(ScatterRecord {
            attenuation: self.albedo,
            ray: Ray::new(&rec.point, &direction),
        })
    }
}
