use crate::aliases::{Color, RandGen};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::sampling::{reflect, refract, schlick_reflectance};
use crate::scatter_record::ScatterRecord;
use rand::Rng;

pub struct Dielectric {
    pub ref_idx: f32,
}

impl Dielectric {
    pub fn new(ref_idx: f32) -> Self {
        Dielectric { ref_idx }
    }
    /// Always scatters: the ray either refracts by Snell's law or reflects,
    /// chosen by total internal reflection and a Schlick reflectance draw.
    /// Attenuation is full-transmission white; glass absorbs nothing.
    pub fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        let refraction_ratio = if rec.front_face {
            1.0 / self.ref_idx
        } else {
            self.ref_idx
        };
        let unit_direction = ray.direction.normalize();
        let cos_theta = (-unit_direction).dot(&rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let direction =
            if cannot_refract || schlick_reflectance(cos_theta, refraction_ratio) > rng.gen::<f32>()
            {
                reflect(&unit_direction, &rec.normal)
            } else {
                refract(&unit_direction, &rec.normal, refraction_ratio)
                    .unwrap_or_else(|| reflect(&unit_direction, &rec.normal))
            };
        Some(ScatterRecord {
            attenuation: Color::new(1.0, 1.0, 1.0),
            ray: Ray::new(&rec.point, &direction),
        })
    }
}
