use crate::aliases::{Color, RandGen};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::sampling::{near_zero, rnd_unit_vector};
use crate::scatter_record::ScatterRecord;

pub struct Lambertian {
    pub albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: &Color) -> Self {
        Lambertian { albedo: *albedo }
    }
    pub fn scatter(&self, _ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        let mut direction = rec.normal + rnd_unit_vector(rng);
        // the sample can cancel the normal almost exactly; a zero-length
        // scatter direction would poison everything downstream
        if near_zero(&direction) {
            direction = rec.normal;
        }
        Some(ScatterRecord {
            attenuation: self.albedo,
            ray: Ray::new(&rec.point, &direction),
        })
    }
}
