pub mod list;
pub mod rectangle;
pub mod sphere;

use crate::hit_record::HitRecord;
use crate::ray::Ray;
use self::rectangle::AxisRect;
use self::sphere::Sphere;

/// The closed set of ray-intersectable shapes. Dispatch is a plain match,
/// so the inner rendering loop never goes through a vtable.
pub enum Primitive {
    Sphere(Sphere),
    Rect(AxisRect),
}

impl Primitive {
    /// The nearest intersection with `ray` whose parameter lies in
    /// `[t_min, t_max]`, if any.
    pub fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, t_min, t_max),
            Primitive::Rect(rect) => rect.hit(ray, t_min, t_max),
        }
    }
}
