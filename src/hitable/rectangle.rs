use crate::aliases::{Vec2, Vec3};
use crate::error::SceneError;
use crate::hit_record::HitRecord;
use crate::material::MaterialId;
use crate::ray::Ray;

/// Coordinate plane a rectangle lies in. The remaining axis carries the
/// plane offset k and the unit normal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RectPlane {
    Xy,
    Xz,
    Yz,
}

impl RectPlane {
    /// (first free axis, second free axis, fixed axis) as component indices.
    fn axes(self) -> (usize, usize, usize) {
        match self {
            RectPlane::Xy => (0, 1, 2),
            RectPlane::Xz => (0, 2, 1),
            RectPlane::Yz => (1, 2, 0),
        }
    }
    fn outward_normal(self) -> Vec3 {
        let (_, _, fixed) = self.axes();
        let mut n = Vec3::zeros();
        n[fixed] = 1.0;
        n
    }
}

/// An axis-aligned rectangle: `a0 <= a <= a1`, `b0 <= b <= b1` on the free
/// axes of `plane`, at offset `k` along the fixed axis.
pub struct AxisRect {
    plane: RectPlane,
    a0: f32,
    a1: f32,
    b0: f32,
    b1: f32,
    k: f32,
    material: MaterialId,
}

impl AxisRect {
    pub fn new(
        plane: RectPlane,
        a0: f32,
        a1: f32,
        b0: f32,
        b1: f32,
        k: f32,
        material: MaterialId,
    ) -> Result<Self, SceneError> {
        let finite =
            a0.is_finite() && a1.is_finite() && b0.is_finite() && b1.is_finite() && k.is_finite();
        if !finite || a0 >= a1 || b0 >= b1 {
            return Err(SceneError::InvalidRectBounds { a0, a1, b0, b1 });
        }
        Ok(AxisRect {
            plane,
            a0,
            a1,
            b0,
            b1,
            k,
            material,
        })
    }
    pub fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let (fa, fb, fixed) = self.plane.axes();
        let denom = ray.direction[fixed];
        // a ray parallel to the plane never crosses it
        if denom == 0.0 {
            return None;
        }
        let t = (self.k - ray.origin[fixed]) / denom;
        if t < t_min || t > t_max {
            return None;
        }
        let a = ray.origin[fa] + t * ray.direction[fa];
        let b = ray.origin[fb] + t * ray.direction[fb];
        if a < self.a0 || a > self.a1 || b < self.b0 || b > self.b1 {
            return None;
        }
        let uv = Vec2::new(
            (a - self.a0) / (self.a1 - self.a0),
            (b - self.b0) / (self.b1 - self.b0),
        );
        Some(HitRecord::with_face_normal(
            ray,
            t,
            ray.evaluate(t),
            uv,
            self.plane.outward_normal(),
            self.material,
        ))
    }
}
