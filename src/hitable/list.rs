use crate::hit_record::HitRecord;
use crate::hitable::Primitive;
use crate::ray::Ray;

/// The scene aggregate: an unordered collection of primitives scanned
/// linearly. Ordering of members never affects which hit is reported.
#[derive(Default)]
pub struct PrimitiveList {
    list: Vec<Primitive>,
}

impl PrimitiveList {
    pub fn new() -> Self {
        PrimitiveList { list: Vec::new() }
    }
    pub fn add(&mut self, primitive: Primitive) {
        self.list.push(primitive);
    }
    pub fn len(&self) -> usize {
        self.list.len()
    }
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
    /// The globally nearest hit in `[t_min, t_max]`. The running upper
    /// bound shrinks to the best t found so far, so a later member can
    /// only replace the current hit with a strictly nearer one.
    pub fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let mut res: Option<HitRecord> = None;
        let mut closest_so_far = t_max;
        for obj in &self.list {
            if let Some(rec) = obj.hit(ray, t_min, closest_so_far) {
                closest_so_far = rec.t;
                res = Some(rec);
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::{Point3, Vec3};
    use crate::hitable::sphere::Sphere;
    use crate::material::MaterialId;

    #[test]
    fn empty_list_reports_no_hit() {
        let list = PrimitiveList::new();
        let ray = Ray::new(&Point3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, 1.0));
        assert!(list.hit(&ray, 0.001, f32::MAX).is_none());
    }

    #[test]
    fn nearest_member_wins_regardless_of_order() {
        let near = Point3::new(0.0, 0.0, 3.0);
        let far = Point3::new(0.0, 0.0, 8.0);
        let ray = Ray::new(&Point3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, 1.0));

        for centers in &[[near, far], [far, near]] {
            let mut list = PrimitiveList::new();
            for (i, center) in centers.iter().enumerate() {
                list.add(Primitive::Sphere(
                    Sphere::new(center, 1.0, MaterialId(i as u32)).unwrap(),
                ));
            }
            let rec = list.hit(&ray, 0.001, f32::MAX).unwrap();
            assert!((rec.t - 2.0).abs() < 1e-5);
            assert!((rec.point - Point3::new(0.0, 0.0, 2.0)).norm() < 1e-4);
        }
    }
}
