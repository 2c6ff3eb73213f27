use crate::aliases::{Color, Point3, Vec2};
use crate::texture::Texture;

/// A light source: terminates every path that reaches it and contributes
/// its emission instead. Emits from both faces.
pub struct DiffuseLight {
    pub emit: Texture,
}

impl DiffuseLight {
    pub fn new(emit: Texture) -> Self {
        DiffuseLight { emit }
    }
    pub fn from_color(color: &Color) -> Self {
        DiffuseLight {
            emit: Texture::solid(color),
        }
    }
    pub fn emitted(&self, uv: &Vec2, p: &Point3) -> Color {
        self.emit.value(uv, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::{RandGen, Vec3};
    use crate::hit_record::HitRecord;
    use crate::material::{Material, MaterialId};
    use crate::ray::Ray;
    use rand::SeedableRng;

    #[test]
    fn emits_its_color_and_never_scatters() {
        let light = Material::DiffuseLight(DiffuseLight::from_color(&Color::new(15.0, 15.0, 15.0)));
        let uv = Vec2::new(0.3, 0.7);
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(light.emitted(&uv, &p), Color::new(15.0, 15.0, 15.0));

        let rec = HitRecord {
            t: 1.0,
            point: p,
            tex_coord: uv,
            normal: Vec3::new(0.0, 1.0, 0.0),
            front_face: true,
            material: MaterialId(0),
        };
        let ray = Ray::new(&Point3::new(0.0, 5.0, 0.0), &Vec3::new(0.0, -1.0, 0.0));
        let mut rng = RandGen::seed_from_u64(1);
        assert!(light.scatter(&ray, &rec, &mut rng).is_none());
    }
}
