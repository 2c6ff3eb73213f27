pub mod aliases;
pub mod camera;
pub mod error;
pub mod hit_record;
pub mod hitable;
pub mod material;
pub mod ray;
pub mod sampling;
pub mod scatter_record;
pub mod scene;
pub mod texture;

use crate::aliases::{Color, RandGen};
use crate::ray::Ray;
use crate::scene::Scene;

/// Hits closer than this are ignored, so a bounced ray cannot re-hit the
/// surface it starts on (shadow acne).
pub const T_MIN: f32 = 0.001;

/// Resolves the radiance arriving along `ray`, following at most `depth`
/// bounces. Equivalent to the recursive formulation
/// `emitted + attenuation * ray_color(scattered, depth - 1)` with black
/// for a miss or an exhausted depth, restated as a loop so path length
/// never grows the stack. There is no background term: a ray that leaves
/// the scene contributes nothing.
pub fn ray_color(ray: &Ray, scene: &Scene, rng: &mut RandGen, depth: i32) -> Color {
    let mut light_out = Color::new(0.0, 0.0, 0.0);
    let mut throughput = Color::new(1.0, 1.0, 1.0);
    let mut current = *ray;
    let mut depth = depth;
    loop {
        // bounce limit exhausted: no more light is gathered
        if depth <= 0 {
            return light_out;
        }
        let rec = match scene.hit(&current, T_MIN, f32::MAX) {
            Some(rec) => rec,
            None => return light_out,
        };
        let material = scene.material(rec.material);
        let emitted = material.emitted(&rec.tex_coord, &rec.point);
        light_out += throughput.component_mul(&emitted);
        match material.scatter(&current, &rec, rng) {
            Some(scatter) => {
                throughput = throughput.component_mul(&scatter.attenuation);
                current = scatter.ray;
                depth -= 1;
            }
            None => return light_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::{Point3, Vec3};
    use crate::camera::Camera;
    use crate::hitable::rectangle::{AxisRect, RectPlane};
    use crate::hitable::sphere::Sphere;
    use crate::hitable::Primitive;
    use crate::material::diffuse_light::DiffuseLight;
    use crate::material::lambertian::Lambertian;
    use crate::material::metal::Metal;
    use crate::material::Material;
    use rand::SeedableRng;

    fn test_camera() -> Camera {
        Camera::new(
            &Point3::new(0.0, 0.0, 5.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Vec3::new(0.0, 1.0, 0.0),
            40.0,
            1.0,
            0.0,
            10.0,
        )
        .unwrap()
    }

    fn gray_sphere_scene() -> Scene {
        let mut scene = Scene::new(test_camera());
        let gray = scene.add_material(Material::Lambertian(Lambertian::new(&Color::new(
            0.5, 0.5, 0.5,
        ))));
        scene.add(Primitive::Sphere(
            Sphere::new(&Point3::new(0.0, 0.0, -1.0), 1.0, gray).unwrap(),
        ));
        scene
    }

    #[test]
    fn depth_zero_is_black() {
        let scene = gray_sphere_scene();
        let mut rng = RandGen::seed_from_u64(42);
        let ray = Ray::new(&Point3::new(0.0, 0.0, 5.0), &Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(&ray, &scene, &mut rng, 0), Color::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn single_bounce_with_no_light_is_black() {
        // the lambertian bounce succeeds, but at depth 0 the continuation
        // gathers nothing, and there is no sky
        let scene = gray_sphere_scene();
        let mut rng = RandGen::seed_from_u64(42);
        let ray = Ray::new(&Point3::new(0.0, 0.0, 5.0), &Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(&ray, &scene, &mut rng, 1), Color::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn missing_every_primitive_is_black() {
        let scene = gray_sphere_scene();
        let mut rng = RandGen::seed_from_u64(42);
        let ray = Ray::new(&Point3::new(0.0, 0.0, 5.0), &Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(
            ray_color(&ray, &scene, &mut rng, 50),
            Color::new(0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn direct_hit_on_a_light_returns_its_emission() {
        let mut scene = Scene::new(test_camera());
        let light = scene.add_material(Material::DiffuseLight(DiffuseLight::from_color(
            &Color::new(15.0, 15.0, 15.0),
        )));
        scene.add(Primitive::Rect(
            AxisRect::new(RectPlane::Xy, -1.0, 1.0, -1.0, 1.0, 1.0, light).unwrap(),
        ));
        let mut rng = RandGen::seed_from_u64(42);
        let ray = Ray::new(&Point3::new(0.0, 0.0, -1.0), &Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(
            ray_color(&ray, &scene, &mut rng, 5),
            Color::new(15.0, 15.0, 15.0)
        );
    }

    #[test]
    fn mirror_bounce_attenuates_the_light_it_reaches() {
        let mut scene = Scene::new(test_camera());
        let mirror = scene.add_material(Material::Metal(Metal::new(&Color::new(0.5, 0.5, 0.5), 0.0)));
        let light = scene.add_material(Material::DiffuseLight(DiffuseLight::from_color(
            &Color::new(15.0, 15.0, 15.0),
        )));
        // mirror at z=0 facing +z, light panel at z=5
        scene.add(Primitive::Rect(
            AxisRect::new(RectPlane::Xy, -1.0, 1.0, -1.0, 1.0, 0.0, mirror).unwrap(),
        ));
        scene.add(Primitive::Rect(
            AxisRect::new(RectPlane::Xy, -1.0, 1.0, -1.0, 1.0, 5.0, light).unwrap(),
        ));
        let mut rng = RandGen::seed_from_u64(42);
        // straight down the axis: reflects back up into the panel
        let ray = Ray::new(&Point3::new(0.0, 0.0, 3.0), &Vec3::new(0.0, 0.0, -1.0));
        let color = ray_color(&ray, &scene, &mut rng, 5);
        assert!((color - Color::new(7.5, 7.5, 7.5)).norm() < 1e-4);
    }

    #[test]
    fn light_behind_a_closer_surface_is_shadowed() {
        let mut scene = Scene::new(test_camera());
        let light = scene.add_material(Material::DiffuseLight(DiffuseLight::from_color(
            &Color::new(15.0, 15.0, 15.0),
        )));
        let mirror = scene.add_material(Material::Metal(Metal::new(&Color::new(0.9, 0.9, 0.9), 0.0)));
        scene.add(Primitive::Rect(
            AxisRect::new(RectPlane::Xy, -1.0, 1.0, -1.0, 1.0, 4.0, light).unwrap(),
        ));
        // the mirror sits in front of the light and reflects into the void
        scene.add(Primitive::Rect(
            AxisRect::new(RectPlane::Xy, -1.0, 1.0, -1.0, 1.0, 2.0, mirror).unwrap(),
        ));
        let mut rng = RandGen::seed_from_u64(42);
        let ray = Ray::new(&Point3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(
            ray_color(&ray, &scene, &mut rng, 5),
            Color::new(0.0, 0.0, 0.0)
        );
    }
}
