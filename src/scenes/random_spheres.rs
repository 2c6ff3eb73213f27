use glint::aliases::{Color, Point3, RandGen, Vec3};
use glint::camera::Camera;
use glint::error::SceneError;
use glint::hitable::rectangle::{AxisRect, RectPlane};
use glint::hitable::sphere::Sphere;
use glint::hitable::Primitive;
use glint::material::dielectric::Dielectric;
use glint::material::diffuse_light::DiffuseLight;
use glint::material::lambertian::Lambertian;
use glint::material::metal::Metal;
use glint::material::Material;
use glint::scene::Scene;
use rand::{Rng, SeedableRng};

// fixed seed so the generated scene is the same on every run
const SCENE_SEED: u64 = 853;

fn random_color(rng: &mut RandGen) -> Color {
    Color::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>())
}

/// A field of small random spheres around three large feature spheres.
pub fn scene(aspect_ratio: f32) -> Result<Scene, SceneError> {
    let camera = Camera::new(
        &Point3::new(13.0, 2.0, 3.0),
        &Point3::new(0.0, 0.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.1,
        10.0,
    )?;
    let mut scene = Scene::new(camera);
    let mut rng = RandGen::seed_from_u64(SCENE_SEED);

    let ground = scene.add_material(Material::Lambertian(Lambertian::new(&Color::new(
        0.5, 0.5, 0.5,
    ))));
    scene.add(Primitive::Sphere(Sphere::new(
        &Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )?));

    // the integrator has no sky term, so an overhead panel plays the sun
    let sun = scene.add_material(Material::DiffuseLight(DiffuseLight::from_color(
        &Color::new(5.0, 5.0, 5.0),
    )));
    scene.add(Primitive::Rect(AxisRect::new(
        RectPlane::Xz,
        -60.0,
        60.0,
        -60.0,
        60.0,
        50.0,
        sun,
    )?));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = rng.gen::<f32>();
            let center = Point3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );
            if (center - Point3::new(4.0, 0.2, 0.0)).norm() <= 0.9 {
                continue;
            }
            let material = if choose_mat < 0.8 {
                let albedo = random_color(&mut rng).component_mul(&random_color(&mut rng));
                scene.add_material(Material::Lambertian(Lambertian::new(&albedo)))
            } else if choose_mat < 0.95 {
                let albedo = Color::new(
                    0.5 + 0.5 * rng.gen::<f32>(),
                    0.5 + 0.5 * rng.gen::<f32>(),
                    0.5 + 0.5 * rng.gen::<f32>(),
                );
                let fuzz = 0.5 * rng.gen::<f32>();
                scene.add_material(Material::Metal(Metal::new(&albedo, fuzz)))
            } else {
                scene.add_material(Material::Dielectric(Dielectric::new(1.5)))
            };
            scene.add(Primitive::Sphere(Sphere::new(&center, 0.2, material)?));
        }
    }

    let glass = scene.add_material(Material::Dielectric(Dielectric::new(1.5)));
    scene.add(Primitive::Sphere(Sphere::new(
        &Point3::new(0.0, 1.0, 0.0),
        1.0,
        glass,
    )?));
    let matte = scene.add_material(Material::Lambertian(Lambertian::new(&Color::new(
        0.4, 0.2, 0.1,
    ))));
    scene.add(Primitive::Sphere(Sphere::new(
        &Point3::new(-4.0, 1.0, 0.0),
        1.0,
        matte,
    )?));
    let mirror = scene.add_material(Material::Metal(Metal::new(&Color::new(0.7, 0.6, 0.5), 0.0)));
    scene.add(Primitive::Sphere(Sphere::new(
        &Point3::new(4.0, 1.0, 0.0),
        1.0,
        mirror,
    )?));

    Ok(scene)
}

#[cfg(test)]
mod tests {
    #[test]
    fn builds_reproducibly() {
        let a = super::scene(1.5).unwrap();
        let b = super::scene(1.5).unwrap();
        assert!(a.hitables.len() > 5);
        assert_eq!(a.hitables.len(), b.hitables.len());
        assert_eq!(a.materials.len(), b.materials.len());
    }
}
