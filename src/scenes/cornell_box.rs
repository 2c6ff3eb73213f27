use glint::aliases::{Color, Point3, Vec3};
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

/// The Cornell box with a glass and a mirror sphere inside, lit by a
/// single ceiling panel.
pub fn scene(aspect_ratio: f32) -> Result<Scene, SceneError> {
    let camera = Camera::new(
        &Point3::new(278.0, 278.0, -800.0),
        &Point3::new(278.0, 278.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        40.0,
        aspect_ratio,
        0.0,
        10.0,
    )?;
    let mut scene = Scene::new(camera);

    let red = scene.add_material(Material::Lambertian(Lambertian::new(&Color::new(
        0.65, 0.05, 0.05,
    ))));
    let white = scene.add_material(Material::Lambertian(Lambertian::new(&Color::new(
        0.73, 0.73, 0.73,
    ))));
    let green = scene.add_material(Material::Lambertian(Lambertian::new(&Color::new(
        0.12, 0.45, 0.15,
    ))));
    let light = scene.add_material(Material::DiffuseLight(DiffuseLight::from_color(
        &Color::new(15.0, 15.0, 15.0),
    )));

    scene.add(Primitive::Rect(AxisRect::new(
        RectPlane::Yz,
        0.0,
        555.0,
        0.0,
        555.0,
        555.0,
        green,
    )?)); // left wall
    scene.add(Primitive::Rect(AxisRect::new(
        RectPlane::Yz,
        0.0,
        555.0,
        0.0,
        555.0,
        0.0,
        red,
    )?)); // right wall
    scene.add(Primitive::Rect(AxisRect::new(
        RectPlane::Xz,
        213.0,
        343.0,
        227.0,
        332.0,
        554.0,
        light,
    )?)); // ceiling panel
    scene.add(Primitive::Rect(AxisRect::new(
        RectPlane::Xz,
        0.0,
        555.0,
        0.0,
        555.0,
        555.0,
        white,
    )?)); // ceiling
    scene.add(Primitive::Rect(AxisRect::new(
        RectPlane::Xz,
        0.0,
        555.0,
        0.0,
        555.0,
        0.0,
        white,
    )?)); // floor
    scene.add(Primitive::Rect(AxisRect::new(
        RectPlane::Xy,
        0.0,
        555.0,
        0.0,
        555.0,
        555.0,
        white,
    )?)); // back wall

    let glass = scene.add_material(Material::Dielectric(Dielectric::new(1.5)));
    scene.add(Primitive::Sphere(Sphere::new(
        &Point3::new(190.0, 90.0, 190.0),
        90.0,
        glass,
    )?));
    let mirror = scene.add_material(Material::Metal(Metal::new(&Color::new(0.8, 0.85, 0.88), 0.0)));
    scene.add(Primitive::Sphere(Sphere::new(
        &Point3::new(350.0, 100.0, 345.0),
        100.0,
        mirror,
    )?));

    Ok(scene)
}
