use nalgebra as na;

pub type Vec3 = na::Vector3<f32>;
pub type Vec2 = na::Vector2<f32>;
/// A position in world space. Representationally a Vec3; the alias keeps
/// signatures readable.
pub type Point3 = Vec3;
/// Linear rgb radiance or reflectance.
pub type Color = Vec3;
/// A seedable random stream owned by a single rendering worker.
pub type RandGen = rand::rngs::SmallRng;
