use crate::aliases::Color;
use crate::ray::Ray;

/// Result of a successful scatter: the continuation ray and how much of
/// each color channel survives the bounce.
pub struct ScatterRecord {
    pub attenuation: Color,
    pub ray: Ray,
}
