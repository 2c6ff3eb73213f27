use crate::aliases::{Color, Point3, Vec2};

pub struct SolidColor(Color);

impl SolidColor {
    pub fn new(color: &Color) -> Self {
        SolidColor(*color)
    }
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        SolidColor(Color::new(r, g, b))
    }
}

/// The closed set of surface color sources. (u,v) addresses 2d textures,
/// p is for 3d ones; the solid variant ignores both.
pub enum Texture {
    Solid(SolidColor),
}

impl Texture {
    pub fn solid(color: &Color) -> Self {
        Texture::Solid(SolidColor::new(color))
    }
    pub fn value(&self, _uv: &Vec2, _p: &Point3) -> Color {
        match self {
            Texture::Solid(solid) => solid.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_color_ignores_coordinates() {
        let tex = Texture::Solid(SolidColor::rgb(0.1, 0.2, 0.3));
        let a = tex.value(&Vec2::new(0.0, 0.0), &Point3::new(0.0, 0.0, 0.0));
        let b = tex.value(&Vec2::new(0.9, 0.4), &Point3::new(5.0, -2.0, 7.0));
        assert_eq!(a, Color::new(0.1, 0.2, 0.3));
        assert_eq!(a, b);
    }
}
