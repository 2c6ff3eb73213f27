use crate::aliases::{Point3, RandGen, Vec3};
use crate::error::SceneError;
use crate::ray::Ray;
use crate::sampling::rnd_in_unit_disc;
use std::f32::consts::PI;

/// Maps normalized image-plane coordinates (plus lens jitter) to world
/// rays. All state is computed once at construction.
pub struct Camera {
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    origin: Point3,
    lens_radius: f32,
    u: Vec3, // a unit vector directing right
    v: Vec3, // a unit vector directing up
    #[allow(dead_code)]
    w: Vec3, // backward, u.cross(v)
}

impl Camera {
    pub fn new(
        look_from: &Point3,
        look_at: &Point3,
        view_up: &Vec3,
        vfov: f32,   // vertical field of view in degrees
        aspect: f32, // width over height
        aperture: f32,
        focus_dist: f32,
    ) -> Result<Self, SceneError> {
        if !vfov.is_finite() || vfov <= 0.0 || vfov >= 180.0 {
            return Err(SceneError::InvalidFov(vfov));
        }
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(SceneError::InvalidAspect(aspect));
        }
        if !focus_dist.is_finite() || focus_dist <= 0.0 {
            return Err(SceneError::InvalidFocusDistance(focus_dist));
        }
        if !aperture.is_finite() || aperture < 0.0 {
            return Err(SceneError::InvalidAperture(aperture));
        }
        let gaze = look_from - look_at;
        if gaze.norm_squared() == 0.0 {
            return Err(SceneError::DegenerateView);
        }
        let theta = vfov * PI / 180.0;
        let half_height = (theta * 0.5).tan();
        let half_width = aspect * half_height;
        let origin = *look_from;
        let w = gaze.normalize();
        let u = view_up.cross(&w);
        if u.norm_squared() == 0.0 {
            return Err(SceneError::DegenerateUp);
        }
        let u = u.normalize();
        let v = w.cross(&u);
        let lower_left_corner = origin - focus_dist * (half_width * u + half_height * v + w);
        let horizontal = u * 2.0 * focus_dist * half_width;
        let vertical = v * 2.0 * focus_dist * half_height;
        Ok(Camera {
            lower_left_corner,
            horizontal,
            vertical,
            origin,
            lens_radius: aperture / 2.0,
            u,
            v,
            w,
        })
    }
    /// The ray through image-plane coordinates (s, t) in [0,1]^2, jittered
    /// within the lens disc. A zero aperture leaves the origin untouched,
    /// so the camera degenerates to a pinhole.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut RandGen) -> Ray {
        let r = self.lens_radius * rnd_in_unit_disc(rng);
        let offset = r.x * self.u + r.y * self.v;
        Ray::new(
            &(self.origin + offset),
            &(self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset),
        )
    }
}
