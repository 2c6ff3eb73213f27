use crate::aliases::{RandGen, Vec2, Vec3};
use rand::Rng;

pub fn rnd_in_unit_sphere(rng: &mut RandGen) -> Vec3 {
    loop {
        let p = Vec3::new(
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
        );
        if p.norm() < 1.0 {
            return p;
        }
    }
}

pub fn rnd_unit_vector(rng: &mut RandGen) -> Vec3 {
    rnd_in_unit_sphere(rng).normalize()
}

pub fn rnd_in_unit_disc(rng: &mut RandGen) -> Vec2 {
    loop {
        let p = Vec2::new(2.0 * rng.gen::<f32>() - 1.0, 2.0 * rng.gen::<f32>() - 1.0);
        if p.norm() < 1.0 {
            return p;
        }
    }
}

/// True when every component is small enough that normalizing the vector
/// would be numerically meaningless.
pub fn near_zero(v: &Vec3) -> bool {
    const EPS: f32 = 1.0e-8;
    v[0].abs() < EPS && v[1].abs() < EPS && v[2].abs() < EPS
}

/// * `n` - must be normalized
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    debug_assert!((n.norm() - 1.0).abs() < 1e-3);
    v - 2.0 * v.dot(n) * n
}

/// Snell's law via the perpendicular/parallel decomposition.
/// Returns None when the angle of incidence admits no refracted ray
/// (total internal reflection).
/// * `uv` - unit incoming direction
/// * `n` - must be normalized
pub fn refract(uv: &Vec3, n: &Vec3, eta_ratio: f32) -> Option<Vec3> {
    let cos_theta = (-uv).dot(n).min(1.0);
    let d = 1.0 - eta_ratio * eta_ratio * (1.0 - cos_theta * cos_theta);
    if d < 0.0 {
        return None;
    }
    let r_perp = eta_ratio * (uv + cos_theta * n);
    let r_parallel = -d.sqrt() * n;
    Some(r_perp + r_parallel)
}

/// Schlick's approximation of the probability of reflection when light
/// enters a material.
pub fn schlick_reflectance(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powf(2.0);
    r0 + (1.0 - r0) * (1.0 - cosine).powf(5.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn unit_sphere_samples_stay_inside() {
        let mut rng = RandGen::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rnd_in_unit_sphere(&mut rng).norm() < 1.0);
        }
    }

    #[test]
    fn unit_vector_samples_are_normalized() {
        let mut rng = RandGen::seed_from_u64(7);
        for _ in 0..1000 {
            assert!((rnd_unit_vector(&mut rng).norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn unit_disc_samples_stay_inside() {
        let mut rng = RandGen::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rnd_in_unit_disc(&mut rng).norm() < 1.0);
        }
    }

    #[test]
    fn reflect_flips_the_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let r = reflect(&v, &n);
        assert!((r - Vec3::new(1.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn index_matched_refraction_is_a_no_op() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        let uv = Vec3::new(0.6, -0.8, 0.0);
        let refracted = refract(&uv, &n, 1.0).unwrap();
        assert!((refracted.norm() - uv.norm()).abs() < 1e-6);
        assert!((refracted - uv).norm() < 1e-6);
    }

    #[test]
    fn refract_rejects_total_internal_reflection() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        // grazing incidence going from dense to thin
        let uv = Vec3::new(0.99, -0.141, 0.0).normalize();
        assert!(refract(&uv, &n, 1.5).is_none());
    }

    #[test]
    fn schlick_at_normal_incidence_is_r0() {
        let ref_idx = 1.5f32;
        let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powf(2.0);
        assert!((schlick_reflectance(1.0, ref_idx) - r0).abs() < 1e-6);
    }

    #[test]
    fn near_zero_catches_cancellation() {
        assert!(near_zero(&Vec3::new(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(&Vec3::new(1e-9, 1e-3, 0.0)));
    }
}
