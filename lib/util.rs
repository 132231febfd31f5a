use glam::*;
use rand::Rng;
use rand_distr::*;

use crate::tolerance::NEAR_ZERO_EPSILON;

pub fn is_near_zero(v: Vec3) -> bool {
    return v.abs_diff_eq(Vec3::ZERO, NEAR_ZERO_EPSILON);
}

/// Uniform point inside the unit ball.
pub fn rand_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let [x, y, z]: [f32; 3] = UnitBall.sample(rng);
    return Vec3::new(x, y, z);
}

/// Uniform point on the unit sphere surface.
pub fn rand_on_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let [x, y, z]: [f32; 3] = UnitSphere.sample(rng);
    return Vec3::new(x, y, z);
}

pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    return v - (2.0 * v.dot(normal) * normal);
}

/// Snell's law for a unit incoming direction `v`, split into the parts perpendicular and parallel to `normal`.
pub fn refract(v: Vec3, normal: Vec3, ratio: f32) -> Vec3 {
    let inv_normal = -normal;
    let r_perp = (v + v.dot(inv_normal).min(1.0) * normal) * ratio;
    let r_para = (1.0 - r_perp.length_squared()).abs().sqrt() * inv_normal;
    return r_perp + r_para;
}

/// Schlick's approximation of the Fresnel reflectance.
pub fn reflectance(cos_theta: f32, refraction_ratio: f32) -> f32 {
    let r = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    return r + (1.0 - r) * (1.0 - cos_theta).powi(5);
}
