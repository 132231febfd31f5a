use crate::ray::Ray;
use crate::surface::SurfaceIntersection;
use glam::*;
use rand::RngCore;

pub type Color = Vec3;

/// A material's rule for continuing a light path.
///
/// Returns the attenuation and the scattered ray, or `None` when the ray is absorbed. Randomized materials draw
/// exclusively from `rng`, so a seeded generator reproduces the result.
pub trait Scatter: Send + Sync {
    fn scatter(&self, r: &Ray, intersection: &SurfaceIntersection, rng: &mut dyn RngCore) -> Option<(Color, Ray)>;
}
