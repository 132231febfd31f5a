use crate::ray::Ray;
use crate::scatter::{Color, Scatter};
use crate::surface::SurfaceIntersection;
use crate::util::{rand_in_unit_sphere, reflect};
use log::trace;
use rand::RngCore;

pub struct MetalMaterial {
    albedo: Color,
    fuzz: f32,
}

impl MetalMaterial {
    /// `fuzz` is clamped to `[0, 1]`; zero is a perfect mirror.
    pub fn new(albedo: Color, fuzz: f32) -> MetalMaterial {
        MetalMaterial { albedo, fuzz: fuzz.clamp(0.0, 1.0) }
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Scatter for MetalMaterial {
    fn scatter(&self, r: &Ray, intersection: &SurfaceIntersection, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let mut scattered_direction = reflect(r.direction.normalize(), intersection.normal);
        if self.fuzz > 0.0 {
            scattered_direction += rand_in_unit_sphere(rng) * self.fuzz;
        }
        let scattered = Ray::new(intersection.p, scattered_direction);

        if scattered.direction.dot(intersection.normal) > 0.0 {
            return Some((self.albedo, scattered));
        }

        trace!("metal absorbed ray at {}", intersection.p);
        return None;
    }
}
