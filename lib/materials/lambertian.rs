use crate::ray::Ray;
use crate::scatter::{Color, Scatter};
use crate::surface::SurfaceIntersection;
use crate::util::{is_near_zero, rand_on_unit_sphere};
use glam::*;
use rand::RngCore;

pub struct LambertianMaterial {
    albedo: Color,
}

impl LambertianMaterial {
    pub fn new(albedo: Color) -> LambertianMaterial {
        LambertianMaterial { albedo }
    }
}

impl Scatter for LambertianMaterial {
    fn scatter(&self, _r: &Ray, intersection: &SurfaceIntersection, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let scattered_direction = scatter_direction(intersection.normal, rand_on_unit_sphere(rng));
        let scattered = Ray::new(intersection.p, scattered_direction);

        return Some((self.albedo, scattered));
    }
}

/// `normal + sample`, or `normal` when the sample almost cancels it.
fn scatter_direction(normal: Vec3, sample: Vec3) -> Vec3 {
    let direction = normal + sample;

    if is_near_zero(direction) {
        return normal;
    }

    return direction;
}
