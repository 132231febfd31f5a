use std::sync::Arc;

use crate::error::Result;
use crate::ray::Ray;
use crate::scatter::{Color, Scatter};
use crate::tolerance::{FORWARD_T_MIN, ORIENTATION_EPSILON};
use glam::*;
use rand::RngCore;

pub trait Surface: Send + Sync {
    /// Nearest intersection with `t` strictly inside `(t_min, t_max)`.
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection>;

    /// Nearest intersection in front of the ray origin.
    fn hit(&self, r: &Ray) -> Option<SurfaceIntersection> {
        self.raycast(r, FORWARD_T_MIN, f32::INFINITY)
    }

    /// `hit`, but a degenerate ray is an error instead of unspecified output.
    fn try_hit(&self, r: &Ray) -> Result<Option<SurfaceIntersection>> {
        r.validate()?;
        return Ok(self.hit(r));
    }
}

pub struct SurfaceIntersection {
    pub p: Vec3,
    /// Unit length, always facing against the incoming ray.
    pub normal: Vec3,
    /// True when the ray arrived from the side the outward normal points to.
    pub facing: bool,
    pub material: Arc<dyn Scatter>,
    pub t: f32,
}

impl SurfaceIntersection {
    /// Builds a record from the geometric (outward) normal, flipping it to face the ray when needed.
    pub fn new(r: &Ray, p: Vec3, t: f32, outward_normal: Vec3, material: Arc<dyn Scatter>) -> SurfaceIntersection {
        let facing = r.direction.dot(outward_normal) < -ORIENTATION_EPSILON;
        let normal = if facing { outward_normal } else { -outward_normal };

        return SurfaceIntersection { p, normal, facing, material, t };
    }

    pub fn scatter(&self, r: &Ray, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        self.material.scatter(r, self, rng)
    }
}

impl std::fmt::Debug for SurfaceIntersection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceIntersection")
            .field("p", &self.p)
            .field("normal", &self.normal)
            .field("facing", &self.facing)
            .field("t", &self.t)
            .finish_non_exhaustive()
    }
}
