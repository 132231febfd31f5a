use std::sync::Arc;

use glam::*;
use log::debug;

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::{Surface, SurfaceIntersection};
use crate::tolerance::{DEGENERATE_EPSILON, PARALLEL_EPSILON};

/// Infinite plane through `point` with unit `normal`.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<dyn Scatter>,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3, material: Arc<dyn Scatter>) -> Result<Plane> {
        if !point.is_finite() || !normal.is_finite() || normal.length_squared() <= DEGENERATE_EPSILON {
            debug!("rejecting plane through {} with normal {}", point, normal);
            return Err(Error::InvalidGeometry(format!("plane normal must be non-zero, got {}", normal)));
        }
        return Ok(Plane { point, normal: normal.normalize(), material });
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Surface for Plane {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        // Parallel and coincident rays both miss.
        if r.direction.normalize().dot(self.normal).abs() < PARALLEL_EPSILON {
            return None;
        }

        // Divide by the raw direction so that `t` is in ray units and `p == r.at(t)` for non-unit directions.
        let t = (self.point - r.origin).dot(self.normal) / r.direction.dot(self.normal);

        if !t.is_finite() || t <= t_min || t_max <= t {
            return None;
        }

        let p = r.at(t);

        return Some(SurfaceIntersection::new(r, p, t, self.normal, self.material.clone()));
    }
}
