use std::sync::Arc;

use glam::*;
use log::debug;

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::{Surface, SurfaceIntersection};
use crate::tolerance::{DEGENERATE_EPSILON, PARALLEL_EPSILON};

/// Single triangle. The outward normal follows the winding `v0 -> v1 -> v2` (right hand rule).
pub struct Triangle {
    v0: Vec3,
    edge1: Vec3,
    edge2: Vec3,
    normal: Vec3,
    material: Arc<dyn Scatter>,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<dyn Scatter>) -> Result<Triangle> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let n = edge1.cross(edge2);

        if !n.is_finite() || n.length_squared() <= DEGENERATE_EPSILON {
            debug!("rejecting triangle {} {} {}", v0, v1, v2);
            return Err(Error::InvalidGeometry(format!("triangle {} {} {} has zero area", v0, v1, v2)));
        }

        return Ok(Triangle { v0, edge1, edge2, normal: n.normalize(), material });
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Surface for Triangle {
    // Möller–Trumbore.
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let pvec = r.direction.cross(self.edge2);
        let det = self.edge1.dot(pvec);

        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = r.origin - self.v0;

        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(self.edge1);
        let v = r.direction.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = self.edge2.dot(qvec) * inv_det;
        if t <= t_min || t_max <= t {
            return None;
        }

        let p = r.at(t);

        return Some(SurfaceIntersection::new(r, p, t, self.normal, self.material.clone()));
    }
}
