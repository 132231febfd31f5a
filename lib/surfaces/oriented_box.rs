use std::sync::Arc;

use glam::*;
use log::debug;

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::{Surface, SurfaceIntersection};
use crate::tolerance::{DEGENERATE_EPSILON, PARALLEL_EPSILON};

/// Box with arbitrary orientation, intersected with the slab method.
///
/// Each local axis carries a half-extent vector whose length is the half-width of the box along that axis. The
/// normal reported for a hit is the unit axis of the slab that produced the hit parameter, oriented against the
/// ray, so `facing` reflects the ray's direction relative to that axis rather than which face was crossed.
pub struct OrientedBox {
    center: Vec3,
    axes: [Vec3; 3],
    half_widths: [f32; 3],
    material: Arc<dyn Scatter>,
}

impl OrientedBox {
    pub fn new(
        center: Vec3,
        axes: [Vec3; 3],
        half_extents: [Vec3; 3],
        material: Arc<dyn Scatter>,
    ) -> Result<OrientedBox> {
        if !center.is_finite() {
            return Err(Error::InvalidGeometry(format!("box center must be finite, got {}", center)));
        }

        for i in 0..3 {
            let degenerate_axis = !axes[i].is_finite() || axes[i].length_squared() <= DEGENERATE_EPSILON;
            let degenerate_extent =
                !half_extents[i].is_finite() || half_extents[i].length_squared() <= DEGENERATE_EPSILON;

            if degenerate_axis || degenerate_extent {
                debug!("rejecting box at {}: axis {} = {}, half extent {}", center, i, axes[i], half_extents[i]);
                return Err(Error::InvalidGeometry(format!(
                    "box axis {} needs a non-zero direction and half extent, got {} and {}",
                    i, axes[i], half_extents[i]
                )));
            }
        }

        return Ok(OrientedBox {
            center,
            axes: axes.map(|a| a.normalize()),
            half_widths: half_extents.map(|h| h.length()),
            material,
        });
    }

    /// Axis-aligned box spanning `half_widths` around `center`.
    pub fn axis_aligned(center: Vec3, half_widths: Vec3, material: Arc<dyn Scatter>) -> Result<OrientedBox> {
        return OrientedBox::new(
            center,
            [Vec3::X, Vec3::Y, Vec3::Z],
            [Vec3::X * half_widths.x, Vec3::Y * half_widths.y, Vec3::Z * half_widths.z],
            material,
        );
    }
}

impl Surface for OrientedBox {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut near_axis = None;
        let mut far_axis = None;

        let p = self.center - r.origin;

        for (axis, half_width) in self.axes.iter().zip(self.half_widths) {
            let e = axis.dot(p);
            let f = axis.dot(r.direction);

            if f.abs() > PARALLEL_EPSILON {
                let mut t1 = (e + half_width) / f;
                let mut t2 = (e - half_width) / f;

                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                }

                if t1 > t_near {
                    t_near = t1;
                    near_axis = Some(*axis);
                }
                if t2 < t_far {
                    t_far = t2;
                    far_axis = Some(*axis);
                }
            } else if -e - half_width > 0.0 || -e + half_width < 0.0 {
                // Parallel to this slab and outside it.
                return None;
            }
        }

        if t_near > t_far || t_far <= t_min {
            return None;
        }

        let (t, axis) = if t_min < t_near && t_near < t_max {
            (t_near, near_axis?)
        } else if t_min < t_far && t_far < t_max {
            (t_far, far_axis?)
        } else {
            return None;
        };

        let p = r.at(t);

        return Some(SurfaceIntersection::new(r, p, t, axis, self.material.clone()));
    }
}
