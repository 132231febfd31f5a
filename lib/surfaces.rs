mod oriented_box;
mod plane;
mod sphere;
mod triangle;

pub use oriented_box::OrientedBox;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use glam::*;

    use crate::materials::LambertianMaterial;
    use crate::scatter::Scatter;
    use crate::surface::SurfaceIntersection;

    pub const EPS: f32 = 1e-4;

    pub fn material() -> Arc<dyn Scatter> {
        Arc::new(LambertianMaterial::new(Vec3::splat(0.5)))
    }

    pub fn assert_hit(hit: &SurfaceIntersection, p: Vec3, normal: Vec3, t: f32, facing: bool) {
        assert!(hit.p.abs_diff_eq(p, EPS), "position: got {}, want {}", hit.p, p);
        assert!(hit.normal.abs_diff_eq(normal, EPS), "normal: got {}, want {}", hit.normal, normal);
        assert!((hit.t - t).abs() < EPS, "t: got {}, want {}", hit.t, t);
        assert_eq!(hit.facing, facing, "front face");
    }
}
