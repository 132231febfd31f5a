use crate::ray::Ray;
use crate::scatter::{Color, Scatter};
use crate::surface::SurfaceIntersection;
use crate::util::reflect;
use glam::*;
use log::trace;
use rand::RngCore;

/// Phong local illumination parameters.
///
/// Phong is a direct-lighting model, not a path-continuation rule: `scatter` absorbs every ray. The lighting
/// equation is available separately through `illuminate`.
pub struct PhongMaterial {
    pub diffuse_color: Color,
    pub spec_color: Color,
    pub ambient_color: Color,
    pub light_pos: Vec3,
    pub view_pos: Vec3,
    pub kd: f32,
    pub ks: f32,
    pub ka: f32,
    pub shininess: f32,
}

impl PhongMaterial {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        diffuse_color: Color,
        spec_color: Color,
        ambient_color: Color,
        light_pos: Vec3,
        view_pos: Vec3,
        kd: f32,
        ks: f32,
        ka: f32,
        shininess: f32,
    ) -> PhongMaterial {
        PhongMaterial { diffuse_color, spec_color, ambient_color, light_pos, view_pos, kd, ks, ka, shininess }
    }

    /// Blue plastic lit from (5, 5, 0).
    pub fn with_view(view_pos: Vec3) -> PhongMaterial {
        PhongMaterial::new(
            Color::new(0.0, 0.0, 1.0),
            Color::ONE,
            Color::splat(0.01),
            Vec3::new(5.0, 5.0, 0.0),
            view_pos,
            0.45,
            0.45,
            0.1,
            10.0,
        )
    }

    /// `ka * ambient + kd * max(0, n.l) * diffuse + ks * max(0, r.v)^shininess * specular`
    pub fn illuminate(&self, intersection: &SurfaceIntersection) -> Color {
        let n = intersection.normal;
        let l = (self.light_pos - intersection.p).normalize_or_zero();
        let v = (self.view_pos - intersection.p).normalize_or_zero();

        let ambient = self.ka * self.ambient_color;

        let n_dot_l = n.dot(l).max(0.0);
        let diffuse = self.kd * n_dot_l * self.diffuse_color;

        // No highlight from a light behind the surface.
        let specular = if n_dot_l > 0.0 {
            let r = reflect(-l, n);
            self.ks * r.dot(v).max(0.0).powf(self.shininess) * self.spec_color
        } else {
            Color::ZERO
        };

        return ambient + diffuse + specular;
    }
}

impl Scatter for PhongMaterial {
    fn scatter(&self, _r: &Ray, intersection: &SurfaceIntersection, _rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        trace!("phong absorbs ray at {}", intersection.p);
        return None;
    }
}
