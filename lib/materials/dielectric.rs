use crate::ray::Ray;
use crate::scatter::{Color, Scatter};
use crate::surface::SurfaceIntersection;
use crate::util::{reflect, reflectance, refract};
use rand::{Rng, RngCore};

/// Clear refractive medium.
///
/// `new` always refracts: there is no total internal reflection and no Fresnel term, so a ray is never reflected.
/// `with_fresnel` adds both, reflecting whenever Snell's law has no solution and otherwise choosing reflection
/// with Schlick's probability.
pub struct DielectricMaterial {
    index_of_refraction: f32,
    fresnel: bool,
}

impl DielectricMaterial {
    pub fn new(index_of_refraction: f32) -> DielectricMaterial {
        DielectricMaterial { index_of_refraction, fresnel: false }
    }

    pub fn with_fresnel(index_of_refraction: f32) -> DielectricMaterial {
        DielectricMaterial { index_of_refraction, fresnel: true }
    }

    pub fn index_of_refraction(&self) -> f32 {
        self.index_of_refraction
    }
}

impl Scatter for DielectricMaterial {
    fn scatter(&self, r: &Ray, intersection: &SurfaceIntersection, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let refraction_ratio =
            if intersection.facing { 1.0 / self.index_of_refraction } else { self.index_of_refraction };

        let r_direction_norm = r.direction.normalize();

        let scattered_direction = if self.fresnel {
            let cos_theta = intersection.normal.dot(-r_direction_norm).min(1.0);
            let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

            let cannot_refract = refraction_ratio * sin_theta > 1.0;

            if cannot_refract || reflectance(cos_theta, refraction_ratio) > rng.gen::<f32>() {
                reflect(r_direction_norm, intersection.normal)
            } else {
                refract(r_direction_norm, intersection.normal, refraction_ratio)
            }
        } else {
            refract(r_direction_norm, intersection.normal, refraction_ratio)
        };

        let scattered = Ray::new(intersection.p, scattered_direction);

        Some((Color::ONE, scattered))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::materials::fixtures::*;
    use glam::*;

    #[test]
    fn unit_index_passes_straight_through() {
        let r = Ray::new(Vec3::new(-1.0, 0.0, 1.0), Vec3::new(3.0, 0.0, -3.0));
        let hit = intersection(&r, Arc::new(DielectricMaterial::new(1.0)));

        let (attenuation, scattered) = hit.scatter(&r, &mut rng()).expect("dielectric always scatters");
        assert_eq!(attenuation, Color::ONE);
        assert!(scattered.direction.abs_diff_eq(r.direction.normalize(), EPS));
    }

    #[test]
    fn entering_bends_toward_normal() {
        let ior = 1.5;
        let r = Ray::new(Vec3::new(-1.0, 0.0, 1.0), Vec3::new(1.0, 0.0, -1.0));
        let hit = intersection(&r, Arc::new(DielectricMaterial::new(ior)));
        assert!(hit.facing);

        let (_, scattered) = hit.scatter(&r, &mut rng()).unwrap();
        let sin_in = r.direction.normalize().x;
        let sin_out = scattered.direction.normalize().x;
        assert!((sin_out - sin_in / ior).abs() < EPS);
        assert!(scattered.direction.z < 0.0);
    }

    #[test]
    fn exiting_uses_inverse_ratio() {
        let ior = 1.5;
        let incoming = Vec3::new(0.3, 0.0, 1.0).normalize();
        let r = Ray::new(Vec3::new(0.0, 0.0, -1.0), incoming);
        let hit = intersection(&r, Arc::new(DielectricMaterial::new(ior)));
        assert!(!hit.facing);

        let (_, scattered) = hit.scatter(&r, &mut rng()).unwrap();
        assert!((scattered.direction.normalize().x - incoming.x * ior).abs() < EPS);
        assert!(scattered.direction.z > 0.0);
    }

    #[test]
    fn always_refracts_past_critical_angle() {
        let incoming = Vec3::new(60f32.to_radians().sin(), 0.0, 60f32.to_radians().cos());
        let r = Ray::new(Vec3::new(0.0, 0.0, -1.0), incoming);
        let hit = intersection(&r, Arc::new(DielectricMaterial::new(1.5)));

        let (attenuation, scattered) = hit.scatter(&r, &mut rng()).expect("no total internal reflection");
        assert_eq!(attenuation, Color::ONE);
        assert_eq!(scattered.origin, hit.p);
        assert!(scattered.direction.z > 0.0);
    }

    #[test]
    fn fresnel_reflects_past_critical_angle() {
        let incoming = Vec3::new(60f32.to_radians().sin(), 0.0, 60f32.to_radians().cos());
        let r = Ray::new(Vec3::new(0.0, 0.0, -1.0), incoming);
        let hit = intersection(&r, Arc::new(DielectricMaterial::with_fresnel(1.5)));
        let mut rng = rng();

        for _ in 0..16 {
            let (_, scattered) = hit.scatter(&r, &mut rng).unwrap();
            assert!(scattered.direction.abs_diff_eq(Vec3::new(incoming.x, 0.0, -incoming.z), EPS));
        }
    }

    #[test]
    fn fresnel_mostly_refracts_at_normal_incidence() {
        let r = Ray::new(Vec3::new(0.0, 0.0, 1.0), -Vec3::Z);
        let hit = intersection(&r, Arc::new(DielectricMaterial::with_fresnel(1.5)));
        let mut rng = rng();

        let reflected = (0..2000)
            .filter(|_| hit.scatter(&r, &mut rng).unwrap().1.direction.z > 0.0)
            .count();

        // Schlick reflectance is 0.04 here.
        assert!(reflected > 20 && reflected < 160, "reflected {} of 2000", reflected);
    }
}
