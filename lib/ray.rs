use glam::*;

use crate::error::{Error, Result};

/// r(t) = origin + t * direction. The direction does not have to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    /// Like `new`, but rejects a zero-length or non-finite direction.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Result<Ray> {
        let r = Ray::new(origin, direction);
        r.validate()?;
        return Ok(r);
    }

    pub fn validate(&self) -> Result<()> {
        if !self.origin.is_finite() || !self.direction.is_finite() {
            return Err(Error::InvalidGeometry(format!(
                "ray has non-finite components: origin {}, direction {}",
                self.origin, self.direction
            )));
        }
        if self.direction.length_squared() == 0.0 {
            return Err(Error::InvalidGeometry("ray direction has zero length".to_string()));
        }
        return Ok(());
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_the_direction() {
        let r = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(r.at(0.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(r.at(1.5), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(r.at(-1.0), Vec3::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn accessors_return_construction_values() {
        let r = Ray::new(Vec3::X, Vec3::Y);
        assert_eq!(r.origin(), Vec3::X);
        assert_eq!(r.direction(), Vec3::Y);
    }

    #[test]
    fn try_new_rejects_zero_direction() {
        let err = Ray::try_new(Vec3::ZERO, Vec3::ZERO).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry(_)));
    }

    #[test]
    fn try_new_rejects_nan() {
        assert!(Ray::try_new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 1.0)).is_err());
        assert!(Ray::try_new(Vec3::new(0.0, f32::INFINITY, 0.0), Vec3::Z).is_err());
    }

    #[test]
    fn try_new_accepts_non_unit_direction() {
        let r = Ray::try_new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)).unwrap();
        assert_eq!(r.at(0.5), Vec3::new(0.0, 0.0, 5.0));
    }
}
