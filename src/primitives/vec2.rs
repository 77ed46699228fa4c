//! 2D vector type for directions and offsets.

use num_traits::Float;
use std::ops::Mul;

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`). Relative path
/// coordinates, arc radii and chords between arc endpoints are vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the squared length.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Returns the angle of this vector, `atan2(y, x)`, in radians.
    #[inline]
    pub fn angle(self) -> F {
        self.y.atan2(self.x)
    }

    /// Returns the vector rotated a quarter turn counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_magnitude_squared() {
        let v: Vec2<f64> = Vec2::new(3.0, -4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_angle() {
        let v: Vec2<f64> = Vec2::new(1.0, 1.0);
        assert_relative_eq!(v.angle(), FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(Vec2::new(0.0, -2.0).angle(), -FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_perpendicular() {
        let v: Vec2<f64> = Vec2::new(2.0, 1.0);
        let p = v.perpendicular();
        assert_eq!(p, Vec2::new(-1.0, 2.0));
        assert_eq!(v.x * p.x + v.y * p.y, 0.0);
    }

    #[test]
    fn test_scale() {
        let v: Vec2<f64> = Vec2::new(1.0, -2.0);
        assert_eq!(v * 0.5, Vec2::new(0.5, -1.0));
    }
}
