//! 2D point type for positions.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point representing a position.
///
/// Generic over floating-point types (`f32` or `f64`). Subtracting two
/// points yields a [`Vec2`]; adding a [`Vec2`] to a point moves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the vector from the origin to this point.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Returns this point moved by `dx` and `dy`.
    #[inline]
    pub fn translate(self, dx: F, dy: F) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Scales both coordinates by `factor` about the origin.
    #[inline]
    pub fn scale(self, factor: F) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the angle of this point's position vector, `atan2(y, x)`.
    #[inline]
    pub fn direction(self) -> F {
        self.to_vec().angle()
    }

    /// Reflects `other` through this point.
    ///
    /// Returns `2 * self - other`, the mirror image of `other` about `self`.
    #[inline]
    pub fn reflect(self, other: Self) -> Self {
        self + (self - other)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2<F>) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, offset: Vec2<F>) -> Self {
        Self {
            x: self.x - offset.x,
            y: self.y - offset.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_new_and_origin() {
        let p: Point2<f64> = Point2::new(3.0, 4.0);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, 4.0);
        assert_eq!(Point2::<f64>::origin(), Point2::new(0.0, 0.0));
        assert_eq!(Point2::<f64>::default(), Point2::origin());
    }

    #[test]
    fn test_arithmetic() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);

        let delta = b - a;
        assert_eq!(delta, Vec2::new(3.0, 4.0));
        assert_eq!(a + delta, b);
        assert_eq!(b - delta, a);
        assert_eq!(a.scale(2.0), Point2::new(2.0, 4.0));
        assert_eq!(a.translate(-1.0, 0.5), Point2::new(0.0, 2.5));
    }

    #[test]
    fn test_direction() {
        let right: Point2<f64> = Point2::new(2.0, 0.0);
        let up = Point2::new(0.0, 5.0);
        let left = Point2::new(-1.0, 0.0);
        assert_relative_eq!(right.direction(), 0.0);
        assert_relative_eq!(up.direction(), FRAC_PI_2);
        assert_relative_eq!(left.direction(), PI);
    }

    #[test]
    fn test_reflect() {
        let center: Point2<f64> = Point2::new(20.0, 10.0);
        let control = Point2::new(10.0, 10.0);
        assert_eq!(center.reflect(control), Point2::new(30.0, 10.0));
        // Reflecting a point through itself is a no-op.
        assert_eq!(center.reflect(center), center);
    }

    #[test]
    fn test_to_vec() {
        let p: Point2<f32> = Point2::new(1.5, -2.0);
        assert_eq!(p.to_vec(), Vec2::new(1.5, -2.0));
    }
}
