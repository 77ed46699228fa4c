//! 2D affine transformation type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D affine transformation matrix.
///
/// Represented as a 2x3 matrix in row-major order:
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// ```
///
/// Transforms are applied as:
/// - Point: `(a*x + b*y + tx, c*x + d*y + ty)`
/// - Vector: `(a*x + b*y, c*x + d*y)` (no translation)
///
/// Arc decomposition uses this to move between an ellipse's frame and the
/// unit circle: rotate into the ellipse's axes, then scale by the inverse radii.
///
/// # Example
///
/// ```
/// use pathdata::primitives::{Affine2, Point2};
/// use std::f64::consts::FRAC_PI_2;
///
/// // Rotate 90 degrees, then stretch x by 2
/// let transform: Affine2<f64> = Affine2::rotation(FRAC_PI_2).then(Affine2::scale_xy(2.0, 1.0));
///
/// let point = transform.apply_point(Point2::new(0.0, 1.0));
/// // (0, 1) rotated 90° = (-1, 0), then stretched = (-2, 0)
/// assert!((point.x + 2.0).abs() < 1e-12);
/// assert!(point.y.abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2<F> {
    /// Matrix element [0,0] - x scale / rotation component
    pub a: F,
    /// Matrix element [0,1] - x shear / rotation component
    pub b: F,
    /// Matrix element [1,0] - y shear / rotation component
    pub c: F,
    /// Matrix element [1,1] - y scale / rotation component
    pub d: F,
    /// Translation x component
    pub tx: F,
    /// Translation y component
    pub ty: F,
}

impl<F: Float> Affine2<F> {
    /// Creates a rotation transform around the origin.
    ///
    /// Angle is in radians, positive is counter-clockwise.
    #[inline]
    pub fn rotation(angle: F) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        Self {
            a: cos_a,
            b: -sin_a,
            c: sin_a,
            d: cos_a,
            tx: F::zero(),
            ty: F::zero(),
        }
    }

    /// Creates a non-uniform scaling transform around the origin.
    #[inline]
    pub fn scale_xy(sx: F, sy: F) -> Self {
        Self {
            a: sx,
            b: F::zero(),
            c: F::zero(),
            d: sy,
            tx: F::zero(),
            ty: F::zero(),
        }
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn apply_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }

    /// Applies this transform to a vector (no translation).
    #[inline]
    pub fn apply_vec(&self, v: Vec2<F>) -> Vec2<F> {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Composes this transform with another (self * other).
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.a * other.tx + self.b * other.ty + self.tx,
            ty: self.c * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Returns a transform that applies `self` first, then `other`.
    ///
    /// Equivalent to `other.compose(self)`.
    #[inline]
    pub fn then(&self, other: Self) -> Self {
        other.compose(self)
    }

    /// Returns a transform that applies `self` first, then rotates.
    #[inline]
    pub fn then_rotate(&self, angle: F) -> Self {
        self.then(Self::rotation(angle))
    }
}
