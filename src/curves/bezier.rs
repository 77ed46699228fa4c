//! Bézier curve types.
//!
//! Path data allows quadratic curves, but the normalized output only
//! speaks cubic. Quadratics are elevated to the exact equivalent cubic.

use crate::primitives::Point2;
use num_traits::Float;

/// A quadratic Bézier curve defined by 3 control points.
///
/// The curve starts at `p0`, is influenced by `p1`, and ends at `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// Control point
    pub p1: Point2<F>,
    /// End point
    pub p2: Point2<F>,
}

impl<F: Float> QuadraticBezier2<F> {
    /// Creates a new quadratic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let mt = one - t;
        let mt2 = mt * mt;
        let t2 = t * t;
        let two = one + one;

        Point2::new(
            mt2 * self.p0.x + two * mt * t * self.p1.x + t2 * self.p2.x,
            mt2 * self.p0.y + two * mt * t * self.p1.y + t2 * self.p2.y,
        )
    }

    /// Elevates this curve to the cubic that traces exactly the same path.
    ///
    /// With control point `Q`, the cubic controls are `(P0 + 2Q) / 3` and
    /// `(P2 + 2Q) / 3`; the endpoints are unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use pathdata::curves::QuadraticBezier2;
    /// use pathdata::Point2;
    ///
    /// let quad = QuadraticBezier2::new(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(3.0, 6.0),
    ///     Point2::new(6.0, 0.0),
    /// );
    /// let cubic = quad.to_cubic();
    /// assert_eq!(cubic.p1, Point2::new(2.0, 4.0));
    /// assert_eq!(cubic.p2, Point2::new(4.0, 4.0));
    /// ```
    pub fn to_cubic(&self) -> CubicBezier2<F> {
        let two = F::one() + F::one();
        let three = two + F::one();
        let q = self.p1;

        let c1 = Point2::new(
            (self.p0.x + two * q.x) / three,
            (self.p0.y + two * q.y) / three,
        );
        let c2 = Point2::new(
            (self.p2.x + two * q.x) / three,
            (self.p2.y + two * q.y) / three,
        );

        CubicBezier2::new(self.p0, c1, c2, self.p2)
    }
}

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `p0`, is pulled toward `p1` and `p2`, and ends at `p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// First control point
    pub p1: Point2<F>,
    /// Second control point
    pub p2: Point2<F>,
    /// End point
    pub p3: Point2<F>,
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let mt = one - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;
        let t2 = t * t;
        let t3 = t2 * t;
        let three = one + one + one;

        Point2::new(
            mt3 * self.p0.x
                + three * mt2 * t * self.p1.x
                + three * mt * t2 * self.p2.x
                + t3 * self.p3.x,
            mt3 * self.p0.y
                + three * mt2 * t * self.p1.y
                + three * mt * t2 * self.p2.y
                + t3 * self.p3.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quadratic_eval_endpoints() {
        let curve: QuadraticBezier2<f64> = QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 10.0),
            Point2::new(10.0, 0.0),
        );

        assert_eq!(curve.eval(0.0), Point2::new(0.0, 0.0));
        assert_eq!(curve.eval(1.0), Point2::new(10.0, 0.0));
    }

    #[test]
    fn test_quadratic_eval_midpoint() {
        let curve: QuadraticBezier2<f64> = QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 10.0),
            Point2::new(10.0, 0.0),
        );

        let mid = curve.eval(0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-10);
        assert_relative_eq!(mid.y, 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_cubic_eval_endpoints() {
        let curve: CubicBezier2<f64> = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 10.0),
            Point2::new(7.0, 10.0),
            Point2::new(10.0, 0.0),
        );

        assert_eq!(curve.eval(0.0), Point2::new(0.0, 0.0));
        assert_eq!(curve.eval(1.0), Point2::new(10.0, 0.0));
    }

    #[test]
    fn test_cubic_eval_midpoint() {
        let curve: CubicBezier2<f64> = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 10.0),
            Point2::new(7.0, 10.0),
            Point2::new(10.0, 0.0),
        );

        let mid = curve.eval(0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-10);
        assert_relative_eq!(mid.y, 7.5, epsilon = 1e-10);
    }

    #[test]
    fn test_elevation_control_points() {
        let quad: QuadraticBezier2<f64> = QuadraticBezier2::new(
            Point2::new(20.0, 30.0),
            Point2::new(40.0, 5.0),
            Point2::new(60.0, 30.0),
        );
        let cubic = quad.to_cubic();

        assert_eq!(cubic.p0, quad.p0);
        assert_eq!(cubic.p3, quad.p2);
        assert_relative_eq!(cubic.p1.x, 33.3333, epsilon = 1e-4);
        assert_relative_eq!(cubic.p1.y, 13.3333, epsilon = 1e-4);
        assert_relative_eq!(cubic.p2.x, 46.6667, epsilon = 1e-4);
        assert_relative_eq!(cubic.p2.y, 13.3333, epsilon = 1e-4);
    }

    #[test]
    fn test_elevation_traces_same_curve() {
        let quad: QuadraticBezier2<f64> = QuadraticBezier2::new(
            Point2::new(-4.0, 1.0),
            Point2::new(2.5, 9.0),
            Point2::new(8.0, -3.0),
        );
        let cubic = quad.to_cubic();

        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let a = quad.eval(t);
            let b = cubic.eval(t);
            assert_relative_eq!(a.x, b.x, epsilon = 1e-10);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_elevation_f32() {
        let quad: QuadraticBezier2<f32> = QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(6.0, 0.0),
        );
        let cubic = quad.to_cubic();
        assert_relative_eq!(cubic.p1.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(cubic.p2.x, 4.0, epsilon = 1e-6);
    }
}
