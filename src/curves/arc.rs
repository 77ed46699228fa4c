//! Elliptical arc type and cubic approximation.
//!
//! Arcs in path data are given in endpoint form: start, end, radii, the
//! rotation of the ellipse's x-axis, and two flags choosing one of the four
//! candidate arcs. Decomposition converts this to center form on a unit
//! circle, splits the sweep into pieces of at most a quarter turn, and fits
//! one cubic per piece.

use super::CubicBezier2;
use crate::primitives::{Affine2, Point2, Vec2};
use num_traits::Float;
use std::f64::consts::{FRAC_PI_2, PI};

/// A 2D elliptical arc in SVG endpoint parameterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc2<F> {
    /// Start point of the arc.
    pub from: Point2<F>,
    /// End point of the arc.
    pub to: Point2<F>,
    /// Radii along the ellipse's own x and y axes.
    pub radii: Vec2<F>,
    /// Rotation of the ellipse's x-axis, in degrees.
    pub x_axis_rotation: F,
    /// Choose the arc spanning more than 180 degrees.
    pub large_arc: bool,
    /// Choose the arc drawn in the positive-angle direction.
    pub sweep: bool,
}

impl<F: Float> EllipticalArc2<F> {
    /// Creates a new arc.
    #[inline]
    pub fn new(
        from: Point2<F>,
        to: Point2<F>,
        radii: Vec2<F>,
        x_axis_rotation: F,
        large_arc: bool,
        sweep: bool,
    ) -> Self {
        Self {
            from,
            to,
            radii,
            x_axis_rotation,
            large_arc,
            sweep,
        }
    }

    /// Returns true if the arc collapses to a straight line.
    ///
    /// That is the case when either radius is zero or the endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.radii.x == F::zero() || self.radii.y == F::zero() || self.from == self.to
    }

    /// Approximates the arc with cubic Bézier curves.
    ///
    /// The sweep is split into `ceil(|sweep| / (π/2 + 0.001))` equal pieces,
    /// so a full quarter turn is never split in two by rounding noise. Radii
    /// too small to connect the endpoints are scaled up uniformly until they
    /// just fit.
    ///
    /// # Returns
    ///
    /// The cubics in drawing order, the first starting at `from`, or `None`
    /// if the arc is degenerate and should be drawn as a line instead.
    ///
    /// # Example
    ///
    /// ```
    /// use pathdata::curves::EllipticalArc2;
    /// use pathdata::{Point2, Vec2};
    ///
    /// // Half of a circle of radius 10
    /// let arc: EllipticalArc2<f64> = EllipticalArc2::new(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(20.0, 0.0),
    ///     Vec2::new(10.0, 10.0),
    ///     0.0,
    ///     false,
    ///     true,
    /// );
    /// let cubics = arc.to_cubics().unwrap();
    /// assert_eq!(cubics.len(), 2);
    /// assert!((cubics[1].p3.x - 20.0).abs() < 1e-9);
    /// ```
    pub fn to_cubics(&self) -> Option<Vec<CubicBezier2<F>>> {
        if self.is_degenerate() {
            return None;
        }

        let half = F::from(0.5)?;
        let angle = self.x_axis_rotation.to_radians();
        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();

        // Half the chord, in the ellipse's own axes
        let half_delta = Affine2::rotation(-angle).apply_vec((self.from - self.to) * half);
        let radii_scale = half_delta.x * half_delta.x / (rx * rx)
            + half_delta.y * half_delta.y / (ry * ry);
        if radii_scale > F::one() {
            let grow = radii_scale.sqrt();
            rx = rx * grow;
            ry = ry * grow;
        }

        let to_unit =
            Affine2::rotation(-angle).then(Affine2::scale_xy(F::one() / rx, F::one() / ry));
        let p1 = to_unit.apply_point(self.from);
        let p2 = to_unit.apply_point(self.to);

        let delta = p2 - p1;
        let offset_squared = (F::one() / delta.magnitude_squared() - half * half).max(F::zero());
        let mut offset = offset_squared.sqrt();
        if self.sweep == self.large_arc {
            offset = -offset;
        }
        let midpoint = Point2::new((p1.x + p2.x) * half, (p1.y + p2.y) * half);
        let center = midpoint + (delta * offset).perpendicular();

        let theta1 = (p1 - center).angle();
        let theta2 = (p2 - center).angle();

        let full_turn = F::from(2.0 * PI)?;
        let mut sweep_angle = theta2 - theta1;
        if sweep_angle < F::zero() && self.sweep {
            sweep_angle = sweep_angle + full_turn;
        } else if sweep_angle > F::zero() && !self.sweep {
            sweep_angle = sweep_angle - full_turn;
        }

        let max_piece = F::from(FRAC_PI_2 + 0.001)?;
        let segments = (sweep_angle / max_piece).abs().ceil().to_usize()?;
        if segments == 0 {
            return None;
        }

        let from_unit = Affine2::scale_xy(rx, ry).then_rotate(angle);
        let count = F::from(segments)?;
        let four_thirds = F::from(4.0 / 3.0)?;
        let quarter = half * half;

        let mut cubics = Vec::with_capacity(segments);
        let mut start = self.from;
        for i in 0..segments {
            let start_theta = theta1 + F::from(i)? * sweep_angle / count;
            let end_theta = theta1 + F::from(i + 1)? * sweep_angle / count;

            let t = four_thirds * (quarter * (end_theta - start_theta)).tan();
            if !t.is_finite() {
                return None;
            }

            let (sin_start, cos_start) = start_theta.sin_cos();
            let (sin_end, cos_end) = end_theta.sin_cos();

            let control1 = center.translate(cos_start - t * sin_start, sin_start + t * cos_start);
            let target = center.translate(cos_end, sin_end);
            let control2 = target.translate(t * sin_end, -t * cos_end);

            let end = from_unit.apply_point(target);
            cubics.push(CubicBezier2::new(
                start,
                from_unit.apply_point(control1),
                from_unit.apply_point(control2),
                end,
            ));
            start = end;
        }

        Some(cubics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arc(
        from: (f64, f64),
        to: (f64, f64),
        radii: (f64, f64),
        rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) -> EllipticalArc2<f64> {
        EllipticalArc2::new(
            Point2::new(from.0, from.1),
            Point2::new(to.0, to.1),
            Vec2::new(radii.0, radii.1),
            rotation,
            large_arc,
            sweep,
        )
    }

    #[test]
    fn test_semicircle_positive_sweep() {
        let cubics = arc((0.0, 0.0), (20.0, 0.0), (10.0, 10.0), 0.0, false, true)
            .to_cubics()
            .unwrap();
        assert_eq!(cubics.len(), 2);

        // Positive sweep from angle π passes through 3π/2, i.e. y = -10
        assert_eq!(cubics[0].p0, Point2::new(0.0, 0.0));
        assert_relative_eq!(cubics[0].p3.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(cubics[0].p3.y, -10.0, epsilon = 1e-9);
        assert_eq!(cubics[1].p0, cubics[0].p3);
        assert_relative_eq!(cubics[1].p3.x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(cubics[1].p3.y, 0.0, epsilon = 1e-9);

        // Tangent length for a quarter turn is 4/3 * tan(π/8) of the radius
        let k = 4.0 / 3.0 * (PI / 8.0).tan() * 10.0;
        assert_relative_eq!(cubics[0].p1.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(cubics[0].p1.y, -k, epsilon = 1e-9);
    }

    #[test]
    fn test_semicircle_negative_sweep() {
        let cubics = arc((0.0, 0.0), (20.0, 0.0), (10.0, 10.0), 0.0, false, false)
            .to_cubics()
            .unwrap();
        assert_eq!(cubics.len(), 2);
        assert_relative_eq!(cubics[0].p3.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(cubics[0].p3.y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_radii_scaled_up_to_fit() {
        let small = arc((0.0, 0.0), (20.0, 0.0), (1.0, 1.0), 0.0, false, true)
            .to_cubics()
            .unwrap();
        let exact = arc((0.0, 0.0), (20.0, 0.0), (10.0, 10.0), 0.0, false, true)
            .to_cubics()
            .unwrap();

        assert_eq!(small.len(), exact.len());
        for (a, b) in small.iter().zip(&exact) {
            assert_relative_eq!(a.p1.x, b.p1.x, epsilon = 1e-9);
            assert_relative_eq!(a.p1.y, b.p1.y, epsilon = 1e-9);
            assert_relative_eq!(a.p3.x, b.p3.x, epsilon = 1e-9);
            assert_relative_eq!(a.p3.y, b.p3.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_large_arc_flag_selects_piece_count() {
        let small = arc((0.0, 0.0), (10.0, 10.0), (10.0, 10.0), 0.0, false, true)
            .to_cubics()
            .unwrap();
        let large = arc((0.0, 0.0), (10.0, 10.0), (10.0, 10.0), 0.0, true, true)
            .to_cubics()
            .unwrap();

        // A quarter turn fits in one piece; three quarters need three.
        assert_eq!(small.len(), 1);
        assert_eq!(large.len(), 3);

        for cubics in [&small, &large] {
            let last = cubics.last().unwrap();
            assert_relative_eq!(last.p3.x, 10.0, epsilon = 1e-9);
            assert_relative_eq!(last.p3.y, 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rotated_ellipse_stays_on_curve() {
        // Major axis (rx = 20) rotated to vertical; chord lies along it.
        let rx = 20.0;
        let ry = 10.0;
        let cubics = arc((0.0, 0.0), (0.0, 20.0), (rx, ry), 90.0, false, true)
            .to_cubics()
            .unwrap();

        let center = Point2::new(-(0.75f64).sqrt() * ry, 10.0);
        let into_axes = Affine2::rotation(-FRAC_PI_2);

        for cubic in &cubics {
            for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let local = into_axes.apply_vec(cubic.eval(t) - center);
                let on_ellipse = (local.x / rx).powi(2) + (local.y / ry).powi(2);
                assert_relative_eq!(on_ellipse, 1.0, epsilon = 2e-3);
            }
        }

        let last = cubics.last().unwrap();
        assert_relative_eq!(last.p3.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.p3.y, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_radii_use_magnitude() {
        let positive = arc((0.0, 0.0), (20.0, 0.0), (10.0, 10.0), 0.0, false, true)
            .to_cubics()
            .unwrap();
        let negative = arc((0.0, 0.0), (20.0, 0.0), (-10.0, -10.0), 0.0, false, true)
            .to_cubics()
            .unwrap();
        assert_eq!(positive, negative);
    }

    #[test]
    fn test_zero_radius_is_degenerate() {
        let a = arc((5.0, 5.0), (20.0, 20.0), (0.0, 10.0), 0.0, false, true);
        assert!(a.is_degenerate());
        assert!(a.to_cubics().is_none());

        let b = arc((5.0, 5.0), (20.0, 20.0), (10.0, 0.0), 0.0, false, true);
        assert!(b.to_cubics().is_none());
    }

    #[test]
    fn test_coincident_endpoints_is_degenerate() {
        let a = arc((5.0, 5.0), (5.0, 5.0), (10.0, 10.0), 30.0, true, true);
        assert!(a.is_degenerate());
        assert!(a.to_cubics().is_none());
    }

    #[test]
    fn test_f32_support() {
        let a: EllipticalArc2<f32> = EllipticalArc2::new(
            Point2::new(0.0, 0.0),
            Point2::new(20.0, 0.0),
            Vec2::new(10.0, 10.0),
            0.0,
            false,
            true,
        );
        let cubics = a.to_cubics().unwrap();
        assert_eq!(cubics.len(), 2);
        assert_relative_eq!(cubics[1].p3.x, 20.0, epsilon = 1e-4);
    }
}
