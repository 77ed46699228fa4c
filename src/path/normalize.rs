//! Normalization of raw segments into drawing primitives.
//!
//! The [`Normalizer`] resolves relative coordinates and shorthand forms and
//! lowers every curve to cubic form, so a [`PathSink`] only ever receives
//! absolute move, line, cubic and close calls.

use super::segment::{Coordinates, Segment, SegmentKind, SegmentParser};
use crate::curves::{EllipticalArc2, QuadraticBezier2};
use crate::error::PathError;
use crate::primitives::{Point2, Vec2};
use log::{debug, trace};

/// A consumer of normalized path primitives.
///
/// All coordinates are absolute.
pub trait PathSink {
    /// Starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Draws a straight line to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Draws a cubic Bézier curve with controls `(x1, y1)` and `(x2, y2)`
    /// ending at `(x3, y3)`.
    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);

    /// Closes the current subpath.
    fn close(&mut self);
}

/// Geometric state carried from one segment to the next.
#[derive(Debug, Clone, Copy, Default)]
struct PenState {
    current: Point2<f64>,
    subpath_start: Point2<f64>,
    /// Trailing control point of the last curve, or `current` after anything else.
    last_control: Point2<f64>,
    last_kind: Option<SegmentKind>,
}

impl PenState {
    fn resolve(&self, coords: Coordinates, p: Point2<f64>) -> Point2<f64> {
        match coords {
            Coordinates::Absolute => p,
            Coordinates::Relative => self.current + p.to_vec(),
        }
    }

    /// The mirror of the last control point, if the previous segment was a
    /// curve of the family `same_family` accepts.
    fn reflected_control(&self, same_family: fn(SegmentKind) -> bool) -> Point2<f64> {
        match self.last_kind {
            Some(kind) if same_family(kind) => self.current.reflect(self.last_control),
            _ => self.current,
        }
    }

    fn finish_line(&mut self, to: Point2<f64>, kind: SegmentKind) {
        self.current = to;
        self.last_control = to;
        self.last_kind = Some(kind);
    }

    fn finish_curve(&mut self, control: Point2<f64>, to: Point2<f64>, kind: SegmentKind) {
        self.current = to;
        self.last_control = control;
        self.last_kind = Some(kind);
    }
}

/// Feeds segments to a [`PathSink`] as absolute primitives.
///
/// The normalizer keeps the current point, the start of the current subpath
/// and the control point that smooth curves reflect. Segments must be pushed
/// in path order.
///
/// # Example
///
/// ```
/// use pathdata::path::{Normalizer, PathData, PathElement, SegmentParser};
/// use pathdata::Point2;
///
/// let mut data = PathData::new();
/// let mut normalizer = Normalizer::new(&mut data);
/// for segment in SegmentParser::new("M 10 10 h 5") {
///     normalizer.push(&segment.unwrap());
/// }
/// assert_eq!(normalizer.current_point(), Point2::new(15.0, 10.0));
/// assert_eq!(data.elements()[1], PathElement::LineTo(Point2::new(15.0, 10.0)));
/// ```
#[derive(Debug)]
pub struct Normalizer<'s, S: PathSink + ?Sized> {
    sink: &'s mut S,
    pen: PenState,
}

impl<'s, S: PathSink + ?Sized> Normalizer<'s, S> {
    /// Creates a normalizer writing into `sink`, with the pen at the origin.
    pub fn new(sink: &'s mut S) -> Self {
        Self {
            sink,
            pen: PenState::default(),
        }
    }

    /// Returns the absolute position after the last primitive.
    pub fn current_point(&self) -> Point2<f64> {
        self.pen.current
    }

    /// Returns the point a close-path returns to.
    pub fn subpath_start(&self) -> Point2<f64> {
        self.pen.subpath_start
    }

    /// Resolves one segment and emits its primitives.
    pub fn push(&mut self, segment: &Segment) {
        trace!("normalizing {segment:?} at {:?}", self.pen.current);

        let kind = segment.kind();
        match *segment {
            Segment::MoveTo { coords, to } => {
                let to = self.pen.resolve(coords, to);
                self.sink.move_to(to.x, to.y);
                self.pen.subpath_start = to;
                self.pen.finish_line(to, kind);
            }
            Segment::LineTo { coords, to } => {
                let to = self.pen.resolve(coords, to);
                self.line_to(to, kind);
            }
            Segment::HorizontalLineTo { coords, x } => {
                let mut to = self.pen.current;
                to.x = match coords {
                    Coordinates::Absolute => x,
                    Coordinates::Relative => to.x + x,
                };
                self.line_to(to, kind);
            }
            Segment::VerticalLineTo { coords, y } => {
                let mut to = self.pen.current;
                to.y = match coords {
                    Coordinates::Absolute => y,
                    Coordinates::Relative => to.y + y,
                };
                self.line_to(to, kind);
            }
            Segment::CubicTo {
                coords,
                ctrl1,
                ctrl2,
                to,
            } => {
                let ctrl1 = self.pen.resolve(coords, ctrl1);
                let ctrl2 = self.pen.resolve(coords, ctrl2);
                let to = self.pen.resolve(coords, to);
                self.cubic_to(ctrl1, ctrl2, to, kind);
            }
            Segment::SmoothCubicTo { coords, ctrl2, to } => {
                let ctrl1 = self.pen.reflected_control(SegmentKind::is_cubic);
                let ctrl2 = self.pen.resolve(coords, ctrl2);
                let to = self.pen.resolve(coords, to);
                self.cubic_to(ctrl1, ctrl2, to, kind);
            }
            Segment::QuadTo { coords, ctrl, to } => {
                let ctrl = self.pen.resolve(coords, ctrl);
                let to = self.pen.resolve(coords, to);
                self.quad_to(ctrl, to, kind);
            }
            Segment::SmoothQuadTo { coords, to } => {
                let ctrl = self.pen.reflected_control(SegmentKind::is_quadratic);
                let to = self.pen.resolve(coords, to);
                self.quad_to(ctrl, to, kind);
            }
            Segment::ArcTo {
                coords,
                radii,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            } => {
                let to = self.pen.resolve(coords, to);
                self.arc_to(radii, x_axis_rotation, large_arc, sweep, to);
            }
            Segment::ClosePath => {
                self.sink.close();
                let start = self.pen.subpath_start;
                self.pen.finish_line(start, kind);
            }
        }
    }

    fn line_to(&mut self, to: Point2<f64>, kind: SegmentKind) {
        self.sink.line_to(to.x, to.y);
        self.pen.finish_line(to, kind);
    }

    fn cubic_to(
        &mut self,
        ctrl1: Point2<f64>,
        ctrl2: Point2<f64>,
        to: Point2<f64>,
        kind: SegmentKind,
    ) {
        self.sink
            .cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y);
        self.pen.finish_curve(ctrl2, to, kind);
    }

    fn quad_to(&mut self, ctrl: Point2<f64>, to: Point2<f64>, kind: SegmentKind) {
        let cubic = QuadraticBezier2::new(self.pen.current, ctrl, to).to_cubic();
        self.sink.cubic_to(
            cubic.p1.x, cubic.p1.y, cubic.p2.x, cubic.p2.y, to.x, to.y,
        );
        // T reflects the quadratic control, not the elevated cubic ones.
        self.pen.finish_curve(ctrl, to, kind);
    }

    fn arc_to(
        &mut self,
        radii: Vec2<f64>,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2<f64>,
    ) {
        let arc = EllipticalArc2::new(
            self.pen.current,
            to,
            radii,
            x_axis_rotation,
            large_arc,
            sweep,
        );

        match arc.to_cubics() {
            Some(cubics) => {
                for cubic in &cubics {
                    self.sink.cubic_to(
                        cubic.p1.x, cubic.p1.y, cubic.p2.x, cubic.p2.y, cubic.p3.x, cubic.p3.y,
                    );
                }
            }
            None => {
                debug!(
                    "arc from {:?} to {to:?} with radii {radii:?} drawn as a line",
                    self.pen.current
                );
                self.sink.line_to(to.x, to.y);
            }
        }
        self.pen.finish_line(to, SegmentKind::ArcTo);
    }
}

/// Parses path data and emits its primitives to `sink`.
///
/// Parsing stops at the first error. Primitives for the segments before it
/// have already reached `sink` and stay there.
///
/// # Example
///
/// ```
/// use pathdata::{parse_path, PathData, PathElement, Point2};
///
/// let mut data = PathData::new();
/// parse_path("M 0 0 Q 5 10 10 0", &mut data).unwrap();
///
/// assert_eq!(data.len(), 2);
/// assert!(matches!(data.elements()[1], PathElement::CubicTo(..)));
/// ```
pub fn parse_path<S: PathSink + ?Sized>(data: &str, sink: &mut S) -> Result<(), PathError> {
    let mut normalizer = Normalizer::new(sink);
    parse_path_with(data, &mut normalizer)
}

/// Parses path data through an existing normalizer.
///
/// The path continues from the normalizer's current state, so relative
/// commands are resolved against where the previous path left off.
pub fn parse_path_with<S: PathSink + ?Sized>(
    data: &str,
    normalizer: &mut Normalizer<'_, S>,
) -> Result<(), PathError> {
    for segment in SegmentParser::new(data) {
        match segment {
            Ok(segment) => normalizer.push(&segment),
            Err(err) => {
                debug!("rejecting path data: {err} (offset {})", err.offset());
                return Err(err);
            }
        }
    }
    Ok(())
}
