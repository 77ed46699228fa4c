//! Path segments and the segment parser.
//!
//! A [`Segment`] is one command with its raw arguments, exactly as written:
//! coordinates may still be relative and shorthand forms are not expanded.
//! [`SegmentParser`] produces them lazily from path data text.

use super::scanner::Scanner;
use crate::error::PathError;
use crate::primitives::{Point2, Vec2};

/// Whether a segment's coordinates are absolute or relative to the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinates {
    /// Upper-case command letter.
    Absolute,
    /// Lower-case command letter.
    Relative,
}

/// The kind of a path command, independent of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// `M`/`m`
    MoveTo,
    /// `L`/`l`
    LineTo,
    /// `H`/`h`
    HorizontalLineTo,
    /// `V`/`v`
    VerticalLineTo,
    /// `C`/`c`
    CubicTo,
    /// `S`/`s`
    SmoothCubicTo,
    /// `Q`/`q`
    QuadTo,
    /// `T`/`t`
    SmoothQuadTo,
    /// `A`/`a`
    ArcTo,
    /// `Z`/`z`
    ClosePath,
}

impl SegmentKind {
    /// Returns the number of arguments the command takes.
    pub fn arity(self) -> usize {
        match self {
            SegmentKind::MoveTo | SegmentKind::LineTo | SegmentKind::SmoothQuadTo => 2,
            SegmentKind::HorizontalLineTo | SegmentKind::VerticalLineTo => 1,
            SegmentKind::CubicTo => 6,
            SegmentKind::SmoothCubicTo | SegmentKind::QuadTo => 4,
            SegmentKind::ArcTo => 7,
            SegmentKind::ClosePath => 0,
        }
    }

    /// Returns true for the cubic family, whose trailing control point `S` reflects.
    pub fn is_cubic(self) -> bool {
        matches!(self, SegmentKind::CubicTo | SegmentKind::SmoothCubicTo)
    }

    /// Returns true for the quadratic family, whose control point `T` reflects.
    pub fn is_quadratic(self) -> bool {
        matches!(self, SegmentKind::QuadTo | SegmentKind::SmoothQuadTo)
    }
}

/// A resolved command: kind plus coordinate mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Command {
    kind: SegmentKind,
    coords: Coordinates,
}

impl Command {
    fn from_letter(letter: u8) -> Option<Self> {
        let kind = match letter.to_ascii_uppercase() {
            b'M' => SegmentKind::MoveTo,
            b'L' => SegmentKind::LineTo,
            b'H' => SegmentKind::HorizontalLineTo,
            b'V' => SegmentKind::VerticalLineTo,
            b'C' => SegmentKind::CubicTo,
            b'S' => SegmentKind::SmoothCubicTo,
            b'Q' => SegmentKind::QuadTo,
            b'T' => SegmentKind::SmoothQuadTo,
            b'A' => SegmentKind::ArcTo,
            b'Z' => SegmentKind::ClosePath,
            _ => return None,
        };
        let coords = if letter.is_ascii_uppercase() {
            Coordinates::Absolute
        } else {
            Coordinates::Relative
        };
        Some(Self { kind, coords })
    }

    /// The command implied by bare numbers following this one.
    fn repeated(self) -> Self {
        match self.kind {
            SegmentKind::MoveTo => Self {
                kind: SegmentKind::LineTo,
                coords: self.coords,
            },
            _ => self,
        }
    }
}

/// One path command with its raw arguments.
///
/// Every variant except [`Segment::ClosePath`] records whether its
/// coordinates are absolute or relative. Arc radii and rotation are never
/// relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Start a new subpath.
    MoveTo {
        coords: Coordinates,
        to: Point2<f64>,
    },
    /// Straight line.
    LineTo {
        coords: Coordinates,
        to: Point2<f64>,
    },
    /// Horizontal line; only the x coordinate is given.
    HorizontalLineTo { coords: Coordinates, x: f64 },
    /// Vertical line; only the y coordinate is given.
    VerticalLineTo { coords: Coordinates, y: f64 },
    /// Cubic Bézier curve.
    CubicTo {
        coords: Coordinates,
        ctrl1: Point2<f64>,
        ctrl2: Point2<f64>,
        to: Point2<f64>,
    },
    /// Cubic Bézier whose first control point mirrors the previous curve's.
    SmoothCubicTo {
        coords: Coordinates,
        ctrl2: Point2<f64>,
        to: Point2<f64>,
    },
    /// Quadratic Bézier curve.
    QuadTo {
        coords: Coordinates,
        ctrl: Point2<f64>,
        to: Point2<f64>,
    },
    /// Quadratic Bézier whose control point mirrors the previous curve's.
    SmoothQuadTo {
        coords: Coordinates,
        to: Point2<f64>,
    },
    /// Elliptical arc.
    ArcTo {
        coords: Coordinates,
        radii: Vec2<f64>,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2<f64>,
    },
    /// Close the current subpath.
    ClosePath,
}

impl Segment {
    /// Returns the kind of this segment.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::MoveTo { .. } => SegmentKind::MoveTo,
            Segment::LineTo { .. } => SegmentKind::LineTo,
            Segment::HorizontalLineTo { .. } => SegmentKind::HorizontalLineTo,
            Segment::VerticalLineTo { .. } => SegmentKind::VerticalLineTo,
            Segment::CubicTo { .. } => SegmentKind::CubicTo,
            Segment::SmoothCubicTo { .. } => SegmentKind::SmoothCubicTo,
            Segment::QuadTo { .. } => SegmentKind::QuadTo,
            Segment::SmoothQuadTo { .. } => SegmentKind::SmoothQuadTo,
            Segment::ArcTo { .. } => SegmentKind::ArcTo,
            Segment::ClosePath => SegmentKind::ClosePath,
        }
    }

    /// Returns the coordinate mode, or `None` for [`Segment::ClosePath`].
    pub fn coordinates(&self) -> Option<Coordinates> {
        match *self {
            Segment::MoveTo { coords, .. }
            | Segment::LineTo { coords, .. }
            | Segment::HorizontalLineTo { coords, .. }
            | Segment::VerticalLineTo { coords, .. }
            | Segment::CubicTo { coords, .. }
            | Segment::SmoothCubicTo { coords, .. }
            | Segment::QuadTo { coords, .. }
            | Segment::SmoothQuadTo { coords, .. }
            | Segment::ArcTo { coords, .. } => Some(coords),
            Segment::ClosePath => None,
        }
    }
}

/// Lazily parses path data into [`Segment`]s.
///
/// The parser is a single-pass iterator: each segment consumed advances the
/// underlying cursor for good, and it cannot be cloned or rewound. After the
/// first error it yields nothing more.
///
/// Bare numbers after a command repeat it, except that numbers after a
/// move-to continue as line-to in the same coordinate mode and numbers after
/// a close-path are an error.
///
/// # Example
///
/// ```
/// use pathdata::path::{Coordinates, Segment, SegmentParser};
/// use pathdata::Point2;
///
/// let segments: Vec<_> = SegmentParser::new("m10,20 5,5z")
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(
///     segments[1],
///     Segment::LineTo { coords: Coordinates::Relative, to: Point2::new(5.0, 5.0) }
/// );
/// assert_eq!(segments[2], Segment::ClosePath);
/// ```
#[derive(Debug)]
pub struct SegmentParser<'a> {
    scanner: Scanner<'a>,
    previous: Option<Command>,
    done: bool,
}

impl<'a> SegmentParser<'a> {
    /// Creates a parser over path data.
    pub fn new(data: &'a str) -> Self {
        Self {
            scanner: Scanner::new(data),
            previous: None,
            done: false,
        }
    }

    /// Returns the byte offset of the parser's cursor.
    pub fn position(&self) -> usize {
        self.scanner.position()
    }

    /// Works out which command comes next, consuming its letter if present.
    fn next_command(&mut self) -> Result<Command, PathError> {
        let offset = self.scanner.position();
        let lookahead = self.scanner.peek();

        if let Some(command) = lookahead.and_then(Command::from_letter) {
            if self.previous.is_none() && command.kind != SegmentKind::MoveTo {
                return Err(PathError::MissingInitialMoveTo { offset });
            }
            self.scanner.advance();
            return Ok(command);
        }

        match self.previous {
            None => Err(PathError::MissingInitialMoveTo { offset }),
            Some(previous)
                if previous.kind != SegmentKind::ClosePath && self.scanner.at_number_start() =>
            {
                Ok(previous.repeated())
            }
            Some(_) => Err(PathError::UnknownCommand { offset }),
        }
    }

    fn parse_point(&mut self) -> Result<Point2<f64>, PathError> {
        let x = self.scanner.parse_number()?;
        let y = self.scanner.parse_number()?;
        Ok(Point2::new(x, y))
    }

    fn parse_arguments(&mut self, command: Command) -> Result<Segment, PathError> {
        let coords = command.coords;
        let segment = match command.kind {
            SegmentKind::MoveTo => Segment::MoveTo {
                coords,
                to: self.parse_point()?,
            },
            SegmentKind::LineTo => Segment::LineTo {
                coords,
                to: self.parse_point()?,
            },
            SegmentKind::HorizontalLineTo => Segment::HorizontalLineTo {
                coords,
                x: self.scanner.parse_number()?,
            },
            SegmentKind::VerticalLineTo => Segment::VerticalLineTo {
                coords,
                y: self.scanner.parse_number()?,
            },
            SegmentKind::CubicTo => Segment::CubicTo {
                coords,
                ctrl1: self.parse_point()?,
                ctrl2: self.parse_point()?,
                to: self.parse_point()?,
            },
            SegmentKind::SmoothCubicTo => Segment::SmoothCubicTo {
                coords,
                ctrl2: self.parse_point()?,
                to: self.parse_point()?,
            },
            SegmentKind::QuadTo => Segment::QuadTo {
                coords,
                ctrl: self.parse_point()?,
                to: self.parse_point()?,
            },
            SegmentKind::SmoothQuadTo => Segment::SmoothQuadTo {
                coords,
                to: self.parse_point()?,
            },
            SegmentKind::ArcTo => {
                let rx = self.scanner.parse_number()?;
                let ry = self.scanner.parse_number()?;
                let x_axis_rotation = self.scanner.parse_number()?;
                let large_arc = self.scanner.parse_arc_flag()?;
                let sweep = self.scanner.parse_arc_flag()?;
                Segment::ArcTo {
                    coords,
                    radii: Vec2::new(rx, ry),
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    to: self.parse_point()?,
                }
            }
            SegmentKind::ClosePath => Segment::ClosePath,
        };
        Ok(segment)
    }

    fn parse_segment(&mut self) -> Result<Segment, PathError> {
        let command = self.next_command()?;
        self.scanner.skip_spaces();
        let segment = self.parse_arguments(command)?;
        self.previous = Some(command);
        Ok(segment)
    }
}

impl Iterator for SegmentParser<'_> {
    type Item = Result<Segment, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.scanner.skip_spaces();
        if self.scanner.is_at_end() {
            self.done = true;
            return None;
        }

        let result = self.parse_segment();
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for SegmentParser<'_> {}
