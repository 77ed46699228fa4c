//! Recorded paths and path data output.

use super::normalize::{parse_path, PathSink};
use crate::error::PathError;
use crate::primitives::Point2;
use std::fmt::{self, Write};

/// One normalized primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Start a subpath at the point.
    MoveTo(Point2<f64>),
    /// Line to the point.
    LineTo(Point2<f64>),
    /// Cubic Bézier with two control points and an end point.
    CubicTo(Point2<f64>, Point2<f64>, Point2<f64>),
    /// Close the current subpath.
    Close,
}

/// Options for writing path data.
///
/// # Example
///
/// ```
/// use pathdata::path::{PathData, WriteOptions};
///
/// let path = PathData::parse("M 0 0 L 0.126 1").unwrap();
/// let options = WriteOptions::with_precision(2).compact(true);
/// assert_eq!(path.to_svg_string(&options), "M0 0 L0.13 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    /// Maximum number of fractional digits, or `None` for the shortest
    /// decimal that identifies the value.
    pub precision: Option<usize>,
    /// Omit the space between a command letter and its first number.
    pub compact: bool,
}

impl WriteOptions {
    /// Creates options that round coordinates to `precision` fractional digits.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: Some(precision),
            ..Default::default()
        }
    }

    /// Sets the coordinate precision.
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Sets whether command letters are written against their first number.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

/// A path recorded as normalized primitives.
///
/// `PathData` is a [`PathSink`], so it can collect the output of
/// [`parse_path`] directly. Written back out it uses only the absolute `M`,
/// `L`, `C` and `Z` commands.
///
/// # Example
///
/// ```
/// use pathdata::PathData;
///
/// let path = PathData::parse("m 10 10 h 5 v 5 z").unwrap();
/// assert_eq!(path.to_string(), "M 10 10 L 15 10 L 15 15 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    elements: Vec<PathElement>,
}

impl PathData {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Parses path data into a new path.
    ///
    /// On error the partially recorded path is dropped. Pass your own
    /// `PathData` to [`parse_path`] to keep it.
    pub fn parse(data: &str) -> Result<Self, PathError> {
        let mut path = Self::new();
        parse_path(data, &mut path)?;
        Ok(path)
    }

    /// Returns the recorded primitives.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of recorded primitives.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns an iterator over the recorded primitives.
    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.elements.iter()
    }

    /// Removes all recorded primitives.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Writes the path as path data.
    ///
    /// Coordinates are written as they are stored. A non-finite coordinate
    /// comes out as `inf` or `NaN`, which path data cannot express, so the
    /// result will not parse again.
    pub fn to_svg_string(&self, options: &WriteOptions) -> String {
        WithOptions {
            path: self,
            options,
        }
        .to_string()
    }

    fn write_to<W: Write>(&self, out: &mut W, options: &WriteOptions) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            let (letter, points): (char, &[Point2<f64>]) = match element {
                PathElement::MoveTo(p) => ('M', std::slice::from_ref(p)),
                PathElement::LineTo(p) => ('L', std::slice::from_ref(p)),
                PathElement::CubicTo(c1, c2, p) => {
                    out.write_char('C')?;
                    write_points(out, &[*c1, *c2, *p], options)?;
                    continue;
                }
                PathElement::Close => ('Z', &[]),
            };
            out.write_char(letter)?;
            write_points(out, points, options)?;
        }
        Ok(())
    }
}

fn write_points<W: Write>(
    out: &mut W,
    points: &[Point2<f64>],
    options: &WriteOptions,
) -> fmt::Result {
    for (i, p) in points.iter().enumerate() {
        if i > 0 || !options.compact {
            out.write_char(' ')?;
        }
        write_number(out, p.x, options.precision)?;
        out.write_char(' ')?;
        write_number(out, p.y, options.precision)?;
    }
    Ok(())
}

fn write_number<W: Write>(out: &mut W, value: f64, precision: Option<usize>) -> fmt::Result {
    let text = match precision {
        Some(digits) => {
            let fixed = format!("{value:.digits$}");
            let trimmed = if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.')
            } else {
                fixed.as_str()
            };
            trimmed.to_string()
        }
        None => value.to_string(),
    };
    // Rounding can leave "-0"; path data has no use for a signed zero.
    if text == "-0" {
        out.write_char('0')
    } else {
        out.write_str(&text)
    }
}

/// Display adapter pairing a path with non-default write options.
struct WithOptions<'a> {
    path: &'a PathData,
    options: &'a WriteOptions,
}

impl fmt::Display for WithOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.path.write_to(f, self.options)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, &WriteOptions::default())
    }
}

impl PathSink for PathData {
    fn move_to(&mut self, x: f64, y: f64) {
        self.elements.push(PathElement::MoveTo(Point2::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.elements.push(PathElement::LineTo(Point2::new(x, y)));
    }

    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.elements.push(PathElement::CubicTo(
            Point2::new(x1, y1),
            Point2::new(x2, y2),
            Point2::new(x3, y3),
        ));
    }

    fn close(&mut self) {
        self.elements.push(PathElement::Close);
    }
}

impl<'a> IntoIterator for &'a PathData {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<PathElement> for PathData {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
