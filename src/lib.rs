//! pathdata - SVG path data parsing and normalization
//!
//! Path data packs a whole drawing into one string of commands. This library
//! reads that string and hands it to you as four primitives: move, line,
//! cubic Bézier and close, all in absolute coordinates. Relative commands,
//! shorthand lines, smooth curves, quadratics and elliptical arcs are all
//! resolved on the way.
//!
//! # Example
//!
//! ```
//! use pathdata::{parse_path, PathData, PathElement, Point2};
//!
//! let mut path = PathData::new();
//! parse_path("M 10 10 l 20 0 a 10 10 0 0 1 0 20 z", &mut path).unwrap();
//!
//! assert_eq!(path.elements()[1], PathElement::LineTo(Point2::new(30.0, 10.0)));
//! assert_eq!(path.elements().last(), Some(&PathElement::Close));
//! ```

pub mod curves;
pub mod error;
pub mod path;
pub mod primitives;

pub use error::PathError;
pub use path::{
    parse_path, parse_path_with, Normalizer, PathData, PathElement, PathSink, Segment,
    SegmentParser, WriteOptions,
};
pub use primitives::{Point2, Vec2};
