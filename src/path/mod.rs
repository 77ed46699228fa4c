//! Path data parsing and normalization.
//!
//! Parsing runs in three stages. The [`Scanner`] reads numbers and flags,
//! the [`SegmentParser`] groups them into raw [`Segment`]s, and the
//! [`Normalizer`] turns those into absolute move, line, cubic and close
//! calls on a [`PathSink`]. [`parse_path`] runs all three.

mod data;
mod normalize;
mod scanner;
mod segment;

pub use data::{PathData, PathElement, WriteOptions};
pub use normalize::{parse_path, parse_path_with, Normalizer, PathSink};
pub use scanner::Scanner;
pub use segment::{Coordinates, Segment, SegmentKind, SegmentParser};
