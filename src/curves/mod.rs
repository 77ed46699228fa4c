//! Curve types used when lowering path data to cubic primitives.

mod arc;
mod bezier;

pub use arc::EllipticalArc2;
pub use bezier::{CubicBezier2, QuadraticBezier2};
