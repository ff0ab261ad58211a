//! Geometry module - planar points and point-set helpers
//!
//! No solver logic here, just coordinates, distances and aggregation.

pub mod point;
pub mod weighted;

pub use point::{ops, Point2D};
pub use weighted::{aggregate_duplicates, WeightedPoint};
