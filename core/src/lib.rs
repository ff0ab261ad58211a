//! geomedian core
//!
//! Midpoint and geometric median of planar point sets. Coordinates are
//! treated as flat (latitude, longitude) pairs; no map projection is applied.

pub mod geometry; // Points, distances, duplicate aggregation
pub mod solver;   // Midpoint, Weiszfeld iteration, center dispatch
pub mod loader;   // JSON point-set files and form-field parsing
pub mod markers;  // Owned marker collection for map front ends

pub use geometry::{aggregate_duplicates, Point2D, WeightedPoint};
pub use solver::{
    geometric_median, midpoint, midpoint_halved_sum, representative_point,
    weighted_geometric_median, Center, GeometricMedianSolver, MedianSolution, MedianStatus,
    SolverError, SolverResult, WeiszfeldConfig,
};
pub use loader::{LoadError, LoadResult, PointSetProblem};
pub use markers::{Marker, MarkerId, MarkerSet};
