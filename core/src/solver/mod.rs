//! Solver module - midpoint and geometric median
//!
//! Every entry point is a pure function of its arguments; nothing is cached
//! between calls.

pub mod center;
pub mod config;
pub mod error;
pub mod midpoint;
pub mod solution;
pub mod weiszfeld;

pub use center::{representative_point, Center};
pub use config::{WeiszfeldConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use error::{ExportError, SolverError, SolverResult};
pub use midpoint::{midpoint, midpoint_halved_sum};
pub use solution::{IterationRecord, MedianSolution, MedianStatus};
pub use weiszfeld::{weighted_objective, GeometricMedianSolver};

use crate::geometry::{Point2D, WeightedPoint};

/// Geometric median with the given tolerance and the default iteration cap
pub fn geometric_median(points: &[Point2D], tolerance: f64) -> SolverResult<MedianSolution> {
    let config = WeiszfeldConfig::default().with_tolerance(tolerance);
    GeometricMedianSolver::new(config).solve(points)
}

/// Weighted geometric median
pub fn weighted_geometric_median(
    points: &[WeightedPoint],
    config: &WeiszfeldConfig,
) -> SolverResult<MedianSolution> {
    GeometricMedianSolver::new(*config).solve_weighted(points)
}

/// At least two points, all finite
pub(crate) fn check_points(points: &[Point2D]) -> SolverResult<()> {
    if points.len() < 2 {
        return Err(SolverError::InsufficientPoints { found: points.len() });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(SolverError::NonFiniteCoordinate { index });
    }
    Ok(())
}
