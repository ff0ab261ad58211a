//! Solver error types

use crate::geometry::Point2D;
use thiserror::Error;

/// Errors that can occur while computing a center point
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Must have at least two points (got {found})")]
    InsufficientPoints { found: usize },

    #[error("Point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("Point {index} has an invalid weight (must be finite and positive)")]
    InvalidWeight { index: usize },

    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),

    #[error("Iteration {iteration} produced a non-finite estimate")]
    NumericalBreakdown { iteration: usize },

    #[error(
        "Did not converge after {iterations} iterations (last step {delta:e}), best estimate ({}, {})",
        .estimate.x,
        .estimate.y
    )]
    NonConvergence {
        iterations: usize,
        delta: f64,
        estimate: Point2D,
    },
}

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;

/// Errors from writing or reading exported results
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_points_message() {
        let err = SolverError::InsufficientPoints { found: 1 };
        assert_eq!(err.to_string(), "Must have at least two points (got 1)");
    }

    #[test]
    fn test_non_convergence_message_names_estimate() {
        let err = SolverError::NonConvergence {
            iterations: 10,
            delta: 0.5,
            estimate: Point2D::new(1.5, -2.0),
        };
        let msg = err.to_string();

        assert!(msg.contains("10 iterations"));
        assert!(msg.contains("(1.5, -2)"));
    }
}
