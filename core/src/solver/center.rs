//! Representative point for a point set
//!
//! Two points get their midpoint, three or more get the geometric median.

use super::config::WeiszfeldConfig;
use super::error::{ExportError, SolverResult};
use super::midpoint::midpoint;
use super::solution::MedianSolution;
use super::weiszfeld::GeometricMedianSolver;
use crate::geometry::Point2D;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The computed center and how it was obtained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Center {
    Midpoint { point: Point2D },
    Median(MedianSolution),
}

impl Center {
    pub fn point(&self) -> Point2D {
        match self {
            Center::Midpoint { point } => *point,
            Center::Median(solution) => solution.point,
        }
    }

    /// False only for a median that hit the iteration cap
    pub fn is_converged(&self) -> bool {
        match self {
            Center::Midpoint { .. } => true,
            Center::Median(solution) => solution.is_converged(),
        }
    }

    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Midpoint for two points, geometric median for three or more
pub fn representative_point(points: &[Point2D], config: &WeiszfeldConfig) -> SolverResult<Center> {
    super::check_points(points)?;

    if points.len() == 2 {
        return Ok(Center::Midpoint {
            point: midpoint(points)?,
        });
    }

    let solution = GeometricMedianSolver::new(*config).solve(points)?;
    Ok(Center::Median(solution))
}
