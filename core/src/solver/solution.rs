//! Median solutions and their JSON export

use super::error::{ExportError, SolverError, SolverResult};
use crate::geometry::Point2D;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the iteration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianStatus {
    /// Successive estimates moved no more than the tolerance
    Converged,

    /// The estimate sits on an input point that is provably optimal,
    /// including the case where every input point coincides
    Coincident,

    /// Iteration cap reached; the point is the best estimate so far
    IterationLimit,
}

/// One Weiszfeld iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// 1-based iteration number
    pub iteration: usize,

    /// Estimate after this iteration
    pub estimate: Point2D,

    /// Distance moved from the previous estimate
    pub delta: f64,

    /// Weighted sum of distances from `estimate` to the inputs
    pub objective: f64,
}

/// Result of a geometric median computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianSolution {
    /// Final estimate
    pub point: Point2D,

    /// Iterations performed
    pub iterations: usize,

    /// Distance moved on the last iteration (0 when none ran)
    pub final_delta: f64,

    pub status: MedianStatus,

    /// Per-iteration history, empty unless tracing was requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<IterationRecord>,
}

impl MedianSolution {
    /// Whether the point is a converged (or provably optimal) answer
    pub fn is_converged(&self) -> bool {
        self.status != MedianStatus::IterationLimit
    }

    /// Turn an iteration-limit outcome into [`SolverError::NonConvergence`]
    pub fn into_converged(self) -> SolverResult<Point2D> {
        match self.status {
            MedianStatus::IterationLimit => Err(SolverError::NonConvergence {
                iterations: self.iterations,
                delta: self.final_delta,
                estimate: self.point,
            }),
            _ => Ok(self.point),
        }
    }

    /// Write the solution as pretty-printed JSON
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a solution previously written with [`MedianSolution::to_json_file`]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
