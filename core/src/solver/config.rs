//! Weiszfeld solver configuration

use super::error::{SolverError, SolverResult};
use serde::{Deserialize, Serialize};

/// Default convergence threshold, in coordinate units
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Weiszfeld solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeiszfeldConfig {
    /// Stop once successive estimates move no more than this
    pub tolerance: f64,

    /// Maximum number of reweighting iterations
    pub max_iterations: usize,

    /// Keep a per-iteration record in the solution
    pub record_trace: bool,
}

impl Default for WeiszfeldConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            record_trace: false,
        }
    }
}

impl WeiszfeldConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// Reject tolerances that are negative or non-finite and a zero iteration cap
    pub fn validate(&self) -> SolverResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
