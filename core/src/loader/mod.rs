//! Point-set loader
//!
//! Reads point sets from JSON files and from the free-text latitude/longitude
//! fields a map form collects.

pub mod files;
pub mod text;

use crate::geometry::Point2D;
use crate::solver::{representative_point, Center, SolverResult, WeiszfeldConfig};
use serde::{Deserialize, Serialize};

/// A named point set, optionally with solver overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointSetProblem {
    /// Problem ID
    pub id: String,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Points in input order, as `{"lat":..,"lng":..}` or `{"x":..,"y":..}`
    pub points: Vec<Point2D>,

    /// Solver settings; missing fields fall back to defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<WeiszfeldConfig>,
}

impl PointSetProblem {
    pub fn new(id: impl Into<String>, points: Vec<Point2D>) -> Self {
        Self {
            id: id.into(),
            description: None,
            points,
            config: None,
        }
    }

    /// Solver configuration for this problem
    pub fn solver_config(&self) -> WeiszfeldConfig {
        self.config.unwrap_or_default()
    }

    /// Compute the representative point with this problem's configuration
    pub fn solve(&self) -> SolverResult<Center> {
        representative_point(&self.points, &self.solver_config())
    }
}

/// Problem loader result
pub type LoadResult<T> = Result<T, LoadError>;

/// Problem loading errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// File not found
    FileNotFound(String),

    /// JSON parsing error
    ParseError(String),

    /// Input that parses but cannot be used
    InvalidFormat(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::FileNotFound(path) => write!(f, "File not found: {}", path),
            LoadError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            LoadError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}
