//! Planar point type
//!
//! Coordinates are raw (latitude, longitude) pairs treated as a flat plane.

use serde::{Deserialize, Serialize};

/// 2D point coordinates, conventionally (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    #[serde(alias = "lat")]
    pub x: f64,
    #[serde(alias = "lng")]
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Latitude component (alias for `x`)
    pub fn lat(&self) -> f64 {
        self.x
    }

    /// Longitude component (alias for `y`)
    pub fn lng(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Both coordinates are finite (no NaN, no infinity)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Aggregate computations over point sets
pub mod ops {
    use super::Point2D;

    /// Componentwise arithmetic mean, `None` for an empty slice
    pub fn centroid(points: &[Point2D]) -> Option<Point2D> {
        if points.is_empty() {
            return None;
        }

        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let n = points.len() as f64;

        Some(Point2D::new(sx / n, sy / n))
    }

    /// Sum of Euclidean distances from `from` to every point
    pub fn total_distance(points: &[Point2D], from: Point2D) -> f64 {
        points.iter().map(|p| p.distance(&from)).sum()
    }
}
