//! Weighted points and duplicate aggregation
//!
//! A point listed k times pulls the median exactly as hard as the same point
//! listed once with weight k.

use super::point::Point2D;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A point with a positive multiplicity weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedPoint {
    pub point: Point2D,
    pub weight: f64,
}

impl WeightedPoint {
    pub fn new(point: Point2D, weight: f64) -> Self {
        Self { point, weight }
    }

    /// Weight 1.0
    pub fn unit(point: Point2D) -> Self {
        Self::new(point, 1.0)
    }
}

/// Bit-pattern key; `+ 0.0` folds `-0.0` into `0.0`
fn key(p: &Point2D) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Collapse exactly-equal points into weighted points
///
/// Output order follows the first occurrence of each distinct point.
pub fn aggregate_duplicates(points: &[Point2D]) -> Vec<WeightedPoint> {
    let mut index: FxHashMap<(u64, u64), usize> = FxHashMap::default();
    let mut out: Vec<WeightedPoint> = Vec::with_capacity(points.len());

    for p in points {
        match index.get(&key(p)) {
            Some(&i) => out[i].weight += 1.0,
            None => {
                index.insert(key(p), out.len());
                out.push(WeightedPoint::unit(*p));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_keeps_first_seen_order() {
        let p = Point2D::new(1.0, 1.0);
        let q = Point2D::new(5.0, 2.0);

        let agg = aggregate_duplicates(&[q, p, q, q, p]);

        assert_eq!(agg, vec![WeightedPoint::new(q, 3.0), WeightedPoint::new(p, 2.0)]);
    }

    #[test]
    fn test_negative_zero_is_same_point() {
        let agg = aggregate_duplicates(&[Point2D::new(0.0, 1.0), Point2D::new(-0.0, 1.0)]);

        assert_eq!(agg.len(), 1);
        assert_eq!(agg[0].weight, 2.0);
    }

    #[test]
    fn test_distinct_points_unchanged() {
        let points = [Point2D::new(0.0, 0.0), Point2D::new(0.0, 1e-12)];
        let agg = aggregate_duplicates(&points);

        assert_eq!(agg.len(), 2);
        assert!(agg.iter().all(|w| w.weight == 1.0));
    }
}
