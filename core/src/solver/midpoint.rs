//! Two-point midpoint

use super::error::{SolverError, SolverResult};
use crate::geometry::{ops, Point2D};

/// Midpoint of a point set: the componentwise mean over `points.len()`
///
/// For exactly two points this is their average. Larger sets get their
/// centroid.
pub fn midpoint(points: &[Point2D]) -> SolverResult<Point2D> {
    super::check_points(points)?;
    ops::centroid(points).ok_or(SolverError::InsufficientPoints { found: 0 })
}

/// Sum of all coordinates halved, regardless of how many points there are
///
/// Matches the legacy map form, which always divided by 2. Only equal to
/// [`midpoint`] for exactly two points; kept for compatibility checks.
pub fn midpoint_halved_sum(points: &[Point2D]) -> SolverResult<Point2D> {
    super::check_points(points)?;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Ok(Point2D::new(sx / 2.0, sy / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_two_points() {
        let points = [Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0)];
        assert_eq!(midpoint(&points).unwrap(), Point2D::new(2.0, 0.0));
    }

    #[test]
    fn test_midpoint_lat_lng() {
        let points = [Point2D::new(40.0, -100.0), Point2D::new(42.0, -104.0)];
        assert_eq!(midpoint(&points).unwrap(), Point2D::new(41.0, -102.0));
    }

    #[test]
    fn test_midpoint_rejects_single_point() {
        assert_eq!(
            midpoint(&[Point2D::new(1.0, 1.0)]),
            Err(SolverError::InsufficientPoints { found: 1 })
        );
        assert_eq!(midpoint(&[]), Err(SolverError::InsufficientPoints { found: 0 }));
    }

    #[test]
    fn test_halved_sum_matches_midpoint_for_two_points() {
        let points = [Point2D::new(1.0, 3.0), Point2D::new(5.0, -7.0)];
        assert_eq!(midpoint_halved_sum(&points), midpoint(&points));
    }

    #[test]
    fn test_halved_sum_diverges_for_three_points() {
        // Legacy behaviour: (0+2+4)/2 = 3, not the centroid 2.
        let points = [
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(4.0, 0.0),
        ];

        assert_eq!(midpoint(&points).unwrap(), Point2D::new(2.0, 0.0));
        assert_eq!(midpoint_halved_sum(&points).unwrap(), Point2D::new(3.0, 0.0));
    }
}
