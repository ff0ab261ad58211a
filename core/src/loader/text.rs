//! Free-text coordinate parsing
//!
//! Mirrors the map form: each row is a latitude field and a longitude field,
//! and rows that do not hold two finite numbers are left out.

use super::{LoadError, LoadResult};
use crate::geometry::Point2D;

/// Points parsed from form rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPoints {
    /// Valid points in row order
    pub points: Vec<Point2D>,

    /// Indices of rows that were rejected
    pub rejected: Vec<usize>,
}

fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse one latitude/longitude field pair
pub fn parse_coordinate_pair(lat: &str, lng: &str) -> Option<Point2D> {
    Some(Point2D::new(parse_coordinate(lat)?, parse_coordinate(lng)?))
}

/// Parse form rows, keeping valid ones and recording the rest
pub fn parse_point_rows<'a, I>(rows: I) -> ParsedPoints
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut parsed = ParsedPoints::default();

    for (i, (lat, lng)) in rows.into_iter().enumerate() {
        match parse_coordinate_pair(lat, lng) {
            Some(p) => parsed.points.push(p),
            None => parsed.rejected.push(i),
        }
    }

    parsed
}

/// Parse a single `"lat,lng"` argument
pub fn parse_point_arg(arg: &str) -> LoadResult<Point2D> {
    let (lat, lng) = arg
        .split_once(',')
        .ok_or_else(|| LoadError::InvalidFormat(format!("expected LAT,LNG, got {:?}", arg)))?;

    parse_coordinate_pair(lat, lng)
        .ok_or_else(|| LoadError::InvalidFormat(format!("not a finite coordinate pair: {:?}", arg)))
}
