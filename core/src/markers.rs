//! Marker collection for a map front end
//!
//! One owned list of `{point, handle}` entries replaces parallel arrays of
//! coordinates and UI objects, so the two can never drift out of sync. The
//! handle type is whatever the front end needs to tear a marker down.

use crate::geometry::Point2D;
use crate::solver::{representative_point, Center, SolverResult, WeiszfeldConfig};

/// Stable marker identifier, never reused within a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M{}", self.0)
    }
}

/// A placed point and its UI handle
#[derive(Debug, Clone, PartialEq)]
pub struct Marker<H> {
    pub id: MarkerId,
    pub point: Point2D,
    pub handle: H,
}

/// Ordered, owned collection of markers
#[derive(Debug, Clone)]
pub struct MarkerSet<H> {
    markers: Vec<Marker<H>>,
    next_id: u64,
}

impl<H> Default for MarkerSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> MarkerSet<H> {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a marker and return its id
    pub fn add(&mut self, point: Point2D, handle: H) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.markers.push(Marker { id, point, handle });
        id
    }

    /// Remove the marker with this id
    pub fn remove(&mut self, id: MarkerId) -> Option<Marker<H>> {
        let index = self.markers.iter().position(|m| m.id == id)?;
        Some(self.markers.remove(index))
    }

    /// Remove the first marker placed exactly at `point`
    pub fn remove_at(&mut self, point: Point2D) -> Option<Marker<H>> {
        let index = self.markers.iter().position(|m| m.point == point)?;
        Some(self.markers.remove(index))
    }

    /// Remove every marker, handing back the handles for teardown
    pub fn clear(&mut self) -> Vec<H> {
        self.markers.drain(..).map(|m| m.handle).collect()
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker<H>> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker<H>> {
        self.markers.iter()
    }

    /// Points in placement order
    pub fn points(&self) -> Vec<Point2D> {
        self.markers.iter().map(|m| m.point).collect()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Representative point of the current markers
    pub fn compute(&self, config: &WeiszfeldConfig) -> SolverResult<Center> {
        representative_point(&self.points(), config)
    }
}
