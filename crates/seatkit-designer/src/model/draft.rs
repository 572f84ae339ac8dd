use seatkit_core::constants::MIN_POLYGON_POINTS;

use crate::geometry::Point;

/// In-progress polygon, in world coordinates. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonDraft {
    points: Vec<Point>,
}

impl PolygonDraft {
    pub fn new(first: Point) -> Self {
        Self {
            points: vec![first],
        }
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Whether `p` is within the magnet radius of the first vertex.
    pub fn snaps_to_first(&self, p: Point, magnet_radius: f64) -> bool {
        self.first().distance_to(&p) <= magnet_radius
    }

    pub fn can_close(&self) -> bool {
        self.points.len() >= MIN_POLYGON_POINTS
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}
