use crate::geometry::Point;

/// A seat generated from its row; never edited on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub ticket: String,
    /// 1-based position within the row.
    pub index: u32,
    /// Centre in row-local space.
    pub center: Point,
    pub radius: f64,
}

impl Seat {
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance_to(&p) <= self.radius
    }
}
