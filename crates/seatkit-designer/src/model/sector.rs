use crate::geometry::{ClipRegion, Point, ShapeKind, Size};

use super::ShapeGeometry;

/// A positioned, shaped container of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub title: String,
    pub description: String,
    /// World position of the local origin.
    pub position: Point,
    pub draggable: bool,
    pub shape: ShapeGeometry,
    /// Baked, axis-aligned bounds of `shape`.
    pub bounds: Size,
}

impl Sector {
    pub fn new(shape: ShapeGeometry, position: Point, title: impl Into<String>) -> Self {
        let bounds = shape.bounds();
        Self {
            title: title.into(),
            description: String::new(),
            position,
            draggable: true,
            shape,
            bounds,
        }
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Re-derives `bounds` from the current shape.
    pub fn sync_bounds(&mut self) {
        self.bounds = self.shape.bounds();
    }

    pub fn clip_region(&self) -> ClipRegion {
        crate::geometry::compute_clip_region(self.shape_kind(), self.bounds, self.shape.points())
    }

    pub fn to_local(&self, world: Point) -> Point {
        Point::new(world.x - self.position.x, world.y - self.position.y)
    }

    pub fn to_world(&self, local: Point) -> Point {
        Point::new(local.x + self.position.x, local.y + self.position.y)
    }
}

/// Non-selectable holder of a sector's rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowsContainer {
    pub clip: ClipRegion,
}

impl RowsContainer {
    pub fn for_sector(sector: &Sector) -> Self {
        Self {
            clip: sector.clip_region(),
        }
    }
}
