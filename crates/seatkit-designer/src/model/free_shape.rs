use crate::geometry::{Point, Size};

use super::ShapeGeometry;

/// Flat shape without rows, kept for older seat maps.
///
/// Unlike sectors these rotate; `rotation` is in degrees around `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeShape {
    pub shape: ShapeGeometry,
    pub position: Point,
    pub rotation: f64,
    pub draggable: bool,
}

impl FreeShape {
    pub fn new(shape: ShapeGeometry, position: Point) -> Self {
        Self {
            shape,
            position,
            rotation: 0.0,
            draggable: true,
        }
    }

    pub fn bounds(&self) -> Size {
        self.shape.bounds()
    }

    /// Maps a world point into the unrotated local frame.
    pub fn to_local(&self, world: Point) -> Point {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let dx = world.x - self.position.x;
        let dy = world.y - self.position.y;
        Point::new(dx * cos + dy * sin, -dx * sin + dy * cos)
    }

    pub fn to_world(&self, local: Point) -> Point {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        Point::new(
            self.position.x + local.x * cos - local.y * sin,
            self.position.y + local.x * sin + local.y * cos,
        )
    }

    /// World-space corners of the rotated bounding box.
    pub fn corners(&self) -> [Point; 4] {
        let size = self.bounds();
        [
            self.to_world(Point::new(0.0, 0.0)),
            self.to_world(Point::new(size.width, 0.0)),
            self.to_world(Point::new(size.width, size.height)),
            self.to_world(Point::new(0.0, size.height)),
        ]
    }

    pub fn contains(&self, world: Point) -> bool {
        self.shape.outline().contains(self.to_local(world))
    }
}
