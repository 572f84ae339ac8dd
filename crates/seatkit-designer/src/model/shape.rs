use serde::{Deserialize, Serialize};

use crate::geometry::{self, ClipRegion, Point, ShapeKind, Size};

/// Concrete, baked geometry of a sector outline or free shape.
///
/// All variants live in local space with their bounding box starting at the
/// origin: a rect spans `[0, w] x [0, h]`, an ellipse is centred on its radii,
/// polygon points are normalized so their minimum is `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeGeometry {
    Rect { width: f64, height: f64 },
    Ellipse { radius_x: f64, radius_y: f64 },
    Polygon { points: Vec<Point> },
}

impl ShapeGeometry {
    /// Geometry of `kind` filling a box of `size`.
    pub fn from_size(kind: ShapeKind, size: Size) -> Self {
        match kind {
            ShapeKind::Rect => ShapeGeometry::Rect {
                width: size.width,
                height: size.height,
            },
            ShapeKind::Ellipse => ShapeGeometry::Ellipse {
                radius_x: size.width / 2.0,
                radius_y: size.height / 2.0,
            },
            ShapeKind::Polygon => ShapeGeometry::Polygon {
                points: vec![
                    Point::new(0.0, 0.0),
                    Point::new(size.width, 0.0),
                    Point::new(size.width, size.height),
                    Point::new(0.0, size.height),
                ],
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Rect { .. } => ShapeKind::Rect,
            ShapeGeometry::Ellipse { .. } => ShapeKind::Ellipse,
            ShapeGeometry::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    pub fn bounds(&self) -> Size {
        match self {
            ShapeGeometry::Rect { width, height } => Size::new(*width, *height),
            ShapeGeometry::Ellipse { radius_x, radius_y } => {
                Size::new(radius_x * 2.0, radius_y * 2.0)
            }
            ShapeGeometry::Polygon { points } => geometry::polygon_bounds(points).1,
        }
    }

    pub fn points(&self) -> &[Point] {
        match self {
            ShapeGeometry::Polygon { points } => points,
            _ => &[],
        }
    }

    /// Bakes a scale transform into the dimensions.
    pub fn bake_scale(&mut self, sx: f64, sy: f64) {
        let (sx, sy) = (sx.abs(), sy.abs());
        match self {
            ShapeGeometry::Rect { width, height } => {
                *width *= sx;
                *height *= sy;
            }
            ShapeGeometry::Ellipse { radius_x, radius_y } => {
                *radius_x *= sx;
                *radius_y *= sy;
            }
            ShapeGeometry::Polygon { points } => geometry::scale_points(points, sx, sy),
        }
    }

    /// Outline of the shape as a region, used both for clipping and hit-testing.
    pub fn outline(&self) -> ClipRegion {
        geometry::compute_clip_region(self.kind(), self.bounds(), self.points())
    }
}
