//! Pure geometry for the seat-map editor.
//!
//! Everything in here works in a sector's local space: origin at the
//! top-left corner of the sector bounds, `y` growing downwards.
//!
//! - clip regions per shape kind (and their `lyon` paths for rendering)
//! - seat layout along a row
//! - collision-free row placement and free-slot search
//! - small helpers for snapping, clamping and polygon normalization

use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::{point, vector, Angle, Box2D};
use lyon::path::{FillRule, Path, Winding};
use serde::{Deserialize, Serialize};

use seatkit_core::constants::MIN_EFFECTIVE_SEAT_RADIUS;

/// Tolerance used when flattening curves for hit-testing.
const HIT_TOLERANCE: f32 = 0.1;

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Width / height pair, always axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Shape kinds a sector (or a legacy free shape) can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Ellipse,
    #[serde(alias = "poly")]
    Polygon,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polygon => "polygon",
        }
    }
}

/// Region outside of which a sector's rows and seats are not rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClipRegion {
    Rect { width: f64, height: f64 },
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    Polygon { points: Vec<Point> },
}

impl ClipRegion {
    /// Builds the region outline as a closed path.
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        match self {
            ClipRegion::Rect { width, height } => {
                builder.add_rectangle(
                    &Box2D::new(point(0.0, 0.0), point(*width as f32, *height as f32)),
                    Winding::Positive,
                );
            }
            ClipRegion::Ellipse { cx, cy, rx, ry } => {
                builder.add_ellipse(
                    point(*cx as f32, *cy as f32),
                    vector(*rx as f32, *ry as f32),
                    Angle::radians(0.0),
                    Winding::Positive,
                );
            }
            ClipRegion::Polygon { points } => {
                if let Some((first, rest)) = points.split_first() {
                    builder.begin(point(first.x as f32, first.y as f32));
                    for p in rest {
                        builder.line_to(point(p.x as f32, p.y as f32));
                    }
                    builder.close();
                }
            }
        }
        builder.build()
    }

    /// Whether a local-space point lies inside the region.
    pub fn contains(&self, p: Point) -> bool {
        let path = self.to_path();
        hit_test_path(
            &point(p.x as f32, p.y as f32),
            path.iter(),
            FillRule::NonZero,
            HIT_TOLERANCE,
        )
    }
}

/// Computes the clip region of a sector from its shape kind and baked geometry.
pub fn compute_clip_region(kind: ShapeKind, bounds: Size, polygon_points: &[Point]) -> ClipRegion {
    match kind {
        ShapeKind::Rect => ClipRegion::Rect {
            width: bounds.width,
            height: bounds.height,
        },
        ShapeKind::Ellipse => ClipRegion::Ellipse {
            cx: bounds.width / 2.0,
            cy: bounds.height / 2.0,
            rx: bounds.width / 2.0,
            ry: bounds.height / 2.0,
        },
        ShapeKind::Polygon if polygon_points.is_empty() => ClipRegion::Rect {
            width: bounds.width,
            height: bounds.height,
        },
        ShapeKind::Polygon => ClipRegion::Polygon {
            points: polygon_points.to_vec(),
        },
    }
}

/// Result of laying out the seats of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatLayout {
    pub effective_radius: f64,
    pub centers: Vec<Point>,
}

/// Largest radius that lets `seat_count` seats fit in `width` minus the pads,
/// capped by the desired radius and floored at the minimum seat radius.
pub fn effective_seat_radius(
    seat_count: u32,
    desired_radius: f64,
    left_pad: f64,
    right_pad: f64,
    width: f64,
) -> f64 {
    if seat_count == 0 {
        return desired_radius;
    }
    let usable = (width - left_pad - right_pad).max(0.0);
    let max_radius = (usable / (2.0 * seat_count as f64)).floor();
    desired_radius.min(max_radius).max(MIN_EFFECTIVE_SEAT_RADIUS)
}

/// Evenly spaces `seat_count` seats across a row of width `width`.
///
/// A single seat is centred; otherwise the outer seats touch the pads.
pub fn layout_seats(
    seat_count: u32,
    desired_radius: f64,
    left_pad: f64,
    right_pad: f64,
    width: f64,
    center_y: f64,
) -> SeatLayout {
    let r = effective_seat_radius(seat_count, desired_radius, left_pad, right_pad, width);
    let centers = match seat_count {
        0 => Vec::new(),
        1 => vec![Point::new(width / 2.0, center_y)],
        n => {
            let start = left_pad + r;
            let end = width - right_pad - r;
            let step = (end - start).max(0.0) / (n - 1) as f64;
            (0..n)
                .map(|i| Point::new(start + i as f64 * step, center_y))
                .collect()
        }
    };
    SeatLayout {
        effective_radius: r,
        centers,
    }
}

/// Vertical extent of an existing row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpan {
    pub y: f64,
    pub height: f64,
}

impl RowSpan {
    pub fn new(y: f64, height: f64) -> Self {
        Self { y, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Rounds to the nearest multiple of `unit`.
pub fn snap(value: f64, unit: f64) -> f64 {
    (value / unit).round() * unit
}

/// Rounds up to the next multiple of `unit`.
pub fn snap_up(value: f64, unit: f64) -> f64 {
    (value / unit).ceil() * unit
}

/// Snaps to the grid without leaving `[0, max]`.
pub fn snap_within(value: f64, max: f64, unit: f64) -> f64 {
    let snapped = snap(value, unit);
    if snapped > max {
        (max / unit).floor() * unit
    } else {
        snapped.max(0.0)
    }
}

/// Clamps a row offset so the row stays inside the sector bounds.
pub fn clamp_row_y(y: f64, row_height: f64, bounds: Size) -> f64 {
    y.min(bounds.height - row_height).max(0.0)
}

fn overlaps(y: f64, row_height: f64, spacing: f64, other: &RowSpan) -> bool {
    let (a1, a2) = (y, y + row_height);
    let (b1, b2) = (other.y, other.bottom());
    !(a2 + spacing <= b1 || b2 + spacing <= a1)
}

/// Places a row as close to `y0` as a grid of `snap` allows, or `None` when
/// that spot collides with an existing row.
pub fn try_place_row_at(
    existing: &[RowSpan],
    y0: f64,
    row_height: f64,
    spacing: f64,
    bounds: Size,
    snap: f64,
) -> Option<f64> {
    if !y0.is_finite() || row_height <= 0.0 || bounds.height < row_height {
        return None;
    }
    let max_y = bounds.height - row_height;
    let y = snap_within(y0.clamp(0.0, max_y), max_y, snap);
    if existing.iter().any(|r| overlaps(y, row_height, spacing, r)) {
        return None;
    }
    Some(y)
}

/// Finds the topmost grid position where a row fits without overlapping
/// any existing row by less than `spacing`.
pub fn first_free_slot(
    existing: &[RowSpan],
    row_height: f64,
    spacing: f64,
    bounds: Size,
    snap: f64,
) -> Option<f64> {
    if row_height <= 0.0 {
        return None;
    }
    let mut rows = existing.to_vec();
    rows.sort_by(|a, b| a.y.total_cmp(&b.y));

    let mut cursor: f64 = 0.0;
    for row in &rows {
        let candidate = snap_up(cursor, snap);
        if candidate + row_height + spacing <= row.y {
            return Some(candidate);
        }
        cursor = cursor.max(row.bottom() + spacing);
    }

    let candidate = snap_up(cursor, snap);
    (candidate + row_height <= bounds.height).then_some(candidate)
}

/// Axis-aligned bounding box of a point list as `(min, size)`.
pub fn polygon_bounds(points: &[Point]) -> (Point, Size) {
    if points.is_empty() {
        return (Point::default(), Size::default());
    }
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (
        Point::new(min_x, min_y),
        Size::new(max_x - min_x, max_y - min_y),
    )
}

/// Shifts points so their minimum corner sits on the origin.
///
/// Returns the removed offset together with the shifted points.
pub fn normalize_to_origin(points: &[Point]) -> (Point, Vec<Point>) {
    let (min, _) = polygon_bounds(points);
    let shifted = points
        .iter()
        .map(|p| Point::new(p.x - min.x, p.y - min.y))
        .collect();
    (min, shifted)
}

/// Scales every point by the per-axis factors.
pub fn scale_points(points: &mut [Point], sx: f64, sy: f64) {
    for p in points {
        p.x *= sx;
        p.y *= sy;
    }
}

/// Rough rendered width of a single-line label.
pub fn estimate_label_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_ADVANCE
}
