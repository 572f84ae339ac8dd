//! Shared constants for the seat-map editor.
//!
//! These are the documented fallbacks used when a payload omits an
//! attribute, plus the fixed layout units of the row / seat algorithms.

/// Per-edge padding (fraction of the viewport) used by fit-to-view.
pub const VIEW_PADDING: f64 = 0.05;

/// Vertical grid unit rows snap to, both on placement and on drag.
pub const SNAP_Y: f64 = 2.0;

/// Row height used when a row payload has none.
pub const DEFAULT_ROW_HEIGHT: f64 = 28.0;

/// Desired seat radius used when a row payload has none.
pub const DEFAULT_SEAT_RADIUS: f64 = 12.0;

/// Seat count used when a row payload has none.
pub const DEFAULT_SEAT_COUNT: u32 = 10;

/// Ticket class used when a row payload has none.
pub const DEFAULT_TICKET: &str = "General";

/// Spacing kept between rows placed through the placement API.
pub const DEFAULT_ROW_SPACING: f64 = 6.0;

/// Sector bounds used when a sector payload has none.
pub const DEFAULT_BOUNDS_WIDTH: f64 = 200.0;
pub const DEFAULT_BOUNDS_HEIGHT: f64 = 120.0;

/// Smallest effective seat radius, whatever the row width.
pub const MIN_EFFECTIVE_SEAT_RADIUS: f64 = 2.0;

/// Horizontal padding between the row band edges and the outer seats.
pub const SEAT_LEFT_PAD: f64 = 12.0;
pub const SEAT_RIGHT_PAD: f64 = 12.0;

/// Gap between a row label and the row band.
pub const LABEL_OFFSET: f64 = 8.0;

/// Font size of row labels.
pub const LABEL_FONT_SIZE: f64 = 12.0;

/// Highest numeric suffix tried before falling back to a random one.
pub const NAME_SUFFIX_LIMIT: u32 = 1000;

/// Title given to new sectors.
pub const DEFAULT_SECTOR_TITLE: &str = "Sector";

/// Base name used when a row name resolves to nothing.
pub const DEFAULT_ROW_NAME: &str = "Row";

/// Smallest width / height a sector can be resized to.
pub const MIN_SECTOR_SIZE: f64 = 10.0;

/// Minimum number of vertices of a committed polygon sector.
pub const MIN_POLYGON_POINTS: usize = 3;
