use seatkit_core::constants;
use seatkit_settings::{EditorSettings, RowDefaults};

use super::Seat;
use crate::geometry;

/// Parameters of a row about to be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct RowParams {
    /// Proposed name; blank picks the next free "Row X" letter.
    pub name: String,
    pub ticket: String,
    pub seats: u32,
    pub seat_radius: f64,
    pub row_height: f64,
    /// Minimum vertical gap kept to sibling rows.
    pub spacing: f64,
    /// Requested offset; `None` searches the first free slot.
    pub y: Option<f64>,
}

impl Default for RowParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            ticket: constants::DEFAULT_TICKET.to_string(),
            seats: constants::DEFAULT_SEAT_COUNT,
            seat_radius: constants::DEFAULT_SEAT_RADIUS,
            row_height: constants::DEFAULT_ROW_HEIGHT,
            spacing: constants::DEFAULT_ROW_SPACING,
            y: None,
        }
    }
}

impl From<&RowDefaults> for RowParams {
    fn from(defaults: &RowDefaults) -> Self {
        Self {
            name: String::new(),
            ticket: defaults.ticket.clone(),
            seats: defaults.seats,
            seat_radius: defaults.seat_radius,
            row_height: defaults.row_height,
            spacing: defaults.spacing,
            y: None,
        }
    }
}

/// Horizontal layout units shared by every row of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub left_pad: f64,
    pub right_pad: f64,
    pub label_offset: f64,
    pub font_size: f64,
    /// Vertical grid unit for row placement and row drags.
    pub snap_y: f64,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            left_pad: constants::SEAT_LEFT_PAD,
            right_pad: constants::SEAT_RIGHT_PAD,
            label_offset: constants::LABEL_OFFSET,
            font_size: constants::LABEL_FONT_SIZE,
            snap_y: constants::SNAP_Y,
        }
    }
}

impl From<&EditorSettings> for RowLayout {
    fn from(settings: &EditorSettings) -> Self {
        Self {
            left_pad: settings.seat_left_pad,
            right_pad: settings.seat_right_pad,
            label_offset: settings.label_offset,
            font_size: constants::LABEL_FONT_SIZE,
            snap_y: settings.snap_y,
        }
    }
}

/// Derived drawing data of a row, in row-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowVisual {
    pub band_width: f64,
    pub band_height: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub label_width: f64,
    /// Invisible click area spanning the label and the band.
    pub hit_x: f64,
    pub hit_width: f64,
    pub hit_height: f64,
    pub effective_radius: f64,
}

/// A horizontal band of seats inside a sector.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub ticket: String,
    pub seats: u32,
    /// Desired radius; the rendered one may be smaller.
    pub seat_radius: f64,
    pub row_height: f64,
    /// Offset from the top of the sector bounds.
    pub y: f64,
    pub draggable: bool,
    pub visual: RowVisual,
}

impl Row {
    pub fn new(name: impl Into<String>, params: &RowParams, y: f64) -> Self {
        Self {
            name: name.into(),
            ticket: params.ticket.clone(),
            seats: params.seats,
            seat_radius: params.seat_radius,
            row_height: params.row_height,
            y,
            draggable: true,
            visual: RowVisual::default(),
        }
    }

    pub fn span(&self) -> geometry::RowSpan {
        geometry::RowSpan::new(self.y, self.row_height)
    }

    /// Recomputes band, label and hit area for a sector of `width`.
    pub fn update_visual(&mut self, width: f64, layout: &RowLayout) {
        let label_width = geometry::estimate_label_width(&self.name, layout.font_size);
        self.visual.label_width = label_width;
        self.visual.label_x = -(label_width + layout.label_offset);
        self.visual.label_y = self.row_height / 2.0 - layout.font_size * 2.0 / 3.0;
        self.update_widths(width, layout);
    }

    /// Resizes band and hit area only; label and seats are left alone.
    pub fn update_widths(&mut self, width: f64, layout: &RowLayout) {
        let label_width = self.visual.label_width;
        self.visual.band_width = width;
        self.visual.band_height = self.row_height;
        self.visual.hit_x = -label_width - layout.label_offset - layout.label_offset;
        self.visual.hit_width = width + label_width + layout.label_offset * 2.0;
        self.visual.hit_height = self.row_height;
    }

    /// Whether the current seats still sit between the pads of a row of `width`.
    ///
    /// Both the radius budget and the actual seat positions are checked, so
    /// seats left past the band by a shrink count as not fitting.
    pub fn seats_fit(&self, seats: &[&Seat], width: f64, layout: &RowLayout) -> bool {
        let usable = (width - layout.left_pad - layout.right_pad).max(0.0);
        if self.visual.effective_radius * 2.0 * self.seats as f64 > usable + f64::EPSILON {
            return false;
        }
        let right = width - layout.right_pad;
        seats
            .iter()
            .all(|s| s.center.x + s.radius <= right + f64::EPSILON)
    }
}
