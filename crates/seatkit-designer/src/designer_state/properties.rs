//! Property panel for designer state.
//!
//! The panel mirrors the selection. When a sector is selected the row
//! fields hold the parameters of the next row to add; when a row is
//! selected they are that row's attributes.

use seatkit_settings::RowDefaults;

use super::DesignerState;
use crate::canvas::Tool;
use crate::geometry;
use crate::model::{EntityId, EntityKind, RowParams};
use crate::naming;

/// What the panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionKind {
    #[default]
    None,
    Sector,
    Row,
    Shape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Message shown under the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Editable fields bound to the host's form controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPanel {
    pub tool: Tool,
    pub selection_kind: SelectionKind,
    pub title: String,
    pub description: String,
    pub row_name: String,
    pub ticket: String,
    pub seats: u32,
    pub seat_radius: f64,
    pub row_height: f64,
    pub spacing: f64,
    pub status: Option<StatusMessage>,
    pub row_preview: bool,
    defaults: RowDefaults,
}

impl PropertyPanel {
    pub fn with_defaults(defaults: &RowDefaults) -> Self {
        Self {
            tool: Tool::Select,
            selection_kind: SelectionKind::None,
            title: String::new(),
            description: String::new(),
            row_name: String::new(),
            ticket: defaults.ticket.clone(),
            seats: defaults.seats,
            seat_radius: defaults.seat_radius,
            row_height: defaults.row_height,
            spacing: defaults.spacing,
            status: None,
            row_preview: false,
            defaults: defaults.clone(),
        }
    }

    /// Clears entity fields and restores the row defaults.
    fn reset(&mut self) {
        let tool = self.tool;
        let spacing = self.spacing;
        *self = Self::with_defaults(&self.defaults);
        self.tool = tool;
        self.spacing = spacing;
    }

    /// Parameters for the next row, from the panel's row fields.
    pub fn row_params(&self) -> RowParams {
        RowParams {
            name: String::new(),
            ticket: self.ticket.clone(),
            seats: self.seats,
            seat_radius: self.seat_radius,
            row_height: self.row_height,
            spacing: self.spacing,
            y: None,
        }
    }
}

impl Default for PropertyPanel {
    fn default() -> Self {
        Self::with_defaults(&RowDefaults::default())
    }
}

fn renamed_message(name: &str) -> String {
    format!("Name already in use: renamed to “{}”", name)
}

impl DesignerState {
    /// Refreshes the panel from the current selection.
    pub(crate) fn load_panel(&mut self) {
        let status = self.panel.status.take();
        let preview = self.panel.row_preview;
        self.panel.reset();
        self.panel.status = status;
        self.panel.row_preview = preview;

        let Some(id) = self.selection.selected_id() else {
            return;
        };
        match self.canvas.kind_of(id) {
            Some(EntityKind::Sector) => {
                if let Ok(sector) = self.canvas.sector(id) {
                    self.panel.selection_kind = SelectionKind::Sector;
                    self.panel.title = sector.title.clone();
                    self.panel.description = sector.description.clone();
                }
            }
            Some(EntityKind::Row) => {
                if let Ok(row) = self.canvas.row(id) {
                    self.panel.selection_kind = SelectionKind::Row;
                    self.panel.row_name = row.name.clone();
                    self.panel.ticket = row.ticket.clone();
                    self.panel.seats = row.seats;
                    self.panel.seat_radius = row.seat_radius;
                    self.panel.row_height = row.row_height;
                }
            }
            Some(EntityKind::FreeShape) => self.panel.selection_kind = SelectionKind::Shape,
            _ => {}
        }
    }

    /// Writes the panel fields into the selected sector or row.
    ///
    /// Returns `true` when the scene changed. Names that collide are
    /// corrected and reported as an informational status.
    pub fn apply_panel_edits(&mut self) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        let changed = match self.canvas.kind_of(id) {
            Some(EntityKind::Sector) => self.apply_sector_edits(id),
            Some(EntityKind::Row) => self.apply_row_edits(id),
            _ => false,
        };
        if changed {
            self.commit();
        }
        changed
    }

    fn apply_sector_edits(&mut self, id: EntityId) -> bool {
        let title = naming::ensure_unique_title(&self.canvas, &self.panel.title, Some(id));
        let description = self.panel.description.clone();
        let Ok(sector) = self.canvas.sector_mut(id) else {
            return false;
        };
        if sector.title == title && sector.description == description {
            return false;
        }
        sector.title = title.clone();
        sector.description = description;
        if title != self.panel.title.trim() {
            self.set_status(StatusLevel::Info, renamed_message(&title));
        }
        self.panel.title = title;
        true
    }

    /// Writes the panel's row fields onto the row as given.
    ///
    /// The row keeps its offset, and neighbours are never checked against
    /// or moved. A height that makes the row overlap a sibling or run past
    /// the sector bottom is kept and reported as a warning.
    fn apply_row_edits(&mut self, id: EntityId) -> bool {
        let Ok(sector_id) = self.canvas.sector_of_row(id) else {
            return false;
        };
        let Ok(bounds) = self.canvas.sector(sector_id).map(|s| s.bounds) else {
            return false;
        };
        let name = naming::ensure_unique_row_name(&self.canvas, sector_id, &self.panel.row_name, Some(id));
        let ticket = self.panel.ticket.clone();
        let seats = self.panel.seats;
        let seat_radius = self.panel.seat_radius.max(0.0);
        let row_height = self.panel.row_height.max(1.0);

        let Ok(row) = self.canvas.row_mut(id) else {
            return false;
        };
        if row.name == name
            && row.ticket == ticket
            && row.seats == seats
            && row.seat_radius == seat_radius
            && row.row_height == row_height
        {
            return false;
        }
        let height_changed = row.row_height != row_height;
        let y = row.y;
        row.name = name.clone();
        row.ticket = ticket;
        row.seats = seats;
        row.seat_radius = seat_radius;
        row.row_height = row_height;

        if let Err(e) = self.canvas.refresh_row(id) {
            tracing::warn!("Failed to refresh row {}: {}", id, e);
        }
        if name != self.panel.row_name.trim() {
            self.set_status(StatusLevel::Info, renamed_message(&name));
        }
        if height_changed {
            let siblings = self.canvas.row_spans(sector_id, Some(id));
            let span = geometry::RowSpan::new(y, row_height);
            let collides = siblings
                .iter()
                .any(|r| span.y < r.bottom() && r.y < span.bottom());
            if collides || span.bottom() > bounds.height {
                self.set_status(
                    StatusLevel::Warning,
                    "Row now overlaps another row or the sector edge.",
                );
            }
        }
        self.panel.row_name = name;
        self.panel.row_height = row_height;
        true
    }

    /// Sets the selected sector's title.
    pub fn set_title(&mut self, title: &str) -> bool {
        self.panel.title = title.to_string();
        self.apply_panel_edits()
    }

    pub fn set_description(&mut self, description: &str) -> bool {
        self.panel.description = description.to_string();
        self.apply_panel_edits()
    }

    /// Sets the selected row's name.
    pub fn set_row_name(&mut self, name: &str) -> bool {
        self.panel.row_name = name.to_string();
        self.apply_panel_edits()
    }

    /// Sets the ticket label of the selected row, or of the next row when a
    /// sector is selected.
    pub fn set_ticket(&mut self, ticket: &str) -> bool {
        self.panel.ticket = ticket.to_string();
        self.apply_row_field()
    }

    pub fn set_seat_count(&mut self, seats: u32) -> bool {
        self.panel.seats = seats;
        self.apply_row_field()
    }

    pub fn set_seat_radius(&mut self, radius: f64) -> bool {
        if !radius.is_finite() {
            return false;
        }
        self.panel.seat_radius = radius;
        self.apply_row_field()
    }

    pub fn set_row_height(&mut self, height: f64) -> bool {
        if !height.is_finite() || height <= 0.0 {
            return false;
        }
        self.panel.row_height = height;
        self.apply_row_field()
    }

    /// Gap kept between new rows and their neighbours.
    pub fn set_row_spacing(&mut self, spacing: f64) {
        if spacing.is_finite() {
            self.panel.spacing = spacing.max(0.0);
        }
    }

    fn apply_row_field(&mut self) -> bool {
        if self.panel.selection_kind == SelectionKind::Row {
            self.apply_panel_edits()
        } else {
            false
        }
    }
}
