//! Entity operations (create, add row, delete, copy, paste) for designer state.

use seatkit_core::SceneError;

use super::{ClipboardEntry, DesignerState, StatusLevel};
use crate::geometry::{Point, ShapeKind, Size};
use crate::model::{EntityId, EntityKind, RowParams};
use crate::naming;

const NO_SPACE_MESSAGE: &str = "No space available in this sector for another row.";

impl DesignerState {
    /// Creates a rect or ellipse sector with its top-left corner at a world
    /// point, selects it and commits.
    pub fn create_sector_at(&mut self, kind: ShapeKind, world: Point) -> Option<EntityId> {
        let size = match kind {
            ShapeKind::Rect => Size::new(self.settings.rect_width, self.settings.rect_height),
            ShapeKind::Ellipse => Size::new(
                self.settings.ellipse_radius_x * 2.0,
                self.settings.ellipse_radius_y * 2.0,
            ),
            ShapeKind::Polygon => {
                tracing::debug!("Polygon sectors are drafted point by point");
                return None;
            }
        };
        let id = self.canvas.create_sector(kind, world, size);
        self.select(id);
        self.commit();
        Some(id)
    }

    /// Creates a polygon sector from drafted world points, selects it and
    /// commits.
    pub fn create_polygon_sector(&mut self, points: &[Point]) -> Option<EntityId> {
        match self.canvas.create_polygon_sector(points) {
            Ok(id) => {
                self.select(id);
                self.commit();
                Some(id)
            }
            Err(e) => {
                tracing::debug!("Polygon discarded: {}", e);
                None
            }
        }
    }

    /// Adds a row to the selected sector using the panel's row fields.
    ///
    /// The previewed height is used when the preview shows one, otherwise
    /// the first free slot. On failure the scene is untouched and a status
    /// message explains why.
    pub fn add_row(&mut self) -> Option<EntityId> {
        let Some(sector) = self
            .selection
            .selected_id()
            .filter(|id| self.canvas.kind_of(*id) == Some(EntityKind::Sector))
        else {
            tracing::debug!("Add row ignored: no sector selected");
            return None;
        };

        let mut params = self.panel.row_params();
        params.y = self
            .ghost
            .filter(|g| g.sector == sector)
            .map(|g| g.y);

        match self.canvas.create_row(sector, &params) {
            Ok(id) => {
                self.ghost = None;
                self.panel.status = None;
                self.commit();
                Some(id)
            }
            Err(e) => {
                self.report_placement_error(&e);
                None
            }
        }
    }

    fn report_placement_error(&mut self, error: &SceneError) {
        if error.is_no_space() {
            self.set_status(StatusLevel::Error, NO_SPACE_MESSAGE);
        } else {
            tracing::warn!("Row placement failed: {}", error);
            self.set_status(StatusLevel::Error, error.to_string());
        }
    }

    /// Deletes the selected sector, row or shape.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        if let Err(e) = self.canvas.remove(id) {
            tracing::debug!("Delete ignored: {}", e);
            return false;
        }
        self.clear_selection();
        self.commit();
        true
    }

    /// Copies the selected entity (with its rows) to the clipboard.
    pub fn copy_selected(&mut self) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        match self.canvas.serialize(id) {
            Ok(data) => {
                let source_sector = match self.canvas.kind_of(id) {
                    Some(EntityKind::Row) => self.canvas.sector_of_row(id).ok(),
                    _ => None,
                };
                self.clipboard = Some(ClipboardEntry {
                    data,
                    source_sector,
                });
                true
            }
            Err(e) => {
                tracing::debug!("Copy ignored: {}", e);
                false
            }
        }
    }

    /// Pastes the clipboard with fresh identifiers and an offset.
    ///
    /// Sectors and shapes land `paste_offset` right and down of the source.
    /// A row is placed `paste_offset` below its source, in the selected
    /// sector if there is one, otherwise in the sector it was copied from.
    pub fn paste(&mut self) -> Option<EntityId> {
        let entry = self.clipboard.clone()?;
        let offset = self.settings.paste_offset;
        let mut data = entry.data;
        data.reid();

        if data.entity_kind() == EntityKind::Row {
            return self.paste_row(&data, entry.source_sector, offset);
        }

        data.offset(offset, offset);
        let id = match self.canvas.deserialize(&data) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Paste failed: {}", e);
                return None;
            }
        };
        self.resolve_pasted_names(id);
        self.select(id);
        self.commit();
        Some(id)
    }

    fn resolve_pasted_names(&mut self, id: EntityId) {
        if self.canvas.kind_of(id) != Some(EntityKind::Sector) {
            return;
        }
        let Ok(current) = self.canvas.sector(id).map(|s| s.title.clone()) else {
            return;
        };
        let title = naming::ensure_unique_title(&self.canvas, &current, Some(id));
        if let Ok(sector) = self.canvas.sector_mut(id) {
            sector.title = title;
        }
        for row_id in self.canvas.rows_of(id) {
            let Ok(name) = self.canvas.row(row_id).map(|r| r.name.clone()) else {
                continue;
            };
            let unique = naming::ensure_unique_row_name(&self.canvas, id, &name, Some(row_id));
            if unique != name {
                if let Ok(row) = self.canvas.row_mut(row_id) {
                    row.name = unique;
                }
                if let Err(e) = self.canvas.refresh_row(row_id) {
                    tracing::warn!("Failed to refresh pasted row {}: {}", row_id, e);
                }
            }
        }
    }

    fn paste_row(
        &mut self,
        data: &crate::serialization::EntityData,
        source_sector: Option<EntityId>,
        offset: f64,
    ) -> Option<EntityId> {
        let target = self
            .selection
            .selected_id()
            .filter(|id| self.canvas.kind_of(*id) == Some(EntityKind::Sector))
            .or(source_sector.filter(|id| self.canvas.kind_of(*id) == Some(EntityKind::Sector)));
        let Some(sector) = target else {
            self.set_status(StatusLevel::Info, "Select a sector to paste the row into.");
            return None;
        };

        let defaults = RowParams::default();
        let mut params = RowParams {
            name: data.name.clone().unwrap_or_default(),
            ticket: data.ticket.clone().unwrap_or(defaults.ticket.clone()),
            seats: data.seats.unwrap_or(defaults.seats),
            seat_radius: data.seat_radius.unwrap_or(defaults.seat_radius),
            row_height: data.row_height.unwrap_or(defaults.row_height),
            spacing: self.panel.spacing,
            y: Some(data.y + offset),
        };

        let placed = self.canvas.create_row(sector, &params).or_else(|e| {
            if !e.is_no_space() {
                return Err(e);
            }
            params.y = None;
            self.canvas.create_row(sector, &params)
        });
        match placed {
            Ok(id) => {
                if let Ok(row) = self.canvas.row_mut(id) {
                    row.draggable = data.draggable;
                }
                self.select(id);
                self.commit();
                Some(id)
            }
            Err(e) => {
                self.report_placement_error(&e);
                None
            }
        }
    }
}
