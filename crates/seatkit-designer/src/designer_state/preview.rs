//! Ghost row shown while choosing where the next row goes.

use super::DesignerState;
use crate::geometry::{self, Point};
use crate::model::{EntityId, EntityKind};

/// Preview of the next row in the selected sector, in sector-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostRow {
    pub sector: EntityId,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Whether a row can actually be placed here.
    pub fits: bool,
}

impl DesignerState {
    fn selected_sector(&self) -> Option<EntityId> {
        self.selection
            .selected_id()
            .filter(|id| self.canvas.kind_of(*id) == Some(EntityKind::Sector))
    }

    /// Turns the row preview on or off.
    ///
    /// The preview can only be enabled while a sector is selected.
    pub fn set_row_preview(&mut self, enabled: bool) -> bool {
        let enabled = enabled && self.selected_sector().is_some();
        self.panel.row_preview = enabled;
        if !enabled {
            self.ghost = None;
        }
        enabled
    }

    pub fn ghost_row(&self) -> Option<&GhostRow> {
        self.ghost.as_ref()
    }

    /// Recomputes the ghost row under a world-space pointer.
    pub(crate) fn update_preview(&mut self, world: Point) {
        if !self.panel.row_preview {
            return;
        }
        let Some(sector_id) = self.selected_sector() else {
            self.ghost = None;
            return;
        };
        let Ok(sector) = self.canvas.sector(sector_id) else {
            return;
        };
        let height = self.panel.row_height;
        let bounds = sector.bounds;
        let local = sector.to_local(world);
        let max_y = (bounds.height - height).max(0.0);
        let snap = self.canvas.layout().snap_y;
        let y = geometry::snap_within(
            geometry::clamp_row_y(local.y - height / 2.0, height, bounds),
            max_y,
            snap,
        );
        let spans = self.canvas.row_spans(sector_id, None);
        let fits =
            geometry::try_place_row_at(&spans, y, height, self.panel.spacing, bounds, snap).is_some();

        self.ghost = Some(GhostRow {
            sector: sector_id,
            y,
            width: bounds.width,
            height,
            fits,
        });
    }
}
