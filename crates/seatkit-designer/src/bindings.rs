//! Interaction bindings derived from entity kind.
//!
//! Nothing about click or drag behavior is stored on the entities; it is
//! re-derived from the data whenever the scene is hit-tested, so restored
//! and pasted entities behave exactly like freshly created ones.

use seatkit_core::SceneError;

use crate::canvas::Canvas;
use crate::model::{EntityId, EntityKind};

/// How a node moves when dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragConstraint {
    /// Not draggable.
    Locked,
    /// Free translation in world space.
    Free,
    /// Vertical only, within `[min_y, max_y]` of the owning sector, snapped to `snap`.
    Vertical { min_y: f64, max_y: f64, snap: f64 },
}

/// Render-time bindings of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeBindings {
    /// Entity that gets selected when this node is clicked.
    pub select_target: Option<EntityId>,
    pub drag: DragConstraint,
    /// Whether releasing a drag of this node commits history.
    pub commits_on_drag_end: bool,
}

/// Derives the bindings of a node from its kind and current attributes.
pub fn bindings_for(canvas: &Canvas, id: EntityId) -> Result<NodeBindings, SceneError> {
    let kind = canvas.kind_of(id).ok_or_else(|| SceneError::not_found(id))?;
    let bindings = match kind {
        EntityKind::Sector => {
            let sector = canvas.sector(id)?;
            NodeBindings {
                select_target: Some(id),
                drag: if sector.draggable {
                    DragConstraint::Free
                } else {
                    DragConstraint::Locked
                },
                commits_on_drag_end: true,
            }
        }
        EntityKind::RowsContainer => NodeBindings {
            select_target: canvas.owning_sector(id),
            drag: DragConstraint::Locked,
            commits_on_drag_end: false,
        },
        EntityKind::Row => {
            let row = canvas.row(id)?;
            let sector = canvas.sector(canvas.sector_of_row(id)?)?;
            NodeBindings {
                select_target: Some(id),
                drag: if row.draggable {
                    DragConstraint::Vertical {
                        min_y: 0.0,
                        max_y: (sector.bounds.height - row.row_height).max(0.0),
                        snap: canvas.layout().snap_y,
                    }
                } else {
                    DragConstraint::Locked
                },
                commits_on_drag_end: true,
            }
        }
        EntityKind::Seat => NodeBindings {
            select_target: canvas.node(id).and_then(|n| n.parent),
            drag: DragConstraint::Locked,
            commits_on_drag_end: false,
        },
        EntityKind::FreeShape => {
            let shape = canvas.free_shape(id)?;
            NodeBindings {
                select_target: Some(id),
                drag: if shape.draggable {
                    DragConstraint::Free
                } else {
                    DragConstraint::Locked
                },
                commits_on_drag_end: true,
            }
        }
    };
    Ok(bindings)
}
