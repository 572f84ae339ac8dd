//! Canvas type definitions: Tool, HitTarget, NodePart.

use crate::model::EntityId;
use crate::selection_manager::Anchor;

/// Active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Rect,
    Ellipse,
    Polygon,
}

impl Tool {
    pub fn is_drawing(&self) -> bool {
        !matches!(self, Tool::Select)
    }
}

/// Part of a node that was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePart {
    /// The entity itself (seats, free shapes).
    Body,
    /// A sector's outline shape.
    Shape,
    /// A row's band.
    Band,
    /// A row's label, drawn left of the band.
    Label,
    /// A row's invisible click area.
    HitArea,
}

/// Raw result of hit-testing the scene, before selection promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas.
    Background,
    /// A transform handle of the current selection.
    Handle(Anchor),
    Node { id: EntityId, part: NodePart },
}

impl HitTarget {
    pub fn node(id: EntityId, part: NodePart) -> Self {
        HitTarget::Node { id, part }
    }

    pub fn node_id(&self) -> Option<EntityId> {
        match self {
            HitTarget::Node { id, .. } => Some(*id),
            _ => None,
        }
    }
}
