//! Scene entities.
//!
//! The scene is an arena of [`SceneNode`]s keyed by [`EntityId`]. Each node
//! stores its owning parent's id and an ordered child list, and carries a
//! typed [`Entity`] payload:
//!
//! ```text
//! Sector
//!   └── RowsContainer (exactly one, owns the clip region)
//!         └── Row*
//!               └── Seat* (derived from the row)
//! FreeShape (legacy flat shapes, no children)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

mod draft;
mod free_shape;
mod row;
mod sector;
mod seat;
mod shape;

pub use draft::PolygonDraft;
pub use free_shape::FreeShape;
pub use row::{Row, RowLayout, RowParams, RowVisual};
pub use sector::{RowsContainer, Sector};
pub use seat::Seat;
pub use shape::ShapeGeometry;

/// Unique identifier of a scene entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Kind tag of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Sector,
    RowsContainer,
    Row,
    Seat,
    FreeShape,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Sector => "sector",
            EntityKind::RowsContainer => "rows-container",
            EntityKind::Row => "row",
            EntityKind::Seat => "seat",
            EntityKind::FreeShape => "shape",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed attributes of an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Sector(Sector),
    RowsContainer(RowsContainer),
    Row(Row),
    Seat(Seat),
    FreeShape(FreeShape),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Sector(_) => EntityKind::Sector,
            Entity::RowsContainer(_) => EntityKind::RowsContainer,
            Entity::Row(_) => EntityKind::Row,
            Entity::Seat(_) => EntityKind::Seat,
            Entity::FreeShape(_) => EntityKind::FreeShape,
        }
    }
}

/// One node of the scene arena.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: EntityId,
    pub parent: Option<EntityId>,
    pub children: Vec<EntityId>,
    pub entity: Entity,
}

impl SceneNode {
    pub fn new(id: EntityId, parent: Option<EntityId>, entity: Entity) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            entity,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }
}
