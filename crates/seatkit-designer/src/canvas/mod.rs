//! Scene arena holding sectors, rows, seats and legacy shapes.

mod operations;
mod snapshot;
mod types;

pub use types::{HitTarget, NodePart, Tool};

use std::collections::HashMap;

use seatkit_core::constants::{DEFAULT_SECTOR_TITLE, MIN_POLYGON_POINTS};
use seatkit_core::SceneError;

use crate::geometry::{self, Point, RowSpan, ShapeKind, Size};
use crate::model::{
    Entity, EntityId, EntityKind, FreeShape, Row, RowLayout, RowParams, RowsContainer, Seat,
    SceneNode, Sector, ShapeGeometry,
};
use crate::naming;

/// Scene state: every entity keyed by id, plus the ordered top-level list.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    nodes: HashMap<EntityId, SceneNode>,
    roots: Vec<EntityId>,
    layout: RowLayout,
}

fn wrong_kind(id: EntityId, expected: &'static str, node: &SceneNode) -> SceneError {
    SceneError::WrongKind {
        id: id.to_string(),
        expected,
        actual: node.kind().as_str(),
    }
}

impl Canvas {
    /// Creates an empty canvas with the default row layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty canvas with custom row layout units.
    pub fn with_layout(layout: RowLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    /// Number of nodes of every kind.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level entities in draw order (last is topmost).
    pub fn roots(&self) -> &[EntityId] {
        &self.roots
    }

    pub fn node(&self, id: EntityId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.nodes.get(&id).map(SceneNode::kind)
    }

    fn node_or_err(&self, id: EntityId) -> Result<&SceneNode, SceneError> {
        self.nodes.get(&id).ok_or_else(|| SceneError::not_found(id))
    }

    fn node_mut_or_err(&mut self, id: EntityId) -> Result<&mut SceneNode, SceneError> {
        self.nodes
            .get_mut(&id)
            .ok_or_else(|| SceneError::not_found(id))
    }

    pub fn sector(&self, id: EntityId) -> Result<&Sector, SceneError> {
        let node = self.node_or_err(id)?;
        match &node.entity {
            Entity::Sector(s) => Ok(s),
            _ => Err(wrong_kind(id, "sector", node)),
        }
    }

    pub(crate) fn sector_mut(&mut self, id: EntityId) -> Result<&mut Sector, SceneError> {
        let node = self.node_mut_or_err(id)?;
        let actual = node.kind().as_str();
        match &mut node.entity {
            Entity::Sector(s) => Ok(s),
            _ => Err(SceneError::WrongKind {
                id: id.to_string(),
                expected: "sector",
                actual,
            }),
        }
    }

    pub fn row(&self, id: EntityId) -> Result<&Row, SceneError> {
        let node = self.node_or_err(id)?;
        match &node.entity {
            Entity::Row(r) => Ok(r),
            _ => Err(wrong_kind(id, "row", node)),
        }
    }

    pub(crate) fn row_mut(&mut self, id: EntityId) -> Result<&mut Row, SceneError> {
        let node = self.node_mut_or_err(id)?;
        let actual = node.kind().as_str();
        match &mut node.entity {
            Entity::Row(r) => Ok(r),
            _ => Err(SceneError::WrongKind {
                id: id.to_string(),
                expected: "row",
                actual,
            }),
        }
    }

    pub fn seat(&self, id: EntityId) -> Result<&Seat, SceneError> {
        let node = self.node_or_err(id)?;
        match &node.entity {
            Entity::Seat(s) => Ok(s),
            _ => Err(wrong_kind(id, "seat", node)),
        }
    }

    pub fn free_shape(&self, id: EntityId) -> Result<&FreeShape, SceneError> {
        let node = self.node_or_err(id)?;
        match &node.entity {
            Entity::FreeShape(s) => Ok(s),
            _ => Err(wrong_kind(id, "shape", node)),
        }
    }

    pub(crate) fn free_shape_mut(&mut self, id: EntityId) -> Result<&mut FreeShape, SceneError> {
        let node = self.node_mut_or_err(id)?;
        let actual = node.kind().as_str();
        match &mut node.entity {
            Entity::FreeShape(s) => Ok(s),
            _ => Err(SceneError::WrongKind {
                id: id.to_string(),
                expected: "shape",
                actual,
            }),
        }
    }

    /// All sectors in draw order.
    pub fn sectors(&self) -> impl Iterator<Item = (EntityId, &Sector)> + '_ {
        self.roots.iter().filter_map(|id| match &self.nodes.get(id)?.entity {
            Entity::Sector(s) => Some((*id, s)),
            _ => None,
        })
    }

    pub fn sector_count(&self) -> usize {
        self.sectors().count()
    }

    /// The rows container of a sector.
    pub fn rows_container(&self, sector: EntityId) -> Result<EntityId, SceneError> {
        let node = self.node_or_err(sector)?;
        if node.kind() != EntityKind::Sector {
            return Err(wrong_kind(sector, "sector", node));
        }
        node.children
            .iter()
            .copied()
            .find(|c| self.kind_of(*c) == Some(EntityKind::RowsContainer))
            .ok_or_else(|| SceneError::not_found(format!("rows container of {}", sector)))
    }

    pub fn clip_region(&self, sector: EntityId) -> Result<&geometry::ClipRegion, SceneError> {
        let container = self.rows_container(sector)?;
        match &self.node_or_err(container)?.entity {
            Entity::RowsContainer(c) => Ok(&c.clip),
            _ => Err(SceneError::not_found(container)),
        }
    }

    /// Row ids of a sector in insertion order; empty for unknown sectors.
    pub fn rows_of(&self, sector: EntityId) -> Vec<EntityId> {
        self.rows_container(sector)
            .ok()
            .and_then(|c| self.nodes.get(&c))
            .map(|c| c.children.clone())
            .unwrap_or_default()
    }

    pub fn rows_in(&self, sector: EntityId) -> Vec<(EntityId, &Row)> {
        self.rows_of(sector)
            .into_iter()
            .filter_map(|id| self.row(id).ok().map(|r| (id, r)))
            .collect()
    }

    pub fn row_spans(&self, sector: EntityId, exclude: Option<EntityId>) -> Vec<RowSpan> {
        self.rows_in(sector)
            .into_iter()
            .filter(|(id, _)| Some(*id) != exclude)
            .map(|(_, r)| r.span())
            .collect()
    }

    pub fn seats_of(&self, row: EntityId) -> Vec<&Seat> {
        self.nodes
            .get(&row)
            .map(|n| {
                n.children
                    .iter()
                    .filter_map(|c| self.seat(*c).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The sector owning a row (row -> rows container -> sector).
    pub fn sector_of_row(&self, row: EntityId) -> Result<EntityId, SceneError> {
        let node = self.node_or_err(row)?;
        if node.kind() != EntityKind::Row {
            return Err(wrong_kind(row, "row", node));
        }
        node.parent
            .and_then(|c| self.nodes.get(&c))
            .and_then(|c| c.parent)
            .ok_or_else(|| SceneError::not_found(format!("sector of {}", row)))
    }

    /// Nearest sector ancestor of any node, the node itself included.
    pub fn owning_sector(&self, id: EntityId) -> Option<EntityId> {
        let mut current = Some(id);
        while let Some(cid) = current {
            let node = self.nodes.get(&cid)?;
            if node.kind() == EntityKind::Sector {
                return Some(cid);
            }
            current = node.parent;
        }
        None
    }

    /// Creates a rect or ellipse sector filling `size` at `position`.
    pub fn create_sector(&mut self, kind: ShapeKind, position: Point, size: Size) -> EntityId {
        self.insert_sector(ShapeGeometry::from_size(kind, size), position)
    }

    /// Creates a polygon sector from world-space vertices.
    ///
    /// The vertices are normalized so their minimum lands on the sector origin.
    pub fn create_polygon_sector(&mut self, points: &[Point]) -> Result<EntityId, SceneError> {
        if points.len() < MIN_POLYGON_POINTS {
            return Err(SceneError::PolygonTooSmall {
                points: points.len(),
            });
        }
        let (origin, local) = geometry::normalize_to_origin(points);
        Ok(self.insert_sector(ShapeGeometry::Polygon { points: local }, origin))
    }

    /// Adds a sector with a fresh id and a unique default title.
    pub fn insert_sector(&mut self, shape: ShapeGeometry, position: Point) -> EntityId {
        let title = naming::ensure_unique_title(self, DEFAULT_SECTOR_TITLE, None);
        let id = self.attach_sector(EntityId::new(), Sector::new(shape, position, title));
        tracing::debug!("Created sector {}", id);
        id
    }

    /// Inserts a sector and its rows container as a new top-level node.
    pub(crate) fn attach_sector(&mut self, id: EntityId, sector: Sector) -> EntityId {
        let container_id = EntityId::new();
        let container = RowsContainer::for_sector(&sector);

        let mut node = SceneNode::new(id, None, Entity::Sector(sector));
        node.children.push(container_id);
        self.nodes.insert(id, node);
        self.nodes.insert(
            container_id,
            SceneNode::new(container_id, Some(id), Entity::RowsContainer(container)),
        );
        self.roots.push(id);
        id
    }

    /// Inserts a legacy free shape as a new top-level node.
    pub fn insert_free_shape(&mut self, id: EntityId, shape: FreeShape) -> EntityId {
        self.nodes
            .insert(id, SceneNode::new(id, None, Entity::FreeShape(shape)));
        self.roots.push(id);
        id
    }

    /// Places a new row in a sector without touching its siblings.
    ///
    /// With `params.y` set the row goes to that offset (clamped and snapped)
    /// or nowhere; otherwise the first free slot from the top is used.
    pub fn create_row(&mut self, sector: EntityId, params: &RowParams) -> Result<EntityId, SceneError> {
        let (bounds, title) = {
            let s = self.sector(sector)?;
            (s.bounds, s.title.clone())
        };
        let spans = self.row_spans(sector, None);
        let spacing = params.spacing.max(0.0);

        let snap = self.layout.snap_y;
        let placed = match params.y {
            Some(y0) => geometry::try_place_row_at(&spans, y0, params.row_height, spacing, bounds, snap),
            None => geometry::first_free_slot(&spans, params.row_height, spacing, bounds, snap),
        };
        let y = placed.ok_or(SceneError::NoSpace {
            sector: title,
            row_height: params.row_height,
        })?;

        let base = match params.name.trim() {
            "" => naming::next_row_letter(self, sector),
            name => name.to_string(),
        };
        let name = naming::ensure_unique_row_name(self, sector, &base, None);
        let id = self.attach_row(sector, EntityId::new(), Row::new(name, params, y))?;
        tracing::debug!("Placed row {} at y={} in sector {}", id, y, sector);
        Ok(id)
    }

    /// Appends a row to a sector as-is and derives its visual and seats.
    pub(crate) fn attach_row(
        &mut self,
        sector: EntityId,
        id: EntityId,
        row: Row,
    ) -> Result<EntityId, SceneError> {
        let container = self.rows_container(sector)?;
        self.nodes
            .insert(id, SceneNode::new(id, Some(container), Entity::Row(row)));
        self.node_mut_or_err(container)?.children.push(id);
        self.refresh_row(id)?;
        Ok(id)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }
}
