//! Conversion between the scene arena and plain [`EntityData`] trees.
//!
//! Rebuilding an entity re-derives everything that is not stored: the rows
//! container and its clip region, row visuals and seats.

use seatkit_core::{constants, SceneError};

use super::Canvas;
use crate::geometry::Point;
use crate::model::{Entity, EntityId, EntityKind, FreeShape, Row, RowParams, Sector};
use crate::serialization::EntityData;

impl Canvas {
    /// Serializes a sector (with its rows), a row or a free shape.
    pub fn serialize(&self, id: EntityId) -> Result<EntityData, SceneError> {
        let node = self.node(id).ok_or_else(|| SceneError::not_found(id))?;
        match &node.entity {
            Entity::Sector(sector) => {
                let mut data = EntityData {
                    id: Some(id),
                    kind: Some(EntityKind::Sector.as_str().to_string()),
                    x: sector.position.x,
                    y: sector.position.y,
                    draggable: sector.draggable,
                    title: Some(sector.title.clone()),
                    description: Some(sector.description.clone()),
                    ..EntityData::default()
                };
                data.set_shape(&sector.shape);
                data.children = self
                    .rows_of(id)
                    .into_iter()
                    .map(|row| self.serialize(row))
                    .collect::<Result<_, _>>()?;
                Ok(data)
            }
            Entity::Row(row) => Ok(EntityData {
                id: Some(id),
                kind: Some(EntityKind::Row.as_str().to_string()),
                y: row.y,
                draggable: row.draggable,
                name: Some(row.name.clone()),
                ticket: Some(row.ticket.clone()),
                seats: Some(row.seats),
                seat_radius: Some(row.seat_radius),
                row_height: Some(row.row_height),
                ..EntityData::default()
            }),
            Entity::FreeShape(shape) => {
                let mut data = EntityData {
                    id: Some(id),
                    kind: Some(EntityKind::FreeShape.as_str().to_string()),
                    x: shape.position.x,
                    y: shape.position.y,
                    rotation: shape.rotation,
                    draggable: shape.draggable,
                    ..EntityData::default()
                };
                data.set_shape(&shape.shape);
                Ok(data)
            }
            _ => Err(SceneError::WrongKind {
                id: id.to_string(),
                expected: "sector, row or shape",
                actual: node.kind().as_str(),
            }),
        }
    }

    /// Serializes every top-level entity in draw order.
    pub fn snapshot(&self) -> Vec<EntityData> {
        self.roots()
            .iter()
            .filter_map(|id| self.serialize(*id).ok())
            .collect()
    }

    fn fresh_id(&self, wanted: Option<EntityId>) -> EntityId {
        match wanted {
            Some(id) if !self.contains(id) => id,
            _ => EntityId::new(),
        }
    }

    /// Rebuilds a top-level sector or free shape.
    ///
    /// Names are taken as stored; uniqueness is only enforced on writes.
    pub fn deserialize(&mut self, data: &EntityData) -> Result<EntityId, SceneError> {
        match data.entity_kind() {
            EntityKind::Sector => {
                let id = self.fresh_id(data.id);
                let mut sector = Sector::new(
                    data.shape_geometry(),
                    Point::new(data.x, data.y),
                    data.title
                        .clone()
                        .unwrap_or_else(|| constants::DEFAULT_SECTOR_TITLE.to_string()),
                );
                sector.description = data.description.clone().unwrap_or_default();
                sector.draggable = data.draggable;
                self.attach_sector(id, sector);
                for child in &data.children {
                    if let Err(e) = self.deserialize_row(id, child) {
                        tracing::warn!("Skipping row of sector {}: {}", id, e);
                    }
                }
                Ok(id)
            }
            EntityKind::FreeShape => {
                let id = self.fresh_id(data.id);
                let mut shape = FreeShape::new(data.shape_geometry(), Point::new(data.x, data.y));
                shape.rotation = data.rotation;
                shape.draggable = data.draggable;
                Ok(self.insert_free_shape(id, shape))
            }
            kind => Err(SceneError::InvalidPayload {
                reason: format!("a {} cannot be placed at the top level", kind),
            }),
        }
    }

    /// Rebuilds a row inside `sector` at its stored offset.
    pub fn deserialize_row(&mut self, sector: EntityId, data: &EntityData) -> Result<EntityId, SceneError> {
        if data.entity_kind() != EntityKind::Row {
            return Err(SceneError::InvalidPayload {
                reason: "sector children must be rows".to_string(),
            });
        }
        let defaults = RowParams::default();
        let params = RowParams {
            ticket: data.ticket.clone().unwrap_or(defaults.ticket.clone()),
            seats: data.seats.unwrap_or(defaults.seats),
            seat_radius: data.seat_radius.unwrap_or(defaults.seat_radius),
            row_height: data.row_height.unwrap_or(defaults.row_height),
            ..defaults
        };
        let mut row = Row::new(data.name.clone().unwrap_or_default(), &params, data.y);
        row.draggable = data.draggable;
        let id = self.fresh_id(data.id);
        self.attach_row(sector, id, row)
    }

    /// Replaces the whole scene with a snapshot.
    ///
    /// Payloads that cannot be rebuilt are skipped with a warning.
    pub fn restore(&mut self, snapshot: &[EntityData]) {
        self.clear();
        for data in snapshot {
            if let Err(e) = self.deserialize(data) {
                tracing::warn!("Skipping entity while restoring: {}", e);
            }
        }
    }
}
