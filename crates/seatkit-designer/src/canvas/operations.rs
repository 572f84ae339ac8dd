//! Canvas operations: row refresh, sector reshaping, removal, hit-testing.

use seatkit_core::SceneError;

use super::{Canvas, HitTarget, NodePart};
use crate::geometry::{self, Point};
use crate::model::{Entity, EntityId, EntityKind, SceneNode, Seat, ShapeGeometry};

impl Canvas {
    /// Recomputes one row's band, label, hit area and seats.
    ///
    /// Sibling rows are never read or written.
    pub fn refresh_row(&mut self, row_id: EntityId) -> Result<(), SceneError> {
        let sector_id = self.sector_of_row(row_id)?;
        let width = self.sector(sector_id)?.bounds.width;
        let layout = *self.layout();
        self.row_mut(row_id)?.update_visual(width, &layout);
        self.regenerate_seats(row_id, width)
    }

    /// Atomically replaces the seats of a row.
    fn regenerate_seats(&mut self, row_id: EntityId, width: f64) -> Result<(), SceneError> {
        let layout = *self.layout();
        let (seat_layout, ticket) = {
            let row = self.row(row_id)?;
            let seat_layout = geometry::layout_seats(
                row.seats,
                row.seat_radius,
                layout.left_pad,
                layout.right_pad,
                width,
                row.row_height / 2.0,
            );
            (seat_layout, row.ticket.clone())
        };
        self.row_mut(row_id)?.visual.effective_radius = seat_layout.effective_radius;

        let old: Vec<EntityId> = self
            .node(row_id)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        for seat_id in old {
            self.nodes.remove(&seat_id);
        }

        let mut children = Vec::with_capacity(seat_layout.centers.len());
        for (i, center) in seat_layout.centers.into_iter().enumerate() {
            let seat_id = EntityId::new();
            let seat = Seat {
                ticket: ticket.clone(),
                index: i as u32 + 1,
                center,
                radius: seat_layout.effective_radius,
            };
            self.nodes.insert(
                seat_id,
                SceneNode::new(seat_id, Some(row_id), Entity::Seat(seat)),
            );
            children.push(seat_id);
        }
        self.node_mut_or_err(row_id)?.children = children;
        Ok(())
    }

    /// Width-only pass over every row of a sector after a resize.
    ///
    /// Bands and hit areas follow the new width. Seats are re-laid out only
    /// for rows whose current seats no longer fit, either by radius or because
    /// they now sit past the right pad. Row offsets never change.
    pub fn refresh_row_widths(&mut self, sector_id: EntityId) -> Result<(), SceneError> {
        let width = self.sector(sector_id)?.bounds.width;
        let layout = *self.layout();
        for row_id in self.rows_of(sector_id) {
            self.row_mut(row_id)?.update_widths(width, &layout);
            let fits = self
                .row(row_id)?
                .seats_fit(&self.seats_of(row_id), width, &layout);
            if !fits {
                self.regenerate_seats(row_id, width)?;
            }
        }
        Ok(())
    }

    /// Re-derives bounds and clip region from the sector shape, then
    /// refreshes row widths. Rows are never moved.
    pub fn sync_sector_geometry(&mut self, sector_id: EntityId) -> Result<(), SceneError> {
        let clip = {
            let sector = self.sector_mut(sector_id)?;
            sector.sync_bounds();
            sector.clip_region()
        };
        let container = self.rows_container(sector_id)?;
        if let Entity::RowsContainer(c) = &mut self.node_mut_or_err(container)?.entity {
            c.clip = clip;
        }
        self.refresh_row_widths(sector_id)
    }

    /// Bakes a scale into the sector shape.
    pub fn bake_sector_scale(&mut self, sector_id: EntityId, sx: f64, sy: f64) -> Result<(), SceneError> {
        self.sector_mut(sector_id)?.shape.bake_scale(sx, sy);
        self.sync_sector_geometry(sector_id)
    }

    /// Replaces the sector shape, keeping its kind-specific invariants.
    pub fn set_sector_shape(&mut self, sector_id: EntityId, shape: ShapeGeometry) -> Result<(), SceneError> {
        let shape = match shape {
            ShapeGeometry::Polygon { points } => {
                if points.len() < seatkit_core::constants::MIN_POLYGON_POINTS {
                    return Err(SceneError::PolygonTooSmall {
                        points: points.len(),
                    });
                }
                let (offset, points) = geometry::normalize_to_origin(&points);
                let sector = self.sector_mut(sector_id)?;
                sector.position = sector.position.offset(offset.x, offset.y);
                ShapeGeometry::Polygon { points }
            }
            other => other,
        };
        self.sector_mut(sector_id)?.shape = shape;
        self.sync_sector_geometry(sector_id)
    }

    /// Moves one vertex of a polygon sector to a world position.
    ///
    /// The outline is re-normalized to the origin, so the sector position
    /// absorbs any shift of the minimum corner. Rows keep their offsets.
    pub fn move_polygon_vertex(
        &mut self,
        sector_id: EntityId,
        index: usize,
        world: Point,
    ) -> Result<(), SceneError> {
        let sector = self.sector(sector_id)?;
        let ShapeGeometry::Polygon { points } = &sector.shape else {
            return Err(SceneError::WrongKind {
                id: sector_id.to_string(),
                expected: "polygon",
                actual: sector.shape_kind().as_str(),
            });
        };
        if index >= points.len() {
            return Err(SceneError::VertexOutOfRange {
                index,
                len: points.len(),
            });
        }
        let local = sector.to_local(world);
        let mut points = points.clone();
        points[index] = local;
        self.set_sector_shape(sector_id, ShapeGeometry::Polygon { points })
    }

    /// Moves a top-level sector or free shape to a new world position.
    pub fn set_position(&mut self, id: EntityId, position: Point) -> Result<(), SceneError> {
        let node = self.node_mut_or_err(id)?;
        let actual = node.kind().as_str();
        match &mut node.entity {
            Entity::Sector(s) => s.position = position,
            Entity::FreeShape(s) => s.position = position,
            _ => {
                return Err(SceneError::WrongKind {
                    id: id.to_string(),
                    expected: "sector or shape",
                    actual,
                })
            }
        }
        Ok(())
    }

    /// Sets a row offset without collision checks; seats move with the row.
    pub fn set_row_y(&mut self, row_id: EntityId, y: f64) -> Result<(), SceneError> {
        self.row_mut(row_id)?.y = y;
        Ok(())
    }

    /// Removes a sector, row or free shape together with its subtree.
    pub fn remove(&mut self, id: EntityId) -> Result<(), SceneError> {
        let node = self.node_or_err(id)?;
        if matches!(node.kind(), EntityKind::RowsContainer | EntityKind::Seat) {
            return Err(SceneError::WrongKind {
                id: id.to_string(),
                expected: "sector, row or shape",
                actual: node.kind().as_str(),
            });
        }
        let parent = node.parent;
        match parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(&parent) {
                    p.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children);
            }
        }
        tracing::debug!("Removed {} and its subtree", id);
        Ok(())
    }

    /// Finds the topmost node under a world point.
    ///
    /// Seats, rows and the sector outline are tried in that order; rows and
    /// seats only count inside the sector's clip region, except for the row
    /// label, which is drawn left of the outline.
    pub fn hit_test(&self, world: Point) -> HitTarget {
        for id in self.roots.iter().rev() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            match &node.entity {
                Entity::Sector(sector) => {
                    let local = sector.to_local(world);
                    if let Some(hit) = self.hit_test_rows(*id, local) {
                        return hit;
                    }
                    if sector.shape.outline().contains(local) {
                        return HitTarget::node(*id, NodePart::Shape);
                    }
                }
                Entity::FreeShape(shape) => {
                    if shape.contains(world) {
                        return HitTarget::node(*id, NodePart::Body);
                    }
                }
                _ => {}
            }
        }
        HitTarget::Background
    }

    fn hit_test_rows(&self, sector_id: EntityId, local: Point) -> Option<HitTarget> {
        let inside = self
            .clip_region(sector_id)
            .map(|clip| clip.contains(local))
            .unwrap_or(false);

        for row_id in self.rows_of(sector_id).into_iter().rev() {
            let Ok(row) = self.row(row_id) else {
                continue;
            };
            let row_local = Point::new(local.x, local.y - row.y);
            if row_local.y < 0.0 || row_local.y > row.row_height {
                continue;
            }
            if inside {
                let seat = self
                    .node(row_id)
                    .into_iter()
                    .flat_map(|n| n.children.iter())
                    .find(|s| self.seat(**s).map(|s| s.contains(row_local)).unwrap_or(false));
                if let Some(seat_id) = seat {
                    return Some(HitTarget::node(*seat_id, NodePart::Body));
                }
            }

            let v = &row.visual;
            if row_local.x < v.hit_x || row_local.x > v.hit_x + v.hit_width {
                continue;
            }
            let part = if row_local.x < 0.0 {
                NodePart::Label
            } else if inside && row_local.x <= v.band_width {
                NodePart::Band
            } else if inside {
                NodePart::HitArea
            } else {
                continue;
            };
            return Some(HitTarget::node(row_id, part));
        }
        None
    }

    /// World-space bounding box of all top-level content as `(min, max)`.
    pub fn content_bounds(&self) -> Option<(Point, Point)> {
        let mut corners = Vec::new();
        for id in &self.roots {
            match self.nodes.get(id).map(|n| &n.entity) {
                Some(Entity::Sector(s)) => {
                    corners.push(s.position);
                    corners.push(s.position.offset(s.bounds.width, s.bounds.height));
                }
                Some(Entity::FreeShape(s)) => corners.extend(s.corners()),
                _ => {}
            }
        }
        if corners.is_empty() {
            return None;
        }
        let (min, size) = geometry::polygon_bounds(&corners);
        Some((min, min.offset(size.width, size.height)))
    }
}
