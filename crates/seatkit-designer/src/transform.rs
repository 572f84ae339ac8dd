//! Pointer-driven transform sessions: move, resize, rotate and vertex edits.
//!
//! A session records the state at pointer-down and recomputes the target
//! from that state on every frame, so frames never accumulate rounding.
//! Sector resizes are baked into the shape immediately; there is no
//! pending scale to flush at the end of a drag.

use seatkit_core::constants::MIN_SECTOR_SIZE;
use seatkit_core::SceneError;

use crate::bindings::{self, DragConstraint};
use crate::canvas::Canvas;
use crate::geometry::{self, Point, Size};
use crate::model::{EntityId, EntityKind};
use crate::selection_manager::Anchor;

/// What a session does with pointer movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformKind {
    Move,
    Resize(Anchor),
    Rotate,
    /// Drags one vertex of a polygon sector.
    Vertex(usize),
}

/// One in-progress drag.
#[derive(Debug, Clone)]
pub struct TransformSession {
    target: EntityId,
    target_kind: EntityKind,
    kind: TransformKind,
    start_pointer: Point,
    start_position: Point,
    start_size: Size,
    start_rotation: f64,
    drag: DragConstraint,
    commits: bool,
    changed: bool,
}

fn rotate(p: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

/// New frame size for a resize anchor dragged by a local delta.
fn resized(anchor: Anchor, start: Size, dx: f64, dy: f64) -> Size {
    let mut width = start.width;
    let mut height = start.height;
    if anchor.moves_right() {
        width += dx;
    } else if anchor.moves_left() {
        width -= dx;
    }
    if anchor.moves_bottom() {
        height += dy;
    } else if anchor.moves_top() {
        height -= dy;
    }
    Size::new(width.max(MIN_SECTOR_SIZE), height.max(MIN_SECTOR_SIZE))
}

fn ratio(target: f64, current: f64) -> f64 {
    if current > 0.0 {
        target / current
    } else {
        1.0
    }
}

impl TransformSession {
    /// Starts a session on `target`, or returns `None` if it cannot be
    /// transformed that way (locked node, seat, rotation on a sector, ...).
    pub fn begin(
        canvas: &Canvas,
        target: EntityId,
        kind: TransformKind,
        pointer: Point,
    ) -> Result<Option<Self>, SceneError> {
        let target_kind = canvas
            .kind_of(target)
            .ok_or_else(|| SceneError::not_found(target))?;
        let bindings = bindings::bindings_for(canvas, target)?;

        let (start_position, start_size, start_rotation) = match target_kind {
            EntityKind::Sector => {
                let s = canvas.sector(target)?;
                (s.position, s.bounds, 0.0)
            }
            EntityKind::Row => {
                let r = canvas.row(target)?;
                (Point::new(0.0, r.y), Size::new(0.0, r.row_height), 0.0)
            }
            EntityKind::FreeShape => {
                let s = canvas.free_shape(target)?;
                (s.position, s.bounds(), s.rotation)
            }
            EntityKind::RowsContainer | EntityKind::Seat => return Ok(None),
        };

        let allowed = match (kind, target_kind) {
            (TransformKind::Move, _) => bindings.drag != DragConstraint::Locked,
            (TransformKind::Resize(Anchor::Rotate), _) => false,
            (TransformKind::Resize(_), EntityKind::Sector | EntityKind::FreeShape) => true,
            (TransformKind::Rotate, EntityKind::FreeShape) => true,
            (TransformKind::Vertex(_), EntityKind::Sector) => {
                canvas.sector(target)?.shape_kind() == geometry::ShapeKind::Polygon
            }
            _ => false,
        };
        if !allowed {
            return Ok(None);
        }

        tracing::debug!("Begin {:?} on {} {}", kind, target_kind, target);
        Ok(Some(Self {
            target,
            target_kind,
            kind,
            start_pointer: pointer,
            start_position,
            start_size,
            start_rotation,
            drag: bindings.drag,
            commits: bindings.commits_on_drag_end,
            changed: false,
        }))
    }

    pub fn target(&self) -> EntityId {
        self.target
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// Whether any frame modified the scene.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Applies one pointer frame (world coordinates).
    pub fn update(&mut self, canvas: &mut Canvas, pointer: Point) -> Result<(), SceneError> {
        let dx = pointer.x - self.start_pointer.x;
        let dy = pointer.y - self.start_pointer.y;

        match (self.kind, self.target_kind) {
            (TransformKind::Move, EntityKind::Row) => {
                let y = match self.drag {
                    DragConstraint::Vertical { min_y, max_y, snap } => {
                        let clamped = (self.start_position.y + dy).clamp(min_y, max_y);
                        geometry::snap_within(clamped, max_y, snap).clamp(min_y, max_y)
                    }
                    _ => return Ok(()),
                };
                canvas.set_row_y(self.target, y)?;
            }
            (TransformKind::Move, _) => {
                canvas.set_position(self.target, self.start_position.offset(dx, dy))?;
            }
            (TransformKind::Resize(anchor), EntityKind::Sector) => {
                let size = resized(anchor, self.start_size, dx, dy);
                let current = canvas.sector(self.target)?.bounds;
                canvas.bake_sector_scale(
                    self.target,
                    ratio(size.width, current.width),
                    ratio(size.height, current.height),
                )?;
                let baked = canvas.sector(self.target)?.bounds;
                let mut position = self.start_position;
                if anchor.moves_left() {
                    position.x += self.start_size.width - baked.width;
                }
                if anchor.moves_top() {
                    position.y += self.start_size.height - baked.height;
                }
                canvas.set_position(self.target, position)?;
            }
            (TransformKind::Resize(anchor), EntityKind::FreeShape) => {
                let local = rotate(Point::new(dx, dy), -self.start_rotation);
                let size = resized(anchor, self.start_size, local.x, local.y);
                let shape = canvas.free_shape_mut(self.target)?;
                let current = shape.bounds();
                shape.shape.bake_scale(
                    ratio(size.width, current.width),
                    ratio(size.height, current.height),
                );
                let baked = shape.bounds();
                let mut shift = Point::new(0.0, 0.0);
                if anchor.moves_left() {
                    shift.x = self.start_size.width - baked.width;
                }
                if anchor.moves_top() {
                    shift.y = self.start_size.height - baked.height;
                }
                let shift = rotate(shift, self.start_rotation);
                shape.position = self.start_position.offset(shift.x, shift.y);
            }
            (TransformKind::Rotate, EntityKind::FreeShape) => {
                let half = Point::new(self.start_size.width / 2.0, self.start_size.height / 2.0);
                let r = rotate(half, self.start_rotation);
                let pivot = self.start_position.offset(r.x, r.y);
                let a0 = (self.start_pointer.y - pivot.y).atan2(self.start_pointer.x - pivot.x);
                let a1 = (pointer.y - pivot.y).atan2(pointer.x - pivot.x);
                let rotation = (self.start_rotation + (a1 - a0).to_degrees()).rem_euclid(360.0);

                let shape = canvas.free_shape_mut(self.target)?;
                let r = rotate(half, rotation);
                shape.rotation = rotation;
                shape.position = pivot.offset(-r.x, -r.y);
            }
            (TransformKind::Vertex(index), EntityKind::Sector) => {
                canvas.move_polygon_vertex(self.target, index, pointer)?;
            }
            _ => return Ok(()),
        }
        self.changed = true;
        Ok(())
    }

    /// Ends the session. Returns whether history should be committed.
    pub fn finish(self, canvas: &mut Canvas) -> Result<bool, SceneError> {
        if !self.changed {
            return Ok(false);
        }
        if self.target_kind == EntityKind::Row {
            canvas.refresh_row(self.target)?;
        }
        tracing::debug!("Finished {:?} on {}", self.kind, self.target);
        Ok(self.commits)
    }
}
