//! Input dispatch for designer state.
//!
//! Pointer positions arrive in canvas pixels and are mapped through the
//! viewport before they touch the scene. Events that cannot be acted on
//! (no pointer position, nothing selected, unmounted designer) are dropped
//! and reported as unhandled.

use std::time::Instant;

use super::DesignerState;
use crate::canvas::{HitTarget, Tool};
use crate::geometry::{Point, ShapeKind};
use crate::input::{InputEvent, Key, Modifiers, MouseButton};
use crate::model::{EntityId, PolygonDraft};
use crate::selection_manager::Anchor;
use crate::transform::{TransformKind, TransformSession};

/// Points closer than this are treated as the same vertex.
const DUPLICATE_VERTEX_EPSILON: f64 = 1e-6;

impl DesignerState {
    /// Handles one host event. Returns whether the event was consumed.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if !self.mounted {
            return false;
        }
        tracing::trace!("{}", event.description());
        match event {
            InputEvent::PointerDown { pos, button } => {
                let Some(pos) = pos else { return false };
                self.on_pointer_down(pos, button)
            }
            InputEvent::PointerMove { pos } => {
                let Some(pos) = pos else { return false };
                self.on_pointer_move(pos)
            }
            InputEvent::PointerUp { pos, button } => self.on_pointer_up(pos, button),
            InputEvent::DoubleClick { .. } => {
                if self.tool == Tool::Polygon && self.draft.is_some() {
                    self.close_polygon();
                    true
                } else {
                    false
                }
            }
            InputEvent::Wheel { pos, delta_y } => {
                let Some(pos) = pos else { return false };
                self.zoom_at_pointer(pos, delta_y);
                true
            }
            InputEvent::KeyDown {
                key,
                modifiers,
                in_text_input,
            } => {
                if in_text_input {
                    return false;
                }
                self.on_key_down(&key, modifiers)
            }
            InputEvent::KeyUp { key } => {
                if key == Key::Space {
                    self.pan.space_held = false;
                    self.pan.last = None;
                    true
                } else {
                    false
                }
            }
            InputEvent::Resize { width, height } => {
                self.request_refit(width, height, Instant::now());
                true
            }
        }
    }

    /// Whether a pan drag is in progress.
    pub fn is_panning(&self) -> bool {
        self.pan.last.is_some()
    }

    /// Raw target under a screen point: handles of the selection first,
    /// then the scene.
    pub fn pick(&self, screen: Point) -> HitTarget {
        if let Some(anchor) = self.selection.anchor_at(
            &self.canvas,
            &self.viewport,
            screen,
            self.settings.anchor_size,
        ) {
            return HitTarget::Handle(anchor);
        }
        self.canvas.hit_test(self.viewport.screen_to_world(screen))
    }

    fn on_pointer_down(&mut self, screen: Point, button: MouseButton) -> bool {
        let starts_pan = match button {
            MouseButton::Middle => true,
            MouseButton::Left => self.pan.space_held,
            MouseButton::Right => return false,
        };
        if starts_pan {
            self.pan.last = Some(screen);
            return true;
        }

        let world = self.viewport.screen_to_world(screen);
        match self.tool {
            Tool::Rect => self.create_sector_at(ShapeKind::Rect, world).is_some(),
            Tool::Ellipse => self.create_sector_at(ShapeKind::Ellipse, world).is_some(),
            Tool::Polygon => {
                self.polygon_click(world);
                true
            }
            Tool::Select => {
                self.select_at(screen, world);
                true
            }
        }
    }

    fn select_at(&mut self, screen: Point, world: Point) {
        if let Some(index) = self.selection.vertex_at(
            &self.canvas,
            &self.viewport,
            screen,
            self.settings.anchor_size,
        ) {
            if let Some(id) = self.selection.selected_id() {
                self.begin_session(id, TransformKind::Vertex(index), world);
                return;
            }
        }

        match self.pick(screen) {
            HitTarget::Handle(anchor) => {
                if let Some(id) = self.selection.selected_id() {
                    let kind = match anchor {
                        Anchor::Rotate => TransformKind::Rotate,
                        other => TransformKind::Resize(other),
                    };
                    self.begin_session(id, kind, world);
                }
            }
            HitTarget::Node { id, .. } => {
                if let Some(selected) = self.select(id) {
                    self.begin_session(selected, TransformKind::Move, world);
                }
            }
            HitTarget::Background => self.clear_selection(),
        }
    }

    fn begin_session(&mut self, id: EntityId, kind: TransformKind, world: Point) {
        match TransformSession::begin(&self.canvas, id, kind, world) {
            Ok(session) => self.session = session,
            Err(e) => tracing::debug!("Transform not started: {}", e),
        }
    }

    fn on_pointer_move(&mut self, screen: Point) -> bool {
        if let Some(last) = self.pan.last {
            self.viewport.pan_by(screen.x - last.x, screen.y - last.y);
            self.pan.last = Some(screen);
            return true;
        }

        let world = self.viewport.screen_to_world(screen);
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.update(&mut self.canvas, world) {
                tracing::debug!("Transform frame dropped: {}", e);
            }
            return true;
        }

        self.update_preview(world);
        self.ghost.is_some()
    }

    fn on_pointer_up(&mut self, _screen: Option<Point>, button: MouseButton) -> bool {
        if self.pan.last.is_some() && button != MouseButton::Right {
            self.pan.last = None;
            return true;
        }
        let Some(session) = self.session.take() else {
            return false;
        };
        match session.finish(&mut self.canvas) {
            Ok(true) => self.commit(),
            Ok(false) => {}
            Err(e) => tracing::warn!("Transform finish failed: {}", e),
        }
        self.load_panel();
        true
    }

    fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> bool {
        if modifiers.command() {
            return match key {
                Key::Char('c') => self.copy_selected(),
                Key::Char('v') => self.paste().is_some(),
                Key::Char('z') if modifiers.shift => self.redo(),
                Key::Char('z') => self.undo(),
                Key::Char('y') => self.redo(),
                _ => false,
            };
        }
        match key {
            Key::Space => {
                self.pan.space_held = true;
                true
            }
            Key::Enter if self.draft.is_some() => {
                self.close_polygon();
                true
            }
            Key::Escape if self.draft.is_some() => {
                self.cancel_polygon();
                true
            }
            Key::Delete | Key::Backspace => self.delete_selected(),
            _ => false,
        }
    }

    /// Adds a drafted vertex, or closes the draft when the click lands on
    /// the first vertex.
    fn polygon_click(&mut self, world: Point) {
        let magnet = self.settings.magnet_radius / self.viewport.scale();
        let closes = match &self.draft {
            None => {
                self.draft = Some(PolygonDraft::new(world));
                tracing::debug!("Polygon draft started");
                return;
            }
            Some(draft) => draft.len() > 1 && draft.snaps_to_first(world, magnet),
        };
        if closes {
            self.close_polygon();
        } else if let Some(draft) = self.draft.as_mut() {
            draft.push(world);
        }
    }

    /// Commits the draft as a sector, or discards it when it has fewer
    /// than three distinct points.
    pub fn close_polygon(&mut self) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };
        let mut points: Vec<Point> = Vec::with_capacity(draft.len());
        for p in draft.into_points() {
            if points
                .last()
                .map_or(true, |last| last.distance_to(&p) > DUPLICATE_VERTEX_EPSILON)
            {
                points.push(p);
            }
        }
        if points.len() > 1
            && points[0].distance_to(&points[points.len() - 1]) <= DUPLICATE_VERTEX_EPSILON
        {
            points.pop();
        }

        if self.create_polygon_sector(&points).is_some() {
            self.tool = Tool::Select;
            self.panel.tool = Tool::Select;
            true
        } else {
            tracing::debug!("Polygon draft with {} points discarded", points.len());
            false
        }
    }

    /// Drops the polygon draft.
    pub fn cancel_polygon(&mut self) {
        if self.draft.take().is_some() {
            tracing::debug!("Polygon draft cancelled");
        }
    }
}
