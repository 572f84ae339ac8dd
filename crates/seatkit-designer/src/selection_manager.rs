use seatkit_core::SceneError;

use crate::bindings;
use crate::canvas::Canvas;
use crate::geometry::{Point, Size};
use crate::model::{EntityId, EntityKind};
use crate::viewport::Viewport;

/// Screen distance between the top edge and the rotation handle.
const ROTATE_HANDLE_OFFSET: f64 = 24.0;

/// Transform handle positions around a selection frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Rotate,
}

impl Anchor {
    /// The eight resize anchors.
    pub const RESIZE: [Anchor; 8] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    const RESIZE_AND_ROTATE: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
        Anchor::Rotate,
    ];

    /// Position on an unrotated frame of `size` with its origin at `(0, 0)`.
    pub fn local_position(&self, size: Size) -> Point {
        let (w, h) = (size.width, size.height);
        match self {
            Anchor::TopLeft => Point::new(0.0, 0.0),
            Anchor::TopCenter | Anchor::Rotate => Point::new(w / 2.0, 0.0),
            Anchor::TopRight => Point::new(w, 0.0),
            Anchor::MiddleLeft => Point::new(0.0, h / 2.0),
            Anchor::MiddleRight => Point::new(w, h / 2.0),
            Anchor::BottomLeft => Point::new(0.0, h),
            Anchor::BottomCenter => Point::new(w / 2.0, h),
            Anchor::BottomRight => Point::new(w, h),
        }
    }

    pub fn moves_left(&self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::MiddleLeft | Anchor::BottomLeft)
    }

    pub fn moves_right(&self) -> bool {
        matches!(self, Anchor::TopRight | Anchor::MiddleRight | Anchor::BottomRight)
    }

    pub fn moves_top(&self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight)
    }

    pub fn moves_bottom(&self) -> bool {
        matches!(
            self,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight
        )
    }
}

/// Handle set attached to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSet {
    /// Eight resize anchors, no rotation.
    SectorResize,
    /// Frame only; the row translates vertically.
    RowTranslate,
    /// Eight resize anchors plus rotation.
    FreeTransform,
}

impl HandleSet {
    pub fn for_kind(kind: EntityKind) -> Option<Self> {
        match kind {
            EntityKind::Sector => Some(HandleSet::SectorResize),
            EntityKind::Row => Some(HandleSet::RowTranslate),
            EntityKind::FreeShape => Some(HandleSet::FreeTransform),
            EntityKind::RowsContainer | EntityKind::Seat => None,
        }
    }

    pub fn anchors(&self) -> &'static [Anchor] {
        match self {
            HandleSet::SectorResize => &Anchor::RESIZE,
            HandleSet::RowTranslate => &[],
            HandleSet::FreeTransform => &Anchor::RESIZE_AND_ROTATE,
        }
    }

    pub fn rotate_enabled(&self) -> bool {
        matches!(self, HandleSet::FreeTransform)
    }
}

/// World-space frame drawn around the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionFrame {
    pub origin: Point,
    pub size: Size,
    /// Degrees around `origin`.
    pub rotation: f64,
}

impl SelectionFrame {
    pub fn to_world(&self, local: Point) -> Point {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        Point::new(
            self.origin.x + local.x * cos - local.y * sin,
            self.origin.y + local.x * sin + local.y * cos,
        )
    }
}

/// Tracks the single selected entity and its handle set.
///
/// Raw hit targets are promoted before they are recorded: a seat selects
/// its row, a rows container selects its sector.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the selected entity, if any
    selected_id: Option<EntityId>,
    handles: Option<HandleSet>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<EntityId> {
        self.selected_id
    }

    pub fn handles(&self) -> Option<HandleSet> {
        self.handles
    }

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selected_id == Some(id)
    }

    /// Maps a raw target to the entity that should be selected.
    pub fn resolve(canvas: &Canvas, raw: EntityId) -> Result<EntityId, SceneError> {
        let mut current = raw;
        // Promotion chains are at most seat -> row and container -> sector.
        for _ in 0..4 {
            let target = bindings::bindings_for(canvas, current)?
                .select_target
                .ok_or_else(|| SceneError::not_found(current))?;
            if target == current {
                return Ok(current);
            }
            current = target;
        }
        Ok(current)
    }

    /// Selects the entity behind a raw target and attaches its handle set.
    pub fn select(&mut self, canvas: &Canvas, raw: EntityId) -> Result<EntityId, SceneError> {
        let id = Self::resolve(canvas, raw)?;
        let kind = canvas.kind_of(id).ok_or_else(|| SceneError::not_found(id))?;
        self.selected_id = Some(id);
        self.handles = HandleSet::for_kind(kind);
        tracing::debug!("Selected {} {}", kind, id);
        Ok(id)
    }

    /// Clears the selection and detaches handles.
    pub fn clear(&mut self) {
        self.selected_id = None;
        self.handles = None;
    }

    /// Drops the selection if its entity no longer exists.
    pub fn validate(&mut self, canvas: &Canvas) {
        if let Some(id) = self.selected_id {
            if !canvas.contains(id) {
                self.clear();
            }
        }
    }

    /// World frame of the selection.
    pub fn frame(&self, canvas: &Canvas) -> Option<SelectionFrame> {
        let id = self.selected_id?;
        match canvas.kind_of(id)? {
            EntityKind::Sector => {
                let sector = canvas.sector(id).ok()?;
                Some(SelectionFrame {
                    origin: sector.position,
                    size: sector.bounds,
                    rotation: 0.0,
                })
            }
            EntityKind::Row => {
                let row = canvas.row(id).ok()?;
                let sector = canvas.sector(canvas.sector_of_row(id).ok()?).ok()?;
                Some(SelectionFrame {
                    origin: sector.position.offset(0.0, row.y),
                    size: Size::new(sector.bounds.width, row.row_height),
                    rotation: 0.0,
                })
            }
            EntityKind::FreeShape => {
                let shape = canvas.free_shape(id).ok()?;
                Some(SelectionFrame {
                    origin: shape.position,
                    size: shape.bounds(),
                    rotation: shape.rotation,
                })
            }
            _ => None,
        }
    }

    /// Screen positions of the attached anchors.
    pub fn anchor_positions(&self, canvas: &Canvas, viewport: &Viewport) -> Vec<(Anchor, Point)> {
        let (Some(handles), Some(frame)) = (self.handles, self.frame(canvas)) else {
            return Vec::new();
        };
        handles
            .anchors()
            .iter()
            .map(|anchor| {
                let world = frame.to_world(anchor.local_position(frame.size));
                let mut screen = viewport.world_to_screen(world);
                if *anchor == Anchor::Rotate {
                    screen.y -= ROTATE_HANDLE_OFFSET;
                }
                (*anchor, screen)
            })
            .collect()
    }

    /// Anchor whose square of side `anchor_size` contains a screen point.
    pub fn anchor_at(
        &self,
        canvas: &Canvas,
        viewport: &Viewport,
        screen: Point,
        anchor_size: f64,
    ) -> Option<Anchor> {
        let half = anchor_size / 2.0;
        self.anchor_positions(canvas, viewport)
            .into_iter()
            .find(|(_, p)| (screen.x - p.x).abs() <= half && (screen.y - p.y).abs() <= half)
            .map(|(anchor, _)| anchor)
    }

    /// Screen positions of the vertices of a selected polygon sector.
    pub fn vertex_positions(&self, canvas: &Canvas, viewport: &Viewport) -> Vec<Point> {
        let Some(sector) = self.selected_id.and_then(|id| canvas.sector(id).ok()) else {
            return Vec::new();
        };
        sector
            .shape
            .points()
            .iter()
            .map(|p| viewport.world_to_screen(sector.to_world(*p)))
            .collect()
    }

    /// Index of the polygon vertex handle under a screen point.
    pub fn vertex_at(
        &self,
        canvas: &Canvas,
        viewport: &Viewport,
        screen: Point,
        anchor_size: f64,
    ) -> Option<usize> {
        let half = anchor_size / 2.0;
        self.vertex_positions(canvas, viewport)
            .iter()
            .position(|p| (screen.x - p.x).abs() <= half && (screen.y - p.y).abs() <= half)
    }
}
