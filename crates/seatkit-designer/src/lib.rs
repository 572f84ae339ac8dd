//! # SeatKit Designer
//!
//! Headless editing engine for venue seat maps. Sectors (rect, ellipse or
//! polygon outlines) hold rows, rows hold seats, and everything sits on a
//! pannable, zoomable canvas. The engine owns the scene, the layout
//! algorithms and the editing state machine; the host only draws what it is
//! given and forwards input.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (input dispatch, panel, clipboard)
//!   ├── Canvas (scene arena)
//!   │     ├── Sector → RowsContainer (clip) → Row → Seat
//!   │     └── FreeShape (legacy)
//!   ├── SelectionManager + TransformSession (handles, drags)
//!   ├── HistoryManager (snapshot undo/redo)
//!   └── Viewport (screen ↔ world)
//!
//! geometry (clip regions, seat layout, row placement)
//! naming (unique titles and row names)
//! serialization (EntityData trees, DesignFile)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use seatkit_designer::{DesignerState, InputEvent, MouseButton, Point, Tool};
//!
//! let mut designer = DesignerState::new();
//! designer.mount();
//! designer.set_tool(Tool::Rect);
//! designer.handle_event(InputEvent::PointerDown {
//!     pos: Some(Point::new(100.0, 100.0)),
//!     button: MouseButton::Left,
//! });
//! let row = designer.add_row();
//! assert!(row.is_some());
//! ```

pub mod bindings;
pub mod canvas;
pub mod designer_state;
pub mod geometry;
pub mod history;
pub mod input;
pub mod model;
pub mod naming;
pub mod selection_manager;
pub mod serialization;
pub mod transform;
pub mod viewport;

pub use bindings::{bindings_for, DragConstraint, NodeBindings};
pub use canvas::{Canvas, HitTarget, NodePart, Tool};
pub use designer_state::{
    ClipboardEntry, DesignerState, GhostRow, PropertyPanel, SelectionKind, StatusLevel,
    StatusMessage,
};
pub use geometry::{ClipRegion, Point, RowSpan, SeatLayout, ShapeKind, Size};
pub use history::{HistoryManager, Snapshot};
pub use input::{InputEvent, Key, Modifiers, MouseButton};
pub use model::{
    EntityId, EntityKind, FreeShape, PolygonDraft, Row, RowLayout, RowParams, Seat, Sector,
    ShapeGeometry,
};
pub use selection_manager::{Anchor, HandleSet, SelectionFrame, SelectionManager};
pub use serialization::{DesignFile, EntityData};
pub use transform::{TransformKind, TransformSession};
pub use viewport::Viewport;

pub use seatkit_core::{Error, Result, SceneError};
