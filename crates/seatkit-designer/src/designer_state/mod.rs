//! Designer state manager for host integration.
//! Owns the scene, the editing state machine and the history, and turns
//! host input events into scene mutations.
//!
//! This module is split into submodules:
//! - `interaction`: input dispatch (pointer, polygon drafting, keys, wheel, pan)
//! - `shapes`: sector creation, row placement, delete, copy and paste
//! - `properties`: the property panel and its edits
//! - `preview`: the ghost row shown while placing rows
//! - `viewport`: zoom-to-fit and the debounced resize refit
//! - `history`: undo/redo
//! - `file_io`: save/load operations

mod file_io;
mod history;
mod interaction;
mod preview;
mod properties;
mod shapes;
mod viewport;

pub use preview::GhostRow;
pub use properties::{PropertyPanel, SelectionKind, StatusLevel, StatusMessage};

use std::path::PathBuf;
use std::time::Instant;

use seatkit_settings::{Config, EditorSettings, HostConfig};

use crate::canvas::{Canvas, Tool};
use crate::geometry::{Point, Size};
use crate::history::{HistoryManager, Snapshot};
use crate::model::{EntityId, PolygonDraft, RowLayout};
use crate::selection_manager::SelectionManager;
use crate::serialization::EntityData;
use crate::transform::TransformSession;
use crate::viewport::Viewport;

/// Copied subtree plus the sector a copied row came from.
#[derive(Debug, Clone)]
pub struct ClipboardEntry {
    pub data: EntityData,
    pub source_sector: Option<EntityId>,
}

/// Space-bar and middle-button panning.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PanState {
    pub space_held: bool,
    /// Last pointer position of an active pan drag.
    pub last: Option<Point>,
}

/// A resize that has not been applied yet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingRefit {
    pub size: Size,
    pub due: Instant,
}

/// Designer state for host integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub selection: SelectionManager,
    pub viewport: Viewport,
    pub panel: PropertyPanel,
    pub settings: EditorSettings,
    pub host: HostConfig,
    pub clipboard: Option<ClipboardEntry>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
    pub(crate) history: HistoryManager,
    pub(crate) tool: Tool,
    pub(crate) draft: Option<PolygonDraft>,
    pub(crate) ghost: Option<GhostRow>,
    pub(crate) session: Option<TransformSession>,
    pub(crate) pan: PanState,
    pub(crate) mounted: bool,
    pub(crate) pending_refit: Option<PendingRefit>,
}

impl DesignerState {
    /// Creates a designer with default settings and no host payload.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a designer from loaded configuration.
    pub fn with_config(config: Config) -> Self {
        let Config { host, editor } = config;
        let canvas = Canvas::with_layout(RowLayout::from(&editor));
        let viewport = Viewport::new(editor.stage_width, editor.stage_height)
            .with_limits(editor.min_scale, editor.max_scale);
        let panel = PropertyPanel::with_defaults(&editor.row_defaults);
        let design_name = host
            .seatmap
            .name
            .clone()
            .unwrap_or_else(|| "Untitled".to_string());

        Self {
            history: HistoryManager::new(canvas.snapshot()),
            canvas,
            selection: SelectionManager::new(),
            viewport,
            panel,
            settings: editor,
            host,
            clipboard: None,
            current_file_path: None,
            is_modified: false,
            design_name,
            tool: Tool::Select,
            draft: None,
            ghost: None,
            session: None,
            pan: PanState::default(),
            mounted: false,
            pending_refit: None,
        }
    }

    /// Attaches the designer to its host surface.
    ///
    /// History starts over from the current scene. Input is ignored until
    /// the designer is mounted.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.history.reset(self.canvas.snapshot());
        self.mounted = true;
        tracing::info!("Designer mounted for {}", self.host.seatmap_label());
    }

    /// Detaches from the host and drops every transient interaction.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.session = None;
        self.draft = None;
        self.ghost = None;
        self.pan = PanState::default();
        self.pending_refit = None;
        tracing::info!("Designer unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches the active tool.
    ///
    /// Leaving the polygon tool drops any draft; picking a drawing tool
    /// clears the selection.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == Tool::Polygon && tool != Tool::Polygon {
            self.cancel_polygon();
        }
        if tool.is_drawing() {
            self.clear_selection();
        }
        self.tool = tool;
        self.panel.tool = tool;
        tracing::debug!("Tool set to {:?}", tool);
    }

    pub fn draft(&self) -> Option<&PolygonDraft> {
        self.draft.as_ref()
    }

    pub fn selected_id(&self) -> Option<EntityId> {
        self.selection.selected_id()
    }

    /// Selects the entity behind a raw target and loads it into the panel.
    ///
    /// Returns `None` when the target does not exist.
    pub fn select(&mut self, raw: EntityId) -> Option<EntityId> {
        match self.selection.select(&self.canvas, raw) {
            Ok(id) => {
                self.ghost = None;
                self.panel.row_preview = false;
                self.load_panel();
                Some(id)
            }
            Err(e) => {
                tracing::debug!("Selection ignored: {}", e);
                None
            }
        }
    }

    /// Clears the selection and resets the panel.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.ghost = None;
        self.panel.row_preview = false;
        self.load_panel();
    }

    /// Records the current scene as a new history entry.
    pub fn commit(&mut self) {
        if self.history.commit(self.canvas.snapshot()) {
            self.is_modified = true;
        }
    }

    /// Replaces the scene with a snapshot without recording history.
    pub(crate) fn restore(&mut self, snapshot: &Snapshot) {
        self.history.suppress();
        self.session = None;
        self.canvas.restore(snapshot);
        self.history.resume();
        self.clear_selection();
    }

    pub(crate) fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        let message = StatusMessage::new(level, text);
        tracing::debug!("Status: {}", message.text);
        self.panel.status = Some(message);
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
