//! # SeatKit
//!
//! Editor engine for venue seat maps: polygonal, rectangular and elliptical
//! sectors holding horizontal rows of seats, drawn on a pannable and
//! zoomable canvas.
//!
//! ## Architecture
//!
//! SeatKit is organized as a workspace with multiple crates:
//!
//! 1. **seatkit-core** - Error types and shared constants
//! 2. **seatkit-settings** - Host configuration and editor tunables
//! 3. **seatkit-designer** - Scene model, geometry, tools, selection, history
//! 4. **seatkit** - Logging setup and a headless driver
//!
//! ## Features
//!
//! - **Sectors**: rect, ellipse and click-drafted polygons with clip regions
//! - **Rows**: non-overlapping placement, snapping and seat layout
//! - **Editing**: selection with handles, move/resize/vertex drags
//! - **History**: snapshot undo/redo, copy/paste with unique names
//! - **Persistence**: JSON design files

pub use seatkit_designer as designer;
pub use seatkit_settings as settings;

pub use seatkit_core::{Error, Result, SceneError};

pub use seatkit_designer::{
    Canvas, DesignFile, DesignerState, EntityData, EntityId, InputEvent, Key, Modifiers,
    MouseButton, Point, PropertyPanel, ShapeKind, Size, StatusLevel, Tool, Viewport,
};

pub use seatkit_settings::{Config, EditorSettings, HostConfig, RowDefaults};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support
/// - JSON lines instead of text when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
