//! SeatKit Settings Crate
//!
//! Handles the host-supplied configuration (which seat map is being edited,
//! where the admin API lives) and the editor tunables consumed by the
//! designer engine.

pub mod config;
pub mod error;

pub use config::{AdminUrls, Config, EditorSettings, HostConfig, RowDefaults, SeatMapId, SeatMapRef};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
