//! Configuration and settings management for SeatKit
//!
//! Configuration is organized into two sections:
//! - Host settings: the read-only object the admin page embeds (which seat
//!   map is edited, admin URLs, CSRF cookie, API base)
//! - Editor settings: zoom limits, snapping, seat padding, default sizes and
//!   the default parameters of new rows
//!
//! Supports JSON and TOML files.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use seatkit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Identifier of the seat map being edited; hosts send either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeatMapId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for SeatMapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Reference to the seat map record on the host side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatMapRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SeatMapId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub venue: serde_json::Value,
}

/// Admin page links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUrls {
    pub change: String,
    pub changelist: String,
}

impl Default for AdminUrls {
    fn default() -> Self {
        Self {
            change: "#".to_string(),
            changelist: "#".to_string(),
        }
    }
}

/// Configuration object supplied by the host admin page.
///
/// Only identifies what is edited and where it is saved; the editor core
/// never talks to the API itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub extra: serde_json::Value,
    #[serde(default)]
    pub seatmap: SeatMapRef,
    #[serde(default)]
    pub urls: AdminUrls,
    #[serde(default = "default_csrf_cookie")]
    pub csrf_cookie: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_title() -> String {
    "Designer".to_string()
}
fn default_csrf_cookie() -> String {
    "csrftoken".to_string()
}
fn default_api_base() -> String {
    "/".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            extra: serde_json::Value::Null,
            seatmap: SeatMapRef::default(),
            urls: AdminUrls::default(),
            csrf_cookie: default_csrf_cookie(),
            api_base: default_api_base(),
        }
    }
}

impl HostConfig {
    /// Parse the JSON payload embedded by the host page.
    pub fn from_json(content: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse the host payload, falling back to defaults when it is absent or unreadable.
    pub fn from_json_or_default(content: Option<&str>) -> Self {
        match content.map(str::trim).filter(|c| !c.is_empty()) {
            Some(c) => Self::from_json(c).unwrap_or_else(|e| {
                tracing::warn!("Host config unreadable ({}), using defaults", e);
                Self::default()
            }),
            None => {
                tracing::warn!("Host config not found, using defaults");
                Self::default()
            }
        }
    }

    /// Display label of the seat map being edited.
    pub fn seatmap_label(&self) -> String {
        match (&self.seatmap.name, &self.seatmap.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("Seat map {}", id),
            (None, None) => self.title.clone(),
        }
    }
}

/// Parameters applied to rows added from the toolbar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowDefaults {
    pub seats: u32,
    pub ticket: String,
    pub seat_radius: f64,
    pub row_height: f64,
    pub spacing: f64,
}

impl Default for RowDefaults {
    fn default() -> Self {
        Self {
            seats: constants::DEFAULT_SEAT_COUNT,
            ticket: constants::DEFAULT_TICKET.to_string(),
            seat_radius: constants::DEFAULT_SEAT_RADIUS,
            row_height: constants::DEFAULT_ROW_HEIGHT,
            spacing: constants::DEFAULT_ROW_SPACING,
        }
    }
}

/// Editor tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Initial stage size in pixels
    pub stage_width: f64,
    pub stage_height: f64,
    /// Zoom limits
    pub min_scale: f64,
    pub max_scale: f64,
    /// Multiplicative zoom step per wheel notch
    pub wheel_zoom_factor: f64,
    /// Distance to the first vertex that closes a polygon draft
    pub magnet_radius: f64,
    /// Vertical grid unit of row placement and drag
    pub snap_y: f64,
    pub seat_left_pad: f64,
    pub seat_right_pad: f64,
    pub label_offset: f64,
    /// Size of sectors created with the rectangle tool
    pub rect_width: f64,
    pub rect_height: f64,
    /// Radii of sectors created with the ellipse tool
    pub ellipse_radius_x: f64,
    pub ellipse_radius_y: f64,
    /// Offset applied to pasted entities
    pub paste_offset: f64,
    /// Transform handle size in pixels
    pub anchor_size: f64,
    /// Debounce of the container-resize refit
    pub refit_debounce_ms: u64,
    pub row_defaults: RowDefaults,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            stage_width: 1200.0,
            stage_height: 800.0,
            min_scale: 0.2,
            max_scale: 4.0,
            wheel_zoom_factor: 1.1,
            magnet_radius: 10.0,
            snap_y: constants::SNAP_Y,
            seat_left_pad: constants::SEAT_LEFT_PAD,
            seat_right_pad: constants::SEAT_RIGHT_PAD,
            label_offset: constants::LABEL_OFFSET,
            rect_width: 220.0,
            rect_height: 140.0,
            ellipse_radius_x: 110.0,
            ellipse_radius_y: 70.0,
            paste_offset: 12.0,
            anchor_size: 8.0,
            refit_debounce_ms: 40,
            row_defaults: RowDefaults::default(),
        }
    }
}

impl EditorSettings {
    /// Validate editor settings
    pub fn validate(&self) -> ConfigResult<()> {
        if self.stage_width <= 0.0 || self.stage_height <= 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.stage_size",
                format!("{}x{}", self.stage_width, self.stage_height),
            ));
        }
        if self.min_scale <= 0.0 {
            return Err(ConfigError::out_of_range("editor.min_scale", self.min_scale));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Inconsistent(format!(
                "min_scale {} is greater than max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if self.wheel_zoom_factor <= 1.0 {
            return Err(ConfigError::out_of_range(
                "editor.wheel_zoom_factor",
                self.wheel_zoom_factor,
            ));
        }
        if self.magnet_radius < 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.magnet_radius",
                self.magnet_radius,
            ));
        }
        if self.snap_y <= 0.0 {
            return Err(ConfigError::out_of_range("editor.snap_y", self.snap_y));
        }
        if self.seat_left_pad < 0.0 || self.seat_right_pad < 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.seat_pad",
                format!("{}/{}", self.seat_left_pad, self.seat_right_pad),
            ));
        }
        if self.rect_width <= 0.0
            || self.rect_height <= 0.0
            || self.ellipse_radius_x <= 0.0
            || self.ellipse_radius_y <= 0.0
        {
            return Err(ConfigError::Inconsistent(
                "default sector sizes must be > 0".to_string(),
            ));
        }
        let rows = &self.row_defaults;
        if rows.row_height <= 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.row_defaults.row_height",
                rows.row_height,
            ));
        }
        if rows.seat_radius <= 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.row_defaults.seat_radius",
                rows.seat_radius,
            ));
        }
        if rows.spacing < 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.row_defaults.spacing",
                rows.spacing,
            ));
        }
        Ok(())
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Host-supplied settings
    #[serde(default)]
    pub host: HostConfig,
    /// Editor tunables
    #[serde(default)]
    pub editor: EditorSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location (`<config dir>/seatkit/config.toml`).
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("seatkit").join("config.toml"))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        tracing::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.editor.validate()
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
