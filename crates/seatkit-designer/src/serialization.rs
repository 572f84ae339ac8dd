//! Serialization and deserialization for seat maps.
//!
//! [`EntityData`] is the plain tree every snapshot, clipboard entry and
//! design file is made of. Only sectors, their rows and legacy free shapes
//! are stored; rows containers, seats and visuals are derived again on load.
//!
//! [`DesignFile`] wraps an ordered entity list with metadata and viewport
//! state for persistence as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use seatkit_core::{constants, Error, Result};
use seatkit_settings::SeatMapRef;

use crate::geometry::{Point, ShapeKind, Size};
use crate::model::{EntityId, EntityKind, ShapeGeometry};

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

fn default_true() -> bool {
    true
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

/// Serialized entity subtree.
///
/// Every attribute is optional on input; absent ones fall back to the
/// documented defaults when the entity is rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub rotation: f64,
    #[serde(default = "default_true")]
    pub draggable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<EntityData>,
}

impl Default for EntityData {
    fn default() -> Self {
        Self {
            id: None,
            kind: None,
            shape: None,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            draggable: true,
            width: None,
            height: None,
            radius_x: None,
            radius_y: None,
            points: Vec::new(),
            title: None,
            description: None,
            name: None,
            ticket: None,
            seats: None,
            seat_radius: None,
            row_height: None,
            children: Vec::new(),
        }
    }
}

impl EntityData {
    /// Entity kind of the payload, guessed from its attributes when the tag
    /// is missing or unknown.
    pub fn entity_kind(&self) -> EntityKind {
        match self.kind.as_deref() {
            Some("sector") => EntityKind::Sector,
            Some("row") => EntityKind::Row,
            Some("shape") => EntityKind::FreeShape,
            other => {
                let guessed = if self.title.is_some() || !self.children.is_empty() {
                    EntityKind::Sector
                } else if self.seats.is_some() || self.row_height.is_some() || self.name.is_some() {
                    EntityKind::Row
                } else {
                    EntityKind::FreeShape
                };
                tracing::warn!(
                    "Unrecognized entity kind {:?}, treating payload as {}",
                    other,
                    guessed
                );
                guessed
            }
        }
    }

    /// Shape kind of the payload, guessed from its geometry when the tag is
    /// missing or unknown.
    pub fn shape_kind(&self) -> ShapeKind {
        match self.shape.as_deref() {
            Some("rect") => ShapeKind::Rect,
            Some("ellipse") => ShapeKind::Ellipse,
            Some("polygon") | Some("poly") => ShapeKind::Polygon,
            _ if !self.points.is_empty() => ShapeKind::Polygon,
            _ if self.radius_x.is_some() || self.radius_y.is_some() => ShapeKind::Ellipse,
            _ => ShapeKind::Rect,
        }
    }

    fn size_or_default(&self) -> Size {
        Size::new(
            self.width.unwrap_or(constants::DEFAULT_BOUNDS_WIDTH),
            self.height.unwrap_or(constants::DEFAULT_BOUNDS_HEIGHT),
        )
    }

    /// Rebuilds the shape geometry.
    ///
    /// A polygon without points degrades to a rectangle of the stored bounds.
    pub fn shape_geometry(&self) -> ShapeGeometry {
        let size = self.size_or_default();
        match self.shape_kind() {
            ShapeKind::Rect => ShapeGeometry::from_size(ShapeKind::Rect, size),
            ShapeKind::Ellipse => ShapeGeometry::Ellipse {
                radius_x: self.radius_x.unwrap_or(size.width / 2.0),
                radius_y: self.radius_y.unwrap_or(size.height / 2.0),
            },
            ShapeKind::Polygon if self.points.is_empty() => {
                ShapeGeometry::from_size(ShapeKind::Rect, size)
            }
            ShapeKind::Polygon => ShapeGeometry::Polygon {
                points: self.points.clone(),
            },
        }
    }

    /// Writes the geometry attributes of `shape`.
    pub(crate) fn set_shape(&mut self, shape: &ShapeGeometry) {
        let bounds = shape.bounds();
        self.shape = Some(shape.kind().as_str().to_string());
        self.width = Some(bounds.width);
        self.height = Some(bounds.height);
        match shape {
            ShapeGeometry::Rect { .. } => {}
            ShapeGeometry::Ellipse { radius_x, radius_y } => {
                self.radius_x = Some(*radius_x);
                self.radius_y = Some(*radius_y);
            }
            ShapeGeometry::Polygon { points } => self.points = points.clone(),
        }
    }

    /// Assigns fresh identifiers to this node and all its children.
    pub fn reid(&mut self) {
        self.id = Some(EntityId::new());
        for child in &mut self.children {
            child.reid();
        }
    }

    pub fn offset(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    /// Host record this seat map belongs to.
    #[serde(default)]
    pub seatmap: SeatMapRef,
    pub viewport: ViewportState,
    pub entities: Vec<EntityData>,
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// Viewport state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportState {
    pub scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl DesignFile {
    /// Create new empty design
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            seatmap: SeatMapRef::default(),
            viewport: ViewportState::default(),
            entities: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;

        std::fs::write(path.as_ref(), json).map_err(|e| Error::file(&path, e))?;

        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::file(&path, e))?;

        let mut design = Self::from_json(&content)?;
        if design.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                "Design file version {} differs from {}, loading anyway",
                design.version,
                FILE_FORMAT_VERSION
            );
        }

        // Update modified timestamp
        design.metadata.modified = Utc::now();

        Ok(design)
    }
}
