//! Error handling for SeatKit
//!
//! Provides the error types shared by the scene model and the editor:
//! - Scene errors (lookups, placement, geometry preconditions)
//! - I/O and JSON errors from design files
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scene error type
///
/// Represents failures of scene-model operations. The editor layer turns
/// these into status messages or silent no-ops; they never reach the input
/// dispatcher.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// No entity with this identifier exists in the scene
    #[error("Entity not found: {id}")]
    EntityNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The entity exists but is of another kind
    #[error("Entity {id} is a {actual}, expected a {expected}")]
    WrongKind {
        /// The identifier that was looked up.
        id: String,
        /// The kind the operation needs.
        expected: &'static str,
        /// The kind that was found.
        actual: &'static str,
    },

    /// A row could not be placed without overlapping its siblings
    #[error("No space available in sector {sector} for a row of height {row_height}")]
    NoSpace {
        /// The sector that was full.
        sector: String,
        /// Height of the row that did not fit.
        row_height: f64,
    },

    /// A polygon sector needs at least three vertices
    #[error("Polygon needs at least 3 points, got {points}")]
    PolygonTooSmall {
        /// Number of points that were supplied.
        points: usize,
    },

    /// A polygon vertex index is out of range
    #[error("Vertex {index} out of range for a polygon of {len} points")]
    VertexOutOfRange {
        /// The requested vertex index.
        index: usize,
        /// Number of vertices of the polygon.
        len: usize,
    },

    /// A serialized payload could not be turned into an entity
    #[error("Invalid payload: {reason}")]
    InvalidPayload {
        /// Why the payload was rejected.
        reason: String,
    },
}

impl SceneError {
    /// Shorthand for [`SceneError::EntityNotFound`].
    pub fn not_found(id: impl ToString) -> Self {
        SceneError::EntityNotFound { id: id.to_string() }
    }

    /// Check if this is a placement failure
    pub fn is_no_space(&self) -> bool {
        matches!(self, SceneError::NoSpace { .. })
    }
}

/// Main error type for SeatKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File access error, with the path that failed
    #[error("Failed to access {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Wrap an I/O error with the file it happened on
    pub fn file(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Error::File {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Check if this is a scene error
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
