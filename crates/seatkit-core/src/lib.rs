//! # SeatKit Core
//!
//! Core types and shared constants for SeatKit.
//! Provides the error model used by every layer of the seat-map editor
//! and the default values the layout algorithms fall back to.

pub mod constants;
pub mod error;

pub use error::{Error, Result, SceneError};
