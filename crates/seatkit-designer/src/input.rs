//! Input event definitions.
//!
//! The host translates its native pointer and keyboard events into
//! [`InputEvent`]s and feeds them to
//! [`DesignerState::handle_event`](crate::DesignerState::handle_event).
//! Positions are in canvas pixels. Events are serializable so a session can
//! be recorded and replayed.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Delete,
    Backspace,
    /// A printable character, lower-cased by the host.
    Char(char),
    Other(String),
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Cmd on macOS.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::NONE
        }
    }

    /// Ctrl or Cmd.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// One input event from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Button pressed. `pos` is `None` when the host could not resolve a pointer position.
    PointerDown {
        pos: Option<Point>,
        button: MouseButton,
    },
    PointerMove {
        pos: Option<Point>,
    },
    PointerUp {
        pos: Option<Point>,
        button: MouseButton,
    },
    DoubleClick {
        pos: Option<Point>,
    },
    /// Wheel notch; negative `delta_y` zooms in.
    Wheel {
        pos: Option<Point>,
        delta_y: f64,
    },
    KeyDown {
        key: Key,
        modifiers: Modifiers,
        /// Focus is in a text field; editing shortcuts are ignored.
        in_text_input: bool,
    },
    KeyUp {
        key: Key,
    },
    /// The canvas container changed size.
    Resize {
        width: f64,
        height: f64,
    },
}

impl InputEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            InputEvent::PointerDown { button, .. } => format!("Pointer down: {:?}", button),
            InputEvent::PointerMove { .. } => "Pointer move".to_string(),
            InputEvent::PointerUp { button, .. } => format!("Pointer up: {:?}", button),
            InputEvent::DoubleClick { .. } => "Double click".to_string(),
            InputEvent::Wheel { delta_y, .. } => format!("Wheel: {:.1}", delta_y),
            InputEvent::KeyDown { key, modifiers, .. } => {
                format!("Key down: {:?} (command: {})", key, modifiers.command())
            }
            InputEvent::KeyUp { key } => format!("Key up: {:?}", key),
            InputEvent::Resize { width, height } => format!("Resize: {}x{}", width, height),
        }
    }
}
