//! Undo/redo functionality for designer state.

use super::DesignerState;

impl DesignerState {
    /// Returns true if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous snapshot. No-op at the initial state.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(&snapshot);
        self.is_modified = true;
        tracing::debug!("Undo ({} entries left)", self.history.undo_len());
        true
    }

    /// Re-applies the last undone snapshot. No-op when nothing was undone.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(&snapshot);
        self.is_modified = true;
        tracing::debug!("Redo ({} entries left)", self.history.redo_len());
        true
    }

    /// Drops all history and starts over from the current scene.
    pub fn clear_history(&mut self) {
        self.history.reset(self.canvas.snapshot());
    }
}
