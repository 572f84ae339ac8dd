//! Snapshot-based undo/redo.
//!
//! Every committed state is a full serialization of the top-level
//! entities. The undo stack always holds at least the initial snapshot,
//! and its top is the state currently on the canvas.

use crate::serialization::EntityData;

/// A full scene state.
pub type Snapshot = Vec<EntityData>;

/// Undo and redo stacks of scene snapshots.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    suppressed: bool,
}

impl HistoryManager {
    /// Creates a history whose only entry is `initial`.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            undo_stack: vec![initial],
            redo_stack: Vec::new(),
            suppressed: false,
        }
    }

    /// Drops all entries and starts over from `initial`.
    pub fn reset(&mut self, initial: Snapshot) {
        self.undo_stack = vec![initial];
        self.redo_stack.clear();
        self.suppressed = false;
    }

    /// Records a new state and clears the redo stack.
    ///
    /// Returns `false` while suppressed (during a restore).
    pub fn commit(&mut self, snapshot: Snapshot) -> bool {
        if self.suppressed {
            tracing::debug!("History commit suppressed");
            return false;
        }
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        true
    }

    /// Steps back; returns the snapshot to restore.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.undo_stack.len() <= 1 {
            return None;
        }
        let current = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        self.undo_stack.last()
    }

    /// Steps forward; returns the snapshot to restore.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(next);
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The state currently on the canvas.
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo_stack.last()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Blocks commits until [`resume`](Self::resume) is called.
    pub fn suppress(&mut self) {
        self.suppressed = true;
    }

    pub fn resume(&mut self) {
        self.suppressed = false;
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
