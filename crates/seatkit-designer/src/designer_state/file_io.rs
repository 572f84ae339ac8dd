//! File I/O operations (save, load, new) for designer state.

use std::path::Path;

use seatkit_core::Result;

use super::DesignerState;
use crate::serialization::DesignFile;

impl DesignerState {
    /// Builds the persisted document for the current scene.
    pub fn to_design_file(&self) -> DesignFile {
        let mut design = DesignFile::new(&self.design_name);
        design.seatmap = self.host.seatmap.clone();
        design.viewport.scale = self.viewport.scale();
        design.viewport.pan_x = self.viewport.pan_x();
        design.viewport.pan_y = self.viewport.pan_y();
        design.entities = self.canvas.snapshot();
        design
    }

    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let design = self.to_design_file();
        design.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!("Saved design to {}", path.as_ref().display());
        Ok(())
    }

    /// Replaces the scene with a loaded document; history restarts there.
    pub fn load_design(&mut self, design: &DesignFile) {
        self.history.suppress();
        self.session = None;
        self.draft = None;
        self.canvas.restore(&design.entities);
        self.history.resume();
        self.clear_selection();

        self.viewport.set_scale(design.viewport.scale);
        self.viewport
            .set_pan(design.viewport.pan_x, design.viewport.pan_y);
        self.design_name = design.metadata.name.clone();
        self.clear_history();
    }

    /// Load design from file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let design = DesignFile::load_from_file(&path)?;
        self.load_design(&design);

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!(
            "Loaded design {} ({} entities)",
            self.design_name,
            design.entities.len()
        );
        Ok(())
    }

    /// Create new design (clear all).
    pub fn new_design(&mut self) {
        self.canvas.clear();
        self.session = None;
        self.draft = None;
        self.clear_selection();
        self.viewport.reset();
        self.current_file_path = None;
        self.is_modified = false;
        self.design_name = "Untitled".to_string();
        self.clear_history();
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.design_name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
