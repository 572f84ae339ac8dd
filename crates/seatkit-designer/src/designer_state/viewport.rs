//! Zoom, pan and resize refit for designer state.

use std::time::{Duration, Instant};

use seatkit_core::constants::VIEW_PADDING;

use super::{DesignerState, PendingRefit};
use crate::geometry::{Point, Size};

impl DesignerState {
    /// Fits all content into the view; resets the view when the scene is empty.
    pub fn zoom_to_fit(&mut self) {
        match self.canvas.content_bounds() {
            Some((min, max)) => self.viewport.fit_to_bounds(min, max, VIEW_PADDING),
            None => self.viewport.reset(),
        }
        tracing::debug!("Zoom to fit: {}", self.viewport);
    }

    /// Zooms by one wheel notch around a screen point.
    pub fn zoom_at_pointer(&mut self, pivot: Point, delta_y: f64) {
        self.viewport
            .wheel_zoom(pivot, delta_y, self.settings.wheel_zoom_factor);
    }

    /// Schedules a canvas resize. A later request replaces a pending one.
    pub fn request_refit(&mut self, width: f64, height: f64, now: Instant) {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.pending_refit = Some(PendingRefit {
            size: Size::new(width, height),
            due: now + Duration::from_millis(self.settings.refit_debounce_ms),
        });
    }

    pub fn has_pending_refit(&self) -> bool {
        self.pending_refit.is_some()
    }

    /// Applies deferred work that is due. Returns whether anything ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending_refit else {
            return false;
        };
        if now < pending.due {
            return false;
        }
        self.pending_refit = None;
        self.viewport
            .set_canvas_size(pending.size.width, pending.size.height);
        tracing::debug!(
            "Canvas resized to {}x{}",
            pending.size.width,
            pending.size.height
        );
        true
    }
}
