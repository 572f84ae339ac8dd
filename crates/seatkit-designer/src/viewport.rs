//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and world
//! coordinates (seat-map space). Both grow rightwards and downwards; the
//! mapping is a uniform scale followed by a pan offset.

use std::fmt;

use crate::geometry::Point;

/// Represents the viewport transformation state (scale and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    min_scale: f64,
    max_scale: f64,
}

impl Viewport {
    /// Creates a new viewport at 1:1 scale with no pan.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
            min_scale: 0.2,
            max_scale: 4.0,
        }
    }

    /// Sets the allowed scale range and re-clamps the current scale.
    pub fn with_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.scale = self.clamp_scale(self.scale);
        self
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the container resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current scale (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Sets the scale, clamped to the allowed range.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = self.clamp_scale(scale);
        }
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount in pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts pixel coordinates to world coordinates.
    ///
    /// ```text
    /// world = (pixel - pan) / scale
    /// ```
    pub fn screen_to_world(&self, pixel: Point) -> Point {
        Point::new(
            (pixel.x - self.pan_x) / self.scale,
            (pixel.y - self.pan_y) / self.scale,
        )
    }

    /// Converts world coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel = world * scale + pan
    /// ```
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.pan_x,
            world.y * self.scale + self.pan_y,
        )
    }

    /// Changes the scale while keeping the world point under `pivot` (pixels) fixed.
    pub fn zoom_at(&mut self, pivot: Point, new_scale: f64) {
        if !new_scale.is_finite() {
            return;
        }
        let anchor = self.screen_to_world(pivot);
        self.scale = self.clamp_scale(new_scale);
        self.pan_x = pivot.x - anchor.x * self.scale;
        self.pan_y = pivot.y - anchor.y * self.scale;
    }

    /// Applies one wheel notch: negative delta zooms in, positive zooms out.
    pub fn wheel_zoom(&mut self, pivot: Point, delta_y: f64, factor: f64) {
        let new_scale = if delta_y > 0.0 {
            self.scale / factor
        } else {
            self.scale * factor
        };
        self.zoom_at(pivot, new_scale);
    }

    /// Fits the given bounding box into the viewport with padding.
    ///
    /// # Arguments
    /// * `min`, `max` - Corners of the bounding box (world coordinates)
    /// * `padding` - Fraction of the viewport reserved per edge (0.0 - 0.5)
    ///
    /// Centers the content and picks the largest scale that fits.
    pub fn fit_to_bounds(&mut self, min: Point, max: Point, padding: f64) {
        let width = max.x - min.x;
        let height = max.y - min.y;
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - padding * 2.0;
        let scale_x = self.canvas_width * padding_factor / width;
        let scale_y = self.canvas_height * padding_factor / height;
        self.scale = self.clamp_scale(scale_x.min(scale_y));

        let center = Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
        self.pan_x = self.canvas_width / 2.0 - center.x * self.scale;
        self.pan_y = self.canvas_height / 2.0 - center.y * self.scale;
    }

    /// Resets viewport to default state (1:1 scale, no pan).
    pub fn reset(&mut self) {
        self.scale = 1.0_f64.clamp(self.min_scale, self.max_scale);
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
