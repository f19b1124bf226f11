// src/pan_zoom/transform.rs
use super::PanZoomOptions;

/// Scale and translation applied to an embedded SVG by the native backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    min_scale: f64,
    max_scale: f64,
    sensitivity: f64,
}

impl ViewTransform {
    pub fn new(options: &PanZoomOptions) -> Self {
        let min_scale = options.min_zoom.max(f64::EPSILON);
        Self {
            scale: 1.0_f64.clamp(min_scale, options.max_zoom.max(min_scale)),
            offset_x: 0.0,
            offset_y: 0.0,
            min_scale,
            max_scale: options.max_zoom.max(min_scale),
            sensitivity: options.zoom_scale_sensitivity.max(0.0),
        }
    }

    /// Multiply the scale by `factor`, keeping the content point under
    /// (`x`, `y`) fixed on screen.
    pub fn zoom_at(&mut self, factor: f64, x: f64, y: f64) {
        let new_scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        let content_x = (x - self.offset_x) / self.scale;
        let content_y = (y - self.offset_y) / self.scale;
        self.offset_x = x - content_x * new_scale;
        self.offset_y = y - content_y * new_scale;
        self.scale = new_scale;
    }

    /// Wheel notch in, or out when `delta_y` is positive.
    pub fn wheel(&mut self, delta_y: f64, x: f64, y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let step = 1.0 + self.sensitivity;
        let factor = if delta_y < 0.0 { step } else { 1.0 / step };
        self.zoom_at(factor, x, y);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_at(1.0 + self.sensitivity, 0.0, 0.0);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_at(1.0 / (1.0 + self.sensitivity), 0.0, 0.0);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn reset(&mut self) {
        self.scale = 1.0_f64.clamp(self.min_scale, self.max_scale);
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// CSS `transform` value, meant for `transform-origin: 0 0`.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset_x, self.offset_y, self.scale
        )
    }
}
