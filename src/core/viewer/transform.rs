//! View transform and drag state

use super::Point;

/// CSS transform origin of the content layer
pub const TRANSFORM_ORIGIN: &str = "center top";

/// Transition applied while the content is not being dragged
pub const SMOOTH_TRANSITION: &str = "transform 0.1s ease-out";

/// Zoom bounds and step sizes for the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    /// Smallest allowed scale
    pub min_scale: f64,
    /// Largest allowed scale
    pub max_scale: f64,
    /// Scale change per zoom-in / zoom-out control press
    pub zoom_step: f64,
    /// Scale change per wheel delta unit (applied with inverted sign)
    pub wheel_sensitivity: f64,
}

impl ViewerSettings {
    /// Default smallest scale
    pub const MIN_SCALE: f64 = 0.5;
    /// Default largest scale
    pub const MAX_SCALE: f64 = 3.0;
    /// Default zoom control step
    pub const ZOOM_STEP: f64 = 0.2;
    /// Default wheel sensitivity
    pub const WHEEL_SENSITIVITY: f64 = 0.01;

    /// Clamp a scale into `[min_scale, max_scale]`
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Check that the settings describe a usable zoom range
    ///
    /// # Errors
    /// Returns a message naming the offending value
    pub fn validate(&self) -> Result<(), String> {
        let all_finite = [
            self.min_scale,
            self.max_scale,
            self.zoom_step,
            self.wheel_sensitivity,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err("Viewer settings must be finite numbers".to_string());
        }
        if self.min_scale <= 0.0 {
            return Err(format!("min_scale must be positive, got {}", self.min_scale));
        }
        if self.min_scale > self.max_scale {
            return Err(format!(
                "min_scale ({}) must not exceed max_scale ({})",
                self.min_scale, self.max_scale
            ));
        }
        if !(self.min_scale..=self.max_scale).contains(&1.0) {
            return Err("Zoom range must include the reset scale 1.0".to_string());
        }
        if self.zoom_step <= 0.0 {
            return Err(format!("zoom_step must be positive, got {}", self.zoom_step));
        }
        if self.wheel_sensitivity < 0.0 {
            return Err(format!(
                "wheel_sensitivity must not be negative, got {}",
                self.wheel_sensitivity
            ));
        }
        Ok(())
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            min_scale: Self::MIN_SCALE,
            max_scale: Self::MAX_SCALE,
            zoom_step: Self::ZOOM_STEP,
            wheel_sensitivity: Self::WHEEL_SENSITIVITY,
        }
    }
}

/// Pan offset and zoom scale applied to the tree layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Zoom factor
    pub scale: f64,
    /// Translation; never bounded
    pub position: Point,
}

impl ViewTransform {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        position: Point::ZERO,
    };

    /// CSS transform string: translate first, then scale
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.position.x, self.position.y, self.scale
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Drag bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag is in progress
    pub is_dragging: bool,
    /// Pointer position minus content offset at drag start
    pub drag_start: Point,
}

/// Transition for the content layer; dragging applies moves immediately
#[must_use]
pub const fn transition(is_dragging: bool) -> &'static str {
    if is_dragging {
        "none"
    } else {
        SMOOTH_TRANSITION
    }
}
