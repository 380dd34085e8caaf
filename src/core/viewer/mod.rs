//! Pan and zoom viewer
//!
//! Owns the view transform and the drag state, and maps pointer and wheel
//! input onto them. Scale is always clamped; the pan offset never is.

pub mod pointer;
pub mod transform;

pub use pointer::{Modifiers, MouseEvent, Point, PointerEvent, TouchEvent, WheelEvent};
pub use transform::{transition, DragState, ViewTransform, ViewerSettings, TRANSFORM_ORIGIN};

use crate::debug;

/// Viewport state for the syllabus tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewer {
    settings: ViewerSettings,
    transform: ViewTransform,
    drag: DragState,
}

impl Viewer {
    /// Create a viewer at the identity transform
    #[must_use]
    pub fn new(settings: ViewerSettings) -> Self {
        Self {
            settings,
            transform: ViewTransform::IDENTITY,
            drag: DragState::default(),
        }
    }

    /// Current transform
    #[must_use]
    pub const fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Current scale
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Current pan offset
    #[must_use]
    pub const fn position(&self) -> Point {
        self.transform.position
    }

    /// Whether a drag is in progress
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Zoom bounds and steps in use
    #[must_use]
    pub const fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    /// Transition for the content layer in its current state
    #[must_use]
    pub const fn transition(&self) -> &'static str {
        transition(self.drag.is_dragging)
    }

    /// Start a drag (mouse down or touch start)
    pub fn begin_drag(&mut self, event: &impl PointerEvent) {
        let pointer = event.position();
        if !pointer.is_finite() {
            return;
        }
        self.drag = DragState {
            is_dragging: true,
            drag_start: pointer - self.transform.position,
        };
    }

    /// Continue a drag; moves outside a drag are ignored
    ///
    /// # Returns
    /// `true` if the pan offset changed
    pub fn drag_to(&mut self, event: &impl PointerEvent) -> bool {
        if !self.drag.is_dragging {
            return false;
        }
        let pointer = event.position();
        if !pointer.is_finite() {
            return false;
        }
        let position = pointer - self.drag.drag_start;
        let changed = position != self.transform.position;
        self.transform.position = position;
        changed
    }

    /// Finish a drag (mouse up, mouse leave, touch end)
    pub fn end_drag(&mut self) {
        self.drag.is_dragging = false;
    }

    /// Apply a wheel event; only modifier-held wheels zoom
    ///
    /// # Returns
    /// `true` if the event was consumed as a zoom
    pub fn wheel(&mut self, event: &WheelEvent) -> bool {
        if !event.modifiers.zooms() {
            return false;
        }
        let delta = -self.settings.wheel_sensitivity * event.delta_y;
        self.zoom_by(delta);
        true
    }

    /// Step the scale up by the configured zoom step
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.settings.zoom_step);
    }

    /// Step the scale down by the configured zoom step
    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.settings.zoom_step);
    }

    /// Return to scale 1.0 at offset (0, 0)
    pub fn reset(&mut self) {
        self.transform = ViewTransform::IDENTITY;
    }

    fn zoom_by(&mut self, delta: f64) {
        if !delta.is_finite() {
            debug!("Ignoring non-finite zoom delta {delta}");
            return;
        }
        self.transform.scale = self.settings.clamp_scale(self.transform.scale + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_drag_tracks_pointer() {
        let mut viewer = Viewer::default();
        viewer.begin_drag(&MouseEvent::at(100.0, 100.0));
        assert!(viewer.is_dragging());
        assert!(viewer.drag_to(&MouseEvent::at(150.0, 130.0)));
        viewer.end_drag();

        assert_eq!(viewer.position(), Point::new(50.0, 30.0));
        assert!(!viewer.is_dragging());
    }

    #[test]
    fn test_second_drag_continues_from_offset() {
        let mut viewer = Viewer::default();
        viewer.begin_drag(&MouseEvent::at(100.0, 100.0));
        viewer.drag_to(&MouseEvent::at(150.0, 130.0));
        viewer.end_drag();

        viewer.begin_drag(&MouseEvent::at(0.0, 0.0));
        viewer.drag_to(&MouseEvent::at(-10.0, 20.0));
        assert_eq!(viewer.position(), Point::new(40.0, 50.0));
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut viewer = Viewer::default();
        assert!(!viewer.drag_to(&MouseEvent::at(500.0, 500.0)));
        assert_eq!(viewer.position(), Point::ZERO);
    }

    #[test]
    fn test_touch_drag() {
        let mut viewer = Viewer::default();
        let start = TouchEvent::new(vec![Point::new(10.0, 10.0)]).unwrap();
        let moved = TouchEvent::new(vec![Point::new(5.0, 40.0), Point::new(99.0, 99.0)]).unwrap();
        viewer.begin_drag(&start);
        viewer.drag_to(&moved);
        assert_eq!(viewer.position(), Point::new(-5.0, 30.0));
    }

    #[test]
    fn test_offset_is_unbounded() {
        let mut viewer = Viewer::default();
        viewer.begin_drag(&MouseEvent::at(0.0, 0.0));
        viewer.drag_to(&MouseEvent::at(-1.0e6, 2.5e6));
        assert_eq!(viewer.position(), Point::new(-1.0e6, 2.5e6));
    }

    #[test]
    fn test_wheel_with_modifier_zooms() {
        let mut viewer = Viewer::default();
        assert!(viewer.wheel(&WheelEvent::new(-100.0, Modifiers::CTRL)));
        assert!(close(viewer.scale(), 2.0));
    }

    #[test]
    fn test_wheel_without_modifier_is_ignored() {
        let mut viewer = Viewer::default();
        assert!(!viewer.wheel(&WheelEvent::new(-100.0, Modifiers::NONE)));
        assert!(close(viewer.scale(), 1.0));
        assert_eq!(viewer.position(), Point::ZERO);
    }

    #[test]
    fn test_wheel_clamps_both_ends() {
        let mut viewer = Viewer::default();
        viewer.wheel(&WheelEvent::new(-10_000.0, Modifiers::CTRL));
        assert!(close(viewer.scale(), 3.0));
        viewer.wheel(&WheelEvent::new(10_000.0, Modifiers::CTRL));
        assert!(close(viewer.scale(), 0.5));
    }

    #[test]
    fn test_non_finite_wheel_keeps_scale() {
        let mut viewer = Viewer::default();
        viewer.wheel(&WheelEvent::new(f64::NAN, Modifiers::CTRL));
        viewer.wheel(&WheelEvent::new(f64::INFINITY, Modifiers::CTRL));
        assert!(close(viewer.scale(), 1.0));
    }

    #[test]
    fn test_zoom_controls_step_and_clamp() {
        let mut viewer = Viewer::default();
        viewer.zoom_in();
        assert!(close(viewer.scale(), 1.2));
        for _ in 0..20 {
            viewer.zoom_in();
        }
        assert!(close(viewer.scale(), 3.0));
        for _ in 0..20 {
            viewer.zoom_out();
        }
        assert!(close(viewer.scale(), 0.5));
    }

    #[test]
    fn test_reset() {
        let mut viewer = Viewer::default();
        viewer.zoom_in();
        viewer.begin_drag(&MouseEvent::at(1.0, 1.0));
        viewer.drag_to(&MouseEvent::at(80.0, -20.0));
        viewer.end_drag();

        viewer.reset();
        assert_eq!(viewer.transform(), ViewTransform::IDENTITY);
    }

    #[test]
    fn test_transition_follows_drag() {
        let mut viewer = Viewer::default();
        assert_eq!(viewer.transition(), transform::SMOOTH_TRANSITION);
        viewer.begin_drag(&MouseEvent::at(0.0, 0.0));
        assert_eq!(viewer.transition(), "none");
    }

    #[test]
    fn test_custom_bounds() {
        let mut viewer = Viewer::new(ViewerSettings {
            min_scale: 0.25,
            max_scale: 4.0,
            zoom_step: 0.5,
            wheel_sensitivity: 0.001,
        });
        viewer.wheel(&WheelEvent::new(-1000.0, Modifiers::CTRL));
        assert!(close(viewer.scale(), 2.0));
        viewer.zoom_in();
        viewer.zoom_in();
        viewer.zoom_in();
        assert!(close(viewer.scale(), 3.5));
    }
}
