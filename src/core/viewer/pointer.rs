//! Pointer input for the viewer
//!
//! Mouse and touch input both reduce to a single [`PointerEvent`] so the
//! drag logic never has to know which device produced an event.

use std::ops::{Add, Sub};

/// A position or offset in viewport pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// The origin
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Anything that can start or continue a drag
pub trait PointerEvent {
    /// Client position of the pointer
    fn position(&self) -> Point;
}

/// Mouse button or move event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Client position of the cursor
    pub client: Point,
}

impl MouseEvent {
    /// Create a mouse event at the given client coordinates
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            client: Point::new(x, y),
        }
    }
}

impl PointerEvent for MouseEvent {
    fn position(&self) -> Point {
        self.client
    }
}

/// Touch start or move event; only the first touch point drives the drag
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    touches: Vec<Point>,
}

impl TouchEvent {
    /// Create a touch event from the active touch points
    ///
    /// # Returns
    /// `None` when no touch point is present
    #[must_use]
    pub fn new(touches: Vec<Point>) -> Option<Self> {
        if touches.is_empty() {
            None
        } else {
            Some(Self { touches })
        }
    }

    /// All active touch points
    #[must_use]
    pub fn touches(&self) -> &[Point] {
        &self.touches
    }
}

impl PointerEvent for TouchEvent {
    fn position(&self) -> Point {
        self.touches[0]
    }
}

/// Keyboard modifiers held during a wheel event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Control key
    pub ctrl: bool,
    /// Command / Windows key
    pub meta: bool,
    /// Shift key
    pub shift: bool,
    /// Alt / Option key
    pub alt: bool,
}

impl Modifiers {
    /// No modifier held
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Only Control held
    pub const CTRL: Self = Self {
        ctrl: true,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Whether the combination turns a wheel event into a zoom
    #[must_use]
    pub const fn zooms(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Scroll wheel event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Vertical scroll delta; negative scrolls up
    pub delta_y: f64,
    /// Modifiers held while scrolling
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Create a wheel event
    #[must_use]
    pub const fn new(delta_y: f64, modifiers: Modifiers) -> Self {
        Self { delta_y, modifiers }
    }
}
