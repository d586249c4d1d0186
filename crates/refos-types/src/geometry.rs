//! Desktop-space geometry primitives.
//!
//! Coordinates are in the desktop's own coordinate space with the origin at
//! the top-left. Positions may go negative transiently during pointer math;
//! stored window positions are clamped to >= 0 by the interaction layer.

use serde::{Deserialize, Serialize};

/// Minimum width a managed window may shrink to.
pub const MIN_WINDOW_WIDTH: u32 = 300;
/// Minimum height a managed window may shrink to.
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// A top-left position in desktop space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift both axes by the given deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Clamp each axis to be non-negative.
    pub fn clamped_origin(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

/// A window extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Floor both dimensions at the managed-window minimums.
    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }

    /// Whether both dimensions meet the managed-window minimums.
    pub fn meets_min(self) -> bool {
        self.width >= MIN_WINDOW_WIDTH && self.height >= MIN_WINDOW_HEIGHT
    }
}
