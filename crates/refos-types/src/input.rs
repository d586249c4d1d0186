//! Platform-agnostic pointer input events.
//!
//! Whatever hosts the desktop (native event loop, test harness) maps its
//! native input to these events; the window core never sees raw platform
//! input.

use serde::{Deserialize, Serialize};

/// Pointer buttons the desktop distinguishes.
///
/// Only `Primary` starts drag/resize gestures; the others are passed through
/// to hosted content by the shell and ignored by the window core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A pointer event in desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// A button pressed at an absolute position.
    ButtonPress {
        button: PointerButton,
        x: i32,
        y: i32,
    },
    /// Pointer moved to an absolute position (buttons unchanged).
    Move { x: i32, y: i32 },
    /// A button released at an absolute position.
    ButtonRelease {
        button: PointerButton,
        x: i32,
        y: i32,
    },
    /// Abort the in-flight gesture, reverting its effects (Escape, focus
    /// loss). Has no effect when no gesture is active.
    Cancel,
}
