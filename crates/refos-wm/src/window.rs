//! Window instance types.

use std::fmt;

use serde::{Deserialize, Serialize};

use refos_types::app::AppKind;
use refos_types::geometry::{Point, Size};

/// Opaque identifier for a window instance.
///
/// Allocated from a monotonically increasing counter and never reused, so an
/// id stays valid (or permanently dead) for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win#{}", self.0)
    }
}

/// One open application window.
///
/// Existence in the registry means the window is open; closing removes the
/// instance entirely rather than flagging it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInstance {
    pub id: WindowId,
    /// Which logical application this instance hosts.
    pub kind: AppKind,
    /// Display label; may differ from the kind's default title.
    pub title: String,
    /// Top-left corner in desktop coordinates.
    pub position: Point,
    pub size: Size,
    /// Stacking key; higher draws on top and holds focus candidacy.
    pub z_index: u32,
    /// Minimized windows keep their geometry but are excluded from
    /// rendering and from focus candidacy until restored.
    pub minimized: bool,
}

impl WindowInstance {
    /// Whether this instance is a focus candidate (not minimized).
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}
