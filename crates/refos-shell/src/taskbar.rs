//! Taskbar read model.
//!
//! One button per open window instance, in creation order. The taskbar is a
//! pull-based consumer: it re-derives the button list from the registry
//! whenever it re-renders, and mutates only through registry operations.

use refos_wm::{WindowId, WindowRegistry};

/// What one taskbar button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarButton {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    /// Minimized buttons render dimmed.
    pub minimized: bool,
    /// At most one button is active at a time.
    pub active: bool,
}

/// Derive the current button list from the registry.
pub fn taskbar_buttons(registry: &WindowRegistry) -> Vec<TaskbarButton> {
    registry
        .windows()
        .iter()
        .map(|win| TaskbarButton {
            id: win.id,
            title: win.title.clone(),
            icon: win.kind.icon_id().to_string(),
            minimized: win.minimized,
            active: registry.active() == Some(win.id),
        })
        .collect()
}

/// Taskbar click behavior: restore a minimized window, focus a visible one.
pub fn activate_taskbar_button(registry: &mut WindowRegistry, id: WindowId) {
    let Some(minimized) = registry.get(id).map(|win| win.minimized) else {
        return;
    };
    if minimized {
        registry.restore(id);
    } else {
        registry.focus(id);
    }
}
