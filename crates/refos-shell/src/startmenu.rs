//! Start menu popup state.
//!
//! The menu lists every catalog entry; activating an item returns the kind
//! to launch and closes the popup. Launching from anywhere (desktop
//! shortcut, taskbar) also closes it, so the shell calls
//! [`StartMenuState::close`] on every launch.

use refos_types::app::AppKind;
use refos_types::catalog::AppCatalog;

/// One row in the start menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartMenuEntry {
    pub kind: AppKind,
    pub label: String,
    pub icon: String,
}

/// Runtime state for the start menu popup.
#[derive(Debug, Default)]
pub struct StartMenuState {
    open: bool,
}

impl StartMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Menu rows derived from the catalog, in catalog order.
    pub fn entries(&self, catalog: &AppCatalog) -> Vec<StartMenuEntry> {
        catalog
            .iter()
            .map(|(kind, config)| StartMenuEntry {
                kind,
                label: config.title.clone(),
                icon: config.icon.clone(),
            })
            .collect()
    }

    /// Activate a row: closes the popup and hands back the kind to launch.
    pub fn activate(&mut self, entry: &StartMenuEntry) -> AppKind {
        self.close();
        entry.kind
    }
}
