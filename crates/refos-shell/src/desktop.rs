//! Desktop shortcut strip.
//!
//! The desktop pins a small fixed set of shortcuts; clicking one launches
//! its app through the dispatcher like any other launch source.

use refos_types::app::AppKind;

/// The shortcuts pinned to the desktop, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopShortcuts {
    kinds: Vec<AppKind>,
}

impl DesktopShortcuts {
    /// The stock set: file explorer, notepad, calculator, settings.
    pub fn stock() -> Self {
        Self {
            kinds: vec![
                AppKind::FileExplorer,
                AppKind::Notepad,
                AppKind::Calculator,
                AppKind::Settings,
            ],
        }
    }

    pub fn new(kinds: Vec<AppKind>) -> Self {
        Self { kinds }
    }

    pub fn kinds(&self) -> &[AppKind] {
        &self.kinds
    }

    /// Resolve a shortcut slot to its app kind.
    pub fn get(&self, index: usize) -> Option<AppKind> {
        self.kinds.get(index).copied()
    }
}

impl Default for DesktopShortcuts {
    fn default() -> Self {
        Self::stock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_shortcuts() {
        let shortcuts = DesktopShortcuts::stock();
        assert_eq!(
            shortcuts.kinds(),
            &[
                AppKind::FileExplorer,
                AppKind::Notepad,
                AppKind::Calculator,
                AppKind::Settings,
            ]
        );
    }

    #[test]
    fn get_resolves_in_display_order() {
        let shortcuts = DesktopShortcuts::stock();
        assert_eq!(shortcuts.get(1), Some(AppKind::Notepad));
        assert_eq!(shortcuts.get(99), None);
    }

    #[test]
    fn custom_shortcut_set() {
        let shortcuts = DesktopShortcuts::new(vec![AppKind::Game, AppKind::Movie]);
        assert_eq!(shortcuts.get(0), Some(AppKind::Game));
        assert_eq!(shortcuts.kinds().len(), 2);
    }
}
