//! Hosted-app content registry.
//!
//! Maps an [`AppKind`] to a factory producing the content mounted inside a
//! window's body. Factories are registered at startup, so adding a hosted
//! application never touches the core's dispatch: unregistered kinds mount
//! a placeholder instead.
//!
//! Hosted content is fully decoupled from the window core; the only
//! contract is this trait.

use std::collections::HashMap;

use refos_types::app::AppKind;

/// Content mounted inside a window's body.
///
/// Rendering is out of scope for the shell, so the surface is deliberately
/// small: a status line the chrome may show, and a text snapshot for
/// headless drivers.
pub trait HostedContent {
    /// Short status line (e.g. an open file name) or `None` for the default
    /// window title.
    fn status_line(&self) -> Option<String> {
        None
    }

    /// Plain-text snapshot of the content, for logging and tests.
    fn snapshot(&self) -> String;
}

type ContentFactory = Box<dyn Fn() -> Box<dyn HostedContent>>;

/// Startup-populated map from app kind to content factory.
#[derive(Default)]
pub struct ContentRegistry {
    factories: HashMap<AppKind, ContentFactory>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for a kind, replacing any previous one.
    pub fn register<F, C>(&mut self, kind: AppKind, factory: F)
    where
        F: Fn() -> C + 'static,
        C: HostedContent + 'static,
    {
        log::debug!("registering content factory for {kind}");
        self.factories
            .insert(kind, Box::new(move || Box::new(factory())));
    }

    pub fn is_registered(&self, kind: AppKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Produce content for a kind, or a placeholder when none is registered.
    pub fn mount(&self, kind: AppKind) -> Box<dyn HostedContent> {
        match self.factories.get(&kind) {
            Some(factory) => factory(),
            None => {
                log::warn!("no content registered for {kind}, mounting placeholder");
                Box::new(PlaceholderContent { kind })
            },
        }
    }
}

/// Stand-in body for kinds without a registered factory.
struct PlaceholderContent {
    kind: AppKind,
}

impl HostedContent for PlaceholderContent {
    fn snapshot(&self) -> String {
        format!("{} is not installed", self.kind.default_title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct NotepadContent {
        file: Option<String>,
    }

    impl HostedContent for NotepadContent {
        fn status_line(&self) -> Option<String> {
            self.file.clone()
        }

        fn snapshot(&self) -> String {
            match &self.file {
                Some(name) => format!("editing {name}"),
                None => "empty buffer".to_string(),
            }
        }
    }

    #[test]
    fn mount_uses_registered_factory() {
        let mut registry = ContentRegistry::new();
        registry.register(AppKind::Notepad, || NotepadContent {
            file: Some("todo.txt".to_string()),
        });
        assert!(registry.is_registered(AppKind::Notepad));
        let content = registry.mount(AppKind::Notepad);
        assert_eq!(content.snapshot(), "editing todo.txt");
        assert_eq!(content.status_line(), Some("todo.txt".to_string()));
    }

    #[test]
    fn mount_falls_back_to_placeholder() {
        let registry = ContentRegistry::new();
        assert!(!registry.is_registered(AppKind::Game));
        let content = registry.mount(AppKind::Game);
        assert_eq!(content.snapshot(), "RefGames is not installed");
        assert_eq!(content.status_line(), None);
    }

    #[test]
    fn register_replaces_previous_factory() {
        let mut registry = ContentRegistry::new();
        registry.register(AppKind::Notepad, || NotepadContent { file: None });
        registry.register(AppKind::Notepad, || NotepadContent {
            file: Some("new.txt".to_string()),
        });
        assert_eq!(registry.mount(AppKind::Notepad).snapshot(), "editing new.txt");
    }

    #[test]
    fn each_mount_produces_fresh_content() {
        let mut registry = ContentRegistry::new();
        registry.register(AppKind::Notepad, || NotepadContent { file: None });
        let a = registry.mount(AppKind::Notepad);
        let b = registry.mount(AppKind::Notepad);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
