//! Launch dispatcher -- turns "open app X" into a registry operation.
//!
//! Two mutually exclusive policies exist for the same request and are chosen
//! once at construction, never blended:
//!
//! - [`LaunchPolicy::SingletonPerKind`] models traditional single-instance
//!   desktop apps: focus a visible instance, restore a minimized one, create
//!   only when none exists.
//! - [`LaunchPolicy::AlwaysNewInstance`] always creates, cascading the
//!   initial position by [`CASCADE_OFFSET`] per existing instance of the
//!   same kind so windows do not stack exactly.

use refos_types::app::AppKind;
use refos_types::catalog::AppCatalog;

use crate::registry::WindowRegistry;
use crate::window::WindowId;

/// Pixels of cascade per existing instance of the same kind, both axes,
/// unbounded.
pub const CASCADE_OFFSET: i32 = 30;

/// How `launch` treats existing instances of the requested kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchPolicy {
    /// Re-activate an existing instance; create only when none exists.
    SingletonPerKind,
    /// Always create a new instance, cascading its position.
    #[default]
    AlwaysNewInstance,
}

/// Resolves launch requests against the catalog under a fixed policy.
#[derive(Debug)]
pub struct LaunchDispatcher {
    catalog: AppCatalog,
    policy: LaunchPolicy,
}

impl LaunchDispatcher {
    pub fn new(catalog: AppCatalog, policy: LaunchPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> LaunchPolicy {
        self.policy
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    /// Open `kind`, returning the id of the instance that ended up active.
    pub fn launch(&self, registry: &mut WindowRegistry, kind: AppKind) -> WindowId {
        match self.policy {
            LaunchPolicy::SingletonPerKind => self.launch_singleton(registry, kind),
            LaunchPolicy::AlwaysNewInstance => self.launch_new(registry, kind),
        }
    }

    fn launch_singleton(&self, registry: &mut WindowRegistry, kind: AppKind) -> WindowId {
        // A visible instance wins over a minimized one.
        let visible = registry
            .windows()
            .iter()
            .find(|win| win.kind == kind && win.is_visible())
            .map(|win| win.id);
        if let Some(id) = visible {
            log::debug!("launch {kind}: focusing existing {id}");
            registry.focus(id);
            return id;
        }
        let minimized = registry
            .windows()
            .iter()
            .find(|win| win.kind == kind && !win.is_visible())
            .map(|win| win.id);
        if let Some(id) = minimized {
            log::debug!("launch {kind}: restoring minimized {id}");
            registry.restore(id);
            return id;
        }
        self.create_from_catalog(registry, kind, 0)
    }

    fn launch_new(&self, registry: &mut WindowRegistry, kind: AppKind) -> WindowId {
        let existing = registry
            .windows()
            .iter()
            .filter(|win| win.kind == kind)
            .count();
        self.create_from_catalog(registry, kind, existing as i32)
    }

    fn create_from_catalog(
        &self,
        registry: &mut WindowRegistry,
        kind: AppKind,
        cascade_steps: i32,
    ) -> WindowId {
        let config = self.catalog.get(kind);
        let position = config
            .position
            .offset(cascade_steps * CASCADE_OFFSET, cascade_steps * CASCADE_OFFSET);
        log::info!("launch {kind}: new instance at {},{}", position.x, position.y);
        registry.create(kind, config.title.clone(), position, config.size)
    }
}
