//! Window registry -- single source of truth for all window instances.
//!
//! Every mutation is a synchronous, total state transition: operating on an
//! id that is no longer present is a silent no-op, never an error. Higher
//! layers (taskbar buttons, window chrome) call these operations without
//! existence checks, and ids can only come from [`WindowRegistry::create`].
//!
//! The one invariant worth stating: after every operation the active window,
//! if any, is the top-most non-minimized instance reachable by id. Any
//! operation that can invalidate the active id (`close`, `minimize`)
//! deterministically reassigns it by "highest z-index wins".

use refos_types::app::AppKind;
use refos_types::geometry::{Point, Size};

use crate::window::{WindowId, WindowInstance};

/// Owns the collection of window instances, the active-window id, and the
/// z-index high-water mark.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    instances: Vec<WindowInstance>,
    active: Option<WindowId>,
    max_z_index: u32,
    next_id: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutators -------------------------------------------------------------

    /// Open a new window instance and make it active.
    ///
    /// Allocates a fresh id and the next z-index above everything ever
    /// assigned. Position and size are caller-supplied and taken as-is;
    /// out-of-view geometry is a user-correctable state, not an error.
    pub fn create(
        &mut self,
        kind: AppKind,
        title: impl Into<String>,
        position: Point,
        size: Size,
    ) -> WindowId {
        self.next_id += 1;
        let id = WindowId(self.next_id);
        let z_index = self.bump_z();
        log::debug!("create {id} kind={kind} z={z_index}");
        self.instances.push(WindowInstance {
            id,
            kind,
            title: title.into(),
            position,
            size,
            z_index,
            minimized: false,
        });
        self.active = Some(id);
        id
    }

    /// Remove a window instance. Idempotent: closing an absent id is a no-op.
    pub fn close(&mut self, id: WindowId) {
        let before = self.instances.len();
        self.instances.retain(|win| win.id != id);
        if self.instances.len() == before {
            return;
        }
        log::debug!("close {id}");
        if self.active == Some(id) {
            self.reassign_active();
        }
    }

    /// Hide a window, keeping its geometry and identity for later restore.
    pub fn minimize(&mut self, id: WindowId) {
        let Some(win) = self.get_mut(id) else {
            return;
        };
        win.minimized = true;
        log::debug!("minimize {id}");
        if self.active == Some(id) {
            self.reassign_active();
        }
    }

    /// Un-minimize a window, raise it to the top, and make it active.
    pub fn restore(&mut self, id: WindowId) {
        if self.get(id).is_none() {
            return;
        }
        let z_index = self.bump_z();
        if let Some(win) = self.get_mut(id) {
            win.minimized = false;
            win.z_index = z_index;
        }
        self.active = Some(id);
        log::debug!("restore {id} z={z_index}");
    }

    /// Raise an already-visible window to the top and make it active.
    ///
    /// Same as [`restore`](Self::restore) minus the minimized clear.
    pub fn focus(&mut self, id: WindowId) {
        if self.get(id).is_none() {
            return;
        }
        let z_index = self.bump_z();
        if let Some(win) = self.get_mut(id) {
            win.z_index = z_index;
        }
        self.active = Some(id);
        log::trace!("focus {id} z={z_index}");
    }

    /// Overwrite a window's position. No bounds clamping: windows may sit
    /// partly or fully off-screen, mirroring desktop OS permissiveness.
    pub fn move_to(&mut self, id: WindowId, position: Point) {
        if let Some(win) = self.get_mut(id) {
            win.position = position;
        }
    }

    /// Overwrite a window's size. The interaction layer clamps to the
    /// minimums before calling; the registry itself stays policy-free.
    pub fn resize(&mut self, id: WindowId, size: Size) {
        if let Some(win) = self.get_mut(id) {
            win.size = size;
        }
    }

    // -- Read accessors -------------------------------------------------------

    /// All instances, in creation order.
    pub fn windows(&self) -> &[WindowInstance] {
        &self.instances
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowInstance> {
        self.instances.iter().find(|win| win.id == id)
    }

    /// The active window id, if any. Always references a live,
    /// non-minimized instance.
    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    /// High-water mark of every z-index ever assigned (monotone; may exceed
    /// the maximum currently present once windows have been closed).
    pub fn max_z_index(&self) -> u32 {
        self.max_z_index
    }

    pub fn window_count(&self) -> usize {
        self.instances.len()
    }

    /// Non-minimized instances ordered bottom-to-top by z-index, for the
    /// shell to render back-to-front.
    pub fn visible_stack(&self) -> Vec<&WindowInstance> {
        let mut stack: Vec<&WindowInstance> =
            self.instances.iter().filter(|win| win.is_visible()).collect();
        stack.sort_by_key(|win| win.z_index);
        stack
    }

    // -- Internals ------------------------------------------------------------

    fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowInstance> {
        self.instances.iter_mut().find(|win| win.id == id)
    }

    fn bump_z(&mut self) -> u32 {
        self.max_z_index += 1;
        self.max_z_index
    }

    /// Point `active` at the highest-z non-minimized instance, or clear it.
    /// Z-indices are unique by monotonic allocation, so the winner is
    /// deterministic.
    fn reassign_active(&mut self) {
        self.active = self
            .instances
            .iter()
            .filter(|win| win.is_visible())
            .max_by_key(|win| win.z_index)
            .map(|win| win.id);
        log::trace!("active -> {:?}", self.active);
    }
}
