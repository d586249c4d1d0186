//! Window manager core for RefOS.
//!
//! Three layers, each an explicit owned store passed by `&mut` to whoever
//! drives it (no ambient globals):
//!
//! - [`registry::WindowRegistry`] -- single source of truth for window
//!   instances, their geometry, visibility, z-order, and the active window.
//! - [`launch::LaunchDispatcher`] -- maps an app kind to a registry entry,
//!   creating or re-activating instances per a configurable policy.
//! - [`interaction::InteractionLayer`] -- turns pointer gesture sequences
//!   into registry mutations (drag, resize, click-to-focus).
//!
//! The registry knows nothing about what content a window hosts; hosted
//! applications and all rendering live above this crate.

pub mod interaction;
pub mod launch;
pub mod registry;
pub mod window;

pub use interaction::{Gesture, HitRegion, InteractionLayer};
pub use launch::{CASCADE_OFFSET, LaunchDispatcher, LaunchPolicy};
pub use registry::WindowRegistry;
pub use window::{WindowId, WindowInstance};
