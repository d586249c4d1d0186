//! Presentation-shell state for RefOS.
//!
//! Read models and small bits of shell state layered over the window core:
//! the taskbar button list, the start menu popup, desktop shortcuts, the
//! hosted-app content registry, and the persisted onboarding flags. Nothing
//! here renders; the shell re-derives its view from the registry on demand
//! (pull-based) and mutates it only through the core's operations.

pub mod content;
pub mod desktop;
pub mod onboarding;
pub mod startmenu;
pub mod taskbar;

pub use content::{ContentRegistry, HostedContent};
pub use desktop::DesktopShortcuts;
pub use onboarding::{FlagStore, MemoryFlagStore, OnboardingFlags, OobeStep};
pub use startmenu::{StartMenuEntry, StartMenuState};
pub use taskbar::{TaskbarButton, taskbar_buttons, activate_taskbar_button};
