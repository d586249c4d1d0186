//! Scripted desktop session for the demo binary.
//!
//! Drives the core the way an interactive shell would: start menu launches,
//! a title-bar drag, a corner resize, taskbar minimize/restore, a close.
//! Returns a transcript so tests can assert on the session shape without
//! capturing stdout.

use refos_types::app::AppKind;
use refos_types::catalog::AppCatalog;
use refos_types::input::{PointerButton, PointerEvent};
use refos_shell::{
    ContentRegistry, HostedContent, StartMenuState, activate_taskbar_button, taskbar_buttons,
};
use refos_wm::{HitRegion, InteractionLayer, LaunchDispatcher, LaunchPolicy, WindowRegistry};

/// Demo stand-in for hosted content; real apps implement [`HostedContent`]
/// in their own crates.
struct DemoContent {
    text: &'static str,
}

impl HostedContent for DemoContent {
    fn snapshot(&self) -> String {
        self.text.to_string()
    }
}

fn demo_content_registry() -> ContentRegistry {
    let mut content = ContentRegistry::new();
    content.register(AppKind::Notepad, || DemoContent {
        text: "empty buffer",
    });
    content.register(AppKind::Calculator, || DemoContent { text: "0" });
    content.register(AppKind::Terminal, || DemoContent { text: "$ " });
    content
}

/// Run the scripted session and return its transcript.
pub fn run_demo_session(catalog: AppCatalog, policy: LaunchPolicy) -> Vec<String> {
    let dispatcher = LaunchDispatcher::new(catalog, policy);
    let mut registry = WindowRegistry::new();
    let mut interaction = InteractionLayer::new();
    let mut start_menu = StartMenuState::new();
    let content = demo_content_registry();
    let mut transcript = Vec::new();

    // Launch a handful of apps from the start menu.
    for kind in [
        AppKind::Notepad,
        AppKind::Calculator,
        AppKind::Terminal,
        AppKind::Terminal,
    ] {
        start_menu.toggle();
        let id = dispatcher.launch(&mut registry, kind);
        start_menu.close();
        let win = registry
            .get(id)
            .map(|w| format!("opened {id} {} at {},{}", w.title, w.position.x, w.position.y))
            .unwrap_or_else(|| format!("opened {id}"));
        transcript.push(win);
    }

    // Drag the active window by its title bar.
    if let Some(id) = registry.active() {
        if let Some(win) = registry.get(id) {
            let grab = win.position.offset(12, 6);
            interaction.handle_event(
                &mut registry,
                PointerEvent::ButtonPress {
                    button: PointerButton::Primary,
                    x: grab.x,
                    y: grab.y,
                },
                HitRegion::TitleBar(id),
            );
        }
        interaction.handle_event(
            &mut registry,
            PointerEvent::Move { x: 512, y: 256 },
            HitRegion::Desktop,
        );
        interaction.handle_event(
            &mut registry,
            PointerEvent::ButtonRelease {
                button: PointerButton::Primary,
                x: 512,
                y: 256,
            },
            HitRegion::Desktop,
        );
        if let Some(win) = registry.get(id) {
            transcript.push(format!(
                "dragged {id} to {},{}",
                win.position.x, win.position.y
            ));
        }

        // Resize it from the bottom-right handle, overshooting the minimums.
        interaction.handle_event(
            &mut registry,
            PointerEvent::ButtonPress {
                button: PointerButton::Primary,
                x: 900,
                y: 700,
            },
            HitRegion::ResizeHandle(id),
        );
        interaction.handle_event(
            &mut registry,
            PointerEvent::Move { x: 400, y: 300 },
            HitRegion::Desktop,
        );
        interaction.handle_event(
            &mut registry,
            PointerEvent::ButtonRelease {
                button: PointerButton::Primary,
                x: 400,
                y: 300,
            },
            HitRegion::Desktop,
        );
        if let Some(win) = registry.get(id) {
            transcript.push(format!(
                "resized {id} to {}x{}",
                win.size.width, win.size.height
            ));
        }

        // Minimize, then bring it back from its taskbar button.
        registry.minimize(id);
        transcript.push(format!(
            "minimized {id}, active now {:?}",
            registry.active().map(|a| a.to_string())
        ));
        activate_taskbar_button(&mut registry, id);
        transcript.push(format!("restored {id} from taskbar"));
    }

    // Close the active window.
    if let Some(id) = registry.active() {
        registry.close(id);
        transcript.push(format!(
            "closed {id}, active now {:?}",
            registry.active().map(|a| a.to_string())
        ));
    }

    // Final back-to-front stack with mounted content snapshots.
    transcript.push(format!(
        "{} windows, {} taskbar buttons",
        registry.window_count(),
        taskbar_buttons(&registry).len()
    ));
    for win in registry.visible_stack() {
        let body = content.mount(win.kind);
        transcript.push(format!(
            "  z={} {} [{}] {}",
            win.z_index,
            win.id,
            win.title,
            body.snapshot()
        ));
    }
    transcript
}
