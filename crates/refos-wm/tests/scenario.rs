//! End-to-end walks through the window core: dispatcher, registry, and
//! interaction layer driven together the way the shell drives them.

use pretty_assertions::assert_eq;

use refos_types::app::AppKind;
use refos_types::catalog::AppCatalog;
use refos_types::geometry::{Point, Size};
use refos_types::input::{PointerButton, PointerEvent};
use refos_wm::{
    Gesture, HitRegion, InteractionLayer, LaunchDispatcher, LaunchPolicy, WindowRegistry,
};

fn primary_press(x: i32, y: i32) -> PointerEvent {
    PointerEvent::ButtonPress {
        button: PointerButton::Primary,
        x,
        y,
    }
}

fn primary_release(x: i32, y: i32) -> PointerEvent {
    PointerEvent::ButtonRelease {
        button: PointerButton::Primary,
        x,
        y,
    }
}

#[test]
fn notepad_calculator_lifecycle() {
    let disp = LaunchDispatcher::new(AppCatalog::builtin(), LaunchPolicy::AlwaysNewInstance);
    let mut reg = WindowRegistry::new();

    // Open notepad: active, z = 1.
    let n1 = disp.launch(&mut reg, AppKind::Notepad);
    assert_eq!(reg.active(), Some(n1));
    assert_eq!(reg.get(n1).unwrap().z_index, 1);

    // Open calculator: takes over at z = 2.
    let c1 = disp.launch(&mut reg, AppKind::Calculator);
    assert_eq!(reg.active(), Some(c1));
    assert_eq!(reg.get(c1).unwrap().z_index, 2);

    // Refocus notepad: it moves to z = 3, calculator stays at 2.
    reg.focus(n1);
    assert_eq!(reg.active(), Some(n1));
    assert_eq!(reg.get(n1).unwrap().z_index, 3);
    assert_eq!(reg.get(c1).unwrap().z_index, 2);

    // Minimize notepad: calculator is the only visible instance left.
    reg.minimize(n1);
    assert!(reg.get(n1).unwrap().minimized);
    assert_eq!(reg.active(), Some(c1));

    // Close calculator: only the minimized notepad remains; nothing active.
    reg.close(c1);
    assert_eq!(reg.window_count(), 1);
    assert!(reg.get(n1).unwrap().minimized);
    assert_eq!(reg.active(), None);
}

#[test]
fn cascading_launches_then_taskbar_style_restore() {
    let disp = LaunchDispatcher::new(AppCatalog::builtin(), LaunchPolicy::AlwaysNewInstance);
    let mut reg = WindowRegistry::new();

    let t1 = disp.launch(&mut reg, AppKind::Terminal);
    let t2 = disp.launch(&mut reg, AppKind::Terminal);
    let t3 = disp.launch(&mut reg, AppKind::Terminal);
    assert_eq!(reg.get(t1).unwrap().position, Point::new(250, 300));
    assert_eq!(reg.get(t2).unwrap().position, Point::new(280, 330));
    assert_eq!(reg.get(t3).unwrap().position, Point::new(310, 360));

    // Minimize the top instance; the middle one takes focus.
    reg.minimize(t3);
    assert_eq!(reg.active(), Some(t2));

    // Taskbar click on the minimized instance restores it on top.
    reg.restore(t3);
    assert_eq!(reg.active(), Some(t3));
    let stack: Vec<_> = reg.visible_stack().iter().map(|w| w.id).collect();
    assert_eq!(stack.last(), Some(&t3));
}

#[test]
fn drag_resize_and_cancel_session() {
    let disp = LaunchDispatcher::new(AppCatalog::builtin(), LaunchPolicy::SingletonPerKind);
    let mut reg = WindowRegistry::new();
    let mut il = InteractionLayer::new();

    let browser = disp.launch(&mut reg, AppKind::Browser);
    let notepad = disp.launch(&mut reg, AppKind::Notepad);
    assert_eq!(reg.active(), Some(notepad));

    // Grab the browser title bar 10px in from its corner and drag it around.
    let grab = reg.get(browser).unwrap().position.offset(10, 5);
    il.handle_event(&mut reg, primary_press(grab.x, grab.y), HitRegion::TitleBar(browser));
    assert_eq!(reg.active(), Some(browser));
    il.handle_event(
        &mut reg,
        PointerEvent::Move { x: 60, y: 40 },
        HitRegion::Desktop,
    );
    assert_eq!(reg.get(browser).unwrap().position, Point::new(50, 35));

    // Drag off the top-left corner: clamped to the origin.
    il.handle_event(
        &mut reg,
        PointerEvent::Move { x: -200, y: -200 },
        HitRegion::Desktop,
    );
    assert_eq!(reg.get(browser).unwrap().position, Point::new(0, 0));
    il.handle_event(&mut reg, primary_release(-200, -200), HitRegion::Desktop);
    assert_eq!(il.gesture(), Gesture::Idle);

    // Resize the notepad, then abort: size reverts, position survives.
    il.handle_event(&mut reg, primary_press(650, 550), HitRegion::ResizeHandle(notepad));
    il.handle_event(
        &mut reg,
        PointerEvent::Move { x: 750, y: 650 },
        HitRegion::Desktop,
    );
    assert_eq!(reg.get(notepad).unwrap().size, Size::new(600, 500));
    il.handle_event(&mut reg, PointerEvent::Cancel, HitRegion::Desktop);
    assert_eq!(reg.get(notepad).unwrap().size, Size::new(500, 400));

    // Relaunching under the singleton policy refocuses the same windows.
    assert_eq!(disp.launch(&mut reg, AppKind::Browser), browser);
    assert_eq!(disp.launch(&mut reg, AppKind::Notepad), notepad);
    assert_eq!(reg.window_count(), 2);
}
