//! Interaction layer -- pointer gestures to registry calls.
//!
//! A small state machine with at most one active gesture across the whole
//! desktop: dragging one window precludes resizing another until the button
//! is released. The layer does not do pixel hit testing; the caller (which
//! owns layout) classifies the pointer target as a [`HitRegion`] and passes
//! it alongside each event.
//!
//! This is the only place clamping lives: drags floor the stored position at
//! the desktop origin, resizes floor the stored size at the window minimums.
//! The registry itself stays policy-free.

use refos_types::geometry::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, Point, Size};
use refos_types::input::{PointerButton, PointerEvent};

use crate::registry::WindowRegistry;
use crate::window::WindowId;

/// What the pointer is over, as classified by the layout owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// A window's title bar, excluding its control buttons.
    TitleBar(WindowId),
    /// A window's bottom-right resize handle.
    ResizeHandle(WindowId),
    /// A window's content area.
    Body(WindowId),
    /// A title-bar control button (close, minimize). The shell handles the
    /// button action itself; no gesture starts here.
    Control(WindowId),
    /// Bare desktop.
    Desktop,
}

/// The gesture currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        id: WindowId,
        /// Pointer-to-window-origin offset captured at gesture start.
        grab_dx: i32,
        grab_dy: i32,
        /// Position at gesture start, restored on cancel.
        origin: Point,
    },
    Resizing {
        id: WindowId,
        /// Pointer position at gesture start.
        pointer_start: Point,
        /// Size at gesture start; the resize baseline and the cancel target.
        size_start: Size,
    },
}

/// Translates pointer events into registry mutations.
#[derive(Debug, Default)]
pub struct InteractionLayer {
    gesture: Gesture,
}

impl InteractionLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Feed one pointer event. `hit` is the region under the pointer when
    /// the event fired; it is only consulted where a gesture may start or a
    /// body click transfers focus.
    pub fn handle_event(
        &mut self,
        registry: &mut WindowRegistry,
        event: PointerEvent,
        hit: HitRegion,
    ) {
        match event {
            PointerEvent::ButtonPress { button, x, y } => {
                self.on_press(registry, button, x, y, hit);
            },
            PointerEvent::Move { x, y } => self.on_move(registry, x, y),
            PointerEvent::ButtonRelease { button, .. } => {
                if button == PointerButton::Primary {
                    self.gesture = Gesture::Idle;
                }
            },
            PointerEvent::Cancel => self.on_cancel(registry),
        }
    }

    fn on_press(
        &mut self,
        registry: &mut WindowRegistry,
        button: PointerButton,
        x: i32,
        y: i32,
        hit: HitRegion,
    ) {
        if button != PointerButton::Primary {
            return;
        }
        // One gesture at a time: presses are ignored until release.
        if self.gesture != Gesture::Idle {
            return;
        }
        match hit {
            HitRegion::TitleBar(id) => {
                let Some(win) = registry.get(id) else {
                    return;
                };
                let origin = win.position;
                registry.focus(id);
                self.gesture = Gesture::Dragging {
                    id,
                    grab_dx: x - origin.x,
                    grab_dy: y - origin.y,
                    origin,
                };
                log::trace!("drag start {id}");
            },
            HitRegion::ResizeHandle(id) => {
                let Some(win) = registry.get(id) else {
                    return;
                };
                let size_start = win.size;
                registry.focus(id);
                self.gesture = Gesture::Resizing {
                    id,
                    pointer_start: Point::new(x, y),
                    size_start,
                };
                log::trace!("resize start {id}");
            },
            HitRegion::Body(id) => {
                // Click-to-focus on a non-active window; no gesture.
                if registry.active() != Some(id) {
                    registry.focus(id);
                }
            },
            HitRegion::Control(_) | HitRegion::Desktop => {},
        }
    }

    fn on_move(&mut self, registry: &mut WindowRegistry, x: i32, y: i32) {
        match self.gesture {
            Gesture::Idle => {},
            Gesture::Dragging {
                id,
                grab_dx,
                grab_dy,
                ..
            } => {
                let position = Point::new(x - grab_dx, y - grab_dy).clamped_origin();
                registry.move_to(id, position);
            },
            Gesture::Resizing {
                id,
                pointer_start,
                size_start,
            } => {
                let dx = (x - pointer_start.x) as i64;
                let dy = (y - pointer_start.y) as i64;
                let size = Size::new(
                    (size_start.width as i64 + dx).max(MIN_WINDOW_WIDTH as i64) as u32,
                    (size_start.height as i64 + dy).max(MIN_WINDOW_HEIGHT as i64) as u32,
                );
                registry.resize(id, size);
            },
        }
    }

    /// Abort the in-flight gesture, reverting the window to its
    /// pre-gesture position (drag) or size (resize).
    fn on_cancel(&mut self, registry: &mut WindowRegistry) {
        match self.gesture {
            Gesture::Idle => {},
            Gesture::Dragging { id, origin, .. } => {
                registry.move_to(id, origin);
                log::trace!("drag cancelled {id}");
            },
            Gesture::Resizing { id, size_start, .. } => {
                registry.resize(id, size_start);
                log::trace!("resize cancelled {id}");
            },
        }
        self.gesture = Gesture::Idle;
    }
}
