#![forbid(unsafe_code)]

//! `wasm-bindgen` exports for [`SnapScroll`].
//!
//! Only compiled on `wasm32` targets. Shared state lives in
//! `Rc<RefCell<..>>`; every listener and frame callback releases its borrow
//! before returning control to JS.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::{Array, Object, Reflect};
use snapscroll_core::{
    FrameOutcome, InputDisposition, ScrollHost, SnapController, SnapEvent, SnapStart,
    SnapTrigger, WheelInput,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, KeyboardEvent, WheelEvent, Window};

use crate::options::{MountError, MountOptions};
use crate::timing::duration_from_ms;

type FrameCallback = Closure<dyn FnMut(f64)>;
type FrameSlot = Rc<RefCell<Option<FrameCallback>>>;

/// Report through the page's `console.error`, if the global has one.
fn report_to_console(msg: &str) {
    let sink = Reflect::get(&js_sys::global(), &JsValue::from_str("console"))
        .ok()
        .and_then(|console| {
            let error = Reflect::get(&console, &JsValue::from_str("error")).ok()?;
            Some((console, error.dyn_into::<js_sys::Function>().ok()?))
        });
    if let Some((console, error)) = sink {
        let _ = error.call1(&console, &JsValue::from_str(msg));
    }
}

fn install_panic_hook() {
    static HOOK: std::sync::Once = std::sync::Once::new();
    HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let location = info
                .location()
                .map(|loc| format!(" at {}:{}", loc.file(), loc.line()))
                .unwrap_or_default();
            let payload = info.payload_as_str().unwrap_or("non-string payload");
            report_to_console(&format!("snapscroll panicked{location}: {payload}"));
        }));
    });
}

fn mount_error(err: MountError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `{ kind, trigger, ..numbers }` object handed to `drainEvents` callers.
struct EventRecord(Object);

impl EventRecord {
    fn new(kind: &str, trigger: SnapTrigger) -> Self {
        Self(Object::new())
            .field("kind", JsValue::from_str(kind))
            .field("trigger", JsValue::from_str(trigger.as_str()))
    }

    fn field(self, key: &str, value: JsValue) -> Self {
        let _ = Reflect::set(&self.0, &JsValue::from_str(key), &value);
        self
    }

    fn number(self, key: &str, value: f64) -> Self {
        self.field(key, JsValue::from_f64(value))
    }
}

fn snap_event_to_js(event: SnapEvent) -> JsValue {
    let record = match event {
        SnapEvent::Started { from, to, trigger } => EventRecord::new("started", trigger)
            .number("from", from)
            .number("to", to),
        SnapEvent::Finished { y, trigger } => EventRecord::new("finished", trigger).number("y", y),
    };
    record.0.into()
}

// ---------------------------------------------------------------------------
// DOM scroll host
// ---------------------------------------------------------------------------

/// [`ScrollHost`] over the global window and the intro element.
struct DomScrollHost {
    window: Window,
    document: Document,
    intro_selector: String,
}

impl DomScrollHost {
    /// `performance.now()`, the same time origin as rAF timestamps.
    fn now_ms(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }
}

impl ScrollHost for DomScrollHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&mut self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn intro_top(&self) -> Option<f64> {
        let element = self.document.query_selector(&self.intro_selector).ok()??;
        Some(element.get_bounding_client_rect().top())
    }
}

// ---------------------------------------------------------------------------
// Shared state + frame loop
// ---------------------------------------------------------------------------

struct Shared {
    controller: SnapController,
    host: DomScrollHost,
    /// Pending `requestAnimationFrame` handle, if a frame is scheduled.
    frame_handle: Option<i32>,
}

impl Shared {
    fn on_wheel(&mut self, event: &WheelEvent) -> InputDisposition {
        let now = duration_from_ms(self.host.now_ms());
        let Self {
            controller, host, ..
        } = self;
        controller.on_wheel(host, WheelInput::new(event.delta_y()), now)
    }

    fn on_key(&mut self, event: &KeyboardEvent) -> InputDisposition {
        let now = duration_from_ms(self.host.now_ms());
        let Self {
            controller, host, ..
        } = self;
        controller.on_key(host, &event.key(), now)
    }

    fn on_frame(&mut self, timestamp_ms: f64) -> FrameOutcome {
        self.frame_handle = None;
        let Self {
            controller, host, ..
        } = self;
        controller.on_frame(host, duration_from_ms(timestamp_ms))
    }
}

/// Schedule the next animation frame unless one is already pending.
fn request_frame(shared: &Rc<RefCell<Shared>>, slot: &FrameSlot) {
    let mut state = shared.borrow_mut();
    if state.frame_handle.is_some() || !state.controller.is_animating() {
        return;
    }
    let requested = match slot.borrow().as_ref() {
        Some(callback) => state
            .host
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref()),
        None => Err(JsValue::from_str("frame callback released")),
    };
    match requested {
        Ok(handle) => state.frame_handle = Some(handle),
        Err(err) => {
            // Without frames the animation can never finish; drop it.
            warn!(target: "snapscroll::web", ?err, "requestAnimationFrame failed");
            let Shared {
                controller, host, ..
            } = &mut *state;
            controller.reset(&*host);
        }
    }
}

fn frame_callback(shared: &Rc<RefCell<Shared>>, slot: &FrameSlot) -> FrameCallback {
    let shared = Rc::clone(shared);
    let slot: Weak<RefCell<Option<FrameCallback>>> = Rc::downgrade(slot);
    Closure::new(move |timestamp_ms: f64| {
        let outcome = shared.borrow_mut().on_frame(timestamp_ms);
        if outcome == FrameOutcome::Continue
            && let Some(slot) = slot.upgrade()
        {
            request_frame(&shared, &slot);
        }
    })
}

// ---------------------------------------------------------------------------
// Exported handle
// ---------------------------------------------------------------------------

/// Scroll-snap controller bound to the current page.
///
/// Owns the `wheel`/`keydown` listeners (registered with `passive: false`
/// so defaults can be suppressed) and the animation frame loop. Dropping
/// the handle (`free()` from JS) detaches it.
#[wasm_bindgen]
pub struct SnapScroll {
    shared: Rc<RefCell<Shared>>,
    frame_slot: FrameSlot,
    wheel_listener: Option<Closure<dyn FnMut(WheelEvent)>>,
    key_listener: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

#[wasm_bindgen]
impl SnapScroll {
    /// Create a detached controller from optional JSON mount options.
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: Option<String>) -> Result<SnapScroll, JsValue> {
        install_panic_hook();
        let options = MountOptions::from_json(options_json.as_deref()).map_err(mount_error)?;
        let window = web_sys::window().ok_or_else(|| mount_error(MountError::NoWindow))?;
        let document = window
            .document()
            .ok_or_else(|| mount_error(MountError::NoDocument))?;

        let host = DomScrollHost {
            window,
            document,
            intro_selector: options.intro_selector,
        };
        let controller = SnapController::new(options.config, &host);
        let shared = Rc::new(RefCell::new(Shared {
            controller,
            host,
            frame_handle: None,
        }));
        let frame_slot: FrameSlot = Rc::new(RefCell::new(None));
        *frame_slot.borrow_mut() = Some(frame_callback(&shared, &frame_slot));

        Ok(Self {
            shared,
            frame_slot,
            wheel_listener: None,
            key_listener: None,
        })
    }

    /// Register the `wheel` and `keydown` listeners on `window`. Idempotent.
    /// Fails once the handle has been destroyed.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if self.is_attached() {
            return Ok(());
        }
        if self.frame_slot.borrow().is_none() {
            return Err(JsValue::from_str("SnapScroll has been destroyed"));
        }
        let window = self.shared.borrow().host.window.clone();
        let options = AddEventListenerOptions::new();
        options.set_passive(false);

        let wheel = {
            let shared = Rc::clone(&self.shared);
            let slot = Rc::clone(&self.frame_slot);
            Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
                let disposition = shared.borrow_mut().on_wheel(&event);
                if disposition.is_suppressed() {
                    event.prevent_default();
                    request_frame(&shared, &slot);
                }
            })
        };
        let key = {
            let shared = Rc::clone(&self.shared);
            let slot = Rc::clone(&self.frame_slot);
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let disposition = shared.borrow_mut().on_key(&event);
                if disposition.is_suppressed() {
                    event.prevent_default();
                    request_frame(&shared, &slot);
                }
            })
        };

        window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            wheel.as_ref().unchecked_ref(),
            &options,
        )?;
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "keydown",
            key.as_ref().unchecked_ref(),
            &options,
        ) {
            let _ = window
                .remove_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
            return Err(err);
        }

        self.wheel_listener = Some(wheel);
        self.key_listener = Some(key);
        debug!(target: "snapscroll::web", "snap listeners attached");
        Ok(())
    }

    /// Remove the listeners and abandon any in-flight animation in place.
    pub fn detach(&mut self) -> Result<(), JsValue> {
        let window = self.shared.borrow().host.window.clone();
        let mut result = Ok(());

        if let Some(wheel) = self.wheel_listener.take() {
            result = result.and(
                window.remove_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref()),
            );
        }
        if let Some(key) = self.key_listener.take() {
            result = result.and(
                window.remove_event_listener_with_callback("keydown", key.as_ref().unchecked_ref()),
            );
        }

        let mut state = self.shared.borrow_mut();
        if let Some(handle) = state.frame_handle.take() {
            result = result.and(window.cancel_animation_frame(handle));
        }
        let Shared {
            controller, host, ..
        } = &mut *state;
        controller.reset(&*host);
        debug!(target: "snapscroll::web", "snap listeners detached");
        result
    }

    /// Whether the listeners are registered.
    #[wasm_bindgen(js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.wheel_listener.is_some()
    }

    /// Whether a snap animation is in flight.
    #[wasm_bindgen(js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.shared.borrow().controller.is_animating()
    }

    /// Current intro target offset, or `undefined` if the element is missing.
    #[wasm_bindgen(js_name = targetOffset)]
    pub fn target_offset(&self) -> Option<f64> {
        let state = self.shared.borrow();
        state.controller.target_offset(&state.host)
    }

    /// Animate to the intro target. Returns `false` if the element is
    /// missing, a snap is already running, or no frame could be scheduled.
    #[wasm_bindgen(js_name = scrollToIntro)]
    pub fn scroll_to_intro(&mut self) -> bool {
        let Some(target) = self.target_offset() else {
            return false;
        };
        self.snap_to(target)
    }

    /// Animate to the page top. Returns `false` if a snap is already running
    /// or no frame could be scheduled.
    #[wasm_bindgen(js_name = scrollToTop)]
    pub fn scroll_to_top(&mut self) -> bool {
        self.snap_to(0.0)
    }

    /// Drain queued snap lifecycle records as
    /// `{ kind, from?, to?, y?, trigger }` objects, oldest first.
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Array {
        let events = self.shared.borrow_mut().controller.drain_events();
        events.into_iter().map(snap_event_to_js).collect()
    }

    /// Detach and release the frame callback.
    pub fn destroy(&mut self) {
        if let Err(err) = self.detach() {
            warn!(target: "snapscroll::web", ?err, "detach failed during destroy");
        }
        self.frame_slot.borrow_mut().take();
    }
}

impl SnapScroll {
    fn snap_to(&mut self, target_y: f64) -> bool {
        let start = {
            let mut state = self.shared.borrow_mut();
            let now = duration_from_ms(state.host.now_ms());
            let duration = state.controller.config().duration;
            let Shared {
                controller, host, ..
            } = &mut *state;
            controller.animate_scroll_to(host, target_y, duration, now, SnapTrigger::Programmatic)
        };
        match start {
            SnapStart::Scheduled => {
                request_frame(&self.shared, &self.frame_slot);
                self.is_animating()
            }
            SnapStart::Completed => true,
            SnapStart::Busy => false,
        }
    }
}

impl Drop for SnapScroll {
    fn drop(&mut self) {
        // A queued frame must not outlive the closure it calls.
        let _ = self.detach();
    }
}
