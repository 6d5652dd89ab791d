#![forbid(unsafe_code)]

//! Snap controller: zone detection, input gating, and the animation pump.
//!
//! The controller snaps the viewport between two resting points, the page
//! top (`0`) and the intro target (the intro element's document offset).
//! Hosts forward input and frame timestamps; the controller decides whether
//! the browser default should run and drives a [`ScrollAnimation`] when it
//! should not.
//!
//! # State machine
//!
//! ```text
//!            qualifying wheel/key
//!   Idle ────────────────────────▶ Animating
//!    ▲                                │
//!    └──────── frame with t = 1 ──────┘
//! ```
//!
//! # Invariants
//!
//! 1. While animating, every wheel and key event is suppressed, so only the
//!    animator writes the scroll offset.
//! 2. At most one animation is in flight; [`SnapController::animate_scroll_to`]
//!    refuses to start a second one.
//! 3. When an animation finishes the last-known offset is resynchronized
//!    to the host's live offset.
//! 4. Keyboard input never touches the last-known offset; wheel input that
//!    passes through always does.

use core::time::Duration;
use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::animator::ScrollAnimation;
use crate::config::SnapConfig;
use crate::host::ScrollHost;
use crate::input::{KeyIntent, ScrollDirection, WheelInput};

/// Max queued [`SnapEvent`]s before the oldest are dropped.
const MAX_PENDING_EVENTS: usize = 256;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// What caused a snap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapTrigger {
    /// Wheel down while at the top.
    WheelDown,
    /// Wheel up while inside the snap zone.
    WheelUp,
    /// Wheel up that carried the viewport across the snap boundary from below.
    WheelCrossing,
    /// Down-intent key while at the top.
    KeyDown,
    /// Up-intent key while inside the snap zone.
    KeyUp,
    /// Requested directly by the host.
    Programmatic,
}

impl SnapTrigger {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WheelDown => "wheel_down",
            Self::WheelUp => "wheel_up",
            Self::WheelCrossing => "wheel_crossing",
            Self::KeyDown => "key_down",
            Self::KeyUp => "key_up",
            Self::Programmatic => "programmatic",
        }
    }
}

/// Observable snap lifecycle records, drained by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapEvent {
    Started { from: f64, to: f64, trigger: SnapTrigger },
    Finished { y: f64, trigger: SnapTrigger },
}

/// Animation state.
#[derive(Debug, Clone, Copy)]
enum SnapPhase {
    Idle,
    Animating {
        animation: ScrollAnimation,
        trigger: SnapTrigger,
    },
}

impl SnapPhase {
    const fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }
}

/// Result of asking the controller to start an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapStart {
    /// Animation is in flight; the host must pump frames.
    Scheduled,
    /// Zero duration or zero distance: the offset was written and the
    /// animation already finished.
    Completed,
    /// Another animation is in flight; nothing changed.
    Busy,
}

/// Result of pumping one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Animation still running; request another frame.
    Continue,
    /// Animation reached its target on this frame.
    Finished,
    /// Nothing in flight.
    Idle,
}

/// Whether the host should let the browser's default scroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    Pass,
    Suppress,
}

impl InputDisposition {
    #[must_use]
    pub const fn is_suppressed(self) -> bool {
        matches!(self, Self::Suppress)
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Scroll-snap controller for one page.
#[derive(Debug, Clone)]
pub struct SnapController {
    config: SnapConfig,
    phase: SnapPhase,
    /// Offset recorded at the last settled state (passed-through wheel event
    /// or finished animation).
    last_y: f64,
    events: VecDeque<SnapEvent>,
    missing_intro_reported: bool,
}

impl SnapController {
    /// Create an idle controller, seeding the tracker from the host's offset.
    #[must_use]
    pub fn new(config: SnapConfig, host: &impl ScrollHost) -> Self {
        Self {
            config,
            phase: SnapPhase::Idle,
            last_y: host.scroll_y(),
            events: VecDeque::new(),
            missing_intro_reported: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Last settled offset used for boundary-crossing detection.
    #[must_use]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    // -- Position primitives --

    /// Whether the viewport is at (or within `top_tolerance` of) the top.
    #[must_use]
    pub fn is_at_top(&self, host: &impl ScrollHost) -> bool {
        host.scroll_y() <= self.config.top_tolerance
    }

    /// Document offset the intro element scrolls to, recomputed every call.
    #[must_use]
    pub fn target_offset(&self, host: &impl ScrollHost) -> Option<f64> {
        let top = host.intro_top()?;
        Some(top + host.scroll_y() - self.config.offset_y)
    }

    /// Whether the live offset is within `tolerance` of `y`.
    #[must_use]
    pub fn is_near(&self, host: &impl ScrollHost, y: f64, tolerance: f64) -> bool {
        (host.scroll_y() - y).abs() <= tolerance
    }

    // -- Animator --

    /// Start animating from the live offset to `target_y`.
    ///
    /// Degenerate requests (zero duration or zero distance) write the target
    /// immediately and finish without needing frames.
    pub fn animate_scroll_to(
        &mut self,
        host: &mut impl ScrollHost,
        target_y: f64,
        duration: Duration,
        now: Duration,
        trigger: SnapTrigger,
    ) -> SnapStart {
        if self.is_animating() {
            trace!(
                target: "snapscroll::controller",
                target_y,
                trigger = trigger.as_str(),
                "snap request ignored while animating"
            );
            return SnapStart::Busy;
        }

        let from = host.scroll_y();
        let animation = ScrollAnimation::new(from, target_y, now, duration);
        self.push_event(SnapEvent::Started {
            from,
            to: target_y,
            trigger,
        });
        debug!(
            target: "snapscroll::controller",
            from,
            to = target_y,
            duration_ms = duration.as_millis() as u64,
            trigger = trigger.as_str(),
            "snap started"
        );

        if animation.is_degenerate() {
            host.scroll_to(target_y);
            self.finish(&*host, trigger);
            return SnapStart::Completed;
        }

        self.phase = SnapPhase::Animating { animation, trigger };
        SnapStart::Scheduled
    }

    /// Advance the in-flight animation to `now` and write the new offset.
    pub fn on_frame(&mut self, host: &mut impl ScrollHost, now: Duration) -> FrameOutcome {
        let SnapPhase::Animating { animation, trigger } = self.phase else {
            return FrameOutcome::Idle;
        };

        host.scroll_to(animation.sample(now));
        if animation.is_complete(now) {
            self.finish(&*host, trigger);
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }

    /// Drop any in-flight animation where it stands.
    pub fn reset(&mut self, host: &impl ScrollHost) {
        if let SnapPhase::Animating { trigger, .. } = self.phase {
            debug!(
                target: "snapscroll::controller",
                y = host.scroll_y(),
                trigger = trigger.as_str(),
                "snap abandoned"
            );
        }
        self.phase = SnapPhase::Idle;
        self.last_y = host.scroll_y();
    }

    // -- Input handlers --

    /// Handle a wheel event. Must be called before the browser applies it.
    pub fn on_wheel(
        &mut self,
        host: &mut impl ScrollHost,
        wheel: WheelInput,
        now: Duration,
    ) -> InputDisposition {
        if self.is_animating() {
            trace!(
                target: "snapscroll::controller",
                delta_y = wheel.delta_y,
                "wheel suppressed mid-snap"
            );
            return InputDisposition::Suppress;
        }

        let y = host.scroll_y();
        let Some(target) = self.intro_target(&*host) else {
            self.last_y = y;
            return InputDisposition::Pass;
        };
        let direction = wheel.direction();
        let zone = self.config.zone_tolerance;

        if direction == ScrollDirection::Down && self.is_at_top(&*host) {
            self.snap(host, target, now, SnapTrigger::WheelDown);
            return InputDisposition::Suppress;
        }

        if direction == ScrollDirection::Up {
            if self.is_near(&*host, target, zone) {
                self.snap(host, 0.0, now, SnapTrigger::WheelUp);
                return InputDisposition::Suppress;
            }

            let boundary = target + zone;
            if self.last_y > boundary && y <= boundary {
                self.snap(host, 0.0, now, SnapTrigger::WheelCrossing);
                return InputDisposition::Suppress;
            }
        }

        trace!(
            target: "snapscroll::controller",
            y,
            direction = direction.as_str(),
            "wheel passed through"
        );
        self.last_y = y;
        InputDisposition::Pass
    }

    /// Handle a `keydown` event by its DOM `key` value.
    pub fn on_key(
        &mut self,
        host: &mut impl ScrollHost,
        key: &str,
        now: Duration,
    ) -> InputDisposition {
        if self.is_animating() {
            trace!(target: "snapscroll::controller", key, "key suppressed mid-snap");
            return InputDisposition::Suppress;
        }

        let Some(intent) = KeyIntent::from_dom_key(key) else {
            return InputDisposition::Pass;
        };
        let Some(target) = self.intro_target(&*host) else {
            return InputDisposition::Pass;
        };

        match intent {
            KeyIntent::Down if self.is_at_top(&*host) => {
                self.snap(host, target, now, SnapTrigger::KeyDown);
                InputDisposition::Suppress
            }
            KeyIntent::Up if self.is_near(&*host, target, self.config.zone_tolerance) => {
                self.snap(host, 0.0, now, SnapTrigger::KeyUp);
                InputDisposition::Suppress
            }
            _ => InputDisposition::Pass,
        }
    }

    // -- Events --

    /// Take all queued lifecycle events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SnapEvent> {
        self.events.drain(..).collect()
    }

    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    // -- Internals --

    fn snap(
        &mut self,
        host: &mut impl ScrollHost,
        target_y: f64,
        now: Duration,
        trigger: SnapTrigger,
    ) {
        let duration = self.config.duration;
        let start = self.animate_scroll_to(host, target_y, duration, now, trigger);
        debug_assert_ne!(start, SnapStart::Busy, "handlers return early while animating");
    }

    /// Completion continuation: back to idle and resync the tracker.
    fn finish(&mut self, host: &impl ScrollHost, trigger: SnapTrigger) {
        self.phase = SnapPhase::Idle;
        self.last_y = host.scroll_y();
        self.push_event(SnapEvent::Finished {
            y: self.last_y,
            trigger,
        });
        debug!(
            target: "snapscroll::controller",
            y = self.last_y,
            trigger = trigger.as_str(),
            "snap finished"
        );
    }

    fn intro_target(&mut self, host: &impl ScrollHost) -> Option<f64> {
        let target = self.target_offset(host);
        if target.is_none() && !self.missing_intro_reported {
            self.missing_intro_reported = true;
            warn!(
                target: "snapscroll::controller",
                "intro element not found; snapping disabled until it appears"
            );
        }
        target
    }

    fn push_event(&mut self, event: SnapEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}
