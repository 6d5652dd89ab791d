#![forbid(unsafe_code)]

//! Core: scroll-snap state machine between a page top and an intro section.
//!
//! # Role in SnapScroll
//! `snapscroll-core` owns everything that does not need a browser: the
//! easing curve, the time-based animator, wheel/key intent classification,
//! and the [`SnapController`](controller::SnapController) that ties them
//! together. The `snapscroll-web` crate binds it to `window`/`document`.
//!
//! # Primary responsibilities
//! - **SnapConfig**: tolerances, extra offset, animation duration.
//! - **ScrollAnimation**: ease-in-out interpolation between two offsets.
//! - **SnapController**: zone detection, input suppression, in-flight guard.
//! - **ScrollHost**: the seam the controller reads and writes scroll state through.
//!
//! # How it fits in the system
//! The host (browser or test harness) forwards input events and animation
//! frame timestamps. The controller answers with whether the native default
//! should be suppressed and whether another frame is needed. No JS types
//! cross this boundary.

pub mod animator;
pub mod config;
pub mod controller;
pub mod easing;
pub mod host;
pub mod input;
pub mod testing;

pub use animator::ScrollAnimation;
pub use config::{SnapConfig, SnapConfigError};
pub use controller::{
    FrameOutcome, InputDisposition, SnapController, SnapEvent, SnapStart, SnapTrigger,
};
pub use host::ScrollHost;
pub use input::{KeyIntent, ScrollDirection, WheelInput};
