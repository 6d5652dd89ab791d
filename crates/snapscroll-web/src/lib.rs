#![forbid(unsafe_code)]

//! WASM front end for SnapScroll.
//!
//! This crate provides [`SnapScroll`], a `wasm-bindgen`-exported handle that
//! binds [`snapscroll_core::SnapController`] to the page it is loaded into:
//! `window` scroll offset, the intro element found by CSS selector, `wheel`
//! and `keydown` listeners, and a `requestAnimationFrame` loop.
//!
//! ```js
//! import init, { SnapScroll } from "./snapscroll_web.js";
//!
//! await init();
//! const snap = new SnapScroll(JSON.stringify({ intro_selector: ".intro p" }));
//! snap.attach();
//! // later: snap.detach(); snap.free();
//! ```
//!
//! Construct it after `DOMContentLoaded`; the intro element is looked up on
//! every input event, so it may be inserted later.

pub mod options;
pub mod timing;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::SnapScroll;
