#![forbid(unsafe_code)]

//! Simulated page for exercising the controller without a browser.

use crate::host::ScrollHost;

/// A page with a fixed document height, a viewport, and an optional intro
/// element at a fixed document offset.
///
/// Writes clamp to `0..=document_height - viewport_height`, matching how a
/// browser clamps `window.scrollTo`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSim {
    intro_offset: Option<f64>,
    document_height: f64,
    viewport_height: f64,
    scroll_y: f64,
    writes: usize,
}

impl PageSim {
    /// Page whose intro element sits at document offset `intro_offset`.
    #[must_use]
    pub fn new(intro_offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            intro_offset: Some(intro_offset),
            document_height,
            viewport_height,
            scroll_y: 0.0,
            writes: 0,
        }
    }

    /// Page with no intro element.
    #[must_use]
    pub fn without_intro(document_height: f64, viewport_height: f64) -> Self {
        Self {
            intro_offset: None,
            ..Self::new(0.0, document_height, viewport_height)
        }
    }

    /// Builder: start scrolled to `y`.
    #[must_use]
    pub fn with_scroll(mut self, y: f64) -> Self {
        self.scroll_y = self.clamp(y);
        self
    }

    /// Simulate native (user-driven) scrolling. Not counted as a write.
    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = self.clamp(y);
    }

    /// Simulate layout shifting the intro element.
    pub fn move_intro(&mut self, intro_offset: Option<f64>) {
        self.intro_offset = intro_offset;
    }

    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Number of [`ScrollHost::scroll_to`] calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn clamp(&self, y: f64) -> f64 {
        y.clamp(0.0, self.max_scroll())
    }
}

impl ScrollHost for PageSim {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: f64) {
        self.scroll_y = self.clamp(y);
        self.writes += 1;
    }

    fn intro_top(&self) -> Option<f64> {
        self.intro_offset.map(|offset| offset - self.scroll_y)
    }
}
