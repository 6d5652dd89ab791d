#![forbid(unsafe_code)]

//! The seam between the controller and whatever owns the real scroll offset.

/// Read/write access to a page's vertical scroll state.
///
/// Implementations are expected to clamp writes the way a browser viewport
/// does; the controller never assumes a write lands exactly.
pub trait ScrollHost {
    /// Live vertical scroll offset of the viewport.
    fn scroll_y(&self) -> f64;

    /// Scroll the viewport to `y` (horizontal offset stays at zero).
    fn scroll_to(&mut self, y: f64);

    /// Top edge of the intro element relative to the viewport, or `None`
    /// when the element cannot be found.
    fn intro_top(&self) -> Option<f64>;
}
