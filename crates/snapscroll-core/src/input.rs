#![forbid(unsafe_code)]

//! Input classification for wheel and keyboard events.
//!
//! The host hands over raw DOM values (`WheelEvent.deltaY`, `KeyboardEvent.key`)
//! and this module reduces them to a direction the controller can act on.

/// Normalized wheel input. Only the vertical delta matters for snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// `WheelEvent.deltaY`; positive scrolls toward the bottom of the page.
    pub delta_y: f64,
}

impl WheelInput {
    #[must_use]
    pub const fn new(delta_y: f64) -> Self {
        Self { delta_y }
    }

    /// Direction implied by the vertical delta.
    #[must_use]
    pub fn direction(self) -> ScrollDirection {
        ScrollDirection::from_delta(self.delta_y)
    }
}

/// Which way a gesture moves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
    /// Zero (or NaN) delta, e.g. a purely horizontal wheel event.
    Still,
}

impl ScrollDirection {
    #[must_use]
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            Self::Down
        } else if delta_y < 0.0 {
            Self::Up
        } else {
            Self::Still
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Still => "still",
        }
    }
}

/// Scroll intent carried by one of the recognized navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    /// `ArrowDown`, `PageDown`, or Space.
    Down,
    /// `ArrowUp`, `PageUp`, or `Home`.
    Up,
}

impl KeyIntent {
    /// Classify a DOM `KeyboardEvent.key` value.
    ///
    /// Legacy key names reported by older engines (`"Spacebar"`, `"Down"`,
    /// `"Up"`) map to the same intents. Every other key returns `None` and is
    /// left to the browser, including `End`.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "Down" | "PageDown" | " " | "Spacebar" => Some(Self::Down),
            "ArrowUp" | "Up" | "PageUp" | "Home" => Some(Self::Up),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_direction_follows_delta_sign() {
        assert_eq!(WheelInput::new(10.0).direction(), ScrollDirection::Down);
        assert_eq!(WheelInput::new(-0.5).direction(), ScrollDirection::Up);
        assert_eq!(WheelInput::new(0.0).direction(), ScrollDirection::Still);
        assert_eq!(WheelInput::new(f64::NAN).direction(), ScrollDirection::Still);
    }

    #[test]
    fn down_keys() {
        for key in ["ArrowDown", "PageDown", " ", "Spacebar", "Down"] {
            assert_eq!(KeyIntent::from_dom_key(key), Some(KeyIntent::Down), "{key:?}");
        }
    }

    #[test]
    fn up_keys() {
        for key in ["ArrowUp", "PageUp", "Home", "Up"] {
            assert_eq!(KeyIntent::from_dom_key(key), Some(KeyIntent::Up), "{key:?}");
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in ["End", "ArrowLeft", "Enter", "a", "Tab", ""] {
            assert_eq!(KeyIntent::from_dom_key(key), None, "{key:?}");
        }
    }

    #[test]
    fn direction_labels() {
        assert_eq!(ScrollDirection::Up.as_str(), "up");
        assert_eq!(ScrollDirection::Down.as_str(), "down");
        assert_eq!(ScrollDirection::Still.as_str(), "still");
    }
}
