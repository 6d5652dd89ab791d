#![forbid(unsafe_code)]

//! Mount options passed from JavaScript as a JSON string.
//!
//! ```json
//! { "intro_selector": ".intro p", "duration_ms": 1200,
//!   "top_tolerance": 2.0, "zone_tolerance": 40.0, "offset_y": 0.0 }
//! ```
//!
//! Every field is optional. Snap tuning fields are the flattened
//! [`SnapConfig`] fields.

use serde::{Deserialize, Serialize};
use snapscroll_core::{SnapConfig, SnapConfigError};

/// Selector used when the page does not name its intro element.
pub const DEFAULT_INTRO_SELECTOR: &str = ".intro p";

/// Everything needed to mount a snap controller on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountOptions {
    /// CSS selector of the element the viewport snaps to.
    pub intro_selector: String,
    #[serde(flatten)]
    pub config: SnapConfig,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            intro_selector: DEFAULT_INTRO_SELECTOR.to_string(),
            config: SnapConfig::default(),
        }
    }
}

impl MountOptions {
    /// Parse and validate options. `None` or a blank string yields defaults.
    pub fn from_json(json: Option<&str>) -> Result<Self, MountError> {
        let options = match json.map(str::trim) {
            None | Some("") => Self::default(),
            Some(json) => serde_json::from_str::<Self>(json)
                .map_err(|e| MountError::Options(SnapConfigError::Json(e)))?,
        };
        options.validated()
    }

    fn validated(mut self) -> Result<Self, MountError> {
        let selector = self.intro_selector.trim();
        if selector.is_empty() {
            return Err(MountError::EmptySelector);
        }
        if selector.len() != self.intro_selector.len() {
            self.intro_selector = selector.to_string();
        }
        self.config = self.config.validated().map_err(MountError::Options)?;
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Reasons a [`MountOptions`] or the page binding cannot be set up.
#[derive(Debug)]
pub enum MountError {
    /// Options JSON failed to parse or validate.
    Options(SnapConfigError),
    /// `intro_selector` was empty.
    EmptySelector,
    /// No global `window` (e.g. running in a worker).
    NoWindow,
    /// `window.document` is unavailable.
    NoDocument,
}

impl std::fmt::Display for MountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Options(e) => write!(f, "invalid snap options: {e}"),
            Self::EmptySelector => write!(f, "intro_selector must not be empty"),
            Self::NoWindow => write!(f, "no global window"),
            Self::NoDocument => write!(f, "window has no document"),
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Options(e) => Some(e),
            Self::EmptySelector | Self::NoWindow | Self::NoDocument => None,
        }
    }
}
