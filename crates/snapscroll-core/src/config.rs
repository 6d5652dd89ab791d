#![forbid(unsafe_code)]

//! Tuning parameters for the snap controller.
//!
//! Defaults reproduce the behavior pages ship with today: a 1.2 s
//! ease-in-out, a 2 px "top" band, and a 40 px snap zone around the intro
//! target. With the `serde` feature the config can be loaded from JSON or
//! TOML; missing fields fall back to their defaults.
//!
//! ```toml
//! duration_ms = 900
//! zone_tolerance = 60.0
//! ```

use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default animation length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1200);
/// Offsets at or below this count as "top"; some platforms never report 0.
pub const DEFAULT_TOP_TOLERANCE: f64 = 2.0;
/// Half-width of the band around the intro target that counts as "near".
pub const DEFAULT_ZONE_TOLERANCE: f64 = 40.0;

// ---------------------------------------------------------------------------
// SnapConfig
// ---------------------------------------------------------------------------

/// Tuning knobs for snap detection and animation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapConfig {
    /// Length of every snap animation. Zero snaps instantly.
    #[cfg_attr(feature = "serde", serde(rename = "duration_ms", with = "duration_ms"))]
    pub duration: Duration,

    /// Scroll offsets `<=` this value are treated as the page top.
    pub top_tolerance: f64,

    /// Distance from the intro target within which an upward gesture
    /// returns to the top. Also the width of the crossing boundary.
    pub zone_tolerance: f64,

    /// Extra pixels subtracted from the intro element's document offset
    /// (e.g. the height of a fixed header).
    pub offset_y: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            top_tolerance: DEFAULT_TOP_TOLERANCE,
            zone_tolerance: DEFAULT_ZONE_TOLERANCE,
            offset_y: 0.0,
        }
    }
}

impl SnapConfig {
    /// Builder: set the animation duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Builder: set the snap zone tolerance.
    #[must_use]
    pub fn zone_tolerance(mut self, tolerance: f64) -> Self {
        self.zone_tolerance = tolerance;
        self
    }

    /// Builder: set the extra offset subtracted from the intro target.
    #[must_use]
    pub fn offset_y(mut self, offset_y: f64) -> Self {
        self.offset_y = offset_y;
        self
    }

    /// Check every field, returning one message per violation.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.top_tolerance.is_finite() || self.top_tolerance < 0.0 {
            errors.push(format!(
                "top_tolerance must be a finite value >= 0, got {}",
                self.top_tolerance
            ));
        }
        if !self.zone_tolerance.is_finite() || self.zone_tolerance < 0.0 {
            errors.push(format!(
                "zone_tolerance must be a finite value >= 0, got {}",
                self.zone_tolerance
            ));
        }
        if !self.offset_y.is_finite() {
            errors.push(format!("offset_y must be finite, got {}", self.offset_y));
        }
        errors
    }

    /// Validate, turning violations into an error.
    pub fn validated(self) -> Result<Self, SnapConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(SnapConfigError::Validation(errors))
        }
    }
}

#[cfg(feature = "serde")]
impl SnapConfig {
    /// Parse from a JSON string and validate.
    pub fn from_json_str(s: &str) -> Result<Self, SnapConfigError> {
        serde_json::from_str::<Self>(s)
            .map_err(SnapConfigError::Json)?
            .validated()
    }

    /// Parse from a TOML string and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, SnapConfigError> {
        toml::from_str::<Self>(s)
            .map_err(SnapConfigError::Toml)?
            .validated()
    }
}

/// Serialize [`Duration`] as whole milliseconds.
#[cfg(feature = "serde")]
pub mod duration_ms {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`SnapConfig`].
#[derive(Debug)]
pub enum SnapConfigError {
    /// JSON parse error.
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    /// TOML parse error.
    #[cfg(feature = "serde")]
    Toml(toml::de::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for SnapConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "serde")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            #[cfg(feature = "serde")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for SnapConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Self::Json(e) => Some(e),
            #[cfg(feature = "serde")]
            Self::Toml(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let cfg = SnapConfig::default();
        assert_eq!(cfg.duration, Duration::from_millis(1200));
        assert_eq!(cfg.top_tolerance, 2.0);
        assert_eq!(cfg.zone_tolerance, 40.0);
        assert_eq!(cfg.offset_y, 0.0);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn builder_overrides_fields() {
        let cfg = SnapConfig::default()
            .duration(Duration::from_millis(300))
            .zone_tolerance(12.0)
            .offset_y(64.0);
        assert_eq!(cfg.duration, Duration::from_millis(300));
        assert_eq!(cfg.zone_tolerance, 12.0);
        assert_eq!(cfg.offset_y, 64.0);
    }

    #[test]
    fn validate_catches_negative_tolerance() {
        let cfg = SnapConfig {
            zone_tolerance: -1.0,
            ..SnapConfig::default()
        };
        let errors = cfg.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("zone_tolerance"));
    }

    #[test]
    fn validate_catches_non_finite_values() {
        let cfg = SnapConfig {
            top_tolerance: f64::NAN,
            offset_y: f64::INFINITY,
            ..SnapConfig::default()
        };
        assert_eq!(cfg.validate().len(), 2);
        assert!(matches!(
            cfg.validated(),
            Err(SnapConfigError::Validation(errs)) if errs.len() == 2
        ));
    }

    #[test]
    fn validation_error_display_joins_messages() {
        let err = SnapConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_missing_fields_use_defaults() {
        let cfg = SnapConfig::from_json_str(r#"{"duration_ms": 450}"#).expect("valid json");
        assert_eq!(cfg.duration, Duration::from_millis(450));
        assert_eq!(cfg.zone_tolerance, DEFAULT_ZONE_TOLERANCE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_round_trips_through_defaults() {
        let cfg = SnapConfig::from_toml_str("zone_tolerance = 55.0\noffset_y = 10.0\n")
            .expect("valid toml");
        assert_eq!(cfg.zone_tolerance, 55.0);
        assert_eq!(cfg.offset_y, 10.0);
        assert_eq!(cfg.duration, DEFAULT_DURATION);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_rejects_invalid_values() {
        let err = SnapConfig::from_json_str(r#"{"top_tolerance": -5.0}"#).unwrap_err();
        assert!(matches!(err, SnapConfigError::Validation(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_rejects_malformed_input() {
        let err = SnapConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SnapConfigError::Json(_)));
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
