#![forbid(unsafe_code)]

//! Conversion from DOM high-resolution timestamps to controller time.

use core::time::Duration;

/// Convert a `DOMHighResTimeStamp` (milliseconds since the time origin) to
/// a [`Duration`]. Negative, NaN, and infinite inputs map to zero; values
/// past `Duration::MAX` saturate.
#[must_use]
pub fn duration_from_ms(ms: f64) -> Duration {
    if !ms.is_finite() || ms <= 0.0 {
        return Duration::ZERO;
    }
    let secs = (ms / 1000.0).min(Duration::MAX.as_secs_f64());
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}
