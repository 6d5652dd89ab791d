#![forbid(unsafe_code)]

//! Easing curve for scroll animation.
//!
//! The easing function maps normalized time `t ∈ [0, 1]` to normalized
//! progress. Inputs outside that range are clamped, so callers may pass raw
//! `elapsed / duration` ratios.

/// Quadratic ease-in-out.
///
/// `f(t) = 2t²` below the midpoint, `1 − (−2t + 2)² / 2` above it. Both
/// halves meet at `f(0.5) = 0.5` with matching slope.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}
