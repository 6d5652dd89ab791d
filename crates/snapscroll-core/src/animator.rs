#![forbid(unsafe_code)]

//! Time-based scroll interpolation between two offsets.
//!
//! A [`ScrollAnimation`] is pure data: it knows where it started, where it
//! ends, and when. The owner samples it with a monotonic timestamp each
//! animation frame and writes the result to the viewport.
//!
//! # Invariants
//!
//! 1. `progress(now)` is clamped to `[0.0, 1.0]`.
//! 2. `sample(now)` returns exactly `to` once `progress(now) == 1.0`.
//! 3. Timestamps before `started_at` count as zero elapsed time.
//! 4. A zero duration is complete at any timestamp.

use core::time::Duration;

use crate::easing::ease_in_out;

/// One in-flight scroll from `from` to `to`.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    started_at: Duration,
    duration: Duration,
}

impl ScrollAnimation {
    /// Animate from `from` to `to` over `duration`, starting at `started_at`.
    #[must_use]
    pub fn new(from: f64, to: f64, started_at: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Whether sampling is unnecessary: zero duration or no distance to cover.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.duration.is_zero() || (self.to - self.from).abs() < f64::EPSILON
    }

    /// Normalized elapsed time at `now`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Scroll offset to apply at `now`.
    #[must_use]
    pub fn sample(&self, now: Duration) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    #[must_use]
    pub fn is_complete(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_at_origin() {
        let anim = ScrollAnimation::new(100.0, 500.0, ms(1000), ms(1200));
        assert_eq!(anim.sample(ms(1000)), 100.0);
        assert_eq!(anim.progress(ms(1000)), 0.0);
        assert!(!anim.is_complete(ms(1000)));
    }

    #[test]
    fn lands_exactly_on_target() {
        let anim = ScrollAnimation::new(0.0, 333.3, ms(0), ms(1200));
        assert_eq!(anim.sample(ms(1200)), 333.3);
        assert_eq!(anim.sample(ms(5000)), 333.3);
        assert!(anim.is_complete(ms(1200)));
    }

    #[test]
    fn midpoint_is_halfway() {
        let anim = ScrollAnimation::new(0.0, 400.0, ms(0), ms(1000));
        assert!((anim.sample(ms(500)) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn ease_in_starts_slow() {
        // 2 * 0.1² of the distance, well behind the linear 40.
        let anim = ScrollAnimation::new(0.0, 400.0, ms(0), ms(1000));
        assert!((anim.sample(ms(100)) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn upward_animation_decreases() {
        let anim = ScrollAnimation::new(300.0, 0.0, ms(0), ms(1000));
        let mut prev = anim.sample(ms(0));
        for step in 1..=20 {
            let y = anim.sample(ms(step * 50));
            assert!(y <= prev, "offset should not increase at step {step}");
            prev = y;
        }
        assert_eq!(prev, 0.0);
    }

    #[test]
    fn timestamp_before_start_counts_as_zero() {
        let anim = ScrollAnimation::new(10.0, 20.0, ms(500), ms(100));
        assert_eq!(anim.progress(ms(200)), 0.0);
        assert_eq!(anim.sample(ms(200)), 10.0);
    }

    #[test]
    fn zero_duration_is_complete_immediately() {
        let anim = ScrollAnimation::new(0.0, 300.0, ms(10), Duration::ZERO);
        assert!(anim.is_degenerate());
        assert!(anim.is_complete(ms(10)));
        assert_eq!(anim.sample(ms(0)), 300.0);
    }

    #[test]
    fn zero_distance_is_degenerate() {
        let anim = ScrollAnimation::new(42.0, 42.0, ms(0), ms(1200));
        assert!(anim.is_degenerate());
        let moving = ScrollAnimation::new(42.0, 43.0, ms(0), ms(1200));
        assert!(!moving.is_degenerate());
    }
}
