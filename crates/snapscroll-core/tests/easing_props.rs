//! Property tests for the easing curve and the animator.

use core::time::Duration;

use proptest::prelude::*;
use snapscroll_core::easing::ease_in_out;
use snapscroll_core::testing::PageSim;
use snapscroll_core::{
    FrameOutcome, ScrollAnimation, ScrollHost, SnapConfig, SnapController, SnapTrigger,
};

#[test]
fn ease_in_out_endpoints() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
}

proptest! {
    #[test]
    fn ease_in_out_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ease_in_out(lo) <= ease_in_out(hi));
    }

    #[test]
    fn ease_in_out_stays_in_unit_range(t in -2.0f64..3.0) {
        let v = ease_in_out(t);
        prop_assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn animation_samples_stay_between_endpoints(
        from in -1.0e4f64..1.0e4,
        to in -1.0e4f64..1.0e4,
        duration_ms in 1u64..5000,
        at_ms in 0u64..6000,
    ) {
        let duration = Duration::from_millis(duration_ms);
        let anim = ScrollAnimation::new(from, to, Duration::ZERO, duration);
        let y = anim.sample(Duration::from_millis(at_ms));
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        prop_assert!(y >= lo - 1e-9 && y <= hi + 1e-9);
        if at_ms >= duration_ms {
            prop_assert_eq!(y, to);
        }
    }

    #[test]
    fn controller_lands_on_target(
        start in 0.0f64..3000.0,
        target in 0.0f64..3000.0,
        duration_ms in 0u64..2000,
        frame_ms in 1u64..50,
    ) {
        let mut page = PageSim::new(0.0, 4000.0, 800.0).with_scroll(start);
        let mut ctl = SnapController::new(SnapConfig::default(), &page);
        let duration = Duration::from_millis(duration_ms);
        let trigger = SnapTrigger::Programmatic;
        ctl.animate_scroll_to(&mut page, target, duration, Duration::ZERO, trigger);

        let mut now = Duration::ZERO;
        while ctl.on_frame(&mut page, now) == FrameOutcome::Continue {
            now += Duration::from_millis(frame_ms);
        }
        prop_assert!(!ctl.is_animating());
        prop_assert!((page.scroll_y() - target).abs() < 1e-9);
        prop_assert_eq!(ctl.last_y(), page.scroll_y());
    }
}
