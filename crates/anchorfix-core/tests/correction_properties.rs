#![forbid(unsafe_code)]

//! Property tests for the correction arithmetic and the re-entrancy guard.

use core::time::Duration;

use anchorfix_core::{
    AnchorOffsetCorrector, BannerMetrics, CorrectionOutcome, CorrectorConfig, LoadStrategy,
    MockPage, PageEvent, PageHost, ScrollPosition,
};
use proptest::prelude::*;

const MS: Duration = Duration::from_millis(1);

fn corrector() -> AnchorOffsetCorrector {
    AnchorOffsetCorrector::new(
        CorrectorConfig::new().with_load_strategy(LoadStrategy::FixedDelay(10 * MS)),
    )
}

proptest! {
    /// `y_new = y_native_jump - (banner_top + banner_outer_height)`, x unchanged.
    #[test]
    fn corrected_y_is_native_jump_minus_banner_bottom(
        x in 0.0f64..10_000.0,
        y in 0.0f64..100_000.0,
        top in 0.0f64..500.0,
        outer in 0.0f64..500.0,
    ) {
        let mut page = MockPage::with_banner(BannerMetrics::new(top, outer));
        page.set_hash("#target");
        page.jump_to(ScrollPosition::new(x, y));

        corrector().correct(&mut page);

        let scroll = page.scroll_position();
        prop_assert_eq!(scroll.x, x);
        prop_assert_eq!(scroll.y, y - (top + outer));
    }

    /// Repeating the correction with unchanged layout never moves the scroll
    /// past the single-application position.
    #[test]
    fn repeated_corrections_are_idempotent(
        y in 0.0f64..100_000.0,
        outer in 0.0f64..500.0,
        repeats in 1usize..8,
    ) {
        let mut page = MockPage::with_banner(BannerMetrics::new(0.0, outer));
        page.set_hash("#target");
        page.jump_to(ScrollPosition::new(0.0, y));
        let mut corr = corrector();

        for _ in 0..repeats {
            corr.correct(&mut page);
        }

        prop_assert_eq!(page.scroll_position().y, y - outer);
        prop_assert_eq!(page.writes.len(), 1);
    }

    /// An empty fragment never produces a write, whatever the layout.
    #[test]
    fn empty_fragment_never_writes(
        y in 0.0f64..100_000.0,
        top in 0.0f64..500.0,
        outer in 0.0f64..500.0,
    ) {
        let mut page = MockPage::with_banner(BannerMetrics::new(top, outer));
        page.jump_to(ScrollPosition::new(0.0, y));

        let outcome = corrector().correct(&mut page);

        prop_assert!(matches!(outcome, CorrectionOutcome::Skipped(_)));
        prop_assert!(page.writes.is_empty());
        prop_assert_eq!(page.scroll_position().y, y);
    }

    /// For any interleaving of clicks and fragment changes, each tracked
    /// click suppresses at most the one fragment change that follows it:
    /// scheduled count equals clicks plus unsuppressed fragment changes.
    #[test]
    fn guard_suppresses_exactly_one_following_fragment_change(
        events in proptest::collection::vec(any::<bool>(), 0..32),
    ) {
        let mut corr = corrector();
        let mut suppress_armed = false;
        let mut expected = 0usize;

        for (i, is_click) in events.iter().enumerate() {
            let now = i as u32 * MS;
            if *is_click {
                corr.handle(PageEvent::AnchorClicked { href: "#t".into() }, now);
                suppress_armed = true;
                expected += 1;
            } else {
                corr.handle(PageEvent::FragmentChanged, now);
                if suppress_armed {
                    suppress_armed = false;
                } else {
                    expected += 1;
                }
            }
        }

        prop_assert_eq!(corr.pending_corrections(), expected);
    }
}
