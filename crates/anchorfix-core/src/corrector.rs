#![forbid(unsafe_code)]

//! The anchor offset corrector.
//!
//! [`AnchorOffsetCorrector`] consumes [`PageEvent`]s pushed by the host,
//! schedules corrections on a deadline queue, and applies them when polled.
//! A correction shifts the scroll position up by the banner's bottom edge so
//! the native anchor jump does not leave the target hidden under the banner.
//!
//! # Re-entrancy guard
//!
//! Clicking an in-page anchor makes the browser fire a fragment-change
//! notification for the same user action, which would schedule a second,
//! redundant correction. The corrector owns an explicit two-state [`Guard`]:
//! a tracked click arms it, the next fragment-change consumes it and is
//! suppressed. Fragment changes with no preceding click (back/forward
//! navigation) find the guard disarmed and schedule normally.

use core::time::Duration;

use crate::config::{CorrectorConfig, LoadStrategy};
use crate::fragment::{Fragment, href_targets_fragment};
use crate::geometry::ScrollPosition;
use crate::host::PageHost;
use crate::scheduler::CorrectionScheduler;

/// A page notification forwarded by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading.
    PageLoaded,
    /// A link was clicked; `href` is the link's raw href attribute.
    AnchorClicked {
        /// The clicked link's href. Only hrefs starting with `#` are tracked.
        href: String,
    },
    /// The URL fragment changed without a full navigation.
    FragmentChanged,
    /// Deferred content rendering (e.g. math typesetting) finished.
    ContentSettled,
}

/// Suppression state for the click/fragment-change duplicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Guard {
    /// No tracked click pending; fragment changes schedule normally.
    #[default]
    Idle,
    /// A tracked click already scheduled a correction; the next
    /// fragment-change notification is consumed without scheduling.
    SuppressNext,
}

/// Result of one polled correction attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CorrectionOutcome {
    /// The scroll position was shifted up by `bottom`.
    Applied {
        /// Banner bottom edge subtracted from the native jump position.
        bottom: f64,
        /// The scroll position written to the host.
        scroll: ScrollPosition,
    },
    /// No write was performed.
    Skipped(SkipReason),
}

/// Why a polled correction did not write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The current fragment is empty; there is no anchor target.
    EmptyFragment,
    /// The scroll position already carries this correction for the current
    /// fragment and nothing has moved it since.
    AlreadyApplied,
}

/// The position a correction last wrote, used to make repeated firings
/// idempotent. Invalidated by any fragment or host-side scroll change.
#[derive(Debug, Clone, PartialEq)]
struct AppliedCorrection {
    fragment: Fragment,
    scroll: ScrollPosition,
}

/// Event-driven scroll offset correction for in-page anchor navigation.
#[derive(Debug, Clone, Default)]
pub struct AnchorOffsetCorrector {
    config: CorrectorConfig,
    guard: Guard,
    awaiting_settle: bool,
    scheduler: CorrectionScheduler,
    applied: Option<AppliedCorrection>,
}

impl AnchorOffsetCorrector {
    /// Create a corrector with the given timing configuration.
    #[must_use]
    pub fn new(config: CorrectorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The current guard state.
    #[must_use]
    pub const fn guard(&self) -> Guard {
        self.guard
    }

    /// Number of corrections scheduled but not yet due.
    #[must_use]
    pub fn pending_corrections(&self) -> usize {
        self.scheduler.pending()
    }

    /// Route a host event, scheduling corrections against `now`.
    pub fn handle(&mut self, event: PageEvent, now: Duration) {
        match event {
            PageEvent::PageLoaded => match self.config.load_strategy {
                LoadStrategy::FixedDelay(delay) => {
                    tracing::debug!(?delay, "scheduling from load");
                    self.scheduler.schedule(now, delay);
                }
                LoadStrategy::AfterContentSettled { .. } => {
                    self.awaiting_settle = true;
                }
            },
            PageEvent::AnchorClicked { href } => {
                if !href_targets_fragment(&href) {
                    return;
                }
                tracing::debug!(href = %href, "scheduling from click");
                self.guard = Guard::SuppressNext;
                self.scheduler.schedule(now, self.config.click_delay);
            }
            PageEvent::FragmentChanged => {
                if self.guard == Guard::SuppressNext {
                    tracing::debug!("fragment change suppressed, click already scheduled");
                    self.guard = Guard::Idle;
                    return;
                }
                tracing::debug!("scheduling from fragment change");
                self.scheduler.schedule(now, self.config.click_delay);
            }
            PageEvent::ContentSettled => {
                if !self.awaiting_settle {
                    return;
                }
                self.awaiting_settle = false;
                if let LoadStrategy::AfterContentSettled { settle_delay } =
                    self.config.load_strategy
                {
                    tracing::debug!(?settle_delay, "scheduling from settle signal");
                    self.scheduler.schedule(now, settle_delay);
                }
            }
        }
    }

    /// Drain due deadlines and run one correction per firing.
    ///
    /// Returns the outcome of each firing in order. Extra firings beyond the
    /// first are absorbed as [`SkipReason::AlreadyApplied`] unless the host
    /// moved the scroll in between.
    pub fn poll<H: PageHost>(&mut self, now: Duration, host: &mut H) -> Vec<CorrectionOutcome> {
        let fired = self.scheduler.take_due(now);
        (0..fired).map(|_| self.correct(host)).collect()
    }

    /// Apply the offset correction once, immediately.
    ///
    /// Reads the fragment, banner box, and scroll position from the host and
    /// writes `(x, y - banner_bottom)`. Does nothing when the fragment is
    /// empty or when the current position already carries this correction.
    pub fn correct<H: PageHost>(&mut self, host: &mut H) -> CorrectionOutcome {
        let fragment = host.fragment();
        if fragment.is_empty() {
            return CorrectionOutcome::Skipped(SkipReason::EmptyFragment);
        }

        let current = host.scroll_position();
        if let Some(applied) = &self.applied
            && applied.fragment == fragment
            && applied.scroll == current
        {
            return CorrectionOutcome::Skipped(SkipReason::AlreadyApplied);
        }

        let bottom = host.banner_metrics().bottom();
        let corrected = current.shifted_up(bottom);
        tracing::debug!(%fragment, bottom, from = current.y, to = corrected.y, "applying offset");
        host.set_scroll_position(corrected);
        self.applied = Some(AppliedCorrection {
            fragment,
            scroll: corrected,
        });
        CorrectionOutcome::Applied {
            bottom,
            scroll: corrected,
        }
    }
}
