#![forbid(unsafe_code)]

//! Timing configuration for the corrector.
//!
//! The delays here exist because the browser's native anchor jump and any
//! reflow from deferred content rendering happen asynchronously relative to
//! script execution; a zero-delay correction would race the native jump and
//! be overwritten by it.

use core::time::Duration;

/// Delay between a click/hash-change trigger and its correction, just long
/// enough to run after the native jump on the same event loop.
pub const DEFAULT_CLICK_DELAY: Duration = Duration::from_millis(1);

/// Fixed post-load delay used when no settle signal is available. A guess:
/// it may under- or over-wait depending on how much content reflows.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(10);

/// Delay after the typesetting queue reports completion, covering the final
/// reflow it triggers.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// How the page-load trigger decides when layout is stable enough to correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Schedule after a fixed delay. The faithful fallback when the host has
    /// no render-completion signal; the delay is a heuristic.
    FixedDelay(Duration),
    /// Wait for the host to forward a content-settled signal (e.g. a
    /// typesetting library's render queue draining), then schedule after
    /// `settle_delay`.
    AfterContentSettled {
        /// Delay applied once the settle signal arrives.
        settle_delay: Duration,
    },
}

impl Default for LoadStrategy {
    fn default() -> Self {
        Self::AfterContentSettled {
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Corrector timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectorConfig {
    /// Delay for click- and hash-change-triggered corrections.
    pub click_delay: Duration,
    /// Page-load correction strategy.
    pub load_strategy: LoadStrategy,
}

impl CorrectorConfig {
    /// Configuration matching the production page: 1 ms trigger delay,
    /// settle-signal load strategy with a 100 ms tail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the click/hash-change delay.
    #[must_use]
    pub const fn with_click_delay(mut self, delay: Duration) -> Self {
        self.click_delay = delay;
        self
    }

    /// Replace the load strategy.
    #[must_use]
    pub const fn with_load_strategy(mut self, strategy: LoadStrategy) -> Self {
        self.load_strategy = strategy;
        self
    }
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            click_delay: DEFAULT_CLICK_DELAY,
            load_strategy: LoadStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_production_timings() {
        let config = CorrectorConfig::default();
        assert_eq!(config.click_delay, Duration::from_millis(1));
        assert_eq!(
            config.load_strategy,
            LoadStrategy::AfterContentSettled {
                settle_delay: Duration::from_millis(100)
            }
        );
    }

    #[test]
    fn builders_replace_fields() {
        let config = CorrectorConfig::new()
            .with_click_delay(Duration::from_millis(2))
            .with_load_strategy(LoadStrategy::FixedDelay(DEFAULT_LOAD_DELAY));
        assert_eq!(config.click_delay, Duration::from_millis(2));
        assert_eq!(
            config.load_strategy,
            LoadStrategy::FixedDelay(Duration::from_millis(10))
        );
    }
}
