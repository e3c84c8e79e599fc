#![forbid(unsafe_code)]

//! `anchorfix-web` provides a host-driven embedding for the anchorfix
//! corrector.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) pushes page events
//!   and layout/navigation state changes.
//! - **Deterministic time**: the host advances a monotonic clock explicitly.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! This crate intentionally does not bind to `wasm-bindgen`. The JS glue is
//! expected to forward `load`, delegated `a[href^="#"]` clicks, `hashchange`,
//! and the typesetting library's render-queue completion, then drain applied
//! scroll writes and log lines from [`Session`](session::Session) outputs.

pub mod session;

#[cfg(feature = "input-parser")]
pub mod input_parser;

use std::collections::VecDeque;

use anchorfix_core::{BannerMetrics, Fragment, PageEvent, PageHost, ScrollPosition};
use core::time::Duration;

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Current monotonic time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Set current monotonic time.
    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}

/// Host-updated page state backing the [`PageHost`] capability.
///
/// The host mirrors the real page into this struct: navigation updates the
/// hash, reflow updates the banner box, and the native anchor jump updates
/// the scroll position. Corrector writes land in [`writes`](Self::writes)
/// for the host to apply via `window.scrollTo`.
#[derive(Debug, Clone, Default)]
pub struct WebPage {
    fragment: Fragment,
    banner: BannerMetrics,
    scroll: ScrollPosition,
    writes: VecDeque<ScrollPosition>,
}

impl WebPage {
    /// Create a page with the given banner layout box.
    #[must_use]
    pub fn new(banner: BannerMetrics) -> Self {
        Self {
            banner,
            ..Self::default()
        }
    }

    /// Mirror a navigation: set the current `location.hash`.
    pub fn set_hash(&mut self, hash: &str) {
        self.fragment = Fragment::from_hash(hash);
    }

    /// Mirror a reflow: replace the banner layout box.
    pub fn set_banner(&mut self, banner: BannerMetrics) {
        self.banner = banner;
    }

    /// Mirror a host-side scroll (the native anchor jump, or the user).
    pub fn set_scroll(&mut self, pos: ScrollPosition) {
        self.scroll = pos;
    }

    /// Drain scroll writes the corrector performed, oldest first. The host
    /// applies each with `window.scrollTo`.
    pub fn drain_writes(&mut self) -> impl Iterator<Item = ScrollPosition> + '_ {
        self.writes.drain(..)
    }
}

impl PageHost for WebPage {
    fn fragment(&self) -> Fragment {
        self.fragment.clone()
    }

    fn banner_metrics(&self) -> BannerMetrics {
        self.banner
    }

    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn set_scroll_position(&mut self, pos: ScrollPosition) {
        self.scroll = pos;
        self.writes.push_back(pos);
    }
}

/// Queue of page events pushed by the host, drained by the session step.
#[derive(Debug, Clone, Default)]
pub struct WebEventSource {
    queue: VecDeque<PageEvent>,
}

impl WebEventSource {
    /// Create an empty event source.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Push a page event into the queue.
    pub fn push_event(&mut self, event: PageEvent) {
        self.queue.push_back(event);
    }

    /// Pop the oldest pending event.
    pub fn read_event(&mut self) -> Option<PageEvent> {
        self.queue.pop_front()
    }

    /// Whether any events are pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}
