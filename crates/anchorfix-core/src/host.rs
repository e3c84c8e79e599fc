#![forbid(unsafe_code)]

//! The page capability trait.
//!
//! [`PageHost`] is the seam between the corrector and the embedding
//! environment. The corrector reads the current fragment, the banner's
//! layout box, and the scroll position through it, and writes corrected
//! scroll positions back. In the browser the implementation is JS glue over
//! `location`, the banner element, and `window.scrollTo`; in tests it is
//! [`MockPage`].

use crate::fragment::Fragment;
use crate::geometry::{BannerMetrics, ScrollPosition};

/// Read/write access to the page the corrector operates on.
///
/// All reads are performed per invocation and never cached: the fragment can
/// change on every navigation and the banner can reflow at any time.
pub trait PageHost {
    /// The current URL fragment.
    fn fragment(&self) -> Fragment;

    /// The banner element's layout box. An absent banner is reported as
    /// degenerate zero metrics, which yields a zero offset.
    fn banner_metrics(&self) -> BannerMetrics;

    /// The current window scroll position.
    fn scroll_position(&self) -> ScrollPosition;

    /// Set the window scroll position.
    fn set_scroll_position(&mut self, pos: ScrollPosition);
}

/// An in-memory page for testing.
///
/// The test drives navigation by setting the fragment and simulates the
/// native anchor jump by setting the scroll position directly. Every write
/// the corrector performs is also appended to [`writes`](Self::writes).
#[derive(Debug, Clone, Default)]
pub struct MockPage {
    fragment: Fragment,
    banner: BannerMetrics,
    scroll: ScrollPosition,
    /// Every scroll write performed through the host trait, in order.
    pub writes: Vec<ScrollPosition>,
}

impl MockPage {
    /// Create a page with no fragment, a degenerate banner, and the scroll
    /// at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page with the given banner metrics.
    #[must_use]
    pub fn with_banner(banner: BannerMetrics) -> Self {
        Self {
            banner,
            ..Self::default()
        }
    }

    /// Navigate to a hash, as the browser would on click or back/forward.
    pub fn set_hash(&mut self, hash: &str) {
        self.fragment = Fragment::from_hash(hash);
    }

    /// Replace the banner layout box.
    pub fn set_banner(&mut self, banner: BannerMetrics) {
        self.banner = banner;
    }

    /// Simulate the native anchor jump (or any host-side scroll) without
    /// recording a corrector write.
    pub fn jump_to(&mut self, pos: ScrollPosition) {
        self.scroll = pos;
    }
}

impl PageHost for MockPage {
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
        self.writes.push(pos);
    }
}
