#![forbid(unsafe_code)]

//! anchorfix core
//!
//! Corrects the window scroll position after an in-page anchor navigation so
//! that a fixed banner does not cover the anchored content. The browser's
//! native anchor jump places the target at the top of the viewport; this
//! crate shifts the scroll position up by the banner's rendered height.
//!
//! # Key Components
//!
//! - [`AnchorOffsetCorrector`] - Event-driven corrector with a re-entrancy guard
//! - [`PageHost`] - Capability trait for reading page state and writing scroll
//! - [`CorrectionScheduler`] - Fire-and-forget deadline queue, host-polled
//! - [`CorrectorConfig`] / [`LoadStrategy`] - Timing configuration
//!
//! # How it fits in the system
//! This crate is pure logic: it never touches a DOM or a real clock. The
//! embedding layer (`anchorfix-web`) owns a host-advanced monotonic clock,
//! pushes [`PageEvent`] values in, and applies the resulting scroll writes.

pub mod config;
pub mod corrector;
pub mod fragment;
pub mod geometry;
pub mod host;
pub mod scheduler;

pub use config::{CorrectorConfig, LoadStrategy};
pub use corrector::{AnchorOffsetCorrector, CorrectionOutcome, Guard, PageEvent, SkipReason};
pub use fragment::Fragment;
pub use geometry::{BannerMetrics, ScrollPosition};
pub use host::{MockPage, PageHost};
pub use scheduler::CorrectionScheduler;
