#![forbid(unsafe_code)]

//! Stepped correction session.
//!
//! A [`Session`] owns the clock, the mirrored page, the event queue, and the
//! corrector. The host loop is:
//!
//! 1. mirror page state ([`page_mut`](Session::page_mut)) and push events
//!    ([`push_event`](Session::push_event)),
//! 2. advance time ([`advance`](Session::advance)),
//! 3. drain outputs ([`take_outputs`](Session::take_outputs)) and apply the
//!    scroll writes with `window.scrollTo`.
//!
//! [`advance`](Session::advance) routes queued events at the pre-advance
//! time and polls at the post-advance time: a timer an event schedules is
//! relative to when the event arrived, the way `setTimeout` from a DOM
//! handler is, not to when the host next advances.

use core::time::Duration;

use anchorfix_core::{
    AnchorOffsetCorrector, CorrectionOutcome, CorrectorConfig, PageEvent, ScrollPosition,
};

use crate::{DeterministicClock, WebEventSource, WebPage};

/// Captured session outputs for host consumption.
#[derive(Debug, Default, Clone)]
pub struct SessionOutputs {
    /// Log lines written while stepping, mirroring the page script's
    /// banner-bottom trace.
    pub logs: Vec<String>,
    /// Scroll positions applied by corrections, in order.
    pub corrections: Vec<ScrollPosition>,
}

/// Host-driven correction session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    clock: DeterministicClock,
    page: WebPage,
    events: WebEventSource,
    corrector: AnchorOffsetCorrector,
    outputs: SessionOutputs,
}

impl Session {
    /// Create a session over the given page with the given timing config.
    #[must_use]
    pub fn new(config: CorrectorConfig, page: WebPage) -> Self {
        Self {
            clock: DeterministicClock::new(),
            page,
            events: WebEventSource::new(),
            corrector: AnchorOffsetCorrector::new(config),
            outputs: SessionOutputs::default(),
        }
    }

    /// Current monotonic time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Mutable access to the mirrored page, for navigation, reflow, and
    /// native-jump updates from the host.
    pub fn page_mut(&mut self) -> &mut WebPage {
        &mut self.page
    }

    /// Read access to the mirrored page.
    #[must_use]
    pub const fn page(&self) -> &WebPage {
        &self.page
    }

    /// Queue a page event. Routed on the next [`advance`](Self::advance) or
    /// [`step`](Self::step).
    pub fn push_event(&mut self, event: PageEvent) {
        self.events.push_event(event);
    }

    /// Number of corrections scheduled but not yet due.
    #[must_use]
    pub fn pending_corrections(&self) -> usize {
        self.corrector.pending_corrections()
    }

    /// Route queued events at the current time, advance the clock by `dt`,
    /// then poll due corrections.
    pub fn advance(&mut self, dt: Duration) {
        self.route_events();
        self.clock.advance(dt);
        self.poll();
    }

    /// Route queued events and poll due corrections, without advancing time.
    pub fn step(&mut self) {
        self.route_events();
        self.poll();
    }

    fn route_events(&mut self) {
        let now = self.clock.now();
        while let Some(event) = self.events.read_event() {
            tracing::trace!(?event, ?now, "routing page event");
            self.corrector.handle(event, now);
        }
    }

    fn poll(&mut self) {
        let now = self.clock.now();
        for outcome in self.corrector.poll(now, &mut self.page) {
            if let CorrectionOutcome::Applied { bottom, scroll } = outcome {
                self.outputs.logs.push(format!("banner bottom = {bottom}"));
                self.outputs.corrections.push(scroll);
            }
        }
    }

    /// Take captured outputs, leaving empty defaults.
    pub fn take_outputs(&mut self) -> SessionOutputs {
        std::mem::take(&mut self.outputs)
    }
}
