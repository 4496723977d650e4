// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual-clock driver.

use unveil_core::config::LandingConfig;
use unveil_core::input::Input;
use unveil_core::landing::Landing;
use unveil_core::mount::{ElementLookup, locate};
use unveil_core::time::{Duration, HostTime};
use unveil_core::trace::{Diagnostic, TraceSink, Tracer};
use unveil_debug::recorder::RecorderSink;

use crate::stage::SimStage;

/// A landing page mounted on a [`SimStage`] and driven by virtual time.
///
/// Time starts at zero when the page is mounted. Playback rejections queued
/// by the stage are delivered as [`Input::PlaybackRejected`] at the instant
/// they were produced, after the call that caused them returns.
#[derive(Debug)]
pub struct Sim {
    landing: Landing,
    stage: SimStage,
    trace: RecorderSink,
    now: HostTime,
    listening: bool,
}

impl Sim {
    /// Mounts a page over `document`.
    ///
    /// When a required element is missing, a single
    /// [`Diagnostic::MountFailed`] is recorded and the page stays inert: no
    /// listeners, no counters, nothing scheduled.
    pub fn mount<L: ElementLookup>(document: &L, config: &LandingConfig, stage: SimStage) -> Self {
        let mut sim = Self {
            landing: Landing::new(),
            stage,
            trace: RecorderSink::new(),
            now: HostTime::ZERO,
            listening: false,
        };
        match locate(document, config) {
            Ok(_) => {
                sim.listening = true;
                sim.landing.start(sim.now);
            }
            Err(err) => sim.trace.on_diagnostic(&Diagnostic::MountFailed(err)),
        }
        sim
    }

    /// Whether event listeners were registered.
    #[must_use]
    pub fn listeners_registered(&self) -> bool {
        self.listening
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> HostTime {
        self.now
    }

    /// The page state.
    #[must_use]
    pub fn landing(&self) -> &Landing {
        &self.landing
    }

    /// The stage.
    #[must_use]
    pub fn stage(&self) -> &SimStage {
        &self.stage
    }

    /// The stage, for clearing recorded calls.
    pub fn stage_mut(&mut self) -> &mut SimStage {
        &mut self.stage
    }

    /// Everything traced so far.
    #[must_use]
    pub fn trace(&self) -> &RecorderSink {
        &self.trace
    }

    /// Delivers an input at the current time.
    ///
    /// Returns whether the default action was suppressed. Without listeners
    /// the input never reaches the page and `false` is returned.
    pub fn send(&mut self, input: Input) -> bool {
        if !self.listening {
            return false;
        }
        let mut tracer = Tracer::new(&mut self.trace);
        let suppress = self
            .landing
            .handle(&mut self.stage, &mut tracer, input, self.now);
        self.deliver_rejections();
        suppress
    }

    /// Lets `elapsed` pass.
    pub fn advance_by(&mut self, elapsed: Duration) {
        self.run_until(self.now.saturating_add(elapsed));
    }

    /// Lets time pass until `until`, running each timer at its deadline.
    ///
    /// Does nothing if `until` is in the past.
    pub fn run_until(&mut self, until: HostTime) {
        loop {
            let next = self.landing.next_deadline().filter(|d| *d <= until);
            let to = next.unwrap_or(until).max(self.now);
            self.stage.advance_media(to.saturating_duration_since(self.now));
            self.now = to;
            if next.is_none() {
                return;
            }
            let mut tracer = Tracer::new(&mut self.trace);
            self.landing.advance(&mut self.stage, &mut tracer, self.now);
            self.deliver_rejections();
        }
    }

    fn deliver_rejections(&mut self) {
        loop {
            let rejections = self.stage.take_rejections();
            if rejections.is_empty() {
                return;
            }
            let mut tracer = Tracer::new(&mut self.trace);
            for intent in rejections {
                self.landing.handle(
                    &mut self.stage,
                    &mut tracer,
                    Input::PlaybackRejected(intent),
                    self.now,
                );
            }
        }
    }
}
