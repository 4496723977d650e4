// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The landing page as a whole.
//!
//! [`Landing`] owns the [`RevealSequencer`], the [`CounterAnimator`], the
//! pointer cell and the [`TimerQueue`] they share. Hosts feed it inputs with
//! [`handle`](Landing::handle) and let time pass with
//! [`advance`](Landing::advance); every visible change goes through the
//! [`Stage`] passed to those calls.
//!
//! # Host loop pseudocode
//!
//! ```rust,ignore
//! let mut landing = Landing::new();
//! landing.start(now());
//!
//! // On every native event:
//! if landing.handle(&mut stage, &mut tracer, input, now()) {
//!     event.prevent_default();
//! }
//!
//! // On every animation frame:
//! landing.advance(&mut stage, &mut tracer, now());
//! ```

use kurbo::Point;

use crate::ambient::{self, PointerCell};
use crate::counter::{COUNTER_START_DELAY, CounterAnimator};
use crate::input::{Input, Key};
use crate::sequencer::{RevealSequencer, Step, ViewState};
use crate::stage::Stage;
use crate::time::HostTime;
use crate::timer::TimerQueue;
use crate::trace::{IgnoredInput, Tracer};

/// Work items carried by the shared timer queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    /// A delayed step of the reveal sequence.
    Reveal(Step),
    /// Start every statistic counter.
    StartCounters,
    /// One tick of the counter at this index.
    CounterTick(usize),
}

/// Everything a component needs while handling one input or timer.
pub(crate) struct Cx<'a, 't, S: ?Sized> {
    pub(crate) stage: &'a mut S,
    pub(crate) tracer: &'a mut Tracer<'t>,
    pub(crate) timers: &'a mut TimerQueue<Task>,
    /// The input's arrival time, or the deadline of the timer being run.
    pub(crate) now: HostTime,
}

/// Reveal sequence, statistic counters and pointer effects of one page.
#[derive(Debug, Default)]
pub struct Landing {
    sequencer: RevealSequencer,
    counters: CounterAnimator,
    pointer: PointerCell,
    timers: TimerQueue<Task>,
    started: bool,
}

impl Landing {
    /// Creates a landing page in the intro state with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the page as loaded at `now`, scheduling the counters.
    ///
    /// Calling it again has no effect.
    pub fn start(&mut self, now: HostTime) {
        if self.started {
            return;
        }
        self.started = true;
        self.timers
            .schedule_once(now.saturating_add(COUNTER_START_DELAY), Task::StartCounters);
    }

    /// Dispatches one input arriving at `now`.
    ///
    /// Returns `true` when the host should suppress the event's default
    /// action (Enter or Space on the reveal control).
    pub fn handle<S: Stage + ?Sized>(
        &mut self,
        stage: &mut S,
        tracer: &mut Tracer<'_>,
        input: Input,
        now: HostTime,
    ) -> bool {
        let mut cx = Cx {
            stage,
            tracer,
            timers: &mut self.timers,
            now,
        };
        let (accepted, suppress) = match input {
            Input::RevealActivated => (self.sequencer.activate(&mut cx), false),
            Input::KeyDown {
                key: Key::Enter | Key::Space,
                on_reveal_control: true,
            } => (self.sequencer.activate(&mut cx), true),
            Input::KeyDown {
                key: Key::Escape, ..
            }
            | Input::CloseActivated => (self.sequencer.close(&mut cx), false),
            Input::KeyDown { .. } => (true, false),
            Input::FallbackActivated => (self.sequencer.activate_fallback(&mut cx), false),
            Input::PlaybackRejected(intent) => {
                self.sequencer.playback_rejected(intent, &mut cx);
                (true, false)
            }
            Input::PointerMoved(position) => {
                ambient::pointer_moved(&mut self.pointer, &mut *cx.stage, position);
                (true, false)
            }
            Input::StatHover { index, entered } => {
                cx.stage.set_stat_scale(index, ambient::hover_scale(entered));
                (true, false)
            }
        };
        if !accepted {
            cx.tracer.input_ignored(&IgnoredInput {
                input,
                state: self.sequencer.state(),
                at: now,
            });
        }
        suppress
    }

    /// Runs every timer due at or before `now`, in deadline order.
    ///
    /// Each task sees its own deadline as the current time, so follow-up
    /// timers are placed exactly where they would be with a perfect pump.
    pub fn advance<S: Stage + ?Sized>(
        &mut self,
        stage: &mut S,
        tracer: &mut Tracer<'_>,
        now: HostTime,
    ) {
        while let Some(fired) = self.timers.pop_due(now) {
            let mut cx = Cx {
                stage: &mut *stage,
                tracer: &mut *tracer,
                timers: &mut self.timers,
                now: fired.deadline,
            };
            match fired.task {
                Task::Reveal(step) => self.sequencer.on_step(fired.id, step, &mut cx),
                Task::StartCounters => self.counters.start(&mut cx),
                Task::CounterTick(index) => self.counters.on_tick(index, &mut cx),
            }
        }
    }

    /// The earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.timers.next_deadline()
    }

    /// Current view state.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.sequencer.state()
    }

    /// Whether the fallback play control is shown.
    #[must_use]
    pub fn fallback_visible(&self) -> bool {
        self.sequencer.fallback_visible()
    }

    /// The statistic counters.
    #[must_use]
    pub fn counters(&self) -> &CounterAnimator {
        &self.counters
    }

    /// The last pointer position seen.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer.get()
    }
}
