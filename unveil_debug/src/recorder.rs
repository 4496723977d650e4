// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in
//! arrival order, as a [`RecordedEvent`]. Tests use the typed accessors to
//! assert on diagnostics and state changes.

use unveil_core::trace::{
    CounterFinished, Diagnostic, IgnoredInput, TraceSink, TransitionEvent,
};

/// One recorded event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A diagnostic.
    Diagnostic(Diagnostic),
    /// A view-state change.
    Transition(TransitionEvent),
    /// An input the current state did not accept.
    InputIgnored(IgnoredInput),
    /// A statistic reached its target.
    CounterFinished(CounterFinished),
}

/// A [`TraceSink`] that stores events in a `Vec`.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event, in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Recorded diagnostics, in arrival order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::Diagnostic(d) => Some(d),
            _ => None,
        })
    }

    /// Recorded view-state changes, in arrival order.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionEvent> + '_ {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::Transition(t) => Some(t),
            _ => None,
        })
    }

    /// Recorded ignored inputs, in arrival order.
    pub fn ignored_inputs(&self) -> impl Iterator<Item = &IgnoredInput> + '_ {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::InputIgnored(i) => Some(i),
            _ => None,
        })
    }

    /// Recorded counter completions, in arrival order.
    pub fn finished_counters(&self) -> impl Iterator<Item = &CounterFinished> + '_ {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::CounterFinished(c) => Some(c),
            _ => None,
        })
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Sends every recorded event, in order, to another sink.
    pub fn replay(&self, sink: &mut dyn TraceSink) {
        for event in &self.events {
            match event {
                RecordedEvent::Diagnostic(d) => sink.on_diagnostic(d),
                RecordedEvent::Transition(t) => sink.on_transition(t),
                RecordedEvent::InputIgnored(i) => sink.on_input_ignored(i),
                RecordedEvent::CounterFinished(c) => sink.on_counter_finished(c),
            }
        }
    }
}

impl TraceSink for RecorderSink {
    fn on_diagnostic(&mut self, d: &Diagnostic) {
        self.events.push(RecordedEvent::Diagnostic(*d));
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        self.events.push(RecordedEvent::Transition(*e));
    }

    fn on_input_ignored(&mut self, e: &IgnoredInput) {
        self.events.push(RecordedEvent::InputIgnored(*e));
    }

    fn on_counter_finished(&mut self, e: &CounterFinished) {
        self.events.push(RecordedEvent::CounterFinished(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_core::input::Input;
    use unveil_core::sequencer::ViewState;
    use unveil_core::time::HostTime;
    use unveil_core::trace::Tracer;

    #[test]
    fn records_in_order_through_tracer() {
        let mut sink = RecorderSink::new();
        let mut tracer = Tracer::new(&mut sink);
        tracer.transition(&TransitionEvent {
            from: ViewState::Intro,
            to: ViewState::TransitioningIn,
            at: HostTime::ZERO,
        });
        tracer.diagnostic(&Diagnostic::InvalidStatTarget { index: 2 });
        tracer.input_ignored(&IgnoredInput {
            input: Input::RevealActivated,
            state: ViewState::TransitioningIn,
            at: HostTime::from_millis(10),
        });
        drop(tracer);

        assert_eq!(sink.events().len(), 3);
        assert!(matches!(sink.events()[0], RecordedEvent::Transition(_)));
        assert_eq!(
            sink.diagnostics().collect::<Vec<_>>(),
            [&Diagnostic::InvalidStatTarget { index: 2 }]
        );
        assert_eq!(sink.transitions().count(), 1);
        assert_eq!(sink.ignored_inputs().count(), 1);

        sink.clear();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn replay_preserves_order() {
        let mut sink = RecorderSink::new();
        sink.on_counter_finished(&CounterFinished {
            index: 0,
            target: 5,
            at: HostTime::from_millis(3_500),
        });
        sink.on_diagnostic(&Diagnostic::InvalidStatTarget { index: 1 });
        sink.on_input_ignored(&IgnoredInput {
            input: Input::CloseActivated,
            state: ViewState::Intro,
            at: HostTime::from_millis(4_000),
        });

        let mut copy = RecorderSink::new();
        sink.replay(&mut copy);
        assert_eq!(copy.events(), sink.events());
    }
}
