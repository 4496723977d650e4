// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Times are
//! printed in milliseconds.

use std::io::Write;

use unveil_core::time::HostTime;
use unveil_core::trace::{
    CounterFinished, Diagnostic, IgnoredInput, TraceSink, TransitionEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.ticks() as f64 / 1000.0
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_diagnostic(&mut self, d: &Diagnostic) {
        let _ = match d {
            Diagnostic::MountFailed(err) => writeln!(self.writer, "[error] mount: {err}"),
            Diagnostic::PlaybackRejected {
                intent,
                at,
                fallback_shown,
            } => writeln!(
                self.writer,
                "[error] {:.1}ms playback rejected intent={intent:?} fallback={}",
                ms(*at),
                if *fallback_shown { "shown" } else { "no" },
            ),
            Diagnostic::InvalidStatTarget { index } => {
                writeln!(self.writer, "[warn] stat={index} invalid target, skipped")
            }
        };
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        let _ = writeln!(
            self.writer,
            "[state] {:.1}ms {:?} -> {:?}",
            ms(e.at),
            e.from,
            e.to,
        );
    }

    fn on_input_ignored(&mut self, e: &IgnoredInput) {
        let _ = writeln!(
            self.writer,
            "[ignored] {:.1}ms {:?} in {:?}",
            ms(e.at),
            e.input,
            e.state,
        );
    }

    fn on_counter_finished(&mut self, e: &CounterFinished) {
        let _ = writeln!(
            self.writer,
            "[counter] {:.1}ms stat={} target={}",
            ms(e.at),
            e.index,
            e.target,
        );
    }
}
