// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics and lifecycle tracing.
//!
//! This module provides a [`TraceSink`] trait with per-event methods. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. [`Diagnostic`]s (mount
//! failures, rejected playback, bad statistic declarations) are always
//! dispatched. The verbose lifecycle events compile to nothing unless the
//! `trace` feature is on, in which case each performs a single `Option`
//! branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the verbose [`Tracer`] methods.

use crate::error::MountError;
use crate::input::Input;
use crate::sequencer::ViewState;
use crate::stage::PlayIntent;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Something the host operator should know about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Diagnostic {
    /// A required element is missing; the page is inert.
    MountFailed(MountError),
    /// The platform rejected a playback request.
    PlaybackRejected {
        /// Which request was rejected.
        intent: PlayIntent,
        /// When the rejection was observed.
        at: HostTime,
        /// Whether the fallback control was shown in response.
        fallback_shown: bool,
    },
    /// A statistic element declares no usable integer target and is skipped.
    InvalidStatTarget {
        /// Index of the statistic element.
        index: usize,
    },
}

/// Emitted when the view state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionEvent {
    /// State before the change.
    pub from: ViewState,
    /// State after the change.
    pub to: ViewState,
    /// Time of the change (a timer's deadline for timer-driven changes).
    pub at: HostTime,
}

/// Emitted when an input arrives in a state that does not accept it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IgnoredInput {
    /// The input.
    pub input: Input,
    /// The state it arrived in.
    pub state: ViewState,
    /// Arrival time.
    pub at: HostTime,
}

/// Emitted when a statistic reaches its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFinished {
    /// Index of the statistic element.
    pub index: usize,
    /// The declared target.
    pub target: i64,
    /// Deadline of the final tick.
    pub at: HostTime,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives diagnostics and lifecycle events.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called for every diagnostic.
    fn on_diagnostic(&mut self, d: &Diagnostic) {
        _ = d;
    }

    /// Called when the view state changes.
    fn on_transition(&mut self, e: &TransitionEvent) {
        _ = e;
    }

    /// Called when an input is ignored by the current state.
    fn on_input_ignored(&mut self, e: &IgnoredInput) {
        _ = e;
    }

    /// Called when a statistic counter completes.
    fn on_counter_finished(&mut self, e: &CounterFinished) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    sink: Option<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer")
            .field("attached", &self.sink.is_some())
            .finish()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        Self { sink: Some(sink) }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self { sink: None }
    }

    /// Emits a [`Diagnostic`]. Always dispatched.
    #[inline]
    pub fn diagnostic(&mut self, d: &Diagnostic) {
        if let Some(s) = &mut self.sink {
            s.on_diagnostic(d);
        }
    }

    /// Emits a [`TransitionEvent`].
    #[inline]
    pub fn transition(&mut self, e: &TransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IgnoredInput`].
    #[inline]
    pub fn input_ignored(&mut self, e: &IgnoredInput) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_input_ignored(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CounterFinished`].
    #[inline]
    pub fn counter_finished(&mut self, e: &CounterFinished) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_counter_finished(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
