// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace sink.

use alloc::format;
use alloc::string::String;

use unveil_core::trace::{
    CounterFinished, Diagnostic, IgnoredInput, TraceSink, TransitionEvent,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`TraceSink`] that writes to the browser console.
///
/// Mount failures and playback rejections go to `console.error`, skipped
/// statistics to `console.warn`. Verbose events (only produced with the
/// `trace` feature of `unveil_core`) go to `console.debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Formats a diagnostic the way it is logged.
    #[must_use]
    pub fn describe(d: &Diagnostic) -> String {
        match d {
            Diagnostic::MountFailed(err) => format!("landing page inactive: {err}"),
            Diagnostic::PlaybackRejected {
                intent,
                fallback_shown,
                ..
            } => {
                if *fallback_shown {
                    format!("error playing video ({intent:?}); showing play button")
                } else {
                    format!("error playing video ({intent:?})")
                }
            }
            Diagnostic::InvalidStatTarget { index } => {
                format!("statistic {index} has no integer target; not animated")
            }
        }
    }
}

impl TraceSink for ConsoleSink {
    fn on_diagnostic(&mut self, d: &Diagnostic) {
        let message = JsValue::from_str(&Self::describe(d));
        match d {
            Diagnostic::InvalidStatTarget { .. } => console::warn_1(&message),
            Diagnostic::MountFailed(_) | Diagnostic::PlaybackRejected { .. } => {
                console::error_1(&message);
            }
        }
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        console::debug_1(&JsValue::from_str(&format!(
            "[{:?}] {:?} -> {:?}",
            e.at, e.from, e.to
        )));
    }

    fn on_input_ignored(&mut self, e: &IgnoredInput) {
        console::debug_1(&JsValue::from_str(&format!(
            "[{:?}] ignored {:?} in {:?}",
            e.at, e.input, e.state
        )));
    }

    fn on_counter_finished(&mut self, e: &CounterFinished) {
        console::debug_1(&JsValue::from_str(&format!(
            "[{:?}] statistic {} reached {}",
            e.at, e.index, e.target
        )));
    }
}
