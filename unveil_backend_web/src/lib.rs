// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for unveil.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` pump for due timers
//! - [`DomStage`]: [`Stage`] over the live DOM
//! - [`DocumentLookup`]: required-element lookup by id
//! - [`ConsoleSink`]: diagnostics on the browser console

#![no_std]

extern crate alloc;

mod console;
mod lookup;
mod raf;
mod stage;

pub use console::ConsoleSink;
pub use lookup::DocumentLookup;
pub use raf::RafLoop;
pub use stage::{DomStage, RejectionHook};
pub use unveil_core::stage::Stage;

use unveil_core::time::HostTime;

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks, on the same clock as
/// the timestamps [`RafLoop`] delivers.
#[must_use]
pub fn now() -> HostTime {
    raf::host_time_from_ms(raf::performance_now())
}
