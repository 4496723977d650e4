// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic logic for an interactive landing page.
//!
//! `unveil_core` owns the behavior of a single-page landing experience: a
//! reveal control that swaps an intro region for a video region, a counting
//! animation on statistic elements, and cosmetic pointer effects. It is
//! `no_std` compatible (with `alloc`) and never touches a real DOM or a real
//! clock; hosts drive it with discrete [`Input`](input::Input)s and explicit
//! [`HostTime`](time::HostTime) values.
//!
//! # Architecture
//!
//! ```text
//!   Host event ──► Input ──► Landing::handle() ──► Stage calls
//!                                 │
//!                                 ▼
//!                         TimerQueue<Task>
//!                                 │
//!   Host pump ──► Landing::advance(now) ──► due tasks ──► Stage calls
//! ```
//!
//! **[`sequencer`]**: The intro → video → intro state machine, including the
//! manual-play fallback when automatic playback is rejected.
//!
//! **[`counter`]**: One-shot count-up animation for statistic elements.
//!
//! **[`ambient`]**: Pointer parallax, cursor glow and hover scaling.
//!
//! **[`landing`]**: [`Landing`](landing::Landing), which owns the pieces
//! above plus the timer queue and dispatches inputs and timers.
//!
//! **[`stage`]**: The [`Stage`](stage::Stage) trait that hosts implement to
//! apply visual changes and start or stop media.
//!
//! **[`timer`]**: Cancellable one-shot and repeating timers.
//!
//! **[`mount`]**: Startup validation of the required document elements.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) diagnostics and verbose
//! lifecycle events.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Dispatches verbose lifecycle events
//!   (transitions, ignored inputs, finished counters). Diagnostics are always
//!   dispatched.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod ambient;
pub mod config;
pub mod counter;
pub mod error;
pub mod input;
pub mod landing;
pub mod mount;
pub mod sequencer;
pub mod stage;
pub mod time;
pub mod timer;
pub mod trace;

#[cfg(test)]
mod testing;
