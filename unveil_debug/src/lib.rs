// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording and pretty-printing for unveil diagnostics.
//!
//! This crate provides [`TraceSink`](unveil_core::trace::TraceSink)
//! implementations for development and tests:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory recording for assertions.
//!
//! It enables the `trace` feature of `unveil_core`, so verbose events reach
//! these sinks.

pub mod pretty;
pub mod recorder;
