// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic simulation host for unveil landing pages.
//!
//! The harness stands in for a browser: [`SimDocument`] answers element
//! lookups, [`SimStage`] records every [`Stage`](unveil_core::stage::Stage)
//! call and keeps the resulting visible state, and [`Sim`] drives a
//! [`Landing`](unveil_core::landing::Landing) on a virtual clock, feeding
//! playback rejections back in the way a browser's promise callbacks would.
//!
//! ```
//! use unveil_core::config::LandingConfig;
//! use unveil_core::input::Input;
//! use unveil_core::time::Duration;
//! use unveil_harness::{Sim, SimDocument, SimStage};
//!
//! let config = LandingConfig::astra();
//! let mut sim = Sim::mount(&SimDocument::complete(&config), &config, SimStage::new());
//! sim.send(Input::RevealActivated);
//! sim.advance_by(Duration::from_millis(600));
//! assert!(sim.stage().video_active());
//! ```

mod document;
mod sim;
mod stage;

pub use document::SimDocument;
pub use sim::Sim;
pub use stage::{SimStage, StageOp};
