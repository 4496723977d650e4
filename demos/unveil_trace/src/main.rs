// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated visit to the landing page, printed as a trace transcript.
//!
//! Mounts the page on a [`SimStage`] whose browser blocks autoplay, then
//! plays a short session: the visitor reveals the video, uses the fallback
//! play button, moves the pointer and closes the video with Escape. The recorded events are written to stdout through
//! a [`PrettyPrintSink`](unveil_debug::pretty::PrettyPrintSink).

use kurbo::Point;
use unveil_core::config::LandingConfig;
use unveil_core::input::{Input, Key};
use unveil_core::time::Duration;
use unveil_debug::pretty::PrettyPrintSink;
use unveil_harness::{Sim, SimDocument, SimStage};

fn main() {
    let config = LandingConfig::astra();
    let stage = SimStage::new()
        .block_autoplay()
        .with_orbs(3)
        .with_stats(&[Some("150"), Some("24"), Some("3"), Some("n/a")]);
    let mut sim = Sim::mount(&SimDocument::complete(&config), &config, stage);

    // -- session -----------------------------------------------------------
    sim.advance_by(Duration::from_millis(400));
    sim.send(Input::RevealActivated);
    // Pressing again mid-transition is ignored.
    sim.send(Input::RevealActivated);
    sim.advance_by(Duration::from_millis(1_200));

    sim.send(Input::FallbackActivated);
    sim.send(Input::PointerMoved(Point::new(320.0, 240.0)));
    sim.advance_by(Duration::from_millis(3_000));

    sim.send(Input::KeyDown {
        key: Key::Escape,
        on_reveal_control: false,
    });
    sim.advance_by(Duration::from_millis(600));

    // -- transcript --------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    sim.trace().replay(&mut pretty);

    println!(
        "{} events, ended in {:?} at {:?}",
        sim.trace().events().len(),
        sim.landing().view_state(),
        sim.now(),
    );
}
