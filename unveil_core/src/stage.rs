// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for UI integrations.
//!
//! The core never touches a document directly. A host implements [`Stage`]
//! over whatever presentation tree it owns (the browser DOM in
//! `unveil_backend_web`, a recording double in `unveil_harness`) and hands it
//! to [`Landing`](crate::landing::Landing) on every call.
//!
//! Besides the stage, a host provides:
//!
//! - **Time**: a monotonic `now() -> HostTime`.
//! - **A pump**: something that calls
//!   [`Landing::advance`](crate::landing::Landing::advance) often enough for
//!   the 16 ms counter tick (a `requestAnimationFrame` loop on the web).
//! - **Listeners**: translation of native events into
//!   [`Input`](crate::input::Input)s, registered only after
//!   [`locate`](crate::mount::locate) succeeds.
//! - **Playback feedback**: [`Stage::play`] only requests playback; when the
//!   platform rejects it the host later sends
//!   [`Input::PlaybackRejected`](crate::input::Input::PlaybackRejected).

use kurbo::{Point, Size, Vec2};

/// Why playback is being requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayIntent {
    /// The attempt made by the reveal sequence itself.
    Automatic,
    /// The user activated the fallback control.
    Manual,
}

/// Applies landing-page changes to a host presentation tree.
pub trait Stage {
    /// Adds or removes the intro region's fade-out cue.
    fn set_intro_fading(&mut self, fading: bool);

    /// Shows or hides the intro region.
    fn set_intro_visible(&mut self, visible: bool);

    /// Marks the video region active or inactive.
    fn set_video_active(&mut self, active: bool);

    /// Requests media playback. Rejection is reported asynchronously.
    fn play(&mut self, intent: PlayIntent);

    /// Pauses media playback.
    fn pause(&mut self);

    /// Resets the playback position to the start.
    fn rewind(&mut self);

    /// Creates the fallback play control over the video region.
    ///
    /// Returns `false` if the control could not be created.
    fn show_fallback(&mut self) -> bool;

    /// Destroys the fallback play control.
    fn remove_fallback(&mut self);

    /// Re-reads the statistic elements and their target declarations.
    ///
    /// Called once, right before the counters start, so declarations that
    /// changed after the page mounted are honored.
    fn refresh_stats(&mut self) {}

    /// Number of statistic elements.
    fn stat_count(&self) -> usize;

    /// Raw target declaration of a statistic element.
    fn stat_target(&self, index: usize) -> Option<&str>;

    /// Replaces the displayed text of a statistic element.
    fn set_stat_text(&mut self, index: usize, text: &str);

    /// Scales the number of a statistic element.
    fn set_stat_scale(&mut self, index: usize, scale: f64);

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Re-reads the decorative orbs. Called on every pointer move.
    fn refresh_orbs(&mut self) {}

    /// Number of decorative orbs.
    fn orb_count(&self) -> usize;

    /// Translates a decorative orb.
    fn set_orb_offset(&mut self, index: usize, offset: Vec2);

    /// Moves the cursor glow to viewport coordinates.
    fn move_glow(&mut self, position: Point);
}
