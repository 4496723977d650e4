// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The intro → video → intro reveal sequence.
//!
//! [`RevealSequencer`] is an explicit state machine over [`ViewState`]:
//!
//! ```text
//!            activate                 fade (600 ms)
//!   Intro ─────────────► TransitioningIn ─────────────► Video
//!     ▲                                                   │
//!     │   restore (600 ms)                        close   │
//!     └──────────────────── TransitioningOut ◄────────────┘
//! ```
//!
//! Entering `Video` schedules the automatic playback attempt
//! [`PLAYBACK_DELAY`] later. If the platform rejects it, a fallback play
//! control is shown until the user activates it or closes the video.
//! Closing pauses and rewinds the media before the video region is
//! deactivated, and cancels a playback attempt that has not fired yet.
//!
//! Activation outside `Intro` and closing outside `Video` are refused, so
//! repeated triggers never start a second timer chain.

use crate::landing::{Cx, Task};
use crate::stage::{PlayIntent, Stage};
use crate::time::Duration;
use crate::timer::TimerId;
use crate::trace::{Diagnostic, TransitionEvent};

/// Length of the intro fade, matching the page's CSS transition.
pub const FADE_DURATION: Duration = Duration::from_millis(600);

/// Delay between showing the video region and the automatic playback attempt.
pub const PLAYBACK_DELAY: Duration = Duration::from_millis(1_000);

/// Which region is currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Intro visible, video hidden and paused.
    #[default]
    Intro,
    /// Intro fading out.
    TransitioningIn,
    /// Video region active.
    Video,
    /// Video region deactivated, intro about to be restored.
    TransitioningOut,
}

impl ViewState {
    /// Returns `true` for either transitioning state.
    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::TransitioningIn | Self::TransitioningOut)
    }
}

/// A delayed step of the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Fade finished: hide the intro, activate the video region.
    ShowVideo,
    /// Attempt automatic playback.
    StartPlayback,
    /// Restore the intro after closing.
    RestoreIntro,
}

/// State machine mediating the reveal and close transitions.
#[derive(Debug, Default)]
pub struct RevealSequencer {
    state: ViewState,
    fallback_visible: bool,
    pending: Option<TimerId>,
}

impl RevealSequencer {
    /// Creates a sequencer in [`ViewState::Intro`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Whether the fallback play control is currently shown.
    #[must_use]
    pub fn fallback_visible(&self) -> bool {
        self.fallback_visible
    }

    /// Starts the reveal. Returns `false` unless the state is `Intro`.
    pub(crate) fn activate<S: Stage + ?Sized>(&mut self, cx: &mut Cx<'_, '_, S>) -> bool {
        if self.state != ViewState::Intro {
            return false;
        }
        cx.stage.set_intro_fading(true);
        self.enter(ViewState::TransitioningIn, cx);
        self.schedule(FADE_DURATION, Step::ShowVideo, cx);
        true
    }

    /// Closes the video. Returns `false` unless the state is `Video`.
    pub(crate) fn close<S: Stage + ?Sized>(&mut self, cx: &mut Cx<'_, '_, S>) -> bool {
        if self.state != ViewState::Video {
            return false;
        }
        if let Some(id) = self.pending.take() {
            cx.timers.cancel(id);
        }
        cx.stage.pause();
        cx.stage.rewind();
        if self.fallback_visible {
            cx.stage.remove_fallback();
            self.fallback_visible = false;
        }
        cx.stage.set_video_active(false);
        self.enter(ViewState::TransitioningOut, cx);
        self.schedule(FADE_DURATION, Step::RestoreIntro, cx);
        true
    }

    /// Plays from the fallback control. Returns `false` if it is not shown.
    pub(crate) fn activate_fallback<S: Stage + ?Sized>(&mut self, cx: &mut Cx<'_, '_, S>) -> bool {
        if !self.fallback_visible {
            return false;
        }
        cx.stage.play(PlayIntent::Manual);
        cx.stage.remove_fallback();
        self.fallback_visible = false;
        true
    }

    /// Handles a rejected playback request.
    ///
    /// Only a rejected automatic attempt while the video is shown produces
    /// the fallback control; anything else is just reported. If the stage
    /// cannot create the control, the video stays without one.
    pub(crate) fn playback_rejected<S: Stage + ?Sized>(
        &mut self,
        intent: PlayIntent,
        cx: &mut Cx<'_, '_, S>,
    ) {
        let wanted = intent == PlayIntent::Automatic
            && self.state == ViewState::Video
            && !self.fallback_visible;
        let shown = wanted && cx.stage.show_fallback();
        if shown {
            self.fallback_visible = true;
        }
        cx.tracer.diagnostic(&Diagnostic::PlaybackRejected {
            intent,
            at: cx.now,
            fallback_shown: shown,
        });
    }

    /// Runs a delayed step whose timer fired.
    pub(crate) fn on_step<S: Stage + ?Sized>(
        &mut self,
        id: TimerId,
        step: Step,
        cx: &mut Cx<'_, '_, S>,
    ) {
        if self.pending != Some(id) {
            return;
        }
        self.pending = None;
        match (step, self.state) {
            (Step::ShowVideo, ViewState::TransitioningIn) => {
                cx.stage.set_intro_visible(false);
                cx.stage.set_video_active(true);
                self.enter(ViewState::Video, cx);
                self.schedule(PLAYBACK_DELAY, Step::StartPlayback, cx);
            }
            (Step::StartPlayback, ViewState::Video) => {
                cx.stage.play(PlayIntent::Automatic);
            }
            (Step::RestoreIntro, ViewState::TransitioningOut) => {
                cx.stage.set_intro_visible(true);
                cx.stage.set_intro_fading(false);
                self.enter(ViewState::Intro, cx);
            }
            _ => {}
        }
    }

    fn enter<S: Stage + ?Sized>(&mut self, to: ViewState, cx: &mut Cx<'_, '_, S>) {
        let from = core::mem::replace(&mut self.state, to);
        cx.tracer.transition(&TransitionEvent { from, to, at: cx.now });
    }

    fn schedule<S: Stage + ?Sized>(&mut self, delay: Duration, step: Step, cx: &mut Cx<'_, '_, S>) {
        let at = cx.now.saturating_add(delay);
        self.pending = Some(cx.timers.schedule_once(at, Task::Reveal(step)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Input, Key};
    use crate::landing::Landing;
    use crate::testing::{LogStage, Op};
    use crate::time::HostTime;
    use crate::trace::Tracer;

    fn ms(v: u64) -> HostTime {
        HostTime::from_millis(v)
    }

    #[test]
    fn reveal_runs_fade_then_video_then_playback() {
        let mut stage = LogStage::new();
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();

        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(0));
        assert_eq!(landing.view_state(), ViewState::TransitioningIn);
        assert_eq!(stage.take(), [Op::IntroFading(true)]);

        landing.advance(&mut stage, &mut tracer, ms(599));
        assert!(stage.take().is_empty(), "nothing before the fade ends");

        landing.advance(&mut stage, &mut tracer, ms(600));
        assert_eq!(landing.view_state(), ViewState::Video);
        assert_eq!(stage.take(), [Op::IntroVisible(false), Op::VideoActive(true)]);

        landing.advance(&mut stage, &mut tracer, ms(1_599));
        assert!(stage.take().is_empty());
        landing.advance(&mut stage, &mut tracer, ms(1_600));
        assert_eq!(stage.take(), [Op::Play(PlayIntent::Automatic)]);
    }

    #[test]
    fn enter_and_space_activate_only_on_reveal_control() {
        for key in [Key::Enter, Key::Space] {
            let mut stage = LogStage::new();
            let mut landing = Landing::new();
            let mut tracer = Tracer::none();

            let unfocused = Input::KeyDown {
                key,
                on_reveal_control: false,
            };
            assert!(!landing.handle(&mut stage, &mut tracer, unfocused, ms(0)));
            assert_eq!(landing.view_state(), ViewState::Intro);

            let focused = Input::KeyDown {
                key,
                on_reveal_control: true,
            };
            assert!(
                landing.handle(&mut stage, &mut tracer, focused, ms(0)),
                "default action is suppressed"
            );
            assert_eq!(landing.view_state(), ViewState::TransitioningIn);
        }
    }

    #[test]
    fn repeated_activation_starts_one_chain() {
        let mut stage = LogStage::new();
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();

        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(0));
        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(100));
        landing.advance(&mut stage, &mut tracer, ms(700));
        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(800));
        landing.advance(&mut stage, &mut tracer, ms(5_000));

        let plays = stage
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::Play(_)))
            .count();
        assert_eq!(plays, 1);
        assert_eq!(
            stage.ops().iter().filter(|op| **op == Op::IntroFading(true)).count(),
            1
        );
    }

    #[test]
    fn close_pauses_and_rewinds_before_deactivating() {
        let mut stage = LogStage::new();
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();

        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(0));
        landing.advance(&mut stage, &mut tracer, ms(2_000));
        stage.take();

        landing.handle(&mut stage, &mut tracer, Input::CloseActivated, ms(3_000));
        assert_eq!(landing.view_state(), ViewState::TransitioningOut);
        assert_eq!(stage.take(), [Op::Pause, Op::Rewind, Op::VideoActive(false)]);

        landing.advance(&mut stage, &mut tracer, ms(3_600));
        assert_eq!(landing.view_state(), ViewState::Intro);
        assert_eq!(stage.take(), [Op::IntroVisible(true), Op::IntroFading(false)]);
    }

    #[test]
    fn closing_before_playback_cancels_the_attempt() {
        let mut stage = LogStage::new();
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();

        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(0));
        landing.advance(&mut stage, &mut tracer, ms(600));
        let escape = Input::KeyDown {
            key: Key::Escape,
            on_reveal_control: false,
        };
        landing.handle(&mut stage, &mut tracer, escape, ms(900));
        landing.advance(&mut stage, &mut tracer, ms(10_000));

        assert!(!stage.ops().iter().any(|op| matches!(op, Op::Play(_))));
        assert_eq!(landing.view_state(), ViewState::Intro);
    }

    #[test]
    fn escape_is_ignored_outside_video() {
        let mut stage = LogStage::new();
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();
        let escape = Input::KeyDown {
            key: Key::Escape,
            on_reveal_control: false,
        };

        landing.handle(&mut stage, &mut tracer, escape, ms(0));
        assert_eq!(landing.view_state(), ViewState::Intro);
        assert!(stage.ops().is_empty());

        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(0));
        stage.take();
        landing.handle(&mut stage, &mut tracer, escape, ms(300));
        assert_eq!(landing.view_state(), ViewState::TransitioningIn);
        assert!(stage.ops().is_empty(), "video region is not active yet");
    }

    #[test]
    fn rejected_autoplay_shows_fallback_once() {
        let mut stage = LogStage::new();
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();

        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(0));
        landing.advance(&mut stage, &mut tracer, ms(1_600));
        stage.take();

        let rejected = Input::PlaybackRejected(PlayIntent::Automatic);
        landing.handle(&mut stage, &mut tracer, rejected, ms(1_610));
        landing.handle(&mut stage, &mut tracer, rejected, ms(1_620));
        assert!(landing.fallback_visible());
        assert_eq!(stage.take(), [Op::ShowFallback]);

        landing.handle(&mut stage, &mut tracer, Input::FallbackActivated, ms(2_000));
        assert!(!landing.fallback_visible());
        assert_eq!(stage.take(), [Op::Play(PlayIntent::Manual), Op::RemoveFallback]);

        let manual_rejected = Input::PlaybackRejected(PlayIntent::Manual);
        landing.handle(&mut stage, &mut tracer, manual_rejected, ms(2_010));
        assert!(!landing.fallback_visible(), "no retry beyond the one fallback");
        assert!(stage.ops().is_empty());
    }

    #[test]
    fn closing_removes_the_fallback() {
        let mut stage = LogStage::new();
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();

        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(0));
        landing.advance(&mut stage, &mut tracer, ms(1_600));
        landing.handle(
            &mut stage,
            &mut tracer,
            Input::PlaybackRejected(PlayIntent::Automatic),
            ms(1_600),
        );
        stage.take();

        landing.handle(&mut stage, &mut tracer, Input::CloseActivated, ms(2_000));
        assert_eq!(
            stage.take(),
            [Op::Pause, Op::Rewind, Op::RemoveFallback, Op::VideoActive(false)]
        );
        assert!(!landing.fallback_visible());
    }

    #[test]
    fn stale_rejection_after_close_is_ignored() {
        let mut stage = LogStage::new();
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();

        landing.handle(&mut stage, &mut tracer, Input::RevealActivated, ms(0));
        landing.advance(&mut stage, &mut tracer, ms(1_600));
        landing.handle(&mut stage, &mut tracer, Input::CloseActivated, ms(1_601));
        stage.take();

        landing.handle(
            &mut stage,
            &mut tracer,
            Input::PlaybackRejected(PlayIntent::Automatic),
            ms(1_602),
        );
        assert!(!landing.fallback_visible());
        assert!(stage.ops().is_empty());
    }

    #[test]
    fn fallback_click_without_fallback_does_nothing() {
        let mut stage = LogStage::new();
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();
        landing.handle(&mut stage, &mut tracer, Input::FallbackActivated, ms(0));
        assert!(stage.ops().is_empty());
    }

    #[test]
    fn transitioning_flag() {
        assert!(ViewState::TransitioningIn.is_transitioning());
        assert!(ViewState::TransitioningOut.is_transitioning());
        assert!(!ViewState::Intro.is_transitioning());
        assert!(!ViewState::Video.is_transitioning());
    }
}
