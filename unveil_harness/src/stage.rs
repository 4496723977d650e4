// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording stage with visible state.

use kurbo::{Point, Size, Vec2};
use unveil_core::stage::{PlayIntent, Stage};
use unveil_core::time::Duration;

/// One call made on a [`SimStage`].
#[derive(Clone, Debug, PartialEq)]
pub enum StageOp {
    /// [`Stage::set_intro_fading`].
    IntroFading(bool),
    /// [`Stage::set_intro_visible`].
    IntroVisible(bool),
    /// [`Stage::set_video_active`].
    VideoActive(bool),
    /// [`Stage::play`].
    Play(PlayIntent),
    /// [`Stage::pause`].
    Pause,
    /// [`Stage::rewind`].
    Rewind,
    /// [`Stage::show_fallback`].
    ShowFallback,
    /// [`Stage::remove_fallback`].
    RemoveFallback,
    /// [`Stage::set_stat_text`].
    StatText(usize, String),
    /// [`Stage::set_stat_scale`].
    StatScale(usize, f64),
    /// [`Stage::set_orb_offset`].
    OrbOffset(usize, Vec2),
    /// [`Stage::move_glow`].
    MoveGlow(Point),
}

/// A [`Stage`] that records calls and models what a page would show.
///
/// Playback requests succeed unless blocked with
/// [`block_autoplay`](Self::block_autoplay) or
/// [`block_manual_play`](Self::block_manual_play); blocked requests are
/// queued as rejections for the driver to deliver.
#[derive(Clone, Debug)]
pub struct SimStage {
    ops: Vec<StageOp>,
    autoplay_blocked: bool,
    fallback_broken: bool,
    manual_blocked: bool,
    rejections: Vec<PlayIntent>,

    intro_visible: bool,
    intro_fading: bool,
    video_active: bool,
    playing: bool,
    position: Duration,
    fallback_visible: bool,

    stat_targets: Vec<Option<String>>,
    stat_texts: Vec<Option<String>>,
    stat_scales: Vec<f64>,
    viewport: Size,
    orb_offsets: Vec<Vec2>,
    glow: Option<Point>,
}

impl Default for SimStage {
    fn default() -> Self {
        Self::new()
    }
}

impl SimStage {
    /// A 1280×720 page with no statistics and no orbs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            autoplay_blocked: false,
            fallback_broken: false,
            manual_blocked: false,
            rejections: Vec::new(),
            intro_visible: true,
            intro_fading: false,
            video_active: false,
            playing: false,
            position: Duration::ZERO,
            fallback_visible: false,
            stat_targets: Vec::new(),
            stat_texts: Vec::new(),
            stat_scales: Vec::new(),
            viewport: Size::new(1280.0, 720.0),
            orb_offsets: Vec::new(),
            glow: None,
        }
    }

    /// Declares one statistic element per entry; `None` has no target.
    #[must_use]
    pub fn with_stats(mut self, targets: &[Option<&str>]) -> Self {
        self.stat_targets = targets.iter().map(|t| t.map(str::to_owned)).collect();
        self.stat_texts = vec![None; targets.len()];
        self.stat_scales = vec![1.0; targets.len()];
        self
    }

    /// Declares `count` orbs.
    #[must_use]
    pub fn with_orbs(mut self, count: usize) -> Self {
        self.orb_offsets = vec![Vec2::ZERO; count];
        self
    }

    /// Sets the viewport size.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Rejects automatic playback attempts, as a browser autoplay policy does.
    #[must_use]
    pub fn block_autoplay(mut self) -> Self {
        self.autoplay_blocked = true;
        self
    }

    /// Rejects manual playback attempts too.
    #[must_use]
    pub fn block_manual_play(mut self) -> Self {
        self.manual_blocked = true;
        self
    }

    /// Makes the fallback play control impossible to create.
    #[must_use]
    pub fn break_fallback(mut self) -> Self {
        self.fallback_broken = true;
        self
    }

    /// Changes the target a statistic declares, as a script editing the page
    /// would. Out-of-range indices are ignored.
    pub fn set_stat_target(&mut self, index: usize, target: Option<&str>) {
        if let Some(slot) = self.stat_targets.get_mut(index) {
            *slot = target.map(str::to_owned);
        }
    }

    /// Calls made so far, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[StageOp] {
        &self.ops
    }

    /// Returns and clears the recorded calls.
    pub fn take_ops(&mut self) -> Vec<StageOp> {
        std::mem::take(&mut self.ops)
    }

    /// Returns and clears the queued playback rejections.
    pub fn take_rejections(&mut self) -> Vec<PlayIntent> {
        std::mem::take(&mut self.rejections)
    }

    /// Lets playing media run for `elapsed`.
    pub fn advance_media(&mut self, elapsed: Duration) {
        if self.playing {
            self.position = self.position.saturating_add(elapsed);
        }
    }

    /// Whether the intro region is displayed.
    #[must_use]
    pub fn intro_visible(&self) -> bool {
        self.intro_visible
    }

    /// Whether the intro region carries the fade-out cue.
    #[must_use]
    pub fn intro_fading(&self) -> bool {
        self.intro_fading
    }

    /// Whether the video region is active.
    #[must_use]
    pub fn video_active(&self) -> bool {
        self.video_active
    }

    /// Whether the media is playing.
    #[must_use]
    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Media playback position.
    #[must_use]
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Whether the fallback play control is in the video region.
    #[must_use]
    pub fn fallback_visible(&self) -> bool {
        self.fallback_visible
    }

    /// Text currently shown by a statistic, if it was ever written.
    #[must_use]
    pub fn stat_text(&self, index: usize) -> Option<&str> {
        self.stat_texts.get(index)?.as_deref()
    }

    /// Every text written to a statistic, oldest first.
    #[must_use]
    pub fn stat_history(&self, index: usize) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                StageOp::StatText(i, text) if *i == index => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Current scale of a statistic number.
    #[must_use]
    pub fn stat_scale(&self, index: usize) -> Option<f64> {
        self.stat_scales.get(index).copied()
    }

    /// Current offset of an orb.
    #[must_use]
    pub fn orb_offset(&self, index: usize) -> Option<Vec2> {
        self.orb_offsets.get(index).copied()
    }

    /// Current cursor glow position.
    #[must_use]
    pub fn glow(&self) -> Option<Point> {
        self.glow
    }
}

impl Stage for SimStage {
    fn set_intro_fading(&mut self, fading: bool) {
        self.ops.push(StageOp::IntroFading(fading));
        self.intro_fading = fading;
    }

    fn set_intro_visible(&mut self, visible: bool) {
        self.ops.push(StageOp::IntroVisible(visible));
        self.intro_visible = visible;
    }

    fn set_video_active(&mut self, active: bool) {
        self.ops.push(StageOp::VideoActive(active));
        self.video_active = active;
    }

    fn play(&mut self, intent: PlayIntent) {
        self.ops.push(StageOp::Play(intent));
        let blocked = match intent {
            PlayIntent::Automatic => self.autoplay_blocked,
            PlayIntent::Manual => self.manual_blocked,
        };
        if blocked {
            self.rejections.push(intent);
        } else {
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        self.ops.push(StageOp::Pause);
        self.playing = false;
    }

    fn rewind(&mut self) {
        self.ops.push(StageOp::Rewind);
        self.position = Duration::ZERO;
    }

    fn show_fallback(&mut self) -> bool {
        self.ops.push(StageOp::ShowFallback);
        if self.fallback_broken {
            return false;
        }
        self.fallback_visible = true;
        true
    }

    fn remove_fallback(&mut self) {
        self.ops.push(StageOp::RemoveFallback);
        self.fallback_visible = false;
    }

    fn stat_count(&self) -> usize {
        self.stat_targets.len()
    }

    fn stat_target(&self, index: usize) -> Option<&str> {
        self.stat_targets.get(index)?.as_deref()
    }

    fn set_stat_text(&mut self, index: usize, text: &str) {
        self.ops.push(StageOp::StatText(index, text.to_owned()));
        if let Some(slot) = self.stat_texts.get_mut(index) {
            *slot = Some(text.to_owned());
        }
    }

    fn set_stat_scale(&mut self, index: usize, scale: f64) {
        self.ops.push(StageOp::StatScale(index, scale));
        if let Some(slot) = self.stat_scales.get_mut(index) {
            *slot = scale;
        }
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn orb_count(&self) -> usize {
        self.orb_offsets.len()
    }

    fn set_orb_offset(&mut self, index: usize, offset: Vec2) {
        self.ops.push(StageOp::OrbOffset(index, offset));
        if let Some(slot) = self.orb_offsets.get_mut(index) {
            *slot = offset;
        }
    }

    fn move_glow(&mut self, position: Point) {
        self.ops.push(StageOp::MoveGlow(position));
        self.glow = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_autoplay_queues_a_rejection() {
        let mut stage = SimStage::new().block_autoplay();
        stage.play(PlayIntent::Automatic);
        assert!(!stage.playing());
        assert_eq!(stage.take_rejections(), [PlayIntent::Automatic]);

        stage.play(PlayIntent::Manual);
        assert!(stage.playing());
        assert!(stage.take_rejections().is_empty());
    }

    #[test]
    fn media_position_runs_only_while_playing() {
        let mut stage = SimStage::new();
        stage.advance_media(Duration::from_millis(100));
        assert_eq!(stage.position(), Duration::ZERO);

        stage.play(PlayIntent::Automatic);
        stage.advance_media(Duration::from_millis(250));
        stage.pause();
        stage.advance_media(Duration::from_millis(250));
        assert_eq!(stage.position(), Duration::from_millis(250));

        stage.rewind();
        assert_eq!(stage.position(), Duration::ZERO);
    }
}
