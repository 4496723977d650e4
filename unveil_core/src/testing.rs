// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording [`Stage`] double for unit tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};

use crate::stage::{PlayIntent, Stage};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    IntroFading(bool),
    IntroVisible(bool),
    VideoActive(bool),
    Play(PlayIntent),
    Pause,
    Rewind,
    ShowFallback,
    RemoveFallback,
    StatText(usize, String),
    StatScale(usize, f64),
    OrbOffset(usize, Vec2),
    Glow(Point),
}

#[derive(Debug)]
pub(crate) struct LogStage {
    ops: Vec<Op>,
    stats: Vec<Option<String>>,
    /// Declarations that only become visible on the next `refresh_stats`.
    late_stats: Option<Vec<Option<String>>>,
    stat_refreshes: usize,
    orb_refreshes: usize,
    fallback_broken: bool,
    viewport: Size,
    orbs: usize,
}

impl LogStage {
    pub(crate) fn new() -> Self {
        Self {
            ops: Vec::new(),
            stats: Vec::new(),
            late_stats: None,
            stat_refreshes: 0,
            orb_refreshes: 0,
            fallback_broken: false,
            viewport: Size::new(1000.0, 800.0),
            orbs: 0,
        }
    }

    pub(crate) fn with_stats(mut self, targets: &[Option<&str>]) -> Self {
        self.stats = targets.iter().map(|t| t.map(ToString::to_string)).collect();
        self
    }

    /// Replaces the declarations once the stage is next refreshed, as if the
    /// page changed them after mounting.
    pub(crate) fn with_late_stats(mut self, targets: &[Option<&str>]) -> Self {
        self.late_stats = Some(targets.iter().map(|t| t.map(ToString::to_string)).collect());
        self
    }

    /// Makes every fallback control creation fail.
    pub(crate) fn with_broken_fallback(mut self) -> Self {
        self.fallback_broken = true;
        self
    }

    pub(crate) fn stat_refreshes(&self) -> usize {
        self.stat_refreshes
    }

    pub(crate) fn orb_refreshes(&self) -> usize {
        self.orb_refreshes
    }

    pub(crate) fn with_orbs(mut self, orbs: usize, viewport: Size) -> Self {
        self.orbs = orbs;
        self.viewport = viewport;
        self
    }

    pub(crate) fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub(crate) fn take(&mut self) -> Vec<Op> {
        core::mem::take(&mut self.ops)
    }

    /// Texts written to one statistic, oldest first.
    pub(crate) fn stat_texts(&self, index: usize) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::StatText(i, text) if *i == index => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Stage for LogStage {
    fn set_intro_fading(&mut self, fading: bool) {
        self.ops.push(Op::IntroFading(fading));
    }

    fn set_intro_visible(&mut self, visible: bool) {
        self.ops.push(Op::IntroVisible(visible));
    }

    fn set_video_active(&mut self, active: bool) {
        self.ops.push(Op::VideoActive(active));
    }

    fn play(&mut self, intent: PlayIntent) {
        self.ops.push(Op::Play(intent));
    }

    fn pause(&mut self) {
        self.ops.push(Op::Pause);
    }

    fn rewind(&mut self) {
        self.ops.push(Op::Rewind);
    }

    fn show_fallback(&mut self) -> bool {
        self.ops.push(Op::ShowFallback);
        !self.fallback_broken
    }

    fn remove_fallback(&mut self) {
        self.ops.push(Op::RemoveFallback);
    }

    fn refresh_stats(&mut self) {
        self.stat_refreshes += 1;
        if let Some(stats) = self.late_stats.take() {
            self.stats = stats;
        }
    }

    fn stat_count(&self) -> usize {
        self.stats.len()
    }

    fn stat_target(&self, index: usize) -> Option<&str> {
        self.stats.get(index)?.as_deref()
    }

    fn set_stat_text(&mut self, index: usize, text: &str) {
        self.ops.push(Op::StatText(index, text.to_string()));
    }

    fn set_stat_scale(&mut self, index: usize, scale: f64) {
        self.ops.push(Op::StatScale(index, scale));
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn refresh_orbs(&mut self) {
        self.orb_refreshes += 1;
    }

    fn orb_count(&self) -> usize {
        self.orbs
    }

    fn set_orb_offset(&mut self, index: usize, offset: Vec2) {
        self.ops.push(Op::OrbOffset(index, offset));
    }

    fn move_glow(&mut self, position: Point) {
        self.ops.push(Op::Glow(position));
    }
}
