// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot count-up animation for statistic elements.
//!
//! [`COUNTER_START_DELAY`] after page load, every statistic element reads its
//! declared target and counts from 0 toward it on its own repeating
//! [`COUNTER_TICK`] timer, reaching the target after [`COUNTER_DURATION`].
//! Each tick adds `target / (COUNTER_DURATION / COUNTER_TICK)` to the
//! accumulated value. While below the target the floor of the accumulated
//! value is shown; once it reaches the target the exact target is shown,
//! with a `+` suffix above [`SUFFIX_THRESHOLD`], and the timer is cancelled.
//!
//! The accumulated value is kept as an exact fraction (`target × ticks /
//! ticks_per_run`), so the final tick lands exactly on the target.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::landing::{Cx, Task};
use crate::stage::Stage;
use crate::time::Duration;
use crate::timer::TimerId;
use crate::trace::{CounterFinished, Diagnostic};

/// Delay between page load and the start of every counter.
pub const COUNTER_START_DELAY: Duration = Duration::from_millis(1_500);

/// Total running time of one counter.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2_000);

/// Interval between counter updates (about 60 per second).
pub const COUNTER_TICK: Duration = Duration::from_millis(16);

/// Targets strictly above this value get a `+` suffix.
pub const SUFFIX_THRESHOLD: i64 = 3;

const TICKS_PER_RUN: i128 = (COUNTER_DURATION.ticks() / COUNTER_TICK.ticks()) as i128;

/// Parses a target declaration.
///
/// Accepts leading whitespace, an optional sign, then decimal digits; any
/// trailing text is ignored (`"150+"` is 150). Returns `None` when there are
/// no digits or the value does not fit in an `i64`.
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// The text shown once a counter has reached `target`.
#[must_use]
pub fn final_text(target: i64) -> String {
    if target > SUFFIX_THRESHOLD {
        format!("{target}+")
    } else {
        format!("{target}")
    }
}

/// What a counter shows after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    /// Still below the target; shows this value.
    Counting(i64),
    /// Reached the target.
    Finished(i64),
}

impl CounterFrame {
    /// The text to display for this frame.
    #[must_use]
    pub fn text(self) -> String {
        match self {
            Self::Counting(value) => format!("{value}"),
            Self::Finished(target) => final_text(target),
        }
    }
}

/// Count-up state for one statistic element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    target: i64,
    ticks: u32,
    finished: bool,
}

impl Counter {
    /// Creates a counter at 0 heading for `target`.
    #[must_use]
    pub const fn new(target: i64) -> Self {
        Self {
            target,
            ticks: 0,
            finished: false,
        }
    }

    /// The declared target.
    #[must_use]
    pub const fn target(&self) -> i64 {
        self.target
    }

    /// Whether the target has been reached.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances by one tick.
    ///
    /// Ticking a finished counter keeps returning [`CounterFrame::Finished`].
    pub fn tick(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Finished(self.target);
        }
        self.ticks = self.ticks.saturating_add(1);
        let target = i128::from(self.target);
        let accumulated = target * i128::from(self.ticks);
        if accumulated >= target * TICKS_PER_RUN {
            self.finished = true;
            return CounterFrame::Finished(self.target);
        }
        // Only positive targets get here, so the quotient is a floor in 0..target.
        let shown = i64::try_from(accumulated / TICKS_PER_RUN).unwrap_or(self.target);
        CounterFrame::Counting(shown)
    }
}

#[derive(Clone, Copy, Debug)]
struct Running {
    counter: Counter,
    timer: TimerId,
}

/// Drives one [`Counter`] per statistic element.
#[derive(Debug, Default)]
pub struct CounterAnimator {
    running: Vec<Option<Running>>,
    started: bool,
}

impl CounterAnimator {
    /// Creates an animator with no counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the counters have been started.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Number of counters still running.
    #[must_use]
    pub fn active(&self) -> usize {
        self.running.iter().flatten().count()
    }

    /// Reads every statistic target and starts its timer. Runs once.
    pub(crate) fn start<S: Stage + ?Sized>(&mut self, cx: &mut Cx<'_, '_, S>) {
        if self.started {
            return;
        }
        self.started = true;

        cx.stage.refresh_stats();
        let count = cx.stage.stat_count();
        self.running = Vec::with_capacity(count);
        let first = cx.now.saturating_add(COUNTER_TICK);
        for index in 0..count {
            let slot = match cx.stage.stat_target(index).and_then(parse_target) {
                Some(target) => Some(Running {
                    counter: Counter::new(target),
                    timer: cx
                        .timers
                        .schedule_repeating(first, COUNTER_TICK, Task::CounterTick(index)),
                }),
                None => {
                    cx.tracer
                        .diagnostic(&Diagnostic::InvalidStatTarget { index });
                    None
                }
            };
            self.running.push(slot);
        }
    }

    /// Advances the counter at `index` by one tick.
    pub(crate) fn on_tick<S: Stage + ?Sized>(&mut self, index: usize, cx: &mut Cx<'_, '_, S>) {
        let Some(slot) = self.running.get_mut(index) else {
            return;
        };
        let Some(run) = slot.as_mut() else {
            return;
        };
        let frame = run.counter.tick();
        cx.stage.set_stat_text(index, &frame.text());
        if let CounterFrame::Finished(target) = frame {
            cx.timers.cancel(run.timer);
            *slot = None;
            cx.tracer.counter_finished(&CounterFinished {
                index,
                target,
                at: cx.now,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landing::Landing;
    use crate::testing::LogStage;
    use crate::time::HostTime;
    use crate::trace::Tracer;
    use proptest::prelude::*;

    fn run_to_end(target: i64) -> Vec<CounterFrame> {
        let mut counter = Counter::new(target);
        let mut frames = Vec::new();
        while !counter.is_finished() {
            frames.push(counter.tick());
        }
        frames
    }

    #[test]
    fn parse_follows_integer_prefix_rules() {
        assert_eq!(parse_target("5"), Some(5));
        assert_eq!(parse_target("  42"), Some(42));
        assert_eq!(parse_target("150+"), Some(150));
        assert_eq!(parse_target("-7"), Some(-7));
        assert_eq!(parse_target("+9"), Some(9));
        assert_eq!(parse_target("12.5"), Some(12));
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target("-"), None);
        assert_eq!(parse_target("99999999999999999999"), None);
    }

    #[test]
    fn suffix_only_above_three() {
        assert_eq!(final_text(5), "5+");
        assert_eq!(final_text(4), "4+");
        assert_eq!(final_text(3), "3");
        assert_eq!(final_text(2), "2");
        assert_eq!(final_text(0), "0");
    }

    #[test]
    fn counter_takes_one_run_of_ticks() {
        let frames = run_to_end(5);
        assert_eq!(frames.len(), 125, "2000 ms / 16 ms");
        assert_eq!(frames.last(), Some(&CounterFrame::Finished(5)));
        assert_eq!(frames[0], CounterFrame::Counting(0));
        assert_eq!(frames[24], CounterFrame::Counting(1), "25 × 0.04 = 1.0");
    }

    #[test]
    fn zero_and_negative_targets_finish_on_first_tick() {
        assert_eq!(run_to_end(0), [CounterFrame::Finished(0)]);
        assert_eq!(run_to_end(-5), [CounterFrame::Finished(-5)]);
    }

    #[test]
    fn finished_counter_stays_finished() {
        let mut counter = Counter::new(1);
        while !counter.is_finished() {
            counter.tick();
        }
        assert_eq!(counter.tick(), CounterFrame::Finished(1));
    }

    #[test]
    fn animator_counts_every_stat_and_skips_bad_ones() {
        let mut stage = LogStage::new().with_stats(&[Some("5"), Some("oops"), Some("2"), None]);
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();
        landing.start(HostTime::ZERO);

        landing.advance(&mut stage, &mut tracer, HostTime::from_millis(1_500));
        assert!(stage.ops().is_empty(), "start only reads targets");
        assert_eq!(landing.counters().active(), 2);

        landing.advance(&mut stage, &mut tracer, HostTime::from_millis(3_499));
        assert_ne!(stage.stat_texts(0).last(), Some(&"5+"));

        landing.advance(&mut stage, &mut tracer, HostTime::from_millis(3_500));
        assert_eq!(stage.stat_texts(0).last(), Some(&"5+"));
        assert_eq!(stage.stat_texts(2).last(), Some(&"2"));
        assert!(stage.stat_texts(1).is_empty());
        assert!(stage.stat_texts(3).is_empty());
        assert_eq!(landing.counters().active(), 0);
        assert_eq!(landing.next_deadline(), None, "all timers cancelled");
    }

    #[test]
    fn targets_are_read_when_counting_starts() {
        let mut stage = LogStage::new()
            .with_stats(&[Some("5")])
            .with_late_stats(&[Some("2"), Some("7")]);
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();
        landing.start(HostTime::ZERO);

        landing.advance(&mut stage, &mut tracer, HostTime::from_millis(1_499));
        assert_eq!(stage.stat_refreshes(), 0);

        landing.advance(&mut stage, &mut tracer, HostTime::from_millis(1_500));
        assert_eq!(stage.stat_refreshes(), 1);
        assert_eq!(landing.counters().active(), 2);

        landing.advance(&mut stage, &mut tracer, HostTime::from_millis(10_000));
        assert_eq!(stage.stat_texts(0).last(), Some(&"2"));
        assert_eq!(stage.stat_texts(1).last(), Some(&"7+"));
        assert_eq!(stage.stat_refreshes(), 1, "read once");
    }

    #[test]
    fn counters_run_only_once() {
        let mut stage = LogStage::new().with_stats(&[Some("3")]);
        let mut landing = Landing::new();
        let mut tracer = Tracer::none();
        landing.start(HostTime::ZERO);
        landing.start(HostTime::from_millis(100));
        landing.advance(&mut stage, &mut tracer, HostTime::from_millis(60_000));
        assert_eq!(stage.stat_texts(0).len(), 125);
    }

    proptest! {
        #[test]
        fn displayed_value_is_monotonic_and_bounded(target in 0_i64..1_000_000) {
            let frames = run_to_end(target);
            let mut last = i64::MIN;
            for frame in &frames {
                let shown = match *frame {
                    CounterFrame::Counting(v) | CounterFrame::Finished(v) => v,
                };
                prop_assert!(shown >= last);
                prop_assert!(shown <= target);
                last = shown;
            }
            prop_assert_eq!(frames.last().copied(), Some(CounterFrame::Finished(target)));
        }

        #[test]
        fn final_suffix_matches_threshold(target in -10_i64..10_000) {
            let text = final_text(target);
            prop_assert_eq!(text.ends_with('+'), target > SUFFIX_THRESHOLD);
        }
    }
}
