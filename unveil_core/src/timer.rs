// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable one-shot and repeating timers.
//!
//! [`TimerQueue`] holds scheduled tasks keyed by deadline. The host's pump
//! repeatedly calls [`pop_due`](TimerQueue::pop_due) with the current time
//! and handles each [`Fired`] task in deadline order. Timers sharing a
//! deadline fire in the order they were scheduled.
//!
//! Repeating timers are re-armed at `deadline + period` when they fire, so a
//! pump that runs late catches up one period at a time instead of skipping
//! occurrences.

use alloc::collections::BTreeMap;

use crate::time::{Duration, HostTime};

/// Handle to a scheduled timer, valid until it fires (one-shot) or is
/// cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// A timer that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    /// The timer that fired.
    pub id: TimerId,
    /// The deadline the timer was scheduled for (not the pump's current time).
    pub deadline: HostTime,
    /// The task carried by the timer.
    pub task: T,
}

#[derive(Clone, Copy, Debug)]
struct Entry<T> {
    id: TimerId,
    task: T,
    period: Option<Duration>,
}

/// Deadline-ordered queue of cancellable timers.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    /// Pending timers keyed by `(deadline, sequence)`.
    queue: BTreeMap<(HostTime, u64), Entry<T>>,
    /// Reverse index from id to the current queue key.
    index: BTreeMap<TimerId, (HostTime, u64)>,
    next_seq: u64,
    next_id: u64,
}

impl<T: Copy> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            index: BTreeMap::new(),
            next_seq: 0,
            next_id: 0,
        }
    }

    /// Schedules `task` to fire once at `at`.
    pub fn schedule_once(&mut self, at: HostTime, task: T) -> TimerId {
        let id = self.allocate_id();
        self.insert(at, Entry { id, task, period: None });
        id
    }

    /// Schedules `task` to fire at `first` and then every `period`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn schedule_repeating(&mut self, first: HostTime, period: Duration, task: T) -> TimerId {
        assert!(!period.is_zero(), "repeating timer period must not be zero");
        let id = self.allocate_id();
        self.insert(
            first,
            Entry {
                id,
                task,
                period: Some(period),
            },
        );
        id
    }

    /// Cancels a pending timer. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(key) => {
                self.queue.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `id` is scheduled and has not been cancelled.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.queue.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes and returns the earliest timer due at or before `now`.
    ///
    /// A repeating timer stays pending under the same id, re-armed one period
    /// after the deadline it just fired for.
    pub fn pop_due(&mut self, now: HostTime) -> Option<Fired<T>> {
        let (&key, _) = self.queue.first_key_value()?;
        if key.0 > now {
            return None;
        }
        let entry = self.queue.remove(&key)?;
        self.index.remove(&entry.id);

        let deadline = key.0;
        if let Some(period) = entry.period {
            self.insert(deadline.saturating_add(period), entry);
        }
        Some(Fired {
            id: entry.id,
            deadline,
            task: entry.task,
        })
    }

    fn allocate_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, at: HostTime, entry: Entry<T>) {
        let key = (at, self.next_seq);
        self.next_seq += 1;
        self.index.insert(entry.id, key);
        self.queue.insert(key, entry);
    }
}
