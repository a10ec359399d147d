//! `DeferredQueue`: one-shot callbacks keyed by the tick they should run at.
//!
//! Adapted from a sparse per-tick activation queue: instead of scheduling
//! agents, the queue holds arbitrary task values.  The owner polls it once per
//! simulation step with [`DeferredQueue::drain_due`].
//!
//! `BTreeMap` gives O(log W) insert and pop where W is the number of distinct
//! future ticks with pending work, which is tiny in practice.

use std::collections::BTreeMap;

use loot_core::Tick;

/// A priority queue mapping simulation ticks → tasks due at that tick.
#[derive(Debug)]
pub struct DeferredQueue<T> {
    inner: BTreeMap<Tick, Vec<T>>,
    /// Cached total task count for O(1) `len()`.
    total: usize,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run at `tick`.
    ///
    /// Tasks scheduled for the same tick run in insertion order.
    pub fn push(&mut self, tick: Tick, task: T) {
        self.inner.entry(tick).or_default().push(task);
        self.total += 1;
    }

    /// Remove and return every task whose tick is `<= now`, earliest tick
    /// first.
    ///
    /// Draining "due" rather than "exactly now" means a task scheduled for a
    /// tick that was skipped (e.g. the owner was not polled) still runs on the
    /// next poll instead of being stranded.
    pub fn drain_due(&mut self, now: Tick) -> Vec<T> {
        let later = self.inner.split_off(&Tick(now.0.saturating_add(1)));
        let due = std::mem::replace(&mut self.inner, later);
        let tasks: Vec<T> = due.into_values().flatten().collect();
        self.total -= tasks.len();
        tasks
    }

    /// The earliest tick with at least one queued task, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending tasks across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }
}
