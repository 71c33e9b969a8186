//! History buffer for stepping backwards.
//!
//! Implements a bounded ring of interpreter snapshots. Each entry is the
//! state *before* a step, so popping one and restoring it undoes that step.

use std::collections::VecDeque;

use torus_engine::Snapshot;

/// A bounded stack of snapshots, newest last.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl History {
    /// Creates a history retaining at most `capacity` snapshots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Records a snapshot, evicting the oldest when full.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.capacity == 0 {
            return;
        }
        while self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Removes and returns the newest snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Removes the newest `count` snapshots and returns the oldest of them.
    ///
    /// Stops early when the history runs out.
    pub fn rewind(&mut self, count: usize) -> Option<Snapshot> {
        let mut target = None;
        for _ in 0..count {
            match self.snapshots.pop_back() {
                Some(snapshot) => target = Some(snapshot),
                None => break,
            }
        }
        target
    }

    /// Returns the newest snapshot without removing it.
    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// Returns the number of retained snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the maximum number of snapshots retained.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(1000)
    }
}
