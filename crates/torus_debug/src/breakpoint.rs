//! Breakpoints on grid cells.

use std::collections::BTreeSet;

use torus_foundation::Position;

/// A set of grid positions that pause execution when the pointer reaches them.
#[derive(Clone, Debug, Default)]
pub struct Breakpoints {
    positions: BTreeSet<Position>,
}

impl Breakpoints {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a breakpoint. Returns false if it was already set.
    pub fn add(&mut self, position: Position) -> bool {
        self.positions.insert(position)
    }

    /// Removes a breakpoint. Returns false if it was not set.
    pub fn remove(&mut self, position: Position) -> bool {
        self.positions.remove(&position)
    }

    /// Returns true if execution should pause before running `position`.
    #[must_use]
    pub fn hit(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Returns the number of breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no breakpoints are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the breakpoints ordered by column, then row.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Removes every breakpoint.
    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
