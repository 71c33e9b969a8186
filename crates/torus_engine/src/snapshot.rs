//! Complete copies of interpreter state.
//!
//! A [`Snapshot`] holds everything an [`Interpreter`](crate::Interpreter)
//! needs to resume exactly where it left off, including the random
//! generator, so rewinding and replaying reproduces the same `?` choices.
//! With the `serde` feature, snapshots can be written to disk.

use rand_chacha::ChaCha8Rng;

use crate::grid::Grid;
use crate::pointer::InstructionPointer;
use crate::stack::Stack;

/// The full state of an interpreter at one moment.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub(crate) grid: Grid,
    pub(crate) pointer: InstructionPointer,
    pub(crate) stack: Stack,
    pub(crate) string_mode: bool,
    pub(crate) finished: bool,
    pub(crate) output: String,
    pub(crate) steps: u64,
    pub(crate) rng: ChaCha8Rng,
}

impl Snapshot {
    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the instruction pointer.
    #[must_use]
    pub const fn pointer(&self) -> InstructionPointer {
        self.pointer
    }

    /// Returns the value stack.
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Returns true if string mode was active.
    #[must_use]
    pub const fn string_mode(&self) -> bool {
        self.string_mode
    }

    /// Returns true if the program had halted.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.finished
    }

    /// Returns the output accumulated so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns the number of steps executed.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }
}
