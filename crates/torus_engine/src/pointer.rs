//! The instruction pointer.

use torus_foundation::{Direction, Position};

use crate::grid::Grid;

/// The cursor that selects the next cell to execute.
///
/// Movement wraps around: horizontally within the current row's length, and
/// vertically across the full row count. Rows are never padded, so a pointer
/// that moves vertically into a shorter row can sit in the void past its end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstructionPointer {
    /// The cell the pointer is on.
    pub position: Position,
    /// The direction of travel.
    pub direction: Direction,
}

impl InstructionPointer {
    /// Creates a pointer at the origin, moving right.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves one cell in the current direction.
    pub fn advance(&mut self, grid: &Grid) {
        let Position { x, y } = &mut self.position;
        match self.direction {
            Direction::Right => {
                *x += 1;
                if *x >= grid.row_len(*y) {
                    *x = 0;
                }
            }
            Direction::Left => {
                if *x == 0 {
                    *x = grid.row_len(*y).saturating_sub(1);
                } else {
                    *x -= 1;
                }
            }
            Direction::Down => {
                *y += 1;
                if *y >= grid.row_count() {
                    *y = 0;
                }
            }
            Direction::Up => {
                if *y == 0 {
                    *y = grid.row_count().saturating_sub(1);
                } else {
                    *y -= 1;
                }
            }
        }
    }
}
