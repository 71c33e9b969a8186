//! The program grid.
//!
//! Rows are stored as parsed, so the grid may be ragged. There is no padding:
//! a position past the end of its row is "void" and reads as a space when the
//! instruction pointer lands on it, but it is not addressable by `g` or `p`.

use std::fmt;

use torus_foundation::{Position, Value};

/// A mutable, possibly ragged, grid of single-character cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Parses program text into a grid, one row per line.
    ///
    /// Lines are split on `\n` only. Empty lines at the very end of the text
    /// are dropped, so `"abc\n"` is a single row and `""` has no rows at all.
    /// Nothing else is trimmed.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut rows: Vec<Vec<char>> = source
            .split('\n')
            .map(|line| line.chars().collect())
            .collect();
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        Self { rows }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the length of row `y`, or 0 if there is no such row.
    #[must_use]
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Vec::len)
    }

    /// Returns the length of the longest row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns true if the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell at `(x, y)`, if it exists.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Overwrites the cell at `(x, y)`.
    ///
    /// Returns false, leaving the grid untouched, if the cell does not exist.
    pub fn set(&mut self, x: usize, y: usize, cell: char) -> bool {
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Returns the instruction under the pointer, treating the void as a space.
    #[must_use]
    pub fn fetch(&self, position: Position) -> char {
        self.get(position.x, position.y).unwrap_or(' ')
    }

    /// Resolves stack-supplied coordinates to an existing cell.
    #[must_use]
    pub fn locate(&self, x: Value, y: Value) -> Option<Position> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.row_len(y)).then_some(Position::new(x, y))
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
