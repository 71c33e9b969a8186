//! Value and geometry types.

use std::fmt;

/// The integer type held on the value stack.
///
/// Arithmetic on values wraps on overflow; no stack operation panics.
pub type Value = i64;

/// One of the four cardinal directions the instruction pointer can travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards column 0.
    Left,
    /// Towards the last row.
    Down,
    /// Towards the end of the current row.
    #[default]
    Right,
}

impl Direction {
    /// Every direction, in the order random draws index into.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Returns the arrow instruction that selects this direction.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => '^',
            Self::Left => '<',
            Self::Down => 'v',
            Self::Right => '>',
        }
    }

    /// Returns the direction selected by an arrow instruction.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '^' => Some(Self::Up),
            '<' => Some(Self::Left),
            'v' => Some(Self::Down),
            '>' => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns true for left and right.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Left => write!(f, "left"),
            Self::Down => write!(f, "down"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A (column, row) coordinate on the program grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Column index within the row.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// The top-left cell, where execution starts.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Creates a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
