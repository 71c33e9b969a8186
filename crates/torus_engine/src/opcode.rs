//! The instruction set.
//!
//! Every character decodes to exactly one [`Opcode`]. Characters with no
//! meaning decode to [`Opcode::Nop`], the same as a space.

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    // === Literals ===
    /// `0`-`9`: push the digit's value.
    Digit(u8),

    // === Arithmetic ===
    /// `+`: `[b, a] -> [a + b]`
    Add,
    /// `-`: `[b, a] -> [b - a]`
    Sub,
    /// `*`: `[b, a] -> [a * b]`
    Mul,
    /// `/`: `[b, a] -> [b / a]`, truncated; 0 when `a` is 0.
    Div,
    /// `%`: `[b, a] -> [b % a]`; 0 when `a` is 0.
    Mod,

    // === Logic ===
    /// `!`: `[a] -> [a == 0]`
    Not,
    /// `` ` ``: `[b, a] -> [b > a]`
    Greater,

    // === Direction ===
    /// `<`: move left.
    Left,
    /// `>`: move right.
    Right,
    /// `^`: move up.
    Up,
    /// `v`: move down.
    Down,
    /// `?`: move in a random cardinal direction.
    Random,
    /// `_`: pop; right if zero, left otherwise.
    HorizontalIf,
    /// `|`: pop; down if zero, up otherwise.
    VerticalIf,
    /// `#`: skip the next cell.
    Trampoline,

    // === Modes ===
    /// `"`: toggle string mode.
    StringMode,

    // === Stack ===
    /// `:`: duplicate the top value (an empty stack gains a single 0).
    Dup,
    /// `\`: swap the top two values.
    Swap,
    /// `$`: discard the top value.
    Discard,

    // === Output ===
    /// `.`: pop and append the value in decimal.
    PrintInt,
    /// `,`: pop and append the character with that code point.
    PrintChar,

    // === Storage ===
    /// `p`: `[v, x, y] -> []`, storing character `v` at `(x, y)`.
    Put,
    /// `g`: `[x, y] -> [cell(x, y)]`
    Get,

    // === Program Control ===
    /// `@`: halt.
    Halt,
    /// Space and every unrecognised character.
    Nop,
}

impl Opcode {
    /// Decodes a grid cell.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn decode(cell: char) -> Self {
        match cell {
            '0'..='9' => Self::Digit(cell as u8 - b'0'),
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            '%' => Self::Mod,
            '!' => Self::Not,
            '`' => Self::Greater,
            '<' => Self::Left,
            '>' => Self::Right,
            '^' => Self::Up,
            'v' => Self::Down,
            '?' => Self::Random,
            '"' => Self::StringMode,
            '_' => Self::HorizontalIf,
            '|' => Self::VerticalIf,
            ':' => Self::Dup,
            '\\' => Self::Swap,
            '$' => Self::Discard,
            '.' => Self::PrintInt,
            ',' => Self::PrintChar,
            '#' => Self::Trampoline,
            'p' => Self::Put,
            'g' => Self::Get,
            '@' => Self::Halt,
            _ => Self::Nop,
        }
    }

    /// Returns the canonical character for this instruction.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Digit(d) => (b'0' + d) as char,
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Not => '!',
            Self::Greater => '`',
            Self::Left => '<',
            Self::Right => '>',
            Self::Up => '^',
            Self::Down => 'v',
            Self::Random => '?',
            Self::StringMode => '"',
            Self::HorizontalIf => '_',
            Self::VerticalIf => '|',
            Self::Dup => ':',
            Self::Swap => '\\',
            Self::Discard => '$',
            Self::PrintInt => '.',
            Self::PrintChar => ',',
            Self::Trampoline => '#',
            Self::Put => 'p',
            Self::Get => 'g',
            Self::Halt => '@',
            Self::Nop => ' ',
        }
    }

    /// Returns a stable lowercase name, used in traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Digit(_) => "push",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Not => "not",
            Self::Greater => "greater",
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
            Self::Random => "random",
            Self::StringMode => "string",
            Self::HorizontalIf => "if-horizontal",
            Self::VerticalIf => "if-vertical",
            Self::Dup => "dup",
            Self::Swap => "swap",
            Self::Discard => "discard",
            Self::PrintInt => "print-int",
            Self::PrintChar => "print-char",
            Self::Trampoline => "trampoline",
            Self::Put => "put",
            Self::Get => "get",
            Self::Halt => "halt",
            Self::Nop => "nop",
        }
    }

    /// Returns true for instructions that can change the pointer's direction.
    #[must_use]
    pub const fn is_flow(self) -> bool {
        matches!(
            self,
            Self::Left
                | Self::Right
                | Self::Up
                | Self::Down
                | Self::Random
                | Self::HorizontalIf
                | Self::VerticalIf
                | Self::Trampoline
                | Self::Halt
        )
    }
}
