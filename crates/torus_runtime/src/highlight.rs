//! ANSI highlighting for the debugger.

use std::borrow::Cow;

use torus_debug::Breakpoints;
use torus_engine::Grid;
use torus_foundation::Position;

const RESET: &str = "\x1b[0m";
const POINTER: &str = "\x1b[7m"; // reverse video
const BREAKPOINT: &str = "\x1b[1;31m"; // bold red
const DIM: &str = "\x1b[2m";

/// Renders a program grid with the pointer cell and breakpoints marked.
pub struct GridHighlighter {
    color: bool,
}

impl GridHighlighter {
    /// Creates a highlighter that emits ANSI escapes.
    #[must_use]
    pub const fn new() -> Self {
        Self { color: true }
    }

    /// Creates a highlighter that marks the pointer with brackets instead of
    /// escape codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// Renders `grid` with a header row of column digits.
    ///
    /// A pointer resting in the void past the end of its row is drawn as a
    /// highlighted space in that column.
    #[must_use]
    pub fn render(&self, grid: &Grid, pointer: Position, breakpoints: &Breakpoints) -> String {
        let width = grid.width().max(pointer.x + 1);
        let mut out = String::new();

        out.push_str(if self.color { DIM } else { "" });
        out.push_str("    ");
        for x in 0..width {
            #[allow(clippy::cast_possible_truncation)]
            out.push(char::from(b'0' + (x % 10) as u8));
        }
        if self.color {
            out.push_str(RESET);
        }
        out.push('\n');

        let rows = grid.row_count().max(pointer.y + 1);
        for y in 0..rows {
            out.push_str(&format!("{y:>3} "));
            let len = grid.row_len(y).max(if pointer.y == y { pointer.x + 1 } else { 0 });
            for x in 0..len {
                let position = Position::new(x, y);
                let cell = grid.get(x, y).unwrap_or(' ');
                self.push_cell(&mut out, cell, position == pointer, breakpoints.hit(position));
            }
            out.push('\n');
        }

        out
    }

    fn push_cell(&self, out: &mut String, cell: char, is_pointer: bool, is_breakpoint: bool) {
        let shown = if cell.is_control() { '.' } else { cell };
        if !self.color {
            if is_pointer {
                out.push('[');
                out.push(shown);
                out.push(']');
            } else {
                out.push(shown);
            }
            return;
        }

        match (is_pointer, is_breakpoint) {
            (false, false) => out.push(shown),
            (true, false) => {
                out.push_str(POINTER);
                out.push(shown);
                out.push_str(RESET);
            }
            (false, true) => {
                out.push_str(BREAKPOINT);
                out.push(shown);
                out.push_str(RESET);
            }
            (true, true) => {
                out.push_str(BREAKPOINT);
                out.push_str(POINTER);
                out.push(shown);
                out.push_str(RESET);
            }
        }
    }
}

impl Default for GridHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Highlighter for debugger command lines.
pub struct CommandHighlighter;

impl CommandHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlights a command line: the command word in bold green when it is
    /// known, numbers in magenta.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut first = true;
        let mut rest = line;

        while !rest.is_empty() {
            let split = rest
                .find(|c: char| c.is_whitespace() != rest.starts_with(char::is_whitespace))
                .unwrap_or(rest.len());
            let (token, tail) = rest.split_at(split);
            rest = tail;

            if token.starts_with(char::is_whitespace) {
                result.push_str(token);
                continue;
            }

            let color = if first {
                first = false;
                if crate::repl::COMMANDS.contains(&token) {
                    "\x1b[1;32m"
                } else {
                    "\x1b[31m"
                }
            } else if token.parse::<i64>().is_ok() {
                "\x1b[35m"
            } else {
                ""
            };

            if color.is_empty() {
                result.push_str(token);
            } else {
                result.push_str(color);
                result.push_str(token);
                result.push_str(RESET);
            }
        }

        Cow::Owned(result)
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
