//! Error types for the Torus system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! The interpreter itself is total under its default configuration; these
//! errors come from strict bounds checking, embedder-imposed limits, and
//! snapshot persistence.

use std::fmt;

use thiserror::Error;

use crate::types::{Position, Value};

/// The main error type for Torus operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an out-of-bounds grid access error.
    #[must_use]
    pub fn out_of_bounds(x: Value, y: Value) -> Self {
        Self::new(ErrorKind::OutOfBounds { x, y })
    }

    /// Creates a step limit error.
    #[must_use]
    pub fn step_limit(limit: u64) -> Self {
        Self::new(ErrorKind::StepLimit { limit })
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A `g` or `p` addressed a cell outside the grid under strict bounds.
    #[error("grid access out of bounds: ({x}, {y})")]
    OutOfBounds {
        /// The column popped from the stack.
        x: Value,
        /// The row popped from the stack.
        y: Value,
    },

    /// An embedder-imposed step budget was exhausted before the program halted.
    #[error("step limit exceeded: program did not halt within {limit} steps")]
    StepLimit {
        /// The configured limit.
        limit: u64,
    },

    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Program file, if the program was loaded from one.
    pub source: Option<String>,
    /// Instruction pointer position when the error occurred.
    pub position: Option<Position>,
    /// Number of steps executed before the error.
    pub steps: Option<u64>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the instruction pointer position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the executed step count.
    #[must_use]
    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = Some(steps);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
            wrote = true;
        }
        if let Some(position) = self.position {
            if wrote {
                write!(f, " ")?;
            }
            write!(f, "at {position}")?;
            wrote = true;
        }
        if let Some(steps) = self.steps {
            if wrote {
                write!(f, " ")?;
            }
            write!(f, "after {steps} steps")?;
        }
        Ok(())
    }
}

/// Result type alias for Torus operations.
pub type Result<T> = std::result::Result<T, Error>;
