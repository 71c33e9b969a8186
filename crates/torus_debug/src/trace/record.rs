//! Trace event and record types.
//!
//! This module defines the events that can be traced during execution.

use torus_engine::Opcode;
use torus_foundation::{Direction, Position, Value};

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// An instruction was executed.
    Step {
        /// The cell that was executed.
        position: Position,
        /// The character in that cell.
        cell: char,
        /// The decoded instruction.
        opcode: Opcode,
        /// Direction of travel after the step.
        direction: Direction,
        /// Stack depth after the step.
        stack_depth: usize,
    },

    /// String mode pushed a cell's code point.
    StringPush {
        /// The cell that was read.
        position: Position,
        /// The value pushed.
        value: Value,
    },

    /// Text was appended to the output.
    Output {
        /// The appended text.
        text: String,
    },

    /// `p` overwrote a cell.
    CellWrite {
        /// The cell that changed.
        position: Position,
        /// Its new character.
        cell: char,
    },

    /// The program halted.
    Halt {
        /// Total steps executed.
        steps: u64,
    },

    /// Execution paused on a breakpoint.
    BreakpointHit {
        /// The breakpoint's position.
        position: Position,
    },

    /// A step failed.
    Fault {
        /// The error message.
        message: String,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Step { .. } => "step",
            Self::StringPush { .. } => "string-push",
            Self::Output { .. } => "output",
            Self::CellWrite { .. } => "cell-write",
            Self::Halt { .. } => "halt",
            Self::BreakpointHit { .. } => "breakpoint-hit",
            Self::Fault { .. } => "fault",
        }
    }

    /// Returns true for events that change the grid or output.
    #[must_use]
    pub fn is_effect(&self) -> bool {
        matches!(self, Self::Output { .. } | Self::CellWrite { .. })
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A trace event with its bookkeeping.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique, monotonically increasing record id.
    pub id: u64,
    /// Interpreter step number the event belongs to.
    pub step: u64,
    /// Nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(id: u64, step: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            step,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
