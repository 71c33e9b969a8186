//! Tracing, debugging, and time travel for Torus.
//!
//! This crate provides:
//! - [`Tracer`] - Step tracing into a bounded buffer, optionally echoed to stderr
//! - [`Breakpoints`] - Grid positions that pause a debugging session
//! - [`History`] - A bounded ring of snapshots for stepping backwards

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod breakpoint;
pub mod history;
pub mod trace;

pub use breakpoint::Breakpoints;
pub use history::History;
pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
