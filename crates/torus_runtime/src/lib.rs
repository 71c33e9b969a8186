//! Debugger REPL, CLI, and snapshot files for Torus.
//!
//! This crate provides:
//! - [`Session`] - An interpreter wired to tracing, breakpoints, and history
//! - [`Repl`] - Interactive stepping debugger
//! - [`serialize`] - Snapshot persistence using `MessagePack`
//! - The `torus` command-line binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod repl;
pub mod serialize;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::{CommandHighlighter, GridHighlighter};
pub use repl::{Command, Repl, Response, TraceCommand};
pub use session::{Session, Stop};
