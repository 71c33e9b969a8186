//! Integration tests for Layer 3: Runtime
//!
//! Tests for debugging sessions, session images, and the debugger REPL.

mod repl;
mod serialize;
mod session;
