//! Torus - Befunge-93 interpreter with a stepping debugger
//!
//! This crate re-exports all layers of the Torus system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: torus_runtime    - Debugger REPL, CLI, snapshot files
//! Layer 2: torus_debug      - Step tracing, breakpoints, step-back history
//! Layer 1: torus_engine     - Grid, pointer, stack, opcodes, interpreter
//! Layer 0: torus_foundation - Core types (Value, Direction, Position, Error)
//! ```

pub use torus_debug as debug;
pub use torus_engine as engine;
pub use torus_foundation as foundation;
pub use torus_runtime as runtime;
