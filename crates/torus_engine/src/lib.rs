//! Program grid, instruction pointer, value stack, and interpreter for Torus.
//!
//! This crate provides:
//! - [`Grid`] - The mutable two-dimensional program surface
//! - [`InstructionPointer`] - Position and direction with wraparound movement
//! - [`Stack`] - The value stack, where popping an empty stack yields zero
//! - [`Opcode`] - The decoded instruction set
//! - [`Interpreter`] - The fetch, dispatch, and move loop
//! - [`Snapshot`] - A complete copy of interpreter state for rewinding and saving
//!
//! # Example
//!
//! ```
//! use torus_engine::Interpreter;
//!
//! let mut interpreter = Interpreter::new("\"!iH\",,,@");
//! interpreter.execute().unwrap();
//! assert_eq!(interpreter.output(), "Hi!");
//! assert!(interpreter.is_done());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod grid;
pub mod interpreter;
pub mod opcode;
pub mod pointer;
pub mod snapshot;
pub mod stack;


pub use config::{BoundsPolicy, EngineConfig};
pub use grid::Grid;
pub use interpreter::{Action, Interpreter, Step};
pub use opcode::Opcode;
pub use pointer::InstructionPointer;
pub use snapshot::Snapshot;
pub use stack::Stack;
