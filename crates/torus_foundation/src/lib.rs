//! Core types shared by every Torus layer.
//!
//! This crate provides:
//! - [`Value`] - The integer type held on the value stack
//! - [`Direction`] and [`Position`] - Instruction pointer geometry
//! - [`cell`] - Conversions between grid cells and stack values
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod error;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use types::{Direction, Position, Value};
