//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value conversions, Direction, Position, and Error.

mod cells;
mod errors;
mod types;
