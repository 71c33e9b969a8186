//! Integration tests for Layer 1: Engine
//!
//! Tests for complete programs and interpreter properties.

mod programs;
mod properties;
