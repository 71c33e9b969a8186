//! Integration tests for Layer 2: Debug
//!
//! Tests for step tracing, trace formatting, breakpoints, and step-back
//! history.

mod breakpoints;
mod time_travel;
mod tracing;
