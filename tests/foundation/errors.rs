//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use torus_foundation::{Error, ErrorContext, ErrorKind, Position};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_out_of_bounds() {
    let err = Error::out_of_bounds(-3, 12);
    assert!(matches!(err.kind, ErrorKind::OutOfBounds { x: -3, y: 12 }));
    assert_eq!(err.to_string(), "grid access out of bounds: (-3, 12)");
}

#[test]
fn error_step_limit() {
    let err = Error::step_limit(1000);
    assert!(matches!(err.kind, ErrorKind::StepLimit { limit: 1000 }));
    assert!(err.to_string().contains("1000"));
}

#[test]
fn error_io_and_internal() {
    let err = Error::io("disk on fire");
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    assert!(err.to_string().contains("disk on fire"));

    let err = Error::internal("oops");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
}

#[test]
fn error_serialization_display() {
    let err = Error::new(ErrorKind::SerializationError("truncated".to_string()));
    assert_eq!(err.to_string(), "serialization error: truncated");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::step_limit(5);
    assert!(err.context.is_none());
}

#[test]
fn error_context_display() {
    let context = ErrorContext::new()
        .with_source("loop.bf")
        .with_position(Position::new(4, 2))
        .with_steps(17);
    assert_eq!(context.to_string(), "in loop.bf at (4, 2) after 17 steps");
}

#[test]
fn error_context_partial_display() {
    let context = ErrorContext::new().with_steps(3);
    assert_eq!(context.to_string(), "after 3 steps");

    let context = ErrorContext::new().with_position(Position::ORIGIN);
    assert_eq!(context.to_string(), "at (0, 0)");
}

#[test]
fn error_with_context_keeps_kind() {
    let err = Error::out_of_bounds(0, 99).with_context(ErrorContext::new().with_steps(8));
    assert!(matches!(err.kind, ErrorKind::OutOfBounds { .. }));
    assert_eq!(err.context.unwrap().steps, Some(8));
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::internal("x"));
}
