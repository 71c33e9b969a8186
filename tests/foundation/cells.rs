//! Integration tests for cell conversions

use proptest::prelude::*;
use torus_foundation::cell::{REPLACEMENT, to_char, to_value};

#[test]
fn ascii_round_trips() {
    for c in ' '..='~' {
        assert_eq!(to_char(to_value(c)), c);
    }
}

#[test]
fn invalid_code_points_become_replacement() {
    assert_eq!(to_char(-1), REPLACEMENT);
    assert_eq!(to_char(0xD800), REPLACEMENT);
    assert_eq!(to_char(0xDFFF), REPLACEMENT);
    assert_eq!(to_char(0x11_0000), REPLACEMENT);
    assert_eq!(to_char(i64::MIN), REPLACEMENT);
    assert_eq!(to_char(i64::MAX), REPLACEMENT);
}

#[test]
fn boundary_code_points() {
    assert_eq!(to_char(0), '\0');
    assert_eq!(to_char(0xD7FF), '\u{D7FF}');
    assert_eq!(to_char(0xE000), '\u{E000}');
    assert_eq!(to_char(0x10_FFFF), '\u{10FFFF}');
}

proptest! {
    #[test]
    fn every_char_round_trips(c in any::<char>()) {
        prop_assert_eq!(to_char(to_value(c)), c);
    }

    #[test]
    fn to_char_never_panics(v in any::<i64>()) {
        let c = to_char(v);
        prop_assert!(c == REPLACEMENT || to_value(c) == v);
    }
}
