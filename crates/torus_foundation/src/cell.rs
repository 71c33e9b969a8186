//! Conversions between grid cells and stack values.
//!
//! A cell holds one character. Reading it as a value yields its Unicode
//! scalar value; writing a value back goes through [`to_char`], which maps
//! anything that is not a valid scalar value to U+FFFD.
//!
//! Program files are decoded by [`decode_source`]: UTF-8 when the bytes are
//! valid UTF-8, otherwise one Latin-1 cell per byte.

use std::borrow::Cow;

use crate::types::Value;

/// The character stored for values that have no valid code point.
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Returns the code point of a cell as a stack value.
#[must_use]
pub fn to_value(cell: char) -> Value {
    Value::from(u32::from(cell))
}

/// Returns the character whose code point is `value`.
///
/// Negative values, surrogates, and values above U+10FFFF become
/// [`REPLACEMENT`].
#[must_use]
pub fn to_char(value: Value) -> char {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(REPLACEMENT)
}

/// Decodes program file bytes into source text.
///
/// Valid UTF-8 is taken as is. Anything else is read as Latin-1, so every
/// byte becomes exactly one cell whose value is the byte.
#[must_use]
pub fn decode_source(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().copied().map(char::from).collect()),
    }
}
