//! The value stack.

use std::fmt;

use torus_foundation::Value;

/// A last-in, first-out stack of values.
///
/// Popping an empty stack is not an error: it yields 0 and the stack stays
/// empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a value on top.
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Pops the top value, or returns 0 if the stack is empty.
    pub fn pop(&mut self) -> Value {
        self.values.pop().unwrap_or(0)
    }

    /// Returns the top value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<Value> {
        self.values.last().copied()
    }

    /// Returns the number of values on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values, bottom first.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl From<Vec<Value>> for Stack {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
