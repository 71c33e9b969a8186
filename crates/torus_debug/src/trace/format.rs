//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "S{:06} ", record.step);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::Step {
                position,
                cell,
                opcode,
                direction,
                stack_depth,
            } => {
                format!(
                    "{position} {cell:?} {} -> {direction} (depth {stack_depth})",
                    opcode.name()
                )
            }
            TraceEvent::StringPush { position, value } => {
                format!("{position} string-push {value}")
            }
            TraceEvent::Output { text } => format!("  OUTPUT {text:?}"),
            TraceEvent::CellWrite { position, cell } => {
                format!("  WRITE {position} = {cell:?}")
            }
            TraceEvent::Halt { steps } => format!("=== HALT after {steps} steps ==="),
            TraceEvent::BreakpointHit { position } => format!("  BREAKPOINT {position}"),
            TraceEvent::Fault { message } => format!("  FAULT {message}"),
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as single-line JSON objects.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        let mut escaped = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '"' => escaped.push_str("\\\""),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(escaped, "\\u{:04x}", u32::from(c));
                }
                c => escaped.push(c),
            }
        }
        escaped
    }

    fn quote(s: &str) -> String {
        format!("\"{}\"", Self::escape_string(s))
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let event_data = match &record.event {
            TraceEvent::Step {
                position,
                cell,
                opcode,
                direction,
                stack_depth,
            } => format!(
                r#""x":{},"y":{},"cell":{},"opcode":"{}","direction":"{direction}","stack_depth":{stack_depth}"#,
                position.x,
                position.y,
                Self::quote(&cell.to_string()),
                opcode.name(),
            ),
            TraceEvent::StringPush { position, value } => {
                format!(r#""x":{},"y":{},"value":{value}"#, position.x, position.y)
            }
            TraceEvent::Output { text } => format!(r#""text":{}"#, Self::quote(text)),
            TraceEvent::CellWrite { position, cell } => format!(
                r#""x":{},"y":{},"cell":{}"#,
                position.x,
                position.y,
                Self::quote(&cell.to_string())
            ),
            TraceEvent::Halt { steps } => format!(r#""steps":{steps}"#),
            TraceEvent::BreakpointHit { position } => {
                format!(r#""x":{},"y":{}"#, position.x, position.y)
            }
            TraceEvent::Fault { message } => format!(r#""message":{}"#, Self::quote(message)),
        };

        format!(
            r#"{{"id":{},"step":{},"timestamp_ns":{},"type":"{}",{event_data}}}"#,
            record.id,
            record.step,
            record.timestamp_ns,
            record.event_type()
        )
    }
}
