//! Tracing integration tests

use torus_debug::{
    HumanFormatter, JsonFormatter, TraceEvent, TraceFormatter, Tracer, TracerConfig,
};
use torus_engine::{Interpreter, Opcode};
use torus_foundation::{Direction, Position};

const HELLO: &str = include_str!("../../programs/hello.bf");

fn trace(source: &str, config: TracerConfig) -> Tracer {
    let mut tracer = Tracer::new(config);
    let mut interpreter = Interpreter::new(source);
    while let Some(step) = interpreter.step().unwrap() {
        tracer.observe(&step, interpreter.stack().len());
    }
    tracer
}

// =============================================================================
// Recording
// =============================================================================

#[test]
fn hello_trace_counts() {
    let tracer = trace(HELLO, TracerConfig::new().enabled());
    let buffer = tracer.buffer();

    // 13 characters pushed in string mode, each printed once.
    assert_eq!(buffer.by_event_type("string-push").len(), 13);
    assert_eq!(buffer.by_event_type("output").len(), 13);
    assert_eq!(buffer.by_event_type("halt").len(), 1);
    assert_eq!(
        buffer.by_event_type("step").len() + buffer.by_event_type("string-push").len(),
        98
    );
}

#[test]
fn outputs_reassemble_program_output() {
    let tracer = trace(HELLO, TracerConfig::new().enabled());
    let text: String = tracer
        .buffer()
        .iter()
        .filter_map(|record| match &record.event {
            TraceEvent::Output { text } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "Hello, World!");
}

#[test]
fn records_carry_step_numbers() {
    let tracer = trace("12+.@", TracerConfig::new().enabled());
    let records = tracer.buffer().records_for_step(4);
    assert_eq!(records.len(), 2);
    assert!(matches!(
        records[0].event,
        TraceEvent::Step {
            opcode: Opcode::PrintInt,
            stack_depth: 0,
            ..
        }
    ));
    assert!(matches!(&records[1].event, TraceEvent::Output { text } if text == "3"));
}

#[test]
fn cell_writes_are_recorded() {
    let tracer = trace("\"Z\"10p@ ", TracerConfig::new().enabled());
    let writes = tracer.buffer().by_event_type("cell-write");
    assert_eq!(writes.len(), 1);
    assert_eq!(
        writes[0].event,
        TraceEvent::CellWrite {
            position: Position::new(1, 0),
            cell: 'Z',
        }
    );
}

#[test]
fn small_buffer_keeps_newest() {
    let tracer = trace(HELLO, TracerConfig::new().enabled().with_buffer_size(10));
    let stats = tracer.stats();
    assert_eq!(stats.record_count, 10);
    assert!(stats.total_recorded > 100);
    assert_eq!(stats.newest_step, Some(98));
}

#[test]
fn disabled_tracer_records_nothing() {
    let tracer = trace(HELLO, TracerConfig::new());
    assert!(tracer.buffer().is_empty());
    assert_eq!(tracer.stats().total_recorded, 0);
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn human_format_of_first_step() {
    let tracer = trace("v\n@", TracerConfig::new().enabled());
    let first = tracer.buffer().iter().next().unwrap();
    assert_eq!(
        HumanFormatter::new().format(first),
        "S000001 (0, 0) 'v' down -> down (depth 0)"
    );
}

#[test]
fn json_format_is_one_object_per_line() {
    let tracer = trace("1.@", TracerConfig::new().enabled().json());
    let records: Vec<_> = tracer.buffer().iter().collect();
    let text = JsonFormatter::new().format_many(&records);
    for line in text.lines() {
        assert!(line.starts_with('{') && line.ends_with('}'), "{line}");
        assert!(line.contains("\"type\":"));
    }
    assert_eq!(text.lines().count(), records.len());
}

#[test]
fn breakpoint_and_fault_events_format() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    tracer.breakpoint_hit(Position::new(3, 1));
    tracer.fault("grid access out of bounds: (9, 9)");
    let lines: Vec<String> = tracer
        .buffer()
        .iter()
        .map(|record| tracer.format_record(record))
        .collect();
    assert!(lines[0].contains("BREAKPOINT (3, 1)"));
    assert!(lines[1].contains("FAULT grid access out of bounds"));
}

#[test]
fn step_event_reports_direction_after_move() {
    let tracer = trace("<@", TracerConfig::new().enabled());
    let first = tracer.buffer().iter().next().unwrap();
    assert!(matches!(
        first.event,
        TraceEvent::Step {
            direction: Direction::Left,
            ..
        }
    ));
}
