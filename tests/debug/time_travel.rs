//! Time travel integration tests
//!
//! Tests the history ring together with interpreter snapshots.

use torus_debug::History;
use torus_engine::{EngineConfig, Interpreter};

const SIEVE: &str = include_str!("../../programs/sieve.bf");

fn record(interpreter: &mut Interpreter, history: &mut History, count: usize) {
    for _ in 0..count {
        history.push(interpreter.snapshot());
        interpreter.step().unwrap();
    }
}

#[test]
fn rewind_then_replay_matches() {
    let mut interpreter = Interpreter::new(SIEVE);
    let mut history = History::new(500);
    record(&mut interpreter, &mut history, 300);
    let expected_pointer = interpreter.pointer();
    let expected_stack = interpreter.stack().clone();

    let snapshot = history.rewind(100).unwrap();
    interpreter.restore(snapshot);
    assert_eq!(interpreter.steps(), 200);

    for _ in 0..100 {
        interpreter.step().unwrap();
    }
    assert_eq!(interpreter.pointer(), expected_pointer);
    assert_eq!(interpreter.stack(), &expected_stack);
}

#[test]
fn rewind_undoes_self_modification() {
    let mut interpreter = Interpreter::new("\"Q\"00p@");
    let mut history = History::default();
    record(&mut interpreter, &mut history, 6);
    assert_eq!(interpreter.grid().get(0, 0), Some('Q'));

    interpreter.restore(history.rewind(1).unwrap());
    assert_eq!(interpreter.grid().get(0, 0), Some('"'));
}

#[test]
fn rewind_replays_random_choices() {
    let mut interpreter = Interpreter::with_config("?", EngineConfig::new().with_seed(99));
    let mut history = History::new(64);
    record(&mut interpreter, &mut history, 32);
    let first: Vec<_> = (0..16)
        .map(|_| interpreter.step().unwrap().unwrap().direction)
        .collect();

    interpreter.restore(history.rewind(8).unwrap());
    for _ in 0..8 {
        interpreter.step().unwrap();
    }
    let second: Vec<_> = (0..16)
        .map(|_| interpreter.step().unwrap().unwrap().direction)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn capacity_bounds_how_far_back() {
    let mut interpreter = Interpreter::new(SIEVE);
    let mut history = History::new(10);
    record(&mut interpreter, &mut history, 50);
    assert_eq!(history.len(), 10);
    let oldest = history.rewind(1000).unwrap();
    assert_eq!(oldest.steps(), 40);
    assert!(history.is_empty());
}
