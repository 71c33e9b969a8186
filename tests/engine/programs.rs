//! End-to-end program tests

use torus_engine::{EngineConfig, Interpreter};

const HELLO: &str = include_str!("../../programs/hello.bf");
const SIEVE: &str = include_str!("../../programs/sieve.bf");

#[test]
fn hello_world_prints_exactly() {
    let mut interpreter = Interpreter::new(HELLO);
    interpreter.execute().unwrap();
    assert!(interpreter.is_done());
    assert_eq!(interpreter.output(), "Hello, World!");
    assert_eq!(interpreter.steps(), 98);
}

#[test]
fn sieve_prints_primes_below_eighty() {
    let mut interpreter = Interpreter::new(SIEVE);
    interpreter.execute().unwrap();
    assert!(interpreter.is_done());
    assert_eq!(
        interpreter.output(),
        "2357111317192329313741434753596167717379"
    );
    assert_eq!(interpreter.steps(), 4752);
}

#[test]
fn sieve_marks_composites_in_its_own_grid() {
    let mut interpreter = Interpreter::new(SIEVE);
    interpreter.execute().unwrap();
    let row: String = interpreter.grid().rows().nth(3).unwrap().iter().collect();
    // Primes keep their digit, composites are overwritten with spaces.
    assert_eq!(row.chars().nth(4), Some(' '));
    assert_eq!(row.chars().nth(5), Some('5'));
    assert_eq!(row.chars().nth(9), Some(' '));
    assert_eq!(row.chars().nth(11), Some('1'));
}

#[test]
fn stepping_matches_execute() {
    let mut stepped = Interpreter::new(HELLO);
    let mut count = 0;
    while let Some(step) = stepped.step().unwrap() {
        count += 1;
        assert_eq!(step.number, count);
    }

    let mut bulk = Interpreter::new(HELLO);
    bulk.execute().unwrap();

    assert_eq!(stepped.output(), bulk.output());
    assert_eq!(stepped.steps(), bulk.steps());
    assert_eq!(stepped.pointer(), bulk.pointer());
}

#[test]
fn output_can_be_polled_while_stepping() {
    let mut interpreter = Interpreter::new(HELLO);
    let mut polled = String::new();
    while let Some(step) = interpreter.step().unwrap() {
        if let Some(text) = step.emitted {
            polled.push_str(&text);
            assert_eq!(interpreter.output(), polled);
        }
    }
    assert_eq!(polled, "Hello, World!");
}

#[test]
fn take_output_drains() {
    let mut interpreter = Interpreter::new(HELLO);
    interpreter.execute().unwrap();
    assert_eq!(interpreter.take_output(), "Hello, World!");
    assert_eq!(interpreter.output(), "");
}

#[test]
fn instances_are_independent() {
    let mut a = Interpreter::new(HELLO);
    let mut b = Interpreter::new(SIEVE);
    loop {
        let ra = a.step().unwrap();
        let rb = b.step().unwrap();
        if ra.is_none() && rb.is_none() {
            break;
        }
    }
    assert_eq!(a.output(), "Hello, World!");
    assert_eq!(b.output(), "2357111317192329313741434753596167717379");
}

#[test]
fn strict_bounds_do_not_affect_well_behaved_programs() {
    let mut interpreter = Interpreter::with_config(SIEVE, EngineConfig::new().strict());
    interpreter.execute().unwrap();
    assert_eq!(
        interpreter.output(),
        "2357111317192329313741434753596167717379"
    );
}

#[test]
fn restore_mid_run_reproduces_output() {
    let mut interpreter = Interpreter::new(SIEVE);
    for _ in 0..2000 {
        interpreter.step().unwrap();
    }
    let snapshot = interpreter.snapshot();
    interpreter.execute().unwrap();
    let first = interpreter.output().to_string();

    interpreter.restore(snapshot);
    assert_eq!(interpreter.steps(), 2000);
    interpreter.execute().unwrap();
    assert_eq!(interpreter.output(), first);
}

#[test]
fn self_modifying_program_halts_on_written_cell() {
    // Without the write, `.` at column 7 would loop forever.
    let mut interpreter = Interpreter::new("\"@\"70p 1.");
    interpreter.execute().unwrap();
    assert_eq!(interpreter.steps(), 8);
    assert_eq!(interpreter.grid().get(7, 0), Some('@'));
}
