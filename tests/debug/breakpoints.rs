//! Breakpoint integration tests

use torus_debug::Breakpoints;
use torus_engine::Interpreter;
use torus_foundation::Position;

#[test]
fn driver_pauses_before_breakpoint_cell() {
    let mut breakpoints = Breakpoints::new();
    breakpoints.add(Position::new(3, 0));

    let mut interpreter = Interpreter::new("123.@");
    while !breakpoints.hit(interpreter.pointer().position) {
        interpreter.step().unwrap();
    }

    assert_eq!(interpreter.steps(), 3);
    assert_eq!(interpreter.output(), "");
    assert_eq!(interpreter.stack().as_slice(), &[1, 2, 3]);
}

#[test]
fn iteration_is_sorted() {
    let mut breakpoints = Breakpoints::new();
    breakpoints.add(Position::new(5, 0));
    breakpoints.add(Position::new(1, 2));
    breakpoints.add(Position::new(1, 0));
    let order: Vec<Position> = breakpoints.iter().collect();
    assert_eq!(
        order,
        vec![Position::new(1, 0), Position::new(1, 2), Position::new(5, 0)]
    );
}
