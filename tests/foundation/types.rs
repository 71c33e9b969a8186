//! Integration tests for Direction and Position

use torus_foundation::{Direction, Position};

#[test]
fn direction_order_for_random_draw() {
    assert_eq!(
        Direction::ALL,
        [
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right
        ]
    );
}

#[test]
fn direction_symbols() {
    for direction in Direction::ALL {
        assert_eq!(Direction::from_symbol(direction.symbol()), Some(direction));
    }
    assert_eq!(Direction::from_symbol('>'), Some(Direction::Right));
    assert_eq!(Direction::from_symbol('x'), None);
}

#[test]
fn direction_defaults_to_right() {
    assert_eq!(Direction::default(), Direction::Right);
    assert!(Direction::Right.is_horizontal());
    assert!(!Direction::Up.is_horizontal());
}

#[test]
fn direction_display() {
    assert_eq!(Direction::Up.to_string(), "up");
    assert_eq!(Direction::Left.to_string(), "left");
}

#[test]
fn position_display_and_origin() {
    assert_eq!(Position::ORIGIN, Position::new(0, 0));
    assert_eq!(Position::new(12, 3).to_string(), "(12, 3)");
}
