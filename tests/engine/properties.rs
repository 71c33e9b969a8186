//! Property tests over arbitrary programs

use proptest::prelude::*;
use torus_engine::{EngineConfig, Interpreter};

const ALPHABET: &[char] = &[
    '0', '1', '2', '5', '9', '+', '-', '*', '/', '%', '!', '`', '>', '<', '^', 'v', '?', '_',
    '|', '"', ':', '\\', '$', '.', ',', '#', 'g', 'p', '@', ' ', 'x',
];

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(ALPHABET), 0..12),
        0..6,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    })
}

proptest! {
    #[test]
    fn lenient_programs_never_fail(source in program(), seed in any::<u64>()) {
        let mut interpreter = Interpreter::with_config(&source, EngineConfig::new().with_seed(seed));
        for _ in 0..500 {
            if interpreter.step().unwrap().is_none() {
                break;
            }
        }
    }

    #[test]
    fn pointer_stays_on_a_row(source in program(), seed in any::<u64>()) {
        let mut interpreter = Interpreter::with_config(&source, EngineConfig::new().with_seed(seed));
        for _ in 0..300 {
            let Some(step) = interpreter.step().unwrap() else { break };
            let rows = interpreter.grid().row_count();
            prop_assert!(rows == 0 || step.next.y < rows);
        }
    }

    #[test]
    fn same_seed_same_run(source in program(), seed in any::<u64>()) {
        let config = EngineConfig::new().with_seed(seed);
        let mut a = Interpreter::with_config(&source, config.clone());
        let mut b = Interpreter::with_config(&source, config);
        for _ in 0..200 {
            prop_assert_eq!(a.step().unwrap(), b.step().unwrap());
        }
    }

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,80}") {
        let mut interpreter = Interpreter::with_config(&source, EngineConfig::new().with_seed(1));
        for _ in 0..200 {
            if interpreter.step().unwrap().is_none() {
                break;
            }
        }
    }
}
