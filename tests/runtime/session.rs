//! Session integration tests

use torus_debug::{Tracer, TracerConfig};
use torus_engine::EngineConfig;
use torus_foundation::{ErrorKind, Position};
use torus_runtime::{Session, Stop};

const HELLO: &str = include_str!("../../programs/hello.bf");
const SIEVE: &str = include_str!("../../programs/sieve.bf");

#[test]
fn sieve_runs_within_generous_limit() {
    let mut session = Session::new(SIEVE).with_step_limit(10_000);
    session.run().unwrap();
    assert_eq!(
        session.interpreter().output(),
        "2357111317192329313741434753596167717379"
    );
}

#[test]
fn sieve_hits_tight_limit() {
    let mut session = Session::new(SIEVE).with_step_limit(1000);
    let err = session.run().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::StepLimit { limit: 1000 }));
    assert_eq!(session.interpreter().steps(), 1000);
    assert!(!session.interpreter().is_done());
}

#[test]
fn continue_visits_breakpoint_every_loop() {
    // `,` in hello runs once per character.
    let mut session = Session::new(HELLO);
    session.breakpoints_mut().add(Position::new(18, 0));

    let mut hits = 0;
    while let Stop::Breakpoint(position) = session.continue_run().unwrap() {
        assert_eq!(position, Position::new(18, 0));
        hits += 1;
    }
    assert_eq!(hits, 13);
    assert_eq!(session.interpreter().output(), "Hello, World!");
}

#[test]
fn back_through_output_retracts_it() {
    let mut session = Session::new(HELLO);
    session.run().unwrap();
    session.back(10);
    assert!(session.interpreter().output().len() < "Hello, World!".len());
    session.run().unwrap();
    assert_eq!(session.interpreter().output(), "Hello, World!");
}

#[test]
fn reset_with_seed_replays_randomness() {
    let config = EngineConfig::new().with_seed(5);
    let mut session = Session::with_config("?", config);
    session.step_n(20).unwrap();
    let first = session.interpreter().pointer();
    session.reset();
    session.step_n(20).unwrap();
    assert_eq!(session.interpreter().pointer(), first);
}

#[test]
fn traced_session_fills_buffer() {
    let tracer = Tracer::new(TracerConfig::new().enabled());
    let mut session = Session::new(HELLO).with_tracer(tracer);
    session.run().unwrap();
    assert_eq!(session.tracer().buffer().by_event_type("halt").len(), 1);

    session.reset();
    assert!(session.tracer().buffer().is_empty());
}
