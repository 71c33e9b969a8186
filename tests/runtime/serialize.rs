//! Session image integration tests

use torus_engine::EngineConfig;
use torus_foundation::Position;
use torus_runtime::Session;
use torus_runtime::serialize::{
    SessionImage, from_bytes, load_from_file, save_to_file, to_bytes,
};

const SIEVE: &str = include_str!("../../programs/sieve.bf");

#[test]
fn paused_sieve_resumes_from_bytes() {
    let mut session = Session::new(SIEVE);
    session.step_n(2500).unwrap();
    let bytes = to_bytes(&SessionImage::capture(&session)).unwrap();

    let mut resumed = Session::new("");
    from_bytes(&bytes).unwrap().apply(&mut resumed);
    assert_eq!(resumed.interpreter().steps(), 2500);

    session.run().unwrap();
    resumed.run().unwrap();
    assert_eq!(resumed.interpreter().output(), session.interpreter().output());
    assert_eq!(resumed.interpreter().steps(), 4752);
}

#[test]
fn image_keeps_modified_grid() {
    let mut session = Session::new(SIEVE);
    session.run().unwrap();
    let image = from_bytes(&to_bytes(&SessionImage::capture(&session)).unwrap()).unwrap();
    assert_eq!(image.snapshot.grid(), session.interpreter().grid());
}

#[test]
fn file_round_trip_with_breakpoints() {
    let path = std::env::temp_dir().join("torus_integration_session.msgpack");

    let mut session = Session::with_config("?", EngineConfig::new().with_seed(1));
    session.breakpoints_mut().add(Position::new(0, 0));
    session.step_n(3).unwrap();
    save_to_file(&SessionImage::capture(&session), &path).unwrap();

    let image = load_from_file(&path).unwrap();
    assert_eq!(image.breakpoints, vec![Position::ORIGIN]);
    assert_eq!(image.snapshot.steps(), 3);

    let _ = std::fs::remove_file(&path);
}
