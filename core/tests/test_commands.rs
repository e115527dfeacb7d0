//! Integration tests for the command interpreter
//!
//! Drives the engine exclusively through wire-form payloads, the way the
//! MQTT adapter does in production.

use silo_simulator_core::{
    handle_payload, Command, CommandAction, CommandOutcome, Simulator, SimulatorConfig,
};

fn silo() -> Simulator {
    Simulator::new(SimulatorConfig::noiseless())
}

fn apply(silo: &mut Simulator, json: &str) -> CommandOutcome {
    handle_payload(silo, json.as_bytes()).expect("payload should decode")
}

#[test]
fn test_fill_cycle_over_the_wire() {
    let mut silo = silo();

    apply(&mut silo, r#"{"action":"START_FILL"}"#);
    silo.tick();
    silo.tick();
    assert_eq!(silo.level(), 40.0);

    apply(&mut silo, r#"{"action":"STOP_FILL"}"#);
    silo.tick();
    assert_eq!(silo.level(), 40.0);
}

#[test]
fn test_set_level_command() {
    let mut silo = silo();

    let outcome = apply(&mut silo, r#"{"action":"SET_LEVEL","value":50}"#);

    assert_eq!(outcome, CommandOutcome::Applied(CommandAction::SetLevel));
    assert_eq!(silo.level(), 5000.0);
}

#[test]
fn test_configure_hardness_only() {
    let mut silo = silo();
    silo.set_level(10.0);

    apply(&mut silo, r#"{"action":"CONFIGURE","hardness":80}"#);

    assert_eq!(silo.hardness(), 80.0);
    assert_eq!(silo.capacity(), 10_000.0);
    assert_eq!(silo.level(), 1000.0);
}

#[test]
fn test_configure_capacity_only() {
    let mut silo = silo();

    apply(&mut silo, r#"{"action":"CONFIGURE","capacity":20000}"#);

    assert_eq!(silo.capacity(), 20_000.0);
    assert_eq!(silo.hardness(), 50.0);
}

#[test]
fn test_unknown_action_over_the_wire_is_ignored() {
    let mut silo = silo();
    silo.start_fill();
    silo.set_level(42.0);
    let before = silo.snapshot();

    let outcome = apply(&mut silo, r#"{"action":"FOO","value":99}"#);

    assert_eq!(outcome, CommandOutcome::Ignored("FOO".to_string()));
    assert_eq!(silo.snapshot(), before);
}

#[test]
fn test_malformed_payloads_discarded_without_state_change() {
    let mut silo = silo();
    silo.start_fill();
    let before = silo.snapshot();

    for payload in [
        &b"not json"[..],
        b"",
        b"[1,2,3]",
        b"{\"value\":50}",          // missing action
        b"{\"action\":42}",         // action wrong type
        b"{\"action\":\"SET_LEVEL\",\"value\":\"high\"}", // value wrong type
    ] {
        assert!(handle_payload(&mut silo, payload).is_err());
        assert_eq!(silo.snapshot(), before);
    }
}

#[test]
fn test_constructor_helpers_match_hand_written_json() {
    let mut a = silo();
    let mut b = silo();

    let json = Command::configure(Some(7500.0), Some(30.0)).to_json().unwrap();
    apply(&mut a, &json);
    apply(&mut b, r#"{"action":"CONFIGURE","capacity":7500.0,"hardness":30.0}"#);

    assert_eq!(a.snapshot(), b.snapshot());
}
