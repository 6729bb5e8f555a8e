// Host-side tests for the full interaction core: pointer samples in,
// snapshot and domain values out.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod angle {
    include!("../src/core/angle.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}
mod session {
    include!("../src/core/session.rs");
}
mod value {
    include!("../src/core/value.rs");
}
mod controller {
    include!("../src/core/controller.rs");
}

use controller::{KnobConfig, KnobController};
use glam::Vec2;

const TOL: f32 = 1e-2;

fn uncontrolled(default_value: f32, precise: bool, unlock: f32) -> KnobController {
    KnobController::new(KnobConfig {
        value: None,
        default_value,
        min: 0.0,
        max: 100.0,
        precise_mode: precise,
        unlock_distance: unlock,
    })
    .unwrap()
}

/// Pointer position at `angle_deg` (up = 0, clockwise) and `radius` pixels
/// from `center`.
fn at(center: Vec2, angle_deg: f32, radius: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    center + Vec2::new(rad.sin(), -rad.cos()) * radius
}

#[test]
fn rejects_malformed_domain() {
    let cfg = KnobConfig {
        min: 10.0,
        max: 10.0,
        ..KnobConfig::default()
    };
    assert!(KnobController::new(cfg).is_err());
}

#[test]
fn uncontrolled_drag_to_half_turn_yields_midpoint() {
    let mut c = uncontrolled(40.0, false, 0.0);
    assert_eq!(c.value(), 40.0);

    let center = Vec2::ZERO;
    c.pointer_down(center, at(center, 0.0, 100.0));
    // 40 on [0, 100] starts the dial at 144 degrees; +36 lands on 180.
    let emitted = c.pointer_move(at(center, 36.0, 100.0)).unwrap();
    assert!((emitted - 50.0).abs() < TOL);
    assert!((c.value() - 50.0).abs() < TOL);
    assert!((c.snapshot().value_angle - 180.0).abs() < TOL);
}

#[test]
fn precise_off_first_move_already_emits() {
    let mut c = uncontrolled(0.0, false, 100.0);
    let center = Vec2::new(50.0, 50.0);
    c.pointer_down(center, at(center, 0.0, 2.0));
    assert!(c.pointer_move(at(center, 5.0, 2.0)).is_some());
}

#[test]
fn locked_moves_pin_the_angle_and_emit_nothing() {
    let mut c = uncontrolled(40.0, true, 20.0);
    let center = Vec2::new(100.0, 100.0);
    c.pointer_down(center, at(center, 0.0, 5.0));
    let initial = c.snapshot().value_angle;

    let pointer = at(center, 90.0, 10.0);
    assert!(c.pointer_move(pointer).is_none());
    let snap = c.snapshot();
    assert!(snap.dragging);
    assert_eq!(snap.value_angle, initial);
    assert!((snap.drag_distance - 10.0).abs() < TOL);
    assert_eq!(snap.pointer_pos, pointer);
    assert_eq!(c.value(), 40.0);
}

#[test]
fn end_to_end_precision_scenario() {
    // min=0, max=100, unlockDistance=20, starting value 40 (dial at 144).
    let mut c = uncontrolled(40.0, true, 20.0);
    let center = Vec2::new(300.0, 300.0);
    c.pointer_down(center, Vec2::new(300.0, 295.0));

    // Distance 5: locked, value unchanged.
    assert!(c.pointer_move(Vec2::new(300.0, 295.0)).is_none());
    assert_eq!(c.value(), 40.0);

    // Distance 25: unlocks; the reference reset makes this sample emit the
    // unchanged start angle.
    let emitted = c.pointer_move(Vec2::new(300.0, 275.0)).unwrap();
    assert!((emitted - 40.0).abs() < TOL);
    assert!((c.snapshot().value_angle - 144.0).abs() < TOL);

    // 45 degrees past the reset point: only the post-unlock delta counts.
    let emitted = c.pointer_move(Vec2::new(325.0, 275.0)).unwrap();
    assert!((emitted - 52.5).abs() < TOL);
    assert!((c.snapshot().value_angle - 189.0).abs() < TOL);
}

#[test]
fn pointer_up_clears_dragging_and_reports_the_drag() {
    let mut c = uncontrolled(0.0, false, 0.0);
    let center = Vec2::new(50.0, 50.0);
    c.pointer_down(center, at(center, 0.0, 10.0));
    assert!(c.snapshot().dragging);

    assert!(c.pointer_up());
    assert!(!c.snapshot().dragging);
    // Stray events after the gesture resolved are no-ops.
    assert!(c.pointer_move(at(center, 45.0, 10.0)).is_none());
    assert!(!c.pointer_up());
}

#[test]
fn move_before_any_down_is_a_noop() {
    let mut c = uncontrolled(40.0, true, 20.0);
    assert!(c.pointer_move(Vec2::new(10.0, 10.0)).is_none());
    assert_eq!(c.value(), 40.0);
    assert!(!c.snapshot().dragging);
}

#[test]
fn controlled_drag_emits_but_read_stays_external() {
    let mut c = KnobController::new(KnobConfig {
        value: Some(25.0),
        ..KnobConfig::default()
    })
    .unwrap();
    let center = Vec2::ZERO;
    c.pointer_down(center, at(center, 0.0, 200.0));
    let emitted = c.pointer_move(at(center, 10.0, 200.0));
    assert!(emitted.is_some());
    assert_eq!(c.value(), 25.0);

    c.set_external(70.0);
    assert_eq!(c.value(), 70.0);
}

#[test]
fn set_value_bypasses_the_drag_path() {
    let mut c = uncontrolled(0.0, true, 100.0);
    assert_eq!(c.set_value(80.0), 80.0);
    assert_eq!(c.value(), 80.0);
    assert!((c.angle() - 288.0).abs() < TOL);
}

#[test]
fn out_of_domain_controlled_value_clamps_the_display_angle() {
    let mut c = KnobController::new(KnobConfig {
        value: Some(150.0),
        ..KnobConfig::default()
    })
    .unwrap();
    assert_eq!(c.value(), 150.0);
    assert!((c.angle() - 360.0).abs() < TOL);

    c.set_external(-40.0);
    assert!((c.angle() - 0.0).abs() < TOL);
}

#[test]
fn set_bounds_rebuilds_the_scale() {
    let mut c = uncontrolled(50.0, true, 100.0);
    assert!((c.angle() - 180.0).abs() < TOL);

    c.set_bounds(0.0, 200.0).unwrap();
    assert!((c.angle() - 90.0).abs() < TOL);

    // A malformed rebuild is rejected and the old scale survives.
    assert!(c.set_bounds(5.0, 5.0).is_err());
    assert!((c.angle() - 90.0).abs() < TOL);
}

#[test]
fn resting_angle_tracks_the_stored_value_after_a_drag() {
    let mut c = uncontrolled(40.0, false, 0.0);
    let center = Vec2::ZERO;
    c.pointer_down(center, at(center, 0.0, 100.0));
    c.pointer_move(at(center, 36.0, 100.0));
    c.pointer_up();
    // Not dragging anymore: the angle is derived from the value again.
    assert!((c.angle() - 180.0).abs() < TOL);
}
