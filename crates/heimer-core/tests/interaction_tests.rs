// Host-side tests for the drag state machine and the orbit camera.

use heimer_core::interaction::wrap_angle;
use heimer_core::orbit::auto_rotation_angle;
use heimer_core::{InteractionPhase, InteractionState, OrbitControls, SceneError};
use std::f32::consts::PI;

#[test]
fn starts_idle_at_default_speed() {
    let s = InteractionState::default();
    assert_eq!(s.phase(), InteractionPhase::Idle);
    assert!(!s.is_interacting());
    assert_eq!(s.auto_rotate_speed(), 0.5);
}

#[test]
fn drag_start_records_origin() {
    let mut s = InteractionState::new(0.5);
    s.begin_drag(12.0, 0.3);
    assert!(s.is_interacting());
    assert_eq!(
        s.phase(),
        InteractionPhase::Interacting {
            started_at: 12.0,
            start_azimuth: 0.3
        }
    );
}

#[test]
fn release_reverses_drag_direction_at_default_magnitude() {
    let mut s = InteractionState::new(0.5);
    // azimuth increased: positive velocity -> negative speed
    s.begin_drag(1.0, 0.0);
    s.end_drag(1.5, 0.4);
    assert!(!s.is_interacting());
    assert!((s.last_drag_velocity() - 0.8).abs() < 1e-5);
    assert_eq!(s.auto_rotate_speed(), -0.5);

    // azimuth decreased: negative velocity -> positive speed
    s.begin_drag(2.0, 0.4);
    s.end_drag(4.0, -2.0);
    assert_eq!(s.auto_rotate_speed(), 0.5);
}

#[test]
fn fast_and_slow_drags_release_at_same_speed() {
    let mut s = InteractionState::new(0.5);
    s.begin_drag(0.0, 0.0);
    s.end_drag(0.01, 3.0);
    assert_eq!(s.auto_rotate_speed().abs(), 0.5);
    s.begin_drag(1.0, 0.0);
    s.end_drag(100.0, 0.001);
    assert_eq!(s.auto_rotate_speed().abs(), 0.5);
}

#[test]
fn stationary_release_rotates_positive() {
    let mut s = InteractionState::new(0.5);
    s.begin_drag(0.0, 1.0);
    s.end_drag(0.0, 1.0);
    s.begin_drag(0.0, 1.0);
    s.end_drag(0.2, 1.0);
    assert_eq!(s.auto_rotate_speed(), 0.5);
}

#[test]
fn zero_duration_drag_keeps_speed() {
    let mut s = InteractionState::new(0.5);
    s.begin_drag(0.0, 0.0);
    s.end_drag(0.5, 1.0);
    assert_eq!(s.auto_rotate_speed(), -0.5);
    s.begin_drag(3.0, 0.0);
    s.end_drag(3.0, -1.0);
    assert_eq!(s.auto_rotate_speed(), -0.5);
    assert!(!s.is_interacting());
}

#[test]
fn end_without_start_is_ignored() {
    let mut s = InteractionState::new(0.5);
    s.end_drag(5.0, 2.0);
    assert_eq!(s.phase(), InteractionPhase::Idle);
    assert_eq!(s.auto_rotate_speed(), 0.5);
    assert_eq!(s.last_drag_velocity(), 0.0);
}

#[test]
fn drag_across_the_seam_uses_short_way_round() {
    let mut s = InteractionState::new(0.5);
    // +3.0 -> -3.0 is a +0.28 rad move across +PI, not -6.0
    s.begin_drag(0.0, 3.0);
    s.end_drag(1.0, -3.0);
    assert!(s.last_drag_velocity() > 0.0);
    assert_eq!(s.auto_rotate_speed(), -0.5);
}

#[test]
fn drag_past_half_turn_reads_as_short_way_round() {
    let mut s = InteractionState::new(0.5);
    // a +4.0 rad sweep is indistinguishable from -2.28 rad; release follows the latter
    s.begin_drag(0.0, 0.0);
    s.end_drag(1.0, 4.0);
    let v = s.last_drag_velocity();
    assert!((v - (4.0 - 2.0 * PI)).abs() < 1e-4, "velocity {v}");
    assert_eq!(s.auto_rotate_speed(), 0.5);
}

#[test]
fn wrap_angle_stays_in_half_turn() {
    for d in [-10.0_f32, -PI, -1.0, 0.0, 1.0, PI, 7.0] {
        let w = wrap_angle(d);
        assert!((-PI..=PI).contains(&w), "{d} -> {w}");
        let turns = (w - d) / (2.0 * PI);
        assert!((turns - turns.round()).abs() < 1e-4, "{d} -> {w}");
    }
    assert_eq!(wrap_angle(0.5), 0.5);
}

#[test]
fn orbit_starts_in_front_of_origin() {
    let o = OrbitControls::default();
    let eye = o.eye();
    assert!((eye.z - 15.0).abs() < 1e-4);
    assert!(eye.x.abs() < 1e-4 && eye.y.abs() < 1e-4);
    assert_eq!(o.azimuth(), 0.0);
    assert!((o.polar() - PI / 2.0).abs() < 1e-6);
    assert_eq!(o.min_distance, 0.0);
    assert_eq!(o.max_distance, 100.0);
}

#[test]
fn auto_rotate_matches_three_js_units() {
    // speed 2.0 -> one turn per 30 s
    assert!((auto_rotation_angle(2.0, 30.0) - 2.0 * PI).abs() < 1e-4);
    let mut o = OrbitControls::default();
    o.auto_rotate_speed = 0.5;
    o.update(1.0);
    assert!((o.azimuth() + 2.0 * PI / 120.0).abs() < 1e-5);
    o.auto_rotate = false;
    let before = o.azimuth();
    o.update(1.0);
    assert_eq!(o.azimuth(), before);
}

#[test]
fn dolly_is_clamped_to_bounds() {
    let mut o = OrbitControls::default();
    for _ in 0..200 {
        o.dolly(1.0 / 0.95);
    }
    assert_eq!(o.distance(), 100.0);
    for _ in 0..2000 {
        o.dolly(0.95);
    }
    assert!(o.distance() >= 0.0 && o.distance() < 1e-3);
    o.dolly(f32::NAN);
    assert!(o.distance().is_finite());
}

#[test]
fn polar_angle_never_flips() {
    let mut o = OrbitControls::default();
    o.rotate(0.0, 10.0);
    assert!(o.polar() > 0.0);
    assert!(o.eye().y > 0.0);
    o.rotate(0.0, -20.0);
    assert!(o.polar() < PI);
    assert!(o.eye().y < 0.0);
}

#[test]
fn disabled_controls_ignore_input() {
    let mut o = OrbitControls::default();
    o.enable_rotate = false;
    o.enable_zoom = false;
    o.enable_pan = false;
    o.rotate(1.0, 1.0);
    o.dolly(0.5);
    o.pan(3.0, 3.0);
    assert_eq!(o.azimuth(), 0.0);
    assert_eq!(o.distance(), 15.0);
    assert_eq!(o.target, glam::Vec3::ZERO);
}

#[test]
fn pan_moves_target_in_screen_plane() {
    let mut o = OrbitControls::default();
    let offset_before = o.eye() - o.target;
    o.pan(1.0, 2.0);
    assert!((o.target.x - 1.0).abs() < 1e-5);
    assert!((o.target.y - 2.0).abs() < 1e-5);
    assert!(o.target.z.abs() < 1e-5);
    assert!(((o.eye() - o.target) - offset_before).length() < 1e-4);
}

#[test]
fn inverted_distance_bounds_are_rejected() {
    let err = OrbitControls::default().with_distance_bounds(10.0, 1.0).unwrap_err();
    assert_eq!(err, SceneError::InvalidDistanceBounds { min: 10.0, max: 1.0 });
    let o = OrbitControls::default().with_distance_bounds(1.0, 10.0).unwrap();
    assert_eq!(o.distance(), 10.0);
}
