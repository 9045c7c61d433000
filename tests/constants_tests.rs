// Host-side tests for constants and their relationships to the scene tuning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use heimer_core::constants as tuning;

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_sensitivities_are_positive() {
    assert!(ROTATE_SPEED > 0.0);
    assert!(PAN_SPEED > 0.0);
    assert!(ZOOM_SPEED > 0.0);
    assert!(!CANVAS_ID.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_delta_cap_allows_real_frames() {
    // a 30 fps frame must pass through unclamped, a stalled tab must not
    assert!(MAX_FRAME_DELTA > 1.0 / 30.0);
    assert!(MAX_FRAME_DELTA <= 0.25);
    // the cap never swallows the drift throttle
    assert!(MAX_FRAME_DELTA > tuning::DRIFT_UPDATE_INTERVAL);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pixel_ratio_and_clear_color_are_sane() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert_eq!(CLEAR_COLOR[3], 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_tuning_relationships_hold() {
    // camera starts inside the zoom range
    assert!(tuning::CAMERA_START.length() <= tuning::ORBIT_MAX_DISTANCE);
    assert!(tuning::ORBIT_MIN_DISTANCE <= tuning::ORBIT_MAX_DISTANCE);
    assert!(tuning::DOLLY_SCALE > 0.0 && tuning::DOLLY_SCALE < 1.0);
    // five cells fit between adjacent word anchors
    assert!(tuning::WORD_LETTER_SPACING >= 5.0 * tuning::CELL_SIZE);
    // the spring always commits when far from its target
    assert!(tuning::SWING_TARGET_THRESHOLD > tuning::SWING_THRESHOLD);
}
