// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_fit_inside_their_clamps() {
    assert!(DEFAULT_PARTICLE_COUNT >= 1 && DEFAULT_PARTICLE_COUNT <= MAX_PARTICLE_COUNT);
    assert!(DEFAULT_TRAIL_LENGTH >= 1 && DEFAULT_TRAIL_LENGTH <= MAX_TRAIL_LENGTH);
    assert!(DEFAULT_FALLBACK_PARTICLES >= 1 && DEFAULT_FALLBACK_PARTICLES <= MAX_FALLBACK_PARTICLES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn filters_are_stable() {
    // Both filters must converge rather than oscillate or blow up
    assert!(TENSION_SMOOTHING > 0.0 && TENSION_SMOOTHING < 1.0);
    assert!(EXPLOSION_DECAY > 0.0 && EXPLOSION_DECAY < 1.0);
    assert!(EXPLOSION_FLOOR > 0.0 && EXPLOSION_FLOOR < 0.02);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_copies_never_invert_or_vanish() {
    // Even the longest trail keeps a positive lag factor and alpha
    let worst_lag = 1.0 - (MAX_TRAIL_LENGTH as f32 - 1.0) * TRAIL_LAG_STEP * TRAIL_LAG_WEIGHT;
    assert!(worst_lag > 0.0);
    assert!(TRAIL_FADE_SPAN > 0.0 && TRAIL_FADE_SPAN < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_has_logical_relationships() {
    // Saturn's ring clears its core
    assert!(SATURN_RING_INNER > SATURN_CORE_RADIUS);
    assert!(SATURN_RING_SHARE > 0.0 && SATURN_RING_SHARE < 1.0);

    // Buddha head and body leave room for the base
    assert!(BUDDHA_HEAD_SHARE + BUDDHA_BODY_SHARE < 1.0);

    // Start cloud surrounds every target shape
    assert!(START_CLOUD_EXTENT / 2.0 > FIREWORKS_RADIUS);
    assert!(POINT_SCALE_MIN > 0.0 && POINT_SCALE_SPAN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_and_camera_constants_are_sane() {
    assert!(CLAP_LOW < CLAP_HIGH);
    assert!(FINGERTIPS.iter().all(|&i| i < HAND_LANDMARKS));
    assert!(MIDDLE_MCP < HAND_LANDMARKS && WRIST < HAND_LANDMARKS);

    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_Z > CAMERA_NEAR && CAMERA_Z < CAMERA_FAR);
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}
