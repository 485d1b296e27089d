// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Distances should be positive
    assert!(PROBE_LOOKAHEAD_PX > 0.0);
    assert!(MAGNETIC_RADIUS_PX > 0.0);

    // Pull is a fraction of the pointer-to-centre vector
    assert!(MAGNETIC_PULL > 0.0 && MAGNETIC_PULL <= 1.0);

    // Multipliers and durations should be positive
    assert!(WHEEL_MULTIPLIER > 0.0);
    assert!(TOUCH_MULTIPLIER > 0.0);
    assert!(SMOOTH_SCROLL_DURATION_SEC > 0.0);
    assert!(NAV_SCROLL_DURATION_SEC > 0.0);

    // Parallax is expressed in percent
    assert!(HERO_PARALLAX_MAX_PERCENT > 0.0 && HERO_PARALLAX_MAX_PERCENT <= 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_presets_are_stable() {
    for (k, c) in [
        (CURSOR_SPRING_STIFFNESS, CURSOR_SPRING_DAMPING),
        (BLOB_SPRING_STIFFNESS, BLOB_SPRING_DAMPING),
        (MAGNETIC_SPRING_STIFFNESS, MAGNETIC_SPRING_DAMPING),
    ] {
        assert!(k > 0.0);
        assert!(c > 0.0);
        // explicit integration stays stable when omega * h is well below 2
        assert!(k.sqrt() * SPRING_MAX_SUBSTEP_SEC < 0.5);
    }

    // Cursor follows tighter than the trailing blob
    assert!(CURSOR_SPRING_STIFFNESS > BLOB_SPRING_STIFFNESS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_integration_limits_are_consistent() {
    assert!(SPRING_MAX_SUBSTEP_SEC > 0.0);
    assert!(SPRING_MAX_FRAME_SEC > SPRING_MAX_SUBSTEP_SEC);
    assert!(SPRING_REST_DELTA > 0.0);
    assert!(SPRING_REST_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn loading_sequence_is_ordered() {
    assert!(LOADING_VISIBLE_AT_SEC > 0.0);
    assert!(LOADING_LOADED_AT_SEC > LOADING_VISIBLE_AT_SEC);
    assert!(LOADING_DONE_AT_SEC > LOADING_LOADED_AT_SEC);
    assert!(LOADING_TICK_MS > 0);
    assert!(LOADING_MAX_STEP > 0.0 && LOADING_MAX_STEP < LOADING_COMPLETE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stagger_steps_are_positive() {
    for step in [
        HERO_LETTER_STAGGER,
        SKILL_STAGGER,
        EXPERIENCE_CARD_STAGGER,
        EXPERIENCE_HIGHLIGHT_STAGGER,
        PROJECT_CARD_STAGGER,
        DETAIL_TECH_STAGGER,
        GALLERY_IMAGE_STAGGER,
        REVEAL_WORD_STAGGER,
        SKILL_FLOAT_PERIOD_STEP_SEC,
    ] {
        assert!(step > 0.0);
    }
    // Highlights start after their card has begun to appear
    assert!(EXPERIENCE_HIGHLIGHT_BASE > EXPERIENCE_CARD_STAGGER);
}
