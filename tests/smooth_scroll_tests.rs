// Host-side tests for the smooth-scroll driver state and easing curves.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod easing {
    include!("../src/core/easing.rs");
}
mod smooth_scroll {
    include!("../src/core/smooth_scroll.rs");
}

use easing::*;
use smooth_scroll::*;

fn scroller(limit: f64) -> SmoothScroll {
    SmoothScroll::new(SmoothScrollConfig::default(), limit)
}

/// Run frames at 60 Hz starting from `t0` until idle; returns the last time.
fn run_to_idle(s: &mut SmoothScroll, t0: f64) -> f64 {
    let mut t = t0;
    for _ in 0..10_000 {
        if s.advance(t).is_none() {
            return t;
        }
        t += 1.0 / 60.0;
    }
    panic!("tween never finished");
}

#[test]
fn defaults_follow_tuning_constants() {
    let c = SmoothScrollConfig::default();
    assert_eq!(c.duration, 1.2);
    assert_eq!(c.wheel_multiplier, 0.8);
    assert_eq!(c.touch_multiplier, 2.0);
    assert_eq!(c.easing, Easing::ExpoOut);
    assert!(c.enabled);
}

#[test]
fn idle_scroller_reports_nothing() {
    let mut s = scroller(1000.0);
    assert!(!s.is_animating());
    assert_eq!(s.advance(0.0), None);
}

#[test]
fn wheel_applies_multiplier_and_eases_to_target() {
    let mut s = scroller(5000.0);
    s.on_wheel(100.0);
    assert_eq!(s.target(), 80.0);
    assert!(s.is_animating());

    // first frame anchors the tween start; expo-out starts at 0.001
    let first = s.advance(10.0).unwrap();
    assert!((first - 0.08).abs() < 1e-9);
    let mid = s.advance(10.3).unwrap();
    assert!(mid > 0.0 && mid < 80.0);

    run_to_idle(&mut s, 10.3);
    assert_eq!(s.current(), 80.0);
    assert!(!s.is_animating());
}

#[test]
fn position_is_monotonic_during_tween() {
    let mut s = scroller(5000.0);
    s.scroll_to(1200.0, 1.5);
    let mut prev = -1.0;
    let mut t = 0.0;
    while let Some(y) = s.advance(t) {
        assert!(y >= prev);
        prev = y;
        t += 1.0 / 60.0;
    }
    assert_eq!(s.current(), 1200.0);
    // 1.5 s at 60 Hz
    assert!(t >= 1.5 && t < 1.6);
}

#[test]
fn touch_uses_its_own_multiplier() {
    let mut s = scroller(5000.0);
    s.on_touch(30.0);
    assert_eq!(s.target(), 60.0);
}

#[test]
fn targets_are_clamped_to_scroll_range() {
    let mut s = scroller(500.0);
    s.on_wheel(-200.0);
    assert_eq!(s.target(), 0.0);
    assert!(!s.is_animating());

    s.scroll_to(9000.0, 1.0);
    assert_eq!(s.target(), 500.0);

    s.set_limit(300.0);
    assert_eq!(s.target(), 300.0);
    run_to_idle(&mut s, 0.0);
    assert_eq!(s.current(), 300.0);
}

#[test]
fn consecutive_wheels_accumulate_target() {
    let mut s = scroller(5000.0);
    s.on_wheel(100.0);
    s.advance(0.0);
    s.advance(0.1);
    s.on_wheel(100.0);
    assert_eq!(s.target(), 160.0);
    run_to_idle(&mut s, 0.2);
    assert_eq!(s.current(), 160.0);
}

#[test]
fn sync_adopts_external_offset_and_cancels_tween() {
    let mut s = scroller(5000.0);
    s.scroll_to(1000.0, 1.0);
    s.sync(420.0);
    assert!(!s.is_animating());
    assert_eq!(s.current(), 420.0);
    assert_eq!(s.target(), 420.0);
    assert_eq!(s.advance(5.0), None);
}

#[test]
fn stop_freezes_current_position() {
    let mut s = scroller(5000.0);
    s.scroll_to(1000.0, 1.0);
    s.advance(0.0);
    let y = s.advance(0.5).unwrap();
    s.stop();
    assert_eq!(s.target(), y);
    assert_eq!(s.advance(0.6), None);
    assert_eq!(s.current(), y);
}

#[test]
fn zero_duration_jumps_immediately() {
    let mut s = scroller(5000.0);
    s.scroll_to(700.0, 0.0);
    assert_eq!(s.advance(3.0), Some(700.0));
    assert!(!s.is_animating());
}

#[test]
fn progress_tracks_current_over_limit() {
    let mut s = scroller(1000.0);
    assert_eq!(s.progress(), 0.0);
    s.sync(250.0);
    assert_eq!(s.progress(), 0.25);
    let flat = scroller(0.0);
    assert_eq!(flat.progress(), 0.0);
}

#[test]
fn expo_out_shape() {
    assert!(expo_out(0.0).abs() < 0.01);
    assert_eq!(expo_out(1.0), 1.0);
    assert!(expo_out(0.5) > 0.95);
    // clamped input
    assert_eq!(expo_out(3.0), 1.0);
    assert_eq!(expo_out(-1.0), expo_out(0.0));
}

#[test]
fn easing_endpoints() {
    for e in [Easing::ExpoOut, Easing::Power4Out, Easing::SineInOut, Easing::Linear] {
        assert!(e.apply(0.0).abs() < 0.01, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?}");
    }
    assert!((sine_in_out(0.5) - 0.5).abs() < 1e-12);
    assert!((power4_out(0.5) - 0.9375).abs() < 1e-12);
    assert_eq!(linear(f64::NAN), 0.0);
}

#[test]
fn cubic_bezier_matches_linear_control_points() {
    let lin = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!((lin.ease(t) - t).abs() < 1e-5, "t={t}");
    }
}

#[test]
fn hero_curve_is_monotonic_and_bounded() {
    let mut prev = 0.0;
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        let v = CubicBezier::HERO.ease(t);
        assert!(v >= prev - 1e-9, "t={t}");
        assert!((0.0..=1.0 + 1e-9).contains(&v));
        prev = v;
    }
    assert_eq!(CubicBezier::HERO.ease(0.0), 0.0);
    assert_eq!(CubicBezier::HERO.ease(1.0), 1.0);
    // slow start
    assert!(CubicBezier::HERO.ease(0.1) < 0.1);
}

#[test]
fn hero_curve_renders_as_css() {
    assert_eq!(CubicBezier::HERO.css(), "cubic-bezier(0.43, 0.13, 0.23, 0.96)");
}
