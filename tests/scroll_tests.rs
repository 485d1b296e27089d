// Host-side tests for the scroll tracker.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod content {
    include!("../src/core/content.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use content::SectionId;
use scroll::*;

fn page() -> Vec<(SectionId, SectionGeometry)> {
    vec![
        (SectionId::Home, SectionGeometry::new(0.0, 800.0)),
        (SectionId::About, SectionGeometry::new(800.0, 800.0)),
        (SectionId::Experience, SectionGeometry::new(1600.0, 800.0)),
        (SectionId::Projects, SectionGeometry::new(2400.0, 1200.0)),
        (SectionId::Contact, SectionGeometry::new(3600.0, 600.0)),
    ]
}

#[test]
fn probe_adds_fixed_lookahead() {
    assert_eq!(probe_position(0.0), 100.0);
    assert_eq!(probe_position(750.0), 850.0);
}

#[test]
fn concrete_offsets_map_to_sections() {
    let layout = page();
    // 699 + 100 = 799, still inside home
    assert_eq!(resolve_active(699.0, &layout), Some(SectionId::Home));
    // 750 + 100 = 850 is already inside about
    assert_eq!(resolve_active(750.0, &layout), Some(SectionId::About));
    assert_eq!(resolve_active(800.0, &layout), Some(SectionId::About));
    assert_eq!(resolve_active(1500.0, &layout), Some(SectionId::Experience));
    assert_eq!(resolve_active(3600.0, &layout), Some(SectionId::Contact));
}

#[test]
fn lower_bound_is_inclusive() {
    let layout = page();
    // probe lands exactly on about.top
    assert_eq!(resolve_active(700.0, &layout), Some(SectionId::About));
}

#[test]
fn upper_bound_is_exclusive() {
    let layout = [(SectionId::Home, SectionGeometry::new(0.0, 800.0))];
    // probe == top + height of the only section: no match
    assert_eq!(resolve_active(700.0, &layout), None);

    let layout = page();
    // same point belongs to the next section instead
    assert_eq!(resolve_active(700.0, &layout), Some(SectionId::About));
}

#[test]
fn above_first_section_keeps_initial_state() {
    let layout = [
        (SectionId::About, SectionGeometry::new(1000.0, 500.0)),
        (SectionId::Contact, SectionGeometry::new(1500.0, 500.0)),
    ];
    let mut tracker = ScrollTracker::new(SectionId::Projects);
    for offset in [0.0, 100.0, 899.9] {
        let u = tracker.update(offset, &layout);
        assert_eq!(u.active, SectionId::Projects);
        assert!(!u.active_changed);
    }
}

#[test]
fn gap_between_sections_retains_previous() {
    // rounding gap between about and experience
    let layout = [
        (SectionId::Home, SectionGeometry::new(0.0, 800.0)),
        (SectionId::About, SectionGeometry::new(800.0, 799.0)),
        (SectionId::Experience, SectionGeometry::new(1600.0, 800.0)),
    ];
    let mut tracker = ScrollTracker::default();
    tracker.update(1000.0, &layout);
    assert_eq!(tracker.active(), SectionId::About);

    // probe = 1599.5 falls in the gap
    let u = tracker.update(1499.5, &layout);
    assert_eq!(u.active, SectionId::About);
    assert!(!u.active_changed);
}

#[test]
fn missing_sections_are_skipped() {
    let layout = [
        (SectionId::Home, SectionGeometry::new(0.0, 800.0)),
        (SectionId::Contact, SectionGeometry::new(800.0, 800.0)),
    ];
    assert_eq!(resolve_active(900.0, &layout), Some(SectionId::Contact));
    let empty: [(SectionId, SectionGeometry); 0] = [];
    assert_eq!(resolve_active(900.0, &empty), None);
}

#[test]
fn first_match_wins_in_declared_order() {
    // overlapping ranges cannot happen on a real page but order must decide
    let layout = [
        (SectionId::Contact, SectionGeometry::new(0.0, 1000.0)),
        (SectionId::About, SectionGeometry::new(0.0, 1000.0)),
    ];
    assert_eq!(resolve_active(0.0, &layout), Some(SectionId::About));
}

#[test]
fn update_is_idempotent() {
    let layout = page();
    let mut tracker = ScrollTracker::default();
    let first = tracker.update(1234.0, &layout);
    let second = tracker.update(1234.0, &layout);
    assert_eq!(first.active, second.active);
    assert_eq!(first.nav_scrolled, second.nav_scrolled);
    assert!(first.active_changed);
    assert!(!second.active_changed);
    assert!(!second.nav_changed);
}

#[test]
fn jumps_sample_discretely() {
    let layout = page();
    let mut tracker = ScrollTracker::default();
    let u = tracker.update(3700.0, &layout);
    assert_eq!(u.active, SectionId::Contact);
    assert!(u.active_changed);
}

#[test]
fn nav_flag_follows_threshold_independent_of_section() {
    // probe == 100 is not above the threshold
    assert!(!is_nav_scrolled(0.0));
    assert!(is_nav_scrolled(0.5));

    let mut tracker = ScrollTracker::default();
    let empty: [(SectionId, SectionGeometry); 0] = [];
    let u = tracker.update(50.0, &empty);
    assert!(u.nav_scrolled);
    assert!(u.nav_changed);
    assert_eq!(u.active, SectionId::Home);

    let u = tracker.update(0.0, &empty);
    assert!(!u.nav_scrolled);
    assert!(u.nav_changed);
}

#[test]
fn progress_is_clamped_fraction_of_scroll_range() {
    assert_eq!(scroll_progress(0.0, 4200.0, 1000.0), 0.0);
    assert!((scroll_progress(1600.0, 4200.0, 1000.0) - 0.5).abs() < 1e-12);
    assert_eq!(scroll_progress(5000.0, 4200.0, 1000.0), 1.0);
    // page shorter than the viewport
    assert_eq!(scroll_progress(10.0, 500.0, 1000.0), 0.0);
}

#[test]
fn geometry_contains_is_half_open() {
    let g = SectionGeometry::new(100.0, 50.0);
    assert!(g.contains(100.0));
    assert!(g.contains(149.999));
    assert!(!g.contains(150.0));
    assert!(!g.contains(99.999));
}
