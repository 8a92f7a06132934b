//! Wrap semantics for direct and wheel-driven screen navigation.

mod common;

use common::standard_root;
use pendel_board::{HitRegion, ScreenKind};
use std::time::{Duration, Instant};

#[test]
fn one_past_the_end_wraps_to_first() {
    let t0 = Instant::now();
    let mut root = standard_root();
    let n = root.screen_count() as i64;
    root.go_to_screen(n, t0);
    assert_eq!(root.active_screen_index(), 0);
}

#[test]
fn minus_one_wraps_to_last() {
    let t0 = Instant::now();
    let mut root = standard_root();
    root.go_to_screen(-1, t0);
    assert_eq!(root.active_screen_index(), root.screen_count() - 1);
    assert_eq!(root.active_screen(), ScreenKind::Leaderboard);
    assert_eq!(root.active_screen().title(), "Leaderboard");
}

#[test]
fn wheel_wraps_at_both_ends() {
    let t0 = Instant::now();
    let mut root = standard_root();

    // Up from the first screen lands on the last.
    root.handle_wheel(0.0, -90.0, HitRegion::Screen, t0);
    assert_eq!(root.active_screen_index(), 4);

    // Let the lock decay, then down from the last wraps to the first.
    root.on_frame(t0 + Duration::from_millis(200));
    root.handle_wheel(0.0, 90.0, HitRegion::Screen, t0 + Duration::from_millis(210));
    assert_eq!(root.active_screen_index(), 0);
}

#[test]
fn direct_request_beats_in_flight_animation() {
    // Scenario: a dot click to 3 while the animation to 1 is in flight
    // settles on 3.
    let t0 = Instant::now();
    let mut root = standard_root();

    root.go_to_screen(1, t0);
    root.on_frame(t0 + Duration::from_millis(80));
    assert_eq!(root.active_screen_index(), 1);

    root.go_to_screen(3, t0 + Duration::from_millis(100));
    assert_eq!(root.active_screen_index(), 3);

    // Drive everything to completion; reconciliation must agree.
    for i in 0..20u64 {
        root.on_frame(t0 + Duration::from_millis(120 + i * 40));
    }
    assert_eq!(root.active_screen_index(), 3);
    assert!(!root.is_locked());
}

#[test]
fn go_to_current_screen_is_a_no_op() {
    // The bare production root works without any carousel registered.
    let t0 = Instant::now();
    let mut root = pendel_board::NavigationRoot::standard(720.0);
    let out = root.go_to_screen(0, t0);
    assert!(out.events.is_empty());
    assert!(!root.is_locked(), "idempotent call must not arm the lock");
}
