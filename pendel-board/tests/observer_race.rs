//! The reconciliation loop must never fight a programmatic animation.

mod common;

use common::{SCREEN_EXTENT, SLIDE_EXTENT, snapshot, standard_root};
use pendel_board::{CarouselKey, RegionId};
use std::time::{Duration, Instant};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn screen_index_is_stable_during_programmatic_scroll() {
    // P4: while the programmatic flag is set, reconciliation must not
    // change the index, even though the container sits mid-transition.
    let t0 = Instant::now();
    let mut root = standard_root();

    root.go_to_screen(3, t0);
    assert_eq!(root.active_screen_index(), 3, "optimistic update is immediate");

    // Frames through the whole animation; the container reports
    // transient offsets the whole way.
    for i in 1..=18u64 {
        root.viewport_reported(RegionId::Screens, i as f32 * 100.0);
        root.on_frame(t0 + ms(i * 16));
        assert_eq!(
            root.active_screen_index(),
            3,
            "index reverted at frame {i} while animating"
        );
    }
}

#[test]
fn slide_index_is_stable_during_programmatic_scroll() {
    let t0 = Instant::now();
    let mut root = standard_root();
    root.apply_snapshot(&snapshot(0, 8, 0));

    root.go_to_slide(CarouselKey::Journeys, 6, t0);
    for i in 1..=14u64 {
        root.viewport_reported(
            RegionId::Carousel(CarouselKey::Journeys),
            i as f32 * 0.4 * SLIDE_EXTENT,
        );
        root.on_frame(t0 + ms(i * 16));
        assert_eq!(root.active_slide_index(CarouselKey::Journeys), Some(6));
    }
}

#[test]
fn drift_is_corrected_once_the_animation_is_over() {
    let t0 = Instant::now();
    let mut root = standard_root();

    // Finish a transition to screen 1 completely.
    root.go_to_screen(1, t0);
    root.on_frame(t0 + ms(1000));

    // Native momentum then carries the container to screen 2's offset.
    root.viewport_reported(RegionId::Screens, 2.0 * SCREEN_EXTENT - 20.0);
    root.on_frame(t0 + ms(1100));
    assert_eq!(root.active_screen_index(), 2);
}

#[test]
fn ignored_scroll_command_degrades_to_a_snap() {
    // If the platform drops our scroll-to calls entirely, the final
    // animation frame still emits the exact target, and state stays
    // self-consistent once the host re-reports whatever it rendered.
    let t0 = Instant::now();
    let mut root = standard_root();

    root.go_to_screen(2, t0);
    let done = root.on_frame(t0 + ms(2000));
    let last = done.commands.last().copied();
    assert_eq!(
        last,
        Some(pendel_board::NavCommand::ScrollTo {
            region: RegionId::Screens,
            offset: 2.0 * SCREEN_EXTENT
        })
    );
    assert_eq!(root.active_screen_index(), 2);
}
