//! Offset-to-index reconciliation.
//!
//! Native interactions (momentum deceleration, drag release) do not fire
//! enough discrete events to keep indices converged, so reconciliation
//! runs every frame instead of relying on event callbacks. It must never
//! write while a controller animates its own scroll, or it would fight
//! the animation and desync; the per-controller programmatic flag plus
//! the ordering contract in the controllers guarantee that.

use super::carousel::CarouselRegistry;
use super::config::PagingConfig;
use super::messages::NavOutput;
use super::screen::ScreenNavigator;

#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollSyncObserver;

impl ScrollSyncObserver {
    /// One reconciliation pass over the navigator and every carousel.
    /// Reads reported offsets, derives indices, and corrects drift that
    /// user-driven scrolling introduced behind the controllers' backs.
    pub fn reconcile(
        &self,
        navigator: &mut ScreenNavigator,
        carousels: &mut CarouselRegistry,
        cfg: &PagingConfig,
        out: &mut NavOutput,
    ) {
        if !navigator.is_programmatic() {
            let extent = navigator.screen_extent();
            if extent > 0.0 {
                let offset = navigator.offset();
                let derived = ((offset / extent).round().max(0.0) as usize)
                    .min(navigator.screen_count() - 1);
                let drift = (offset - navigator.active_index() as f32 * extent).abs();
                if derived != navigator.active_index()
                    && drift > extent * cfg.sync_noise_fraction
                {
                    navigator.adopt_index(derived, out);
                }
            }
        }

        for (_, carousel) in carousels.iter_mut() {
            if carousel.is_programmatic() || carousel.is_inert() {
                continue;
            }
            let extent = carousel.slide_extent();
            if extent <= 0.0 {
                continue;
            }
            let derived = carousel.derived_index();
            let drift =
                (carousel.scroll_x() - carousel.active_index() as f32 * extent).abs();
            if derived != carousel.active_index() && drift > extent * cfg.sync_noise_fraction
            {
                carousel.adopt_index(derived, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::nav::messages::NavEvent;
    use crate::domains::nav::types::{
        CarouselKey, CarouselSpec, ScreenKind, WrapMode,
    };
    use std::time::{Duration, Instant};

    fn fixture() -> (ScreenNavigator, CarouselRegistry, PagingConfig) {
        let cfg = PagingConfig::default();
        let navigator = ScreenNavigator::new(ScreenKind::ALL.to_vec(), 720.0, cfg);
        let mut carousels = CarouselRegistry::new();
        let state = carousels.register(
            CarouselKey::Journeys,
            CarouselSpec {
                screen: ScreenKind::Overview,
                wrap_mode: WrapMode::Wrapping,
                leading_slides: 0,
                slide_extent: 400.0,
            },
            cfg,
        );
        let mut out = NavOutput::default();
        state.set_len(6, &mut out);
        (navigator, carousels, cfg)
    }

    #[test]
    fn user_scroll_drift_is_adopted() {
        let (mut navigator, mut carousels, cfg) = fixture();
        navigator.offset_reported(2.0 * 720.0 + 12.0);
        let mut out = NavOutput::default();
        ScrollSyncObserver.reconcile(&mut navigator, &mut carousels, &cfg, &mut out);
        assert_eq!(navigator.active_index(), 2);
        assert!(out
            .events
            .contains(&NavEvent::ScreenChanged {
                index: 2,
                screen: ScreenKind::Heatmap
            }));
    }

    #[test]
    fn jitter_below_noise_threshold_is_ignored() {
        let (mut navigator, mut carousels, cfg) = fixture();
        navigator.offset_reported(10.0); // well under 4% of 720
        let mut out = NavOutput::default();
        ScrollSyncObserver.reconcile(&mut navigator, &mut carousels, &cfg, &mut out);
        assert_eq!(navigator.active_index(), 0);
        assert!(out.events.is_empty());
    }

    #[test]
    fn programmatic_offsets_are_never_reinterpreted() {
        let (mut navigator, mut carousels, cfg) = fixture();
        let t0 = Instant::now();
        let mut out = NavOutput::default();
        navigator.go_to(3, t0, &mut out);
        // Mid-animation the container sits between screens.
        navigator.on_frame(t0 + Duration::from_millis(100), &mut out);
        assert!(navigator.is_programmatic());

        let mut out = NavOutput::default();
        ScrollSyncObserver.reconcile(&mut navigator, &mut carousels, &cfg, &mut out);
        assert_eq!(navigator.active_index(), 3, "observer must not fight the animation");
        assert!(out.events.is_empty());
    }

    #[test]
    fn carousel_native_swipe_converges() {
        let (mut navigator, mut carousels, cfg) = fixture();
        carousels
            .get_mut(CarouselKey::Journeys)
            .unwrap()
            .offset_reported(5.0 * 400.0 - 8.0);
        let mut out = NavOutput::default();
        ScrollSyncObserver.reconcile(&mut navigator, &mut carousels, &cfg, &mut out);
        assert_eq!(
            carousels.get(CarouselKey::Journeys).unwrap().active_index(),
            5
        );
    }
}
