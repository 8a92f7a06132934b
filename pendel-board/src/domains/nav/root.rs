//! Composition root for the navigation core.

use std::collections::HashMap;
use std::time::Instant;

use pendel_model::BoardSnapshot;

use super::carousel::CarouselRegistry;
use super::classifier::InputClassifier;
use super::config::PagingConfig;
use super::messages::NavOutput;
use super::screen::ScreenNavigator;
use super::sync::ScrollSyncObserver;
use super::types::{CarouselKey, CarouselSpec, HitRegion, NavKey, RegionId, Route, ScreenKind};

/// Owns the whole navigation state: the screen navigator, the carousel
/// registry, the input classifier and the reconciliation observer.
///
/// The host wires native events into `handle_wheel` / `handle_key` /
/// `go_to_*`, reports rendered offsets through `viewport_reported`, and
/// calls `on_frame` once per render frame, executing the returned scroll
/// commands. The render layer reads the active indices or listens to the
/// returned events.
#[derive(Debug)]
pub struct NavigationRoot {
    classifier: InputClassifier,
    navigator: ScreenNavigator,
    carousels: CarouselRegistry,
    observer: ScrollSyncObserver,
    cfg: PagingConfig,
}

impl NavigationRoot {
    /// Build a root over an explicit screen sequence. `screen_extent` is
    /// the full-viewport height in host units.
    pub fn new(screens: Vec<ScreenKind>, screen_extent: f32, cfg: PagingConfig) -> Self {
        Self {
            classifier: InputClassifier,
            navigator: ScreenNavigator::new(screens, screen_extent, cfg),
            carousels: CarouselRegistry::new(),
            observer: ScrollSyncObserver,
            cfg,
        }
    }

    /// The production dashboard: all five screens, default tuning.
    pub fn standard(screen_extent: f32) -> Self {
        Self::new(
            ScreenKind::ALL.to_vec(),
            screen_extent,
            PagingConfig::default(),
        )
    }

    // Registration and data.

    /// Register a carousel at mount. Lengths stay zero (inert) until a
    /// snapshot is applied.
    pub fn register_carousel(&mut self, key: CarouselKey, spec: CarouselSpec) {
        self.carousels.register(key, spec, self.cfg);
    }

    /// Apply a refreshed board snapshot: recomputes every registered
    /// carousel's slide count, clamping active slides that fell off the
    /// end. Screen count never changes here.
    pub fn apply_snapshot(&mut self, snapshot: &BoardSnapshot) -> NavOutput {
        let mut out = NavOutput::default();
        for key in self.carousels.keys() {
            let data_len = match key {
                CarouselKey::Journeys => snapshot.journeys.len(),
                CarouselKey::Predictions => snapshot.predictions.len(),
                CarouselKey::LineDetails => snapshot.by_line.len(),
            };
            if let Some(carousel) = self.carousels.get_mut(key) {
                let total = if data_len == 0 {
                    0
                } else {
                    data_len + carousel.spec().leading_slides
                };
                carousel.set_len(total, &mut out);
            }
        }
        out
    }

    // Input entry points, one per source.

    /// Wheel event entry point. `hit` is the registry-resolved region
    /// under the pointer. When the result passes through, the host lets
    /// the native container scroll (carousels swipe natively); otherwise
    /// it suppresses native scrolling so the core owns screen paging.
    pub fn handle_wheel(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        hit: HitRegion,
        now: Instant,
    ) -> NavOutput {
        match self
            .classifier
            .classify_wheel(delta_x, delta_y, hit, &self.carousels)
        {
            Route::Screen => {
                let mut out = NavOutput::default();
                self.navigator.handle_wheel(delta_y, now, &mut out);
                out
            }
            // Native horizontal scrolling stays in charge; passive
            // tracking will converge the slide index.
            Route::Carousel(_) => NavOutput::native(),
            Route::Ignore => NavOutput::native(),
        }
    }

    /// Keydown entry point. `focus` is the registry-resolved region
    /// owning keyboard focus.
    pub fn handle_key(&mut self, key: NavKey, focus: HitRegion, now: Instant) -> NavOutput {
        match self.classifier.classify_key(key, focus, &self.carousels) {
            Route::Screen => {
                let mut out = NavOutput::default();
                self.navigator.handle_key(key, now, &mut out);
                out
            }
            Route::Carousel(carousel) => {
                let mut out = NavOutput::default();
                let dir = if key == NavKey::ArrowRight { 1 } else { -1 };
                if let Some(state) = self.carousels.get_mut(carousel) {
                    state.step(dir, now, &mut out);
                }
                out
            }
            Route::Ignore => NavOutput::native(),
        }
    }

    /// Pagination-dot entry point for screens. Wraps out-of-range
    /// indices and supersedes an in-flight transition.
    pub fn go_to_screen(&mut self, index: i64, now: Instant) -> NavOutput {
        let mut out = NavOutput::default();
        self.navigator.go_to(index, now, &mut out);
        out
    }

    /// Pagination-dot entry point for slides. Safe at any state: unknown
    /// carousels and inert carousels are a no-op, out-of-range indices
    /// wrap or clamp per the carousel's mode.
    pub fn go_to_slide(&mut self, key: CarouselKey, index: i64, now: Instant) -> NavOutput {
        let mut out = NavOutput::default();
        match self.carousels.get_mut(key) {
            Some(carousel) => carousel.scroll_to_slide(index, now, &mut out),
            None => log::debug!("go_to_slide for unregistered carousel {key:?}"),
        }
        out
    }

    // Host feedback.

    /// The host reports actual rendered offsets here (including native
    /// momentum the core never initiated).
    pub fn viewport_reported(&mut self, region: RegionId, offset: f32) {
        match region {
            RegionId::Screens => self.navigator.offset_reported(offset),
            RegionId::Carousel(key) => match self.carousels.get_mut(key) {
                Some(carousel) => carousel.offset_reported(offset),
                None => log::warn!("offset report for unregistered carousel {key:?}"),
            },
        }
    }

    /// Viewport resize.
    pub fn set_screen_extent(&mut self, extent: f32) {
        self.navigator.set_screen_extent(extent);
    }

    /// Slide layout resize for one carousel.
    pub fn set_slide_extent(&mut self, key: CarouselKey, extent: f32) {
        if let Some(carousel) = self.carousels.get_mut(key) {
            carousel.set_slide_extent(extent);
        }
    }

    /// Per-frame driver: advances animations, expires the navigation
    /// lock, and runs one reconciliation pass.
    pub fn on_frame(&mut self, now: Instant) -> NavOutput {
        let mut out = NavOutput::default();
        self.navigator.on_frame(now, &mut out);
        for (_, carousel) in self.carousels.iter_mut() {
            carousel.on_frame(now, &mut out);
        }
        self.observer
            .reconcile(&mut self.navigator, &mut self.carousels, &self.cfg, &mut out);
        out
    }

    // Read surface for the render layer.

    pub fn screen_count(&self) -> usize {
        self.navigator.screen_count()
    }

    pub fn active_screen_index(&self) -> usize {
        self.navigator.active_index()
    }

    pub fn active_screen(&self) -> ScreenKind {
        self.navigator.active_screen()
    }

    pub fn is_locked(&self) -> bool {
        self.navigator.is_locked()
    }

    pub fn slide_count(&self, key: CarouselKey) -> Option<usize> {
        self.carousels.get(key).map(|c| c.len())
    }

    pub fn active_slide_index(&self, key: CarouselKey) -> Option<usize> {
        self.carousels.get(key).map(|c| c.active_index())
    }

    /// Active slide per registered carousel.
    pub fn active_slides(&self) -> HashMap<CarouselKey, usize> {
        self.carousels
            .keys()
            .into_iter()
            .filter_map(|key| self.active_slide_index(key).map(|index| (key, index)))
            .collect()
    }
}
