//! Axis routing of raw input events.
//!
//! The priority order is what keeps the two paging axes from leaking
//! into each other: a horizontal swipe inside a carousel must not page
//! screens, while vertical wheel motion over that same carousel still
//! does.

use super::carousel::CarouselRegistry;
use super::types::{HitRegion, NavKey, Route};

#[derive(Debug, Default, Clone, Copy)]
pub struct InputClassifier;

impl InputClassifier {
    /// Route one wheel event.
    ///
    /// 1. Overlays and independently scrollable regions own their input.
    /// 2. A registered carousel claims horizontally dominant deltas.
    /// 3. Any remaining vertical delta pages screens.
    /// 4. Everything else is ignored.
    pub fn classify_wheel(
        &self,
        delta_x: f32,
        delta_y: f32,
        hit: HitRegion,
        registry: &CarouselRegistry,
    ) -> Route {
        match hit {
            HitRegion::Overlay | HitRegion::ScrollRegion => Route::Ignore,
            HitRegion::Carousel(key)
                if delta_x.abs() > delta_y.abs() && registry.contains(key) =>
            {
                Route::Carousel(key)
            }
            _ if delta_y != 0.0 => Route::Screen,
            _ => Route::Ignore,
        }
    }

    /// Route one key event. Left/Right belong to the carousel under
    /// focus; the vertical paging keys belong to the screen axis.
    pub fn classify_key(
        &self,
        key: NavKey,
        focus: HitRegion,
        registry: &CarouselRegistry,
    ) -> Route {
        match focus {
            HitRegion::Overlay | HitRegion::ScrollRegion => Route::Ignore,
            HitRegion::Carousel(carousel)
                if matches!(key, NavKey::ArrowLeft | NavKey::ArrowRight)
                    && registry.contains(carousel) =>
            {
                Route::Carousel(carousel)
            }
            _ => match key {
                NavKey::ArrowUp
                | NavKey::ArrowDown
                | NavKey::PageUp
                | NavKey::PageDown
                | NavKey::Home
                | NavKey::End => Route::Screen,
                NavKey::ArrowLeft | NavKey::ArrowRight => Route::Ignore,
            },
        }
    }
}
