//! Configuration for the navigation core
//!
//! This struct configures the paging state machines in one place so the
//! same defaults feed the screen navigator, the slide carousels and the
//! reconciliation pass. Defaults come from `infra::constants::paging`.

use crate::infra::constants::paging;

#[derive(Debug, Clone, Copy)]
pub struct PagingConfig {
    /// Accumulated wheel delta required to accept a screen transition.
    pub intent_threshold: f32,
    /// Minimum lock hold after an accepted transition (ms).
    pub min_lock_ms: u64,
    /// Quiet period after the last qualifying input before unlock (ms).
    pub quiet_period_ms: u64,
    /// Screen snap tween duration (ms).
    pub screen_snap_ms: u64,
    /// Slide snap tween duration (ms).
    pub slide_snap_ms: u64,
    /// Easing kind: 0=Linear, 1=EaseIn, 2=EaseOut, 3=EaseInOut.
    pub easing_kind: u8,
    /// Offset jitter tolerated before reconciliation rewrites an index,
    /// as a fraction of one extent.
    pub sync_noise_fraction: f32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            intent_threshold: paging::intent::THRESHOLD,
            min_lock_ms: paging::lock::MIN_HOLD_MS,
            quiet_period_ms: paging::lock::QUIET_PERIOD_MS,
            screen_snap_ms: paging::snap::SCREEN_DURATION_MS,
            slide_snap_ms: paging::snap::SLIDE_DURATION_MS,
            easing_kind: paging::snap::EASING_KIND,
            sync_noise_fraction: paging::sync::NOISE_FRACTION,
        }
    }
}
