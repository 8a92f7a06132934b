//! Discrete paging constants
//!
//! Shared tuning for the screen navigator, slide snapping and offset
//! reconciliation. Tuning should happen here so every navigator and
//! carousel updates consistently; [`crate::domains::nav::config::PagingConfig`]
//! carries runtime overrides on top of these defaults.

/// Wheel-intent accumulation for vertical screen paging.
pub mod intent {
    /// Accumulated delta units required to accept one screen transition.
    pub const THRESHOLD: f32 = 80.0;
}

/// Navigation lock decay, the debounce that makes one gesture page once.
pub mod lock {
    /// Minimum time (ms) a lock is held after an accepted transition.
    pub const MIN_HOLD_MS: u64 = 75;
    /// Required quiet time (ms) after the last qualifying input before
    /// the lock clears. Absorbs wheel momentum trailing a gesture.
    pub const QUIET_PERIOD_MS: u64 = 20;
}

/// Snap/tween animation defaults.
pub mod snap {
    /// Duration (ms) for a screen transition.
    pub const SCREEN_DURATION_MS: u64 = 320;
    /// Duration (ms) for a slide transition.
    pub const SLIDE_DURATION_MS: u64 = 240;
    /// Easing kind: 0=Linear, 1=EaseIn, 2=EaseOut, 3=EaseInOut.
    pub const EASING_KIND: u8 = 2; // EaseOut
}

/// Offset reconciliation.
pub mod sync {
    /// Offset jitter below this fraction of one extent is ignored when
    /// deriving an index from a reported scroll position.
    pub const NOISE_FRACTION: f32 = 0.04;
}
