//! Per-carousel slide state: index-to-offset geometry and tracking.

use std::time::Instant;

use crate::domains::nav::animator::SnapAnimator;
use crate::domains::nav::config::PagingConfig;
use crate::domains::nav::messages::{NavCommand, NavEvent, NavOutput};
use crate::domains::nav::types::{CarouselKey, CarouselSpec, RegionId, WrapMode};

/// One carousel's controller.
///
/// States are `Idle` and `Animating` (the programmatic flag). Native
/// horizontal swiping never goes through this controller; it reaches the
/// state only as reported offsets, which passive reconciliation converts
/// back into an index while no programmatic animation runs.
#[derive(Debug)]
pub struct CarouselState {
    key: CarouselKey,
    spec: CarouselSpec,
    /// Total slide count, leading slides included. Data-dependent.
    len: usize,
    active: usize,
    /// Latest known offset, reported or animated.
    scroll_x: f32,
    /// True strictly while this controller animates a scroll it issued.
    programmatic: bool,
    animator: SnapAnimator,
    cfg: PagingConfig,
}

impl CarouselState {
    pub fn new(key: CarouselKey, spec: CarouselSpec, cfg: PagingConfig) -> Self {
        Self {
            key,
            spec,
            len: 0,
            active: 0,
            scroll_x: 0.0,
            programmatic: false,
            animator: SnapAnimator::new(),
            cfg,
        }
    }

    pub fn key(&self) -> CarouselKey {
        self.key
    }

    pub fn spec(&self) -> CarouselSpec {
        self.spec
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A carousel with no slides ignores all slide requests.
    pub fn is_inert(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_programmatic(&self) -> bool {
        self.programmatic
    }

    pub(crate) fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn slide_extent(&self) -> f32 {
        self.spec.slide_extent
    }

    /// Refresh registration data on remount. Slide state survives.
    pub(crate) fn update_spec(&mut self, spec: CarouselSpec) {
        self.spec = spec;
    }

    /// Slide layout resize; the host re-reports the real offset after.
    pub fn set_slide_extent(&mut self, extent: f32) {
        self.spec.slide_extent = extent;
        self.scroll_x = self.active as f32 * extent;
    }

    /// Data refresh changed the slide count. Shrinking below the active
    /// index clamps it without any transition animation.
    pub fn set_len(&mut self, len: usize, out: &mut NavOutput) {
        if len == self.len {
            return;
        }
        self.len = len;
        let clamped = if len == 0 { 0 } else { self.active.min(len - 1) };
        if clamped != self.active {
            self.active = clamped;
            // The running animation (if any) now points past the end;
            // drop it rather than scroll to a removed slide.
            self.animator.cancel();
            self.programmatic = false;
            out.events.push(NavEvent::SlideChanged {
                key: self.key,
                index: clamped,
            });
        }
    }

    /// The host reports the actual rendered offset here.
    pub fn offset_reported(&mut self, offset: f32) {
        self.scroll_x = offset;
    }

    /// Programmatic slide request. Wrapping carousels fold any index into
    /// range; finite ones clamp. Inert carousels ignore the request.
    pub fn scroll_to_slide(&mut self, index: i64, now: Instant, out: &mut NavOutput) {
        if self.is_inert() {
            return;
        }
        let n = self.len as i64;
        let target = match self.spec.wrap_mode {
            WrapMode::Wrapping => index.rem_euclid(n) as usize,
            WrapMode::Finite => index.clamp(0, n - 1) as usize,
        };
        if target == self.active && !self.animator.is_active() {
            return;
        }
        // Ordering contract: flag and optimistic index precede the first
        // animated offset (see the navigator for the same invariant).
        self.programmatic = true;
        let changed = target != self.active;
        self.active = target;
        self.animator.start_at(
            now,
            self.scroll_x,
            target as f32 * self.spec.slide_extent,
            self.cfg.slide_snap_ms,
            self.cfg.easing_kind,
        );
        if changed {
            out.events.push(NavEvent::SlideChanged {
                key: self.key,
                index: target,
            });
        }
    }

    /// Keyboard step. Deliberately never wraps: edge slides are a no-op,
    /// unlike wheel-driven screen paging.
    pub fn step(&mut self, dir: i32, now: Instant, out: &mut NavOutput) {
        if self.is_inert() {
            return;
        }
        let next = if dir >= 0 {
            self.active + 1
        } else if self.active == 0 {
            return;
        } else {
            self.active - 1
        };
        if next >= self.len {
            return;
        }
        self.scroll_to_slide(next as i64, now, out);
    }

    /// Index the current offset corresponds to, for reconciliation.
    pub(crate) fn derived_index(&self) -> usize {
        if self.len == 0 || self.spec.slide_extent <= 0.0 {
            return 0;
        }
        let raw = (self.scroll_x / self.spec.slide_extent).round();
        (raw.max(0.0) as usize).min(self.len - 1)
    }

    /// Adopt a reconciled index. Never animates.
    pub(crate) fn adopt_index(&mut self, index: usize, out: &mut NavOutput) {
        let clamped = if self.len == 0 { 0 } else { index.min(self.len - 1) };
        if clamped != self.active {
            log::debug!(
                "carousel {:?} drift corrected: {} -> {}",
                self.key,
                self.active,
                clamped
            );
            self.active = clamped;
            out.events.push(NavEvent::SlideChanged {
                key: self.key,
                index: clamped,
            });
        }
    }

    /// Per-frame driver for the snap animation.
    pub fn on_frame(&mut self, now: Instant, out: &mut NavOutput) {
        if let Some(offset) = self.animator.tick_at(now) {
            self.scroll_x = offset;
            out.commands.push(NavCommand::ScrollTo {
                region: RegionId::Carousel(self.key),
                offset,
            });
            if !self.animator.is_active() {
                self.programmatic = false;
            }
        }
    }
}
