//! Discrete vertical paging over the fixed screen set.
//!
//! Wheels and trackpads emit bursts of many small delta events for what
//! is semantically one gesture. The navigator treats a burst atomically:
//! deltas accumulate into a scroll intent until a threshold is crossed,
//! the transition is accepted exactly once, and a decaying lock absorbs
//! the trailing momentum so the gesture cannot page twice.

use std::time::{Duration, Instant};

use super::animator::SnapAnimator;
use super::config::PagingConfig;
use super::messages::{NavCommand, NavEvent, NavOutput};
use super::types::{NavKey, RegionId, ScreenKind};

/// Debounce token for an accepted transition.
///
/// The lock clears once `max(0, min_hold - elapsed) + quiet_period` has
/// passed with no further qualifying input, i.e. at
/// `max(start + min_hold, last_input) + quiet_period`.
#[derive(Debug, Clone, Copy)]
struct NavigationLock {
    started: Instant,
    last_input: Instant,
    min_hold: Duration,
    quiet_period: Duration,
}

impl NavigationLock {
    fn new(now: Instant, cfg: &PagingConfig) -> Self {
        Self {
            started: now,
            last_input: now,
            min_hold: Duration::from_millis(cfg.min_lock_ms),
            quiet_period: Duration::from_millis(cfg.quiet_period_ms),
        }
    }

    /// Restart the quiet-period timer; this is what absorbs momentum.
    fn extend(&mut self, now: Instant) {
        self.last_input = now;
    }

    fn deadline(&self) -> Instant {
        let floor = self.started + self.min_hold;
        floor.max(self.last_input) + self.quiet_period
    }

    fn expired(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
}

/// State machine owning the active screen index.
///
/// States are `Idle` (no lock) and `Locked` (a transition is in flight
/// or just happened). Wheel and step-key input while locked is absorbed;
/// direct index requests are honored in any state and supersede an
/// in-flight transition.
#[derive(Debug)]
pub struct ScreenNavigator {
    screens: Vec<ScreenKind>,
    active: usize,
    /// Unconsumed vertical wheel delta. Reset on accepted transitions
    /// and on lock expiry.
    intent: f32,
    lock: Option<NavigationLock>,
    /// True strictly while this navigator's own snap animation runs.
    programmatic: bool,
    animator: SnapAnimator,
    /// Height of one screen in host units.
    screen_extent: f32,
    /// Latest known offset of the screen container, whether reported by
    /// the host or produced by our own animation.
    offset: f32,
    cfg: PagingConfig,
}

impl ScreenNavigator {
    pub fn new(screens: Vec<ScreenKind>, screen_extent: f32, cfg: PagingConfig) -> Self {
        debug_assert!(!screens.is_empty(), "screen set must not be empty");
        Self {
            screens,
            active: 0,
            intent: 0.0,
            lock: None,
            programmatic: false,
            animator: SnapAnimator::new(),
            screen_extent,
            offset: 0.0,
            cfg,
        }
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_screen(&self) -> ScreenKind {
        self.screens[self.active]
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn is_programmatic(&self) -> bool {
        self.programmatic
    }

    pub fn screen_extent(&self) -> f32 {
        self.screen_extent
    }

    pub(crate) fn offset(&self) -> f32 {
        self.offset
    }

    /// Pending unconsumed intent, exposed for tests and diagnostics.
    pub fn scroll_intent(&self) -> f32 {
        self.intent
    }

    /// The host reports the actual rendered offset here. Never triggers
    /// a transition by itself; reconciliation picks up drift later.
    pub fn offset_reported(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Viewport resize. Re-derives the offset mapping; the host is
    /// expected to re-report the real offset afterwards.
    pub fn set_screen_extent(&mut self, extent: f32) {
        self.screen_extent = extent;
        self.offset = self.active as f32 * extent;
    }

    /// One qualifying wheel event on the screen axis. Positive delta
    /// pages forward.
    pub fn handle_wheel(&mut self, delta_y: f32, now: Instant, out: &mut NavOutput) {
        if let Some(lock) = &mut self.lock {
            // Locked: absorb, never enqueue a second transition.
            lock.extend(now);
            return;
        }
        self.intent += delta_y;
        if self.intent.abs() >= self.cfg.intent_threshold {
            let step: i64 = if self.intent > 0.0 { 1 } else { -1 };
            log::debug!(
                "wheel intent {:.0} accepted, stepping {:+}",
                self.intent,
                step
            );
            self.accept_step(step, now, out);
        }
    }

    /// One qualifying key event on the screen axis.
    pub fn handle_key(&mut self, key: NavKey, now: Instant, out: &mut NavOutput) {
        match key {
            NavKey::ArrowDown | NavKey::PageDown => self.step_or_absorb(1, now, out),
            NavKey::ArrowUp | NavKey::PageUp => self.step_or_absorb(-1, now, out),
            // Home/End carry an explicit target, so they use the direct
            // path and are honored even while locked.
            NavKey::Home => self.go_to(0, now, out),
            NavKey::End => self.go_to(self.screen_count() as i64 - 1, now, out),
            NavKey::ArrowLeft | NavKey::ArrowRight => {}
        }
    }

    /// Direct index request (pagination dot, Home/End). Wraps into range
    /// and supersedes any in-flight transition.
    pub fn go_to(&mut self, index: i64, now: Instant, out: &mut NavOutput) {
        let target = wrap_index(index, self.screen_count());
        if target == self.active && !self.animator.is_active() {
            return;
        }
        self.begin_transition(target, now, out);
    }

    fn step_or_absorb(&mut self, step: i64, now: Instant, out: &mut NavOutput) {
        if let Some(lock) = &mut self.lock {
            lock.extend(now);
            return;
        }
        self.accept_step(step, now, out);
    }

    fn accept_step(&mut self, step: i64, now: Instant, out: &mut NavOutput) {
        let target = wrap_index(self.active as i64 + step, self.screen_count());
        self.begin_transition(target, now, out);
    }

    fn begin_transition(&mut self, target: usize, now: Instant, out: &mut NavOutput) {
        // Ordering contract: the programmatic flag and the optimistic
        // index update land before the animator produces its first
        // offset, so reconciliation never pairs a transient offset with
        // a stale index.
        self.programmatic = true;
        let changed = target != self.active;
        self.active = target;
        self.intent = 0.0;
        // The lock is armed synchronously with the transition decision;
        // a racing second input can only ever extend it.
        self.lock = Some(NavigationLock::new(now, &self.cfg));
        self.animator.start_at(
            now,
            self.offset,
            target as f32 * self.screen_extent,
            self.cfg.screen_snap_ms,
            self.cfg.easing_kind,
        );
        if changed {
            out.events.push(NavEvent::ScreenChanged {
                index: target,
                screen: self.screens[target],
            });
        }
    }

    /// Per-frame driver: advances the snap animation and expires the lock.
    pub fn on_frame(&mut self, now: Instant, out: &mut NavOutput) {
        if let Some(offset) = self.animator.tick_at(now) {
            self.offset = offset;
            out.commands.push(NavCommand::ScrollTo {
                region: RegionId::Screens,
                offset,
            });
            if !self.animator.is_active() {
                // Completion callback equivalent: only now may the
                // observer trust reported offsets again.
                self.programmatic = false;
            }
        }
        if let Some(lock) = self.lock
            && lock.expired(now)
        {
            self.lock = None;
            self.intent = 0.0;
        }
    }

    /// Adopt an index derived from the actual scroll position. Used by
    /// reconciliation only; never animates.
    pub(crate) fn adopt_index(&mut self, index: usize, out: &mut NavOutput) {
        let clamped = index.min(self.screen_count() - 1);
        if clamped != self.active {
            log::debug!("screen drift corrected: {} -> {}", self.active, clamped);
            self.active = clamped;
            out.events.push(NavEvent::ScreenChanged {
                index: clamped,
                screen: self.screens[clamped],
            });
        }
    }
}

/// Wrap an arbitrary index into `[0, count)` with modulo arithmetic.
pub(crate) fn wrap_index(index: i64, count: usize) -> usize {
    debug_assert!(count > 0);
    index.rem_euclid(count as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> ScreenNavigator {
        ScreenNavigator::new(ScreenKind::ALL.to_vec(), 720.0, PagingConfig::default())
    }

    #[test]
    fn wrap_index_covers_both_ends() {
        assert_eq!(wrap_index(5, 5), 0);
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(12, 5), 2);
        assert_eq!(wrap_index(0, 1), 0);
        assert_eq!(wrap_index(-3, 1), 0);
    }

    #[test]
    fn intent_below_threshold_does_not_page() {
        let t0 = Instant::now();
        let mut nav = navigator();
        let mut out = NavOutput::default();
        nav.handle_wheel(30.0, t0, &mut out);
        nav.handle_wheel(30.0, t0 + Duration::from_millis(5), &mut out);
        assert_eq!(nav.active_index(), 0);
        assert!(!nav.is_locked());
        assert_eq!(nav.scroll_intent(), 60.0);
        assert!(out.events.is_empty());
    }

    #[test]
    fn opposing_deltas_cancel_in_the_accumulator() {
        let t0 = Instant::now();
        let mut nav = navigator();
        let mut out = NavOutput::default();
        nav.handle_wheel(60.0, t0, &mut out);
        nav.handle_wheel(-50.0, t0, &mut out);
        nav.handle_wheel(60.0, t0, &mut out);
        assert_eq!(nav.active_index(), 0);
        assert!((nav.scroll_intent() - 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn upward_burst_wraps_to_last_screen() {
        let t0 = Instant::now();
        let mut nav = navigator();
        let mut out = NavOutput::default();
        nav.handle_wheel(-90.0, t0, &mut out);
        assert_eq!(nav.active_index(), 4);
        assert!(nav.is_locked());
    }

    #[test]
    fn key_step_while_locked_is_absorbed() {
        let t0 = Instant::now();
        let mut nav = navigator();
        let mut out = NavOutput::default();
        nav.handle_key(NavKey::PageDown, t0, &mut out);
        assert_eq!(nav.active_index(), 1);
        nav.handle_key(NavKey::PageDown, t0 + Duration::from_millis(10), &mut out);
        assert_eq!(nav.active_index(), 1, "repeat within lock must not page");
    }

    #[test]
    fn lock_expiry_resets_intent() {
        let t0 = Instant::now();
        let mut nav = navigator();
        let mut out = NavOutput::default();
        nav.handle_wheel(90.0, t0, &mut out);
        assert!(nav.is_locked());
        // min_hold(75) + quiet(20) with no further input.
        nav.on_frame(t0 + Duration::from_millis(96), &mut out);
        assert!(!nav.is_locked());
        assert_eq!(nav.scroll_intent(), 0.0);
    }

    #[test]
    fn direct_request_supersedes_in_flight_transition() {
        let t0 = Instant::now();
        let mut nav = navigator();
        let mut out = NavOutput::default();
        nav.go_to(1, t0, &mut out);
        nav.on_frame(t0 + Duration::from_millis(50), &mut out);
        assert!(nav.is_programmatic());
        nav.go_to(3, t0 + Duration::from_millis(60), &mut out);
        assert_eq!(nav.active_index(), 3);
        // Run the new animation to completion.
        nav.on_frame(t0 + Duration::from_millis(800), &mut out);
        assert!(!nav.is_programmatic());
        assert_eq!(nav.offset(), 3.0 * 720.0);
    }

    #[test]
    fn home_and_end_use_the_direct_path() {
        let t0 = Instant::now();
        let mut nav = navigator();
        let mut out = NavOutput::default();
        nav.handle_key(NavKey::End, t0, &mut out);
        assert_eq!(nav.active_index(), 4);
        // Still locked, but Home is direct and must go through.
        nav.handle_key(NavKey::Home, t0 + Duration::from_millis(5), &mut out);
        assert_eq!(nav.active_index(), 0);
    }
}
