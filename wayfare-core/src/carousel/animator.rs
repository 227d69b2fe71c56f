//! Time-based tween that walks the carousel offset toward a target

use std::time::{Duration, Instant};

use super::types::Easing;

/// Single in-flight tween. Starting a new one replaces the old.
#[derive(Debug, Clone, Default)]
pub struct OffsetAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl OffsetAnimator {
    /// Idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tween is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Destination of the running tween, if any.
    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    /// Begin a tween from `current` to `target`. Replaces whatever was
    /// running; callers pass the live offset so motion stays continuous.
    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        now: Instant,
        duration: Duration,
        easing: Easing,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
        self.duration = duration;
        self.easing = easing;
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let te = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * te)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_tween_interpolates_and_finishes_on_target() {
        let t0 = Instant::now();
        let mut animator = OffsetAnimator::new();
        animator.start(0.0, -300.0, t0, Duration::from_millis(300), Easing::Linear);

        let mid = animator.tick(t0 + Duration::from_millis(150)).unwrap();
        assert!((mid + 150.0).abs() < 0.5);
        assert!(animator.is_active());

        assert_eq!(animator.tick(t0 + Duration::from_millis(300)), Some(-300.0));
        assert!(!animator.is_active());
        assert_eq!(animator.tick(t0 + Duration::from_millis(400)), None);
    }

    #[test]
    fn zero_duration_lands_immediately() {
        let t0 = Instant::now();
        let mut animator = OffsetAnimator::new();
        animator.start(10.0, 0.0, t0, Duration::ZERO, Easing::EaseOut);
        assert_eq!(animator.tick(t0), Some(0.0));
        assert!(!animator.is_active());
    }

    #[test]
    fn cancel_stops_ticking() {
        let t0 = Instant::now();
        let mut animator = OffsetAnimator::new();
        animator.start(0.0, -100.0, t0, Duration::from_millis(100), Easing::Linear);
        animator.cancel();
        assert_eq!(animator.target(), None);
        assert_eq!(animator.tick(t0 + Duration::from_millis(50)), None);
    }
}
