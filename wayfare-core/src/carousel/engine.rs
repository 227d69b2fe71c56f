//! CarouselEngine: page index, measured step and animated offset for one
//! carousel instance.

use std::ops::Range;
use std::time::Instant;

use tracing::debug;

use super::{
    animator::OffsetAnimator,
    drag::DragGesture,
    metrics,
    types::{CarouselConfig, Direction, DragOutcome},
};

/// Offsets closer than this are treated as already at rest.
const REST_EPSILON: f32 = 0.01;

/// Paging state for one carousel. Driven by the UI layer with
/// measurements, pointer positions and frame timestamps.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    config: CarouselConfig,
    item_count: usize,
    /// Measured item width plus gap. Zero until the first item is laid out.
    step: f32,
    page: usize,
    offset: f32,
    animator: OffsetAnimator,
    drag: Option<DragGesture>,
}

impl CarouselEngine {
    /// Engine for `item_count` items. Motion stays disabled until
    /// [`Self::measure_step`] sees a laid-out item.
    pub fn new(config: CarouselConfig, item_count: usize) -> Self {
        Self {
            config: config.sanitized(),
            item_count,
            step: 0.0,
            page: 0,
            offset: 0.0,
            animator: OffsetAnimator::new(),
            drag: None,
        }
    }

    /// Effective (sanitized) configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Number of items being paged.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Items per page.
    pub fn visible_count(&self) -> usize {
        self.config.visible_count
    }

    /// Item width plus gap, zero before the first measurement.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Current page, always below [`Self::total_pages`].
    pub fn page(&self) -> usize {
        self.page
    }

    /// Live horizontal offset, including tween progress and drag overshoot.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// `ceil(item_count / visible_count)`, at least one.
    pub fn total_pages(&self) -> usize {
        metrics::total_pages(self.item_count, self.config.visible_count)
    }

    /// Offset the current page settles to.
    pub fn resting_offset(&self) -> f32 {
        metrics::resting_offset(
            self.page,
            self.config.visible_count,
            self.step,
            self.item_count,
        )
    }

    /// Furthest the content may scroll left while at rest.
    pub fn min_offset(&self) -> f32 {
        metrics::min_offset(self.step, self.item_count, self.config.visible_count)
    }

    /// Zero step means nothing has been measured yet and motion is disabled.
    pub fn can_animate(&self) -> bool {
        self.step > 0.0
    }

    /// Whether a page tween is running.
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Whether a pointer drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Width of the viewport that shows exactly `visible_count` items.
    pub fn viewport_width(&self) -> f32 {
        self.step * self.config.visible_count as f32
    }

    /// Item indices intersecting the viewport at the live offset.
    pub fn visible_range(&self) -> Range<usize> {
        metrics::visible_range(
            self.offset,
            self.step,
            self.config.visible_count,
            self.item_count,
        )
    }

    /// Record the rendered width of the first item. `None` or a non-positive
    /// width (nothing laid out yet) resets the step to zero. On change the
    /// offset snaps to the new resting position without animating.
    ///
    /// Returns whether the step changed.
    pub fn measure_step(&mut self, observed_item_width: Option<f32>) -> bool {
        let step = observed_item_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .map(|w| w + self.config.gap)
            .unwrap_or(0.0);
        if (step - self.step).abs() <= REST_EPSILON {
            return false;
        }
        debug!(old = self.step, new = step, "carousel step re-measured");
        self.step = step;
        self.clamp_page();
        self.animator.cancel();
        self.drag = None;
        self.offset = self.resting_offset();
        true
    }

    /// Move one page in `direction`, wrapping at both ends. Returns the new
    /// page.
    pub fn advance(&mut self, direction: Direction, now: Instant) -> usize {
        let total = self.total_pages();
        let previous = self.page;
        self.page = match direction {
            Direction::Next => (self.page + 1) % total,
            Direction::Prev => (self.page + total - 1) % total,
        };
        self.drag = None;
        debug!(
            ?direction,
            from = previous,
            to = self.page,
            total,
            "carousel advanced"
        );
        self.retarget(now);
        self.page
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize, now: Instant) -> usize {
        self.page = page.min(self.total_pages() - 1);
        self.drag = None;
        self.retarget(now);
        self.page
    }

    /// Decide what a released drag of `offset_delta` pixels means. Crossing
    /// a quarter step (by default) leftward pages forward, rightward pages
    /// back; anything shorter springs back to the current page.
    pub fn reconcile_drag(
        &mut self,
        offset_delta: f32,
        now: Instant,
    ) -> DragOutcome {
        self.drag = None;
        let threshold = metrics::drag_threshold(
            self.step,
            self.config.drag_threshold_fraction,
        );
        let outcome = if !self.can_animate() || !offset_delta.is_finite() {
            DragOutcome::SprungBack
        } else if offset_delta < -threshold {
            DragOutcome::Advanced(Direction::Next)
        } else if offset_delta > threshold {
            DragOutcome::Advanced(Direction::Prev)
        } else {
            DragOutcome::SprungBack
        };
        match outcome {
            DragOutcome::Advanced(direction) => {
                self.advance(direction, now);
            }
            DragOutcome::SprungBack => self.retarget(now),
        }
        outcome
    }

    /// The item count changed. Recomputes the page range and clamps the
    /// current page into it. Returns whether the page had to be clamped.
    pub fn on_content_change(&mut self, item_count: usize, now: Instant) -> bool {
        if item_count == self.item_count {
            return false;
        }
        self.item_count = item_count;
        let clamped = self.clamp_page();
        if clamped {
            debug!(
                item_count,
                page = self.page,
                "carousel page clamped after content change"
            );
        }
        self.drag = None;
        self.retarget(now);
        clamped
    }

    /// Start following the pointer. Cancels any running tween and pins the
    /// content at its live offset so it sticks to the finger.
    pub fn begin_drag(&mut self, x: f32) {
        self.animator.cancel();
        self.drag = Some(DragGesture::begin(x, self.offset));
    }

    /// Pointer moved while pressed. Overshoot past either end is damped by
    /// the elastic resistance.
    pub fn drag_to(&mut self, x: f32) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.move_to(x);
        let raw = drag.raw_offset();
        self.offset = metrics::elastic_offset(
            raw,
            self.min_offset(),
            self.config.elastic_resistance,
        );
    }

    /// Pointer released. Returns `None` when no drag was in progress.
    pub fn end_drag(&mut self, now: Instant) -> Option<DragOutcome> {
        let drag = self.drag.take()?;
        Some(self.reconcile_drag(drag.delta(), now))
    }

    /// Drop an in-progress drag without paging (pointer left the viewport).
    pub fn cancel_drag(&mut self, now: Instant) {
        if self.drag.take().is_some() {
            self.retarget(now);
        }
    }

    /// Advance the running tween. Returns whether the offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.animator.tick(now) {
            Some(next) => {
                let moved = (next - self.offset).abs() > f32::EPSILON;
                self.offset = next;
                moved
            }
            None => false,
        }
    }

    fn clamp_page(&mut self) -> bool {
        let last = self.total_pages() - 1;
        if self.page > last {
            self.page = last;
            true
        } else {
            false
        }
    }

    /// Head for the current page's resting offset. Starting a new tween
    /// overrides any running one from the live offset.
    fn retarget(&mut self, now: Instant) {
        let target = self.resting_offset();
        if !self.can_animate() || (self.offset - target).abs() <= REST_EPSILON {
            self.animator.cancel();
            self.offset = target;
            return;
        }
        self.animator.start(
            self.offset,
            target,
            now,
            self.config.animation,
            self.config.easing,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn engine(items: usize) -> CarouselEngine {
        let mut engine = CarouselEngine::new(CarouselConfig::new(3, 24.0), items);
        // 76px items + 24px gap = 100px step
        engine.measure_step(Some(76.0));
        engine
    }

    fn settle(engine: &mut CarouselEngine, now: Instant) -> Instant {
        let done = now + engine.config().animation;
        engine.tick(done);
        done
    }

    #[test]
    fn measure_step_adds_gap() {
        let engine = engine(7);
        assert_eq!(engine.step(), 100.0);
        assert_eq!(engine.viewport_width(), 300.0);
    }

    #[test]
    fn unmeasured_engine_pages_without_animating() {
        let now = Instant::now();
        let mut engine = CarouselEngine::new(CarouselConfig::default(), 7);
        assert!(!engine.can_animate());
        assert_eq!(engine.advance(Direction::Next, now), 1);
        assert!(!engine.is_animating());
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn zero_width_measurement_disables_animation() {
        let mut engine = engine(7);
        assert!(engine.measure_step(Some(0.0)));
        assert_eq!(engine.step(), 0.0);
        assert!(!engine.measure_step(None));
    }

    #[test]
    fn advance_animates_toward_resting_offset() {
        let now = Instant::now();
        let mut engine = engine(7);
        engine.advance(Direction::Next, now);
        assert!(engine.is_animating());
        assert!(engine.tick(now + Duration::from_millis(100)));
        assert!(engine.offset() < 0.0 && engine.offset() > -300.0);
        settle(&mut engine, now);
        assert_eq!(engine.offset(), -300.0);
        assert!(!engine.is_animating());
    }

    #[test]
    fn advance_mid_tween_retargets_from_live_offset() {
        let now = Instant::now();
        let mut engine = engine(7);
        engine.advance(Direction::Next, now);
        let later = now + Duration::from_millis(150);
        engine.tick(later);
        let live = engine.offset();
        engine.advance(Direction::Next, later);
        // No jump when the second tween starts
        assert_eq!(engine.offset(), live);
        settle(&mut engine, later);
        assert_eq!(engine.offset(), -400.0);
    }

    #[test]
    fn resize_snaps_without_animating() {
        let now = Instant::now();
        let mut engine = engine(7);
        engine.advance(Direction::Next, now);
        settle(&mut engine, now);
        assert!(engine.measure_step(Some(176.0)));
        assert!(!engine.is_animating());
        assert_eq!(engine.offset(), -600.0);
    }

    #[test]
    fn drag_follows_pointer_and_resists_overshoot() {
        let mut engine = engine(7);
        engine.begin_drag(150.0);
        engine.drag_to(110.0);
        assert_eq!(engine.offset(), -40.0);
        // Pulling right from the first page overshoots the 0 bound
        engine.drag_to(250.0);
        assert!(engine.offset() > 0.0);
        assert!(engine.offset() < 100.0);
    }

    #[test]
    fn drag_begun_mid_tween_moves_from_the_live_offset() {
        let now = Instant::now();
        let mut engine = engine(7);
        engine.advance(Direction::Next, now);
        engine.tick(now + Duration::from_millis(60));
        let live = engine.offset();
        assert!(live < 0.0 && live > -300.0);

        engine.begin_drag(500.0);
        assert!(!engine.is_animating());
        assert_eq!(engine.offset(), live);
        engine.drag_to(499.0);
        assert!((engine.offset() - (live - 1.0)).abs() < 1e-3);
    }

    #[test]
    fn end_drag_without_press_is_ignored() {
        let mut engine = engine(7);
        assert_eq!(engine.end_drag(Instant::now()), None);
    }

    #[test]
    fn cancel_drag_springs_back() {
        let now = Instant::now();
        let mut engine = engine(7);
        engine.begin_drag(150.0);
        engine.drag_to(60.0);
        engine.cancel_drag(now);
        assert_eq!(engine.page(), 0);
        settle(&mut engine, now);
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn go_to_clamps_into_range() {
        let now = Instant::now();
        let mut engine = engine(7);
        assert_eq!(engine.go_to(9, now), 2);
    }

    #[test]
    fn drag_on_unmeasured_engine_springs_back() {
        let now = Instant::now();
        let mut engine = CarouselEngine::new(CarouselConfig::default(), 7);
        assert_eq!(engine.reconcile_drag(-500.0, now), DragOutcome::SprungBack);
        assert_eq!(engine.page(), 0);
    }
}
