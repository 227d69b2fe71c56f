//! Shared types for the carousel module

use std::time::Duration;

/// Paging direction for buttons, keys and drag release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forward, wrapping to the first page after the last.
    Next,
    /// Backward, wrapping to the last page before the first.
    Prev,
}

/// What a released drag turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The delta crossed the threshold and the page changed once.
    Advanced(Direction),
    /// The delta stayed within the threshold; offset returns to rest.
    SprungBack,
}

/// Easing curve applied to offset tweens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Accelerates.
    EaseIn,
    /// Decelerates into the resting offset.
    #[default]
    EaseOut,
    /// Accelerates, then decelerates.
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve (quadratic).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Static configuration for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Items shown per page. Always at least 1.
    pub visible_count: usize,
    /// Pixels between adjacent items.
    pub gap: f32,
    /// Length of a page tween.
    pub animation: Duration,
    /// Curve of a page tween.
    pub easing: Easing,
    /// Fraction of one step a drag must exceed to change page.
    pub drag_threshold_fraction: f32,
    /// Scale applied to drag overshoot past either end, in `[0, 1]`.
    pub elastic_resistance: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_count: 3,
            gap: 24.0,
            animation: Duration::from_millis(300),
            easing: Easing::EaseOut,
            drag_threshold_fraction: 0.25,
            elastic_resistance: 0.35,
        }
    }
}

impl CarouselConfig {
    /// Default behaviour with a custom page size and gap.
    pub fn new(visible_count: usize, gap: f32) -> Self {
        Self {
            visible_count,
            gap,
            ..Self::default()
        }
        .sanitized()
    }

    /// Clamp fields into the ranges the engine relies on.
    pub fn sanitized(mut self) -> Self {
        self.visible_count = self.visible_count.max(1);
        self.gap = if self.gap.is_finite() {
            self.gap.max(0.0)
        } else {
            0.0
        };
        self.drag_threshold_fraction =
            if self.drag_threshold_fraction.is_finite() {
                self.drag_threshold_fraction.clamp(f32::EPSILON, 1.0)
            } else {
                0.25
            };
        self.elastic_resistance = if self.elastic_resistance.is_finite() {
            self.elastic_resistance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }
}
