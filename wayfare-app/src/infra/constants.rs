//! Layout constants shared by views and the carousel measurement.

pub mod layout {
    pub const PAGE_PADDING: f32 = 32.0;
    pub const SECTION_SPACING: f32 = 28.0;

    /// Width reserved for each previous/next button beside the carousel.
    pub const NAV_BUTTON_WIDTH: f32 = 44.0;
    pub const NAV_SPACING: f32 = 12.0;
    pub const CAROUSEL_MAX_WIDTH: f32 = 1200.0;
    pub const CARD_HEIGHT: f32 = 220.0;
    pub const CARD_PADDING: f32 = 16.0;

    pub const PLAN_CARD_WIDTH: f32 = 260.0;
    pub const FEED_MAX_WIDTH: f32 = 720.0;
}

pub mod carousel {
    use super::layout::{
        CAROUSEL_MAX_WIDTH, NAV_BUTTON_WIDTH, NAV_SPACING, PAGE_PADDING,
    };

    /// Width of the clipped carousel viewport for a given window width.
    pub fn viewport_width(window_width: f32) -> f32 {
        let chrome =
            2.0 * PAGE_PADDING + 2.0 * NAV_BUTTON_WIDTH + 2.0 * NAV_SPACING;
        (window_width - chrome).clamp(0.0, CAROUSEL_MAX_WIDTH)
    }

    /// Width each card takes so that `visible_count` cards and the gaps
    /// between them fill the viewport exactly. `None` while the viewport
    /// has no usable width.
    pub fn item_width(
        viewport_width: f32,
        visible_count: usize,
        gap: f32,
    ) -> Option<f32> {
        let visible = visible_count.max(1) as f32;
        let width = (viewport_width - gap * (visible - 1.0)) / visible;
        (width.is_finite() && width > 0.0).then_some(width)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn cards_and_gaps_fill_the_viewport() {
            let viewport = 900.0;
            let width = item_width(viewport, 3, 24.0).unwrap();
            assert!((width * 3.0 + 24.0 * 2.0 - viewport).abs() < 1e-3);
        }

        #[test]
        fn narrow_window_has_no_item_width() {
            assert_eq!(viewport_width(100.0), 0.0);
            assert_eq!(item_width(0.0, 3, 24.0), None);
        }

        #[test]
        fn wide_window_is_capped() {
            assert_eq!(viewport_width(10_000.0), CAROUSEL_MAX_WIDTH);
        }
    }
}
