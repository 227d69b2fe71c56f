//! Landing page destination carousel
//!
//! Wraps a [`CarouselEngine`] with the bits only the iced layer knows about:
//! the scrollable that renders the strip, the current viewport width and
//! the last pointer position (mouse areas report presses without one).

pub mod messages;
pub mod update;
pub mod view;

use std::ops::Range;
use std::time::Instant;

use iced::widget::Id;
use wayfare_core::{CarouselConfig, CarouselEngine};
use wayfare_model::Destination;

use crate::infra::constants::carousel::{item_width, viewport_width};

#[derive(Debug)]
pub struct CarouselDomain {
    pub engine: CarouselEngine,
    pub destinations: Vec<Destination>,
    pub viewport_id: Id,
    viewport_width: f32,
    pointer_x: f32,
}

impl CarouselDomain {
    pub fn new(config: CarouselConfig, destinations: Vec<Destination>) -> Self {
        Self {
            engine: CarouselEngine::new(config, destinations.len()),
            destinations,
            viewport_id: Id::unique(),
            viewport_width: 0.0,
            pointer_x: 0.0,
        }
    }

    /// Re-derive the card width from the window width and hand it to the
    /// engine. Returns whether the step changed.
    pub fn observe_window(&mut self, window_width: f32) -> bool {
        self.viewport_width = viewport_width(window_width);
        let observed = item_width(
            self.viewport_width,
            self.engine.visible_count(),
            self.engine.config().gap,
        );
        self.engine.measure_step(observed)
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Rendered card width, zero until the first measurement.
    pub fn card_width(&self) -> f32 {
        (self.engine.step() - self.engine.config().gap).max(0.0)
    }

    pub fn pointer_x(&self) -> f32 {
        self.pointer_x
    }

    pub(crate) fn set_pointer_x(&mut self, x: f32) {
        self.pointer_x = x;
    }

    /// Swap the destination list, keeping the page in range.
    pub fn set_destinations(
        &mut self,
        destinations: Vec<Destination>,
        now: Instant,
    ) -> bool {
        let count = destinations.len();
        self.destinations = destinations;
        self.engine.on_content_change(count, now)
    }
}

/// Where the strip sits inside the scrollable for the engine's offset.
///
/// Only cards in `window` are built. `lead` and `trail` pad the strip for
/// the skipped cards plus any elastic overshoot past either end, which
/// keeps `scroll_x` inside the scrollable's range while the content sits
/// outside `[min_offset, 0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct StripLayout {
    pub window: Range<usize>,
    pub lead: f32,
    pub trail: f32,
    pub scroll_x: f32,
}

pub fn strip_layout(engine: &CarouselEngine) -> StripLayout {
    let window = engine.visible_range();
    let step = engine.step();
    let offset = engine.offset();

    let skipped_before = window.start as f32 * step;
    let skipped_after =
        engine.item_count().saturating_sub(window.end) as f32 * step;
    let overshoot_start = offset.max(0.0);
    let overshoot_end = (engine.min_offset() - offset).max(0.0);

    StripLayout {
        window,
        lead: skipped_before + overshoot_start,
        trail: skipped_after + overshoot_end,
        scroll_x: (-offset).max(0.0),
    }
}
