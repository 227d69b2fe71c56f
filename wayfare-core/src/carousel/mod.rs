//! Carousel paging engine
//!
//! A horizontally paged window over a sequence of equally sized items. The
//! engine owns the page index, the measured step and the animated offset;
//! the view layer reports measurements, button presses, pointer positions
//! and frame timestamps, then renders `offset()` and `visible_range()`.
//!
//! Pure geometry lives in [`metrics`], the tween in [`animator`], pointer
//! tracking in [`drag`], and [`engine`] ties them together.

pub mod animator;
pub mod drag;
pub mod engine;
pub mod metrics;
pub mod types;

pub use animator::OffsetAnimator;
pub use drag::DragGesture;
pub use engine::CarouselEngine;
pub use types::{CarouselConfig, Direction, DragOutcome, Easing};
