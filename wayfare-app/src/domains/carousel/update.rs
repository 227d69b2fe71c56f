use std::time::Instant;

use iced::Task;
use iced::widget::operation::scroll_to;
use iced::widget::scrollable::AbsoluteOffset;
use wayfare_core::{Direction, DragOutcome};

use super::{CarouselDomain, strip_layout};
use super::messages::CarouselMessage;
use crate::common::messages::Message;

pub fn update(
    domain: &mut CarouselDomain,
    message: CarouselMessage,
) -> Task<Message> {
    let now = Instant::now();
    match message {
        CarouselMessage::Next => {
            domain.engine.advance(Direction::Next, now);
        }
        CarouselMessage::Prev => {
            domain.engine.advance(Direction::Prev, now);
        }
        CarouselMessage::GoTo(page) => {
            domain.engine.go_to(page, now);
        }
        CarouselMessage::PointerMoved(x) => {
            domain.set_pointer_x(x);
            if !domain.engine.is_dragging() {
                return Task::none();
            }
            domain.engine.drag_to(x);
        }
        CarouselMessage::PointerPressed => {
            domain.engine.begin_drag(domain.pointer_x());
        }
        CarouselMessage::PointerReleased => {
            match domain.engine.end_drag(now) {
                Some(DragOutcome::Advanced(direction)) => log::debug!(
                    "drag paged {:?} to {}",
                    direction,
                    domain.engine.page()
                ),
                Some(DragOutcome::SprungBack) => {
                    log::trace!("drag sprang back")
                }
                None => return Task::none(),
            }
        }
        CarouselMessage::PointerLeft => {
            domain.engine.cancel_drag(now);
        }
        CarouselMessage::Scrolled => {}
        CarouselMessage::Frame(at) => {
            if !domain.engine.tick(at) {
                return Task::none();
            }
        }
    }
    sync_viewport(domain)
}

/// Scroll the strip so it shows the engine's current offset. Overshoot
/// past either end is carried by the strip padding, see [`strip_layout`].
pub fn sync_viewport(domain: &CarouselDomain) -> Task<Message> {
    scroll_to(
        domain.viewport_id.clone(),
        AbsoluteOffset {
            x: strip_layout(&domain.engine).scroll_x,
            y: 0.0,
        },
    )
}
