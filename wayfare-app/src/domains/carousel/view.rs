//! Carousel view: a clipped horizontal strip between previous/next
//! buttons, with one dot per page underneath. Only the cards the engine
//! reports as visible are built; padding stands in for the rest.

use iced::widget::{
    Row, button, column, container, mouse_area, row, scrollable, text,
};
use iced::{Alignment, Element, Length, Padding};
use wayfare_model::Destination;

use super::{CarouselDomain, strip_layout};
use super::messages::CarouselMessage;
use crate::common::messages::Message;
use crate::infra::constants::layout::{
    CARD_HEIGHT, CARD_PADDING, NAV_BUTTON_WIDTH, NAV_SPACING,
};

pub fn view(domain: &CarouselDomain) -> Element<'_, Message> {
    let engine = &domain.engine;
    let card_width = domain.card_width();
    let layout = strip_layout(engine);

    let cards: Vec<Element<'_, Message>> = domain
        .destinations
        .get(layout.window.clone())
        .unwrap_or_default()
        .iter()
        .map(|destination| destination_card(destination, card_width))
        .collect();
    let strip = Row::with_children(cards)
        .spacing(engine.config().gap)
        .padding(Padding {
            top: 0.0,
            right: layout.trail,
            bottom: 0.0,
            left: layout.lead,
        })
        .height(Length::Fill);

    let viewport = scrollable(strip)
        .id(domain.viewport_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(|_| CarouselMessage::Scrolled.into())
        .width(Length::Fixed(domain.viewport_width()))
        .height(Length::Fixed(CARD_HEIGHT));

    let draggable = mouse_area(viewport)
        .on_move(|point| CarouselMessage::PointerMoved(point.x).into())
        .on_press(CarouselMessage::PointerPressed.into())
        .on_release(CarouselMessage::PointerReleased.into())
        .on_exit(CarouselMessage::PointerLeft.into());

    let controls = row![
        nav_button("‹", CarouselMessage::Prev),
        draggable,
        nav_button("›", CarouselMessage::Next),
    ]
    .spacing(NAV_SPACING)
    .align_y(Alignment::Center);

    column![controls, page_dots(domain)]
        .spacing(12)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn nav_button<'a>(
    label: &'a str,
    message: CarouselMessage,
) -> Element<'a, Message> {
    button(text(label).size(24).center())
        .on_press(message.into())
        .width(Length::Fixed(NAV_BUTTON_WIDTH))
        .style(button::secondary)
        .into()
}

fn page_dots(domain: &CarouselDomain) -> Element<'_, Message> {
    let current = domain.engine.page();
    let dots: Vec<Element<'_, Message>> = (0..domain.engine.total_pages())
        .map(|page| {
            let glyph = if page == current { "●" } else { "○" };
            button(text(glyph).size(12))
                .on_press(CarouselMessage::GoTo(page).into())
                .padding(4)
                .style(button::text)
                .into()
        })
        .collect();
    Row::with_children(dots).spacing(4).into()
}

fn destination_card(
    destination: &Destination,
    width: f32,
) -> Element<'_, Message> {
    let body = column![
        text(&destination.name).size(22),
        text(&destination.country).size(14),
        text(&destination.blurb).size(14),
    ]
    .spacing(8);

    container(body)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .padding(CARD_PADDING)
        .style(container::rounded_box)
        .into()
}
