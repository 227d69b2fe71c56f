use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::ComposeDomain;
use super::messages::ComposeMessage;
use crate::common::messages::Message;

pub fn view(domain: &ComposeDomain, signed_in: bool) -> Element<'_, Message> {
    let session = &domain.session;
    let draft = domain.draft();
    let placeholder = if signed_in {
        "Share a tip from the road…"
    } else {
        "Sign in to share a post"
    };

    let mut input = text_input(placeholder, &draft)
        .on_submit(ComposeMessage::Publish.into())
        .padding(10)
        .width(Length::Fill);
    if signed_in && session.is_ready() {
        input =
            input.on_input(|text| ComposeMessage::Edited(text).into());
    }

    let counter = text(format!(
        "{}/{}",
        session.char_count(),
        session.max_chars()
    ))
    .size(12);

    let publish = button(text("Post").size(14)).on_press_maybe(
        (signed_in && !draft.trim().is_empty())
            .then_some(ComposeMessage::Publish.into()),
    );

    column![
        input,
        row![counter, publish].spacing(12).align_y(Alignment::Center),
    ]
    .spacing(6)
    .into()
}
