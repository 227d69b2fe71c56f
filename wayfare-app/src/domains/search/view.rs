use iced::widget::{Column, Row, button, column, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::SearchDomain;
use super::messages::SearchMessage;
use crate::common::messages::Message;

pub fn view(domain: &SearchDomain) -> Element<'_, Message> {
    let input = &domain.input;

    let chips: Vec<Element<'_, Message>> = input
        .selected()
        .iter()
        .map(|tag| {
            button(text(format!("{tag}  ×")).size(13))
                .on_press(SearchMessage::Remove(tag.clone()).into())
                .padding([4, 10])
                .style(button::secondary)
                .into()
        })
        .collect();

    let field = text_input("Search tags, e.g. #hiking", input.query())
        .on_input(|query| SearchMessage::QueryChanged(query).into())
        .on_submit(SearchMessage::Accept.into())
        .padding(8)
        .width(Length::Fill);

    let clear = button(text("Clear").size(13))
        .on_press_maybe(
            (!input.selected().is_empty() || !input.query().is_empty())
                .then_some(SearchMessage::Clear.into()),
        )
        .style(button::text);

    let mut content = column![
        row![Row::with_children(chips).spacing(6), field, clear]
            .spacing(8)
            .align_y(Alignment::Center),
    ]
    .spacing(4);

    if !input.suggestions().is_empty() {
        let highlighted = input.highlighted();
        let options: Vec<Element<'_, Message>> = input
            .suggestions()
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                let style = if highlighted == Some(i) {
                    button::primary
                } else {
                    button::text
                };
                button(text(tag.to_string()).size(14))
                    .on_press(SearchMessage::Choose(tag.clone()).into())
                    .width(Length::Fill)
                    .style(style)
                    .into()
            })
            .collect();
        content = content.push(Column::with_children(options).spacing(2));
    }

    content.into()
}
