//! Root view: header with the page toggle, the active page, and toasts
//! stacked over the bottom-right corner.

use iced::widget::{button, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::Message;
use crate::domains::{carousel, compose, feed, notifications, plans, search};
use crate::infra::constants::layout::{PAGE_PADDING, SECTION_SPACING};
use crate::state::{Page, State};

pub fn view(state: &State) -> Element<'_, Message> {
    let page = match state.page {
        Page::Landing => landing(state),
        Page::Community => community(state),
    };

    let content = column![
        header(state),
        scrollable(container(page).padding(PAGE_PADDING)).height(Length::Fill),
    ];

    let toasts = container(notifications::view::view(&state.store))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(20);

    stack![content, toasts].into()
}

fn header(state: &State) -> Element<'_, Message> {
    let tab = |label: &'static str, page: Page| {
        let style = if state.page == page {
            button::primary
        } else {
            button::secondary
        };
        button(text(label).size(15))
            .on_press(Message::ShowPage(page))
            .style(style)
    };

    let session: Element<'_, Message> = match state.store.current_author() {
        Some(author) => row![
            text(format!("@{}", author.handle)).size(14),
            button(text("Sign out").size(14))
                .on_press(Message::SignOut)
                .style(button::text),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into(),
        None => button(text("Sign in").size(14))
            .on_press(Message::SignIn)
            .into(),
    };

    container(
        row![
            text("Wayfare").size(24),
            tab("Explore", Page::Landing),
            tab("Community", Page::Community),
            container(session)
                .width(Length::Fill)
                .align_x(Alignment::End),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([12, 32])
    .into()
}

fn landing(state: &State) -> Element<'_, Message> {
    column![
        column![
            text("Where to next?").size(36),
            text("Browse featured destinations and keep your itinerary close.")
                .size(16),
        ]
        .spacing(6),
        carousel::view::view(&state.carousel),
        text("Your trips").size(24),
        plans::view::view(&state.plans),
    ]
    .spacing(SECTION_SPACING)
    .into()
}

fn community(state: &State) -> Element<'_, Message> {
    let filter = state.search.filter();
    column![
        compose::view::view(&state.compose, state.store.is_signed_in()),
        search::view::view(&state.search),
        feed::view::view(&state.feed, filter),
    ]
    .spacing(SECTION_SPACING)
    .max_width(760.0)
    .into()
}
