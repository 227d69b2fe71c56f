//! Root update: routes domain messages and handles window-level events.

use iced::Task;
use wayfare_core::search::Highlight;

use crate::common::messages::{KeyAction, Message};
use crate::domains::carousel::messages::CarouselMessage;
use crate::domains::search::messages::SearchMessage;
use crate::domains::{carousel, compose, feed, notifications, search};
use crate::infra::seed;
use crate::state::{Page, State};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update: {}", message.name());

    match message {
        Message::ShowPage(page) => {
            state.page = page;
            Task::none()
        }
        Message::WindowResized(size) => {
            if state.resize(size) {
                carousel::update::sync_viewport(&state.carousel)
            } else {
                Task::none()
            }
        }
        Message::Key(action) => handle_key(state, action),
        Message::SignIn => {
            state.store.sign_in(seed::demo_author());
            Task::none()
        }
        Message::SignOut => {
            state.store.sign_out();
            Task::none()
        }
        Message::Carousel(msg) => {
            carousel::update::update(&mut state.carousel, msg)
        }
        Message::Feed(msg) => {
            feed::update::update(&mut state.feed, &mut state.store, msg)
        }
        Message::Search(msg) => {
            search::update::update(&mut state.search, &mut state.store, msg)
        }
        Message::Compose(msg) => compose::update::update(state, msg),
        Message::Notifications(msg) => {
            notifications::update::update(&mut state.store, msg)
        }
    }
}

/// Arrow keys page the carousel on the landing page and walk the tag
/// dropdown on the community page.
fn handle_key(state: &mut State, action: KeyAction) -> Task<Message> {
    match (state.page, action) {
        (Page::Landing, KeyAction::Left) => {
            carousel::update::update(&mut state.carousel, CarouselMessage::Prev)
        }
        (Page::Landing, KeyAction::Right) => {
            carousel::update::update(&mut state.carousel, CarouselMessage::Next)
        }
        (Page::Community, KeyAction::Up) => search::update::update(
            &mut state.search,
            &mut state.store,
            SearchMessage::MoveHighlight(Highlight::Up),
        ),
        (Page::Community, KeyAction::Down) => search::update::update(
            &mut state.search,
            &mut state.store,
            SearchMessage::MoveHighlight(Highlight::Down),
        ),
        _ => Task::none(),
    }
}

