//! Root-level subscription composition

use std::time::Duration;

use iced::event::{self, Event};
use iced::keyboard::{self, Key, key::Named};
use iced::{Subscription, window};

use crate::common::messages::{KeyAction, Message};
use crate::domains::carousel::messages::CarouselMessage;
use crate::domains::notifications::messages::NotificationMessage;
use crate::state::State;

const NOTIFICATION_SWEEP: Duration = Duration::from_secs(1);

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        window::resize_events().map(|(_, size)| Message::WindowResized(size)),
        event::listen_with(arrow_keys),
    ];

    // Frames are only requested while a tween is running.
    if state.carousel.engine.is_animating() {
        subscriptions.push(
            window::frames()
                .map(|at| Message::Carousel(CarouselMessage::Frame(at))),
        );
    }

    if !state.store.notifications().is_empty() {
        subscriptions.push(
            iced::time::every(NOTIFICATION_SWEEP)
                .map(|at| Message::Notifications(NotificationMessage::Tick(at))),
        );
    }

    Subscription::batch(subscriptions)
}

fn arrow_keys(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    // Focused text inputs keep their own cursor keys.
    if status == event::Status::Captured {
        return None;
    }
    let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };
    let action = match key {
        Key::Named(Named::ArrowLeft) => KeyAction::Left,
        Key::Named(Named::ArrowRight) => KeyAction::Right,
        Key::Named(Named::ArrowUp) => KeyAction::Up,
        Key::Named(Named::ArrowDown) => KeyAction::Down,
        _ => return None,
    };
    Some(Message::Key(action))
}
