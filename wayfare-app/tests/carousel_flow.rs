//! Drives the landing page carousel through the root `update`.

use std::time::{Duration, Instant};

use iced::Size;
use wayfare_app::app::AppConfig;
use wayfare_app::common::messages::{KeyAction, Message};
use wayfare_app::domains::carousel::messages::CarouselMessage;
use wayfare_app::state::State;
use wayfare_app::update::update;

fn state() -> State {
    State::new(&AppConfig::default())
}

fn send(state: &mut State, message: CarouselMessage) {
    let _ = update(state, Message::Carousel(message));
}

fn settle(state: &mut State) {
    send(
        state,
        CarouselMessage::Frame(Instant::now() + Duration::from_secs(5)),
    );
}

#[test]
fn boots_measured_with_three_pages_of_destinations() {
    let state = state();
    let engine = &state.carousel.engine;
    assert_eq!(engine.item_count(), 7);
    assert_eq!(engine.total_pages(), 3);
    assert_eq!(engine.page(), 0);
    assert!(engine.step() > 0.0);
    assert_eq!(engine.offset(), 0.0);
}

#[test]
fn next_wraps_after_the_last_page() {
    let mut state = state();
    for _ in 0..3 {
        send(&mut state, CarouselMessage::Next);
    }
    assert_eq!(state.carousel.engine.page(), 0);

    send(&mut state, CarouselMessage::Prev);
    assert_eq!(state.carousel.engine.page(), 2);
}

#[test]
fn frames_carry_the_offset_to_rest() {
    let mut state = state();
    send(&mut state, CarouselMessage::Next);
    assert!(state.carousel.engine.is_animating());

    settle(&mut state);
    let engine = &state.carousel.engine;
    assert!(!engine.is_animating());
    assert!((engine.offset() - engine.resting_offset()).abs() < 0.01);
    assert!(engine.offset() < 0.0);
}

#[test]
fn page_dots_jump_and_clamp() {
    let mut state = state();
    send(&mut state, CarouselMessage::GoTo(2));
    assert_eq!(state.carousel.engine.page(), 2);
    send(&mut state, CarouselMessage::GoTo(42));
    assert_eq!(state.carousel.engine.page(), 2);
}

#[test]
fn long_drag_pages_once_short_drag_springs_back() {
    let mut state = state();
    let step = state.carousel.engine.step();

    send(&mut state, CarouselMessage::PointerMoved(600.0));
    send(&mut state, CarouselMessage::PointerPressed);
    send(&mut state, CarouselMessage::PointerMoved(600.0 - step * 0.1));
    send(&mut state, CarouselMessage::PointerReleased);
    assert_eq!(state.carousel.engine.page(), 0);

    send(&mut state, CarouselMessage::PointerPressed);
    send(&mut state, CarouselMessage::PointerMoved(600.0 - step * 0.9));
    assert!(state.carousel.engine.is_dragging());
    send(&mut state, CarouselMessage::PointerReleased);
    assert_eq!(state.carousel.engine.page(), 1);
    assert!(!state.carousel.engine.is_dragging());
}

#[test]
fn pointer_leaving_cancels_the_drag() {
    let mut state = state();
    send(&mut state, CarouselMessage::PointerMoved(600.0));
    send(&mut state, CarouselMessage::PointerPressed);
    send(&mut state, CarouselMessage::PointerMoved(100.0));
    send(&mut state, CarouselMessage::PointerLeft);
    assert!(!state.carousel.engine.is_dragging());
    assert_eq!(state.carousel.engine.page(), 0);

    // A release after leaving is not a second drag.
    send(&mut state, CarouselMessage::PointerReleased);
    assert_eq!(state.carousel.engine.page(), 0);
}

#[test]
fn resize_remeasures_and_snaps_to_rest() {
    let mut state = state();
    send(&mut state, CarouselMessage::Next);
    settle(&mut state);
    let before = state.carousel.engine.step();

    let _ = update(&mut state, Message::WindowResized(Size::new(900.0, 700.0)));
    let engine = &state.carousel.engine;
    assert!(engine.step() < before);
    assert_eq!(engine.page(), 1);
    assert!(!engine.is_animating());
    assert_eq!(engine.offset(), engine.resting_offset());
}

#[test]
fn window_too_narrow_pages_without_animating() {
    let mut state = state();
    let _ = update(&mut state, Message::WindowResized(Size::new(120.0, 400.0)));
    assert_eq!(state.carousel.engine.step(), 0.0);

    send(&mut state, CarouselMessage::Next);
    assert_eq!(state.carousel.engine.page(), 1);
    assert!(!state.carousel.engine.is_animating());
    assert_eq!(state.carousel.engine.offset(), 0.0);
}

#[test]
fn arrow_keys_page_only_on_the_landing_page() {
    let mut state = state();
    let _ = update(&mut state, Message::Key(KeyAction::Right));
    assert_eq!(state.carousel.engine.page(), 1);
    let _ = update(&mut state, Message::Key(KeyAction::Left));
    assert_eq!(state.carousel.engine.page(), 0);

    let _ = update(
        &mut state,
        Message::ShowPage(wayfare_app::state::Page::Community),
    );
    let _ = update(&mut state, Message::Key(KeyAction::Right));
    assert_eq!(state.carousel.engine.page(), 0);
}

#[test]
fn shrinking_the_destination_list_clamps_the_page() {
    let mut state = state();
    send(&mut state, CarouselMessage::GoTo(2));

    let fewer = state.carousel.destinations[..4].to_vec();
    let clamped = state.carousel.set_destinations(fewer, Instant::now());
    assert!(clamped);
    assert_eq!(state.carousel.engine.total_pages(), 2);
    assert_eq!(state.carousel.engine.page(), 1);
}
