use std::time::{Duration, Instant};

use wayfare_core::carousel::{
    CarouselConfig, CarouselEngine, Direction, DragOutcome, metrics,
};

/// 7 items, 3 visible, 100px step (76px card + 24px gap).
fn measured(items: usize) -> CarouselEngine {
    let mut engine = CarouselEngine::new(CarouselConfig::default(), items);
    engine.measure_step(Some(76.0));
    engine
}

fn finish(engine: &mut CarouselEngine, from: Instant) {
    engine.tick(from + engine.config().animation + Duration::from_millis(1));
}

#[test]
fn seven_items_three_visible_has_three_pages() {
    let engine = measured(7);
    assert_eq!(engine.total_pages(), 3);
}

#[test]
fn next_from_last_page_wraps_to_first() {
    let now = Instant::now();
    let mut engine = measured(7);
    engine.go_to(2, now);
    assert_eq!(engine.advance(Direction::Next, now), 0);
    finish(&mut engine, now);
    assert_eq!(engine.offset(), 0.0);
}

#[test]
fn prev_from_first_page_wraps_to_last() {
    let now = Instant::now();
    let mut engine = measured(7);
    assert_eq!(engine.advance(Direction::Prev, now), 2);
    finish(&mut engine, now);
    // Last page rests against the final item rather than a full window
    assert_eq!(engine.offset(), -400.0);
}

#[test]
fn single_page_carousel_stays_put() {
    let now = Instant::now();
    let mut engine = measured(2);
    assert_eq!(engine.total_pages(), 1);
    assert_eq!(engine.advance(Direction::Next, now), 0);
    assert_eq!(engine.advance(Direction::Prev, now), 0);
    assert!(!engine.is_animating());
}

#[test]
fn shrinking_content_clamps_page() {
    let now = Instant::now();
    let mut engine = measured(9);
    engine.go_to(2, now);
    assert!(engine.on_content_change(4, now));
    assert_eq!(engine.total_pages(), 2);
    assert_eq!(engine.page(), 1);
    finish(&mut engine, now);
    assert_eq!(engine.offset(), engine.resting_offset());
}

#[test]
fn growing_content_keeps_page() {
    let now = Instant::now();
    let mut engine = measured(7);
    engine.go_to(1, now);
    assert!(!engine.on_content_change(12, now));
    assert_eq!(engine.page(), 1);
}

#[test]
fn emptied_content_collapses_to_single_page() {
    let now = Instant::now();
    let mut engine = measured(7);
    engine.go_to(2, now);
    engine.on_content_change(0, now);
    assert_eq!(engine.total_pages(), 1);
    assert_eq!(engine.page(), 0);
    finish(&mut engine, now);
    assert_eq!(engine.offset(), 0.0);
}

#[test]
fn short_drag_springs_back_to_resting_offset() {
    let now = Instant::now();
    let mut engine = measured(7);
    engine.go_to(1, now);
    finish(&mut engine, now);

    engine.begin_drag(300.0);
    engine.drag_to(280.0);
    assert_eq!(engine.offset(), -320.0);
    assert_eq!(engine.end_drag(now), Some(DragOutcome::SprungBack));
    assert_eq!(engine.page(), 1);
    finish(&mut engine, now);
    assert_eq!(engine.offset(), -300.0);
}

#[test]
fn drag_exactly_on_threshold_springs_back() {
    let now = Instant::now();
    let mut engine = measured(7);
    assert_eq!(engine.reconcile_drag(-25.0, now), DragOutcome::SprungBack);
    assert_eq!(engine.page(), 0);
}

#[test]
fn long_leftward_drag_advances_exactly_once() {
    let now = Instant::now();
    let mut engine = measured(7);
    // A drag spanning several steps still moves a single page
    assert_eq!(
        engine.reconcile_drag(-260.0, now),
        DragOutcome::Advanced(Direction::Next)
    );
    assert_eq!(engine.page(), 1);
}

#[test]
fn rightward_drag_goes_back_and_wraps() {
    let now = Instant::now();
    let mut engine = measured(7);
    assert_eq!(
        engine.reconcile_drag(40.0, now),
        DragOutcome::Advanced(Direction::Prev)
    );
    assert_eq!(engine.page(), 2);
}

#[test]
fn full_gesture_through_pointer_events() {
    let now = Instant::now();
    let mut engine = measured(7);
    engine.begin_drag(250.0);
    engine.drag_to(200.0);
    engine.drag_to(190.0);
    assert_eq!(
        engine.end_drag(now),
        Some(DragOutcome::Advanced(Direction::Next))
    );
    assert!(!engine.is_dragging());
    finish(&mut engine, now);
    assert_eq!(engine.offset(), -300.0);
}

#[test]
fn custom_threshold_fraction_is_honored() {
    let now = Instant::now();
    let config = CarouselConfig {
        drag_threshold_fraction: 0.5,
        ..CarouselConfig::default()
    };
    let mut engine = CarouselEngine::new(config, 7);
    engine.measure_step(Some(76.0));
    assert_eq!(engine.reconcile_drag(-40.0, now), DragOutcome::SprungBack);
    assert_eq!(
        engine.reconcile_drag(-60.0, now),
        DragOutcome::Advanced(Direction::Next)
    );
}

#[test]
fn offset_never_escapes_bounds_at_rest() {
    let now = Instant::now();
    for items in 0..15usize {
        let mut engine = measured(items);
        for _ in 0..(engine.total_pages() * 2) {
            engine.advance(Direction::Next, now);
            finish(&mut engine, now);
            let offset = engine.offset();
            assert!(offset <= 0.0, "items={items} offset={offset}");
            assert!(
                offset >= metrics::min_offset(engine.step(), items, 3),
                "items={items} offset={offset}"
            );
        }
    }
}

#[test]
fn visible_range_follows_the_page() {
    let now = Instant::now();
    let mut engine = measured(7);
    assert_eq!(engine.visible_range(), 0..3);
    engine.advance(Direction::Prev, now);
    finish(&mut engine, now);
    assert_eq!(engine.visible_range(), 4..7);
}
