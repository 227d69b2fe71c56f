use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use wayfare_core::store::{AppStore, StoreEvent};
use wayfare_model::{Author, NotificationKind};

fn recorder(store: &mut AppStore) -> Rc<RefCell<Vec<StoreEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

#[test]
fn store_starts_without_session() {
    let store = AppStore::new(5, Duration::from_secs(5));
    assert!(!store.is_signed_in());
    assert!(store.notifications().is_empty());
}

#[test]
fn sign_in_then_out_publishes_lifecycle_events() {
    let mut store = AppStore::new(5, Duration::from_secs(5));
    let events = recorder(&mut store);
    let author = Author::new("Ana", "ana");

    store.sign_in(author.clone());
    store.notify(NotificationKind::Success, "Welcome back");
    assert_eq!(store.current_author(), Some(&author));

    let ended = store.sign_out().expect("session");
    assert_eq!(ended.author, author);
    assert!(store.notifications().is_empty());
    assert!(store.sign_out().is_none());

    let events = events.borrow();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], StoreEvent::SessionStarted(author.clone()));
    assert!(matches!(events[1], StoreEvent::NotificationAdded(_)));
    assert_eq!(events[2], StoreEvent::SessionEnded(author));
}

#[test]
fn signing_in_again_ends_previous_session() {
    let mut store = AppStore::new(5, Duration::from_secs(5));
    let events = recorder(&mut store);
    store.sign_in(Author::new("Ana", "ana"));
    store.sign_in(Author::new("Bo", "bo"));

    let kinds: Vec<_> = events
        .borrow()
        .iter()
        .map(|e| match e {
            StoreEvent::SessionStarted(a) => format!("start:{}", a.handle),
            StoreEvent::SessionEnded(a) => format!("end:{}", a.handle),
            other => format!("{other:?}"),
        })
        .collect();
    assert_eq!(kinds, vec!["start:ana", "end:ana", "start:bo"]);
}

#[test]
fn notifications_work_without_a_session() {
    let mut store = AppStore::new(2, Duration::from_secs(5));
    let events = recorder(&mut store);
    let first = store.notify(NotificationKind::Info, "one");
    store.notify(NotificationKind::Info, "two");
    store.notify(NotificationKind::Info, "three");

    assert_eq!(store.notifications().len(), 2);
    assert!(
        events
            .borrow()
            .contains(&StoreEvent::NotificationEvicted(first))
    );
}

#[test]
fn dismiss_and_expire_publish_only_on_change() {
    let mut store = AppStore::new(5, Duration::from_secs(5));
    let now = Utc::now();
    let old = store.notify_at(
        NotificationKind::Warning,
        "stale",
        now - TimeDelta::seconds(10),
    );
    let fresh = store.notify_at(NotificationKind::Info, "fresh", now);
    let events = recorder(&mut store);

    assert_eq!(store.expire(now), 1);
    assert_eq!(store.expire(now), 0);
    assert!(store.dismiss(fresh));
    assert!(!store.dismiss(old));

    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::NotificationsExpired(vec![old]),
            StoreEvent::NotificationDismissed(fresh),
        ]
    );
}

#[test]
fn unsubscribed_listener_is_silent() {
    let mut store = AppStore::new(5, Duration::from_secs(5));
    let events = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&events);
    let id = store.subscribe(move |_| *sink.borrow_mut() += 1);
    store.notify(NotificationKind::Info, "a");
    assert!(store.unsubscribe(id));
    store.notify(NotificationKind::Info, "b");
    assert_eq!(*events.borrow(), 1);
}
