//! AppStore: session lifecycle and notifications behind defined update
//! functions.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;
use wayfare_model::{Author, Notification, NotificationId, NotificationKind};

use super::{
    notifications::NotificationCenter,
    observable::{Subscribers, SubscriptionId},
};

/// A signed-in author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Who is signed in.
    pub author: Author,
    /// When the session began.
    pub started_at: DateTime<Utc>,
}

/// Everything the store owns.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Active session, `None` when signed out.
    pub session: Option<Session>,
    /// Toasts scoped to the running app; cleared on sign-out.
    pub notifications: NotificationCenter,
}

/// Change published after every store mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// Someone signed in.
    SessionStarted(Author),
    /// The session ended; toasts were cleared with it.
    SessionEnded(Author),
    /// A toast was queued.
    NotificationAdded(Notification),
    /// The oldest toast made room for a new one.
    NotificationEvicted(NotificationId),
    /// The user closed a toast.
    NotificationDismissed(NotificationId),
    /// Toasts past their TTL were dropped.
    NotificationsExpired(Vec<NotificationId>),
    /// This many toasts went from unread to read.
    NotificationsRead(usize),
}

/// Application store: explicit state plus change listeners.
#[derive(Debug, Default)]
pub struct AppStore {
    state: AppState,
    subscribers: Subscribers<StoreEvent>,
}

impl AppStore {
    /// Fresh store at application start: no session, empty notifications.
    pub fn new(notification_capacity: usize, notification_ttl: Duration) -> Self {
        Self {
            state: AppState {
                session: None,
                notifications: NotificationCenter::new(
                    notification_capacity,
                    notification_ttl,
                ),
            },
            subscribers: Subscribers::default(),
        }
    }

    /// Snapshot of everything the store owns.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Active session, if signed in.
    pub fn session(&self) -> Option<&Session> {
        self.state.session.as_ref()
    }

    /// Author of the active session.
    pub fn current_author(&self) -> Option<&Author> {
        self.state.session.as_ref().map(|s| &s.author)
    }

    /// Whether a session is active.
    pub fn is_signed_in(&self) -> bool {
        self.state.session.is_some()
    }

    /// Notification center, for rendering.
    pub fn notifications(&self) -> &NotificationCenter {
        &self.state.notifications
    }

    /// Register a listener for every [`StoreEvent`].
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Start a session. An existing session is ended first.
    pub fn sign_in(&mut self, author: Author) {
        self.sign_out();
        debug!(handle = %author.handle, "session started");
        self.state.session = Some(Session {
            author: author.clone(),
            started_at: Utc::now(),
        });
        self.subscribers.publish(&StoreEvent::SessionStarted(author));
    }

    /// Tear down the session and everything scoped to it. Returns the ended
    /// session, if there was one.
    pub fn sign_out(&mut self) -> Option<Session> {
        let session = self.state.session.take()?;
        self.state.notifications.clear();
        debug!(handle = %session.author.handle, "session ended");
        self.subscribers
            .publish(&StoreEvent::SessionEnded(session.author.clone()));
        Some(session)
    }

    /// Queue a toast stamped with the current time.
    pub fn notify(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> NotificationId {
        self.notify_at(kind, message, Utc::now())
    }

    /// Queue a toast stamped `now`, evicting the oldest when full.
    pub fn notify_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> NotificationId {
        let notification = Notification::at(kind, message, now);
        let id = notification.id;
        if let Some(evicted) = self.state.notifications.push(notification.clone()) {
            self.subscribers
                .publish(&StoreEvent::NotificationEvicted(evicted.id));
        }
        self.subscribers
            .publish(&StoreEvent::NotificationAdded(notification));
        id
    }

    /// Close one toast. Returns whether it was present.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.state.notifications.dismiss(id).is_none() {
            return false;
        }
        self.subscribers
            .publish(&StoreEvent::NotificationDismissed(id));
        true
    }

    /// Mark every toast read. Returns how many changed; publishes only
    /// when that is non-zero.
    pub fn mark_all_read(&mut self) -> usize {
        let changed = self.state.notifications.mark_all_read();
        if changed > 0 {
            self.subscribers
                .publish(&StoreEvent::NotificationsRead(changed));
        }
        changed
    }

    /// Drop stale notifications. Publishes only when something expired.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let expired = self.state.notifications.expire(now);
        let count = expired.len();
        if count > 0 {
            self.subscribers
                .publish(&StoreEvent::NotificationsExpired(expired));
        }
        count
    }
}
