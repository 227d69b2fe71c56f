//! Bounded toast queue with unread tracking and time-based expiry.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use wayfare_model::{Notification, NotificationId};

/// Oldest-first toast queue with a fixed capacity and TTL.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    items: VecDeque<Notification>,
    capacity: usize,
    ttl: TimeDelta,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(5))
    }
}

impl NotificationCenter {
    /// `capacity` is raised to at least one.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            capacity: capacity.max(1),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Toasts kept before the oldest is evicted.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Queue a notification, returning the oldest one if it was evicted to
    /// make room.
    pub fn push(&mut self, notification: Notification) -> Option<Notification> {
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(notification);
        evicted
    }

    /// Remove one toast by id.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Notification> {
        let position = self.items.iter().position(|n| n.id == id)?;
        self.items.remove(position)
    }

    /// Mark everything read. Returns how many toasts changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.items.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        changed
    }

    /// Toasts not yet marked read.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Drop notifications older than the TTL at `now`. Returns their ids.
    pub fn expire(&mut self, now: DateTime<Utc>) -> Vec<NotificationId> {
        let ttl = self.ttl;
        let mut expired = Vec::new();
        self.items.retain(|n| {
            let alive = now.signed_duration_since(n.created_at) < ttl;
            if !alive {
                expired.push(n.id);
            }
            alive
        });
        expired
    }

    /// Toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Queued toasts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no toast is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every toast.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfare_model::NotificationKind;

    fn note(msg: &str, at: DateTime<Utc>) -> Notification {
        Notification::at(NotificationKind::Info, msg, at)
    }

    #[test]
    fn oldest_is_evicted_at_capacity() {
        let now = Utc::now();
        let mut center = NotificationCenter::new(2, Duration::from_secs(5));
        assert!(center.push(note("a", now)).is_none());
        assert!(center.push(note("b", now)).is_none());
        let evicted = center.push(note("c", now)).unwrap();
        assert_eq!(evicted.message, "a");
        let remaining: Vec<_> = center.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(remaining, vec!["b", "c"]);
    }

    #[test]
    fn expire_drops_only_stale_entries() {
        let now = Utc::now();
        let mut center = NotificationCenter::new(5, Duration::from_secs(5));
        let stale = note("old", now - TimeDelta::seconds(6));
        let stale_id = stale.id;
        center.push(stale);
        center.push(note("fresh", now - TimeDelta::seconds(1)));

        assert_eq!(center.expire(now), vec![stale_id]);
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn read_tracking() {
        let now = Utc::now();
        let mut center = NotificationCenter::default();
        center.push(note("a", now));
        center.push(note("b", now));
        assert_eq!(center.unread_count(), 2);
        assert_eq!(center.mark_all_read(), 2);
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.mark_all_read(), 0);
    }

    #[test]
    fn dismiss_unknown_id_is_none() {
        let mut center = NotificationCenter::default();
        assert!(center.dismiss(NotificationId::new()).is_none());
    }
}
