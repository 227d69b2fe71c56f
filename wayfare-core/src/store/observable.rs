//! Listener lists and a publish-on-mutation value cell.

use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Ordered list of listeners for events of type `E`.
pub struct Subscribers<E> {
    listeners: Vec<(SubscriptionId, Listener<E>)>,
    next_id: u64,
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E> Subscribers<E> {
    /// Register `listener`; it runs after every publish until removed.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener in subscription order.
    pub fn publish(&mut self, event: &E) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    /// Registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

/// A value whose mutations are published to subscribers.
pub struct Observable<T> {
    value: T,
    revision: u64,
    subscribers: Subscribers<T>,
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Observable<T> {
    /// Wrap `value` at revision zero with no listeners.
    pub fn new(value: T) -> Self {
        Self {
            value,
            revision: 0,
            subscribers: Subscribers::default(),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Incremented on every `update` or `set`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register `listener` for every later change of the value.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Mutate the value, then publish the new value.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut T) -> R) -> R {
        let result = mutate(&mut self.value);
        self.revision += 1;
        self.subscribers.publish(&self.value);
        result
    }

    /// Replace the value and publish it.
    pub fn set(&mut self, value: T) {
        self.update(|current| *current = value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn update_publishes_to_listeners_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut cell = Observable::new(1usize);

        let first = Rc::clone(&seen);
        cell.subscribe(move |v| first.borrow_mut().push(("first", *v)));
        let second = Rc::clone(&seen);
        cell.subscribe(move |v| second.borrow_mut().push(("second", *v)));

        cell.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![("first", 2), ("second", 2)]);
        assert_eq!(cell.revision(), 1);
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let count = Rc::new(RefCell::new(0));
        let mut cell = Observable::new(String::new());
        let counter = Rc::clone(&count);
        let id = cell.subscribe(move |_| *counter.borrow_mut() += 1);

        cell.set("a".to_string());
        assert!(cell.unsubscribe(id));
        assert!(!cell.unsubscribe(id));
        cell.set("b".to_string());

        assert_eq!(*count.borrow(), 1);
        assert_eq!(cell.get(), "b");
    }

    #[test]
    fn update_returns_closure_result() {
        let mut cell = Observable::new(vec![1, 2, 3]);
        let popped = cell.update(|v| v.pop());
        assert_eq!(popped, Some(3));
    }
}
