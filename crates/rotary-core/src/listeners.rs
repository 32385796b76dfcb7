//! Change listeners.
//!
//! Replaces a single overridable callback with an ordered subscription list.
//! An empty list behaves exactly like a no-op handler.

use core::fmt;

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Callback = Box<dyn FnMut(f64)>;

/// Ordered set of value-change callbacks.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Listeners {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`; it runs after every earlier subscriber.
    pub fn subscribe(&mut self, callback: impl FnMut(f64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Call every subscriber with `value`, in subscription order.
    pub fn notify(&mut self, value: f64) {
        for (_, callback) in &mut self.entries {
            callback(value);
        }
    }

    /// Drop every subscription. Ids are never reused.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        for tag in ["a", "b"] {
            let log = Rc::clone(&log);
            listeners.subscribe(move |v| log.borrow_mut().push(format!("{tag}{v}")));
        }
        listeners.notify(1.0);
        assert_eq!(*log.borrow(), vec!["a1", "b1"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_entry() {
        let hits = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::new();
        let first = listeners.subscribe(|_| {});
        let counter = Rc::clone(&hits);
        listeners.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(listeners.unsubscribe(first));
        assert!(!listeners.unsubscribe(first));
        listeners.notify(0.0);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn ids_not_reused_after_clear() {
        let mut listeners = Listeners::new();
        let a = listeners.subscribe(|_| {});
        listeners.clear();
        let b = listeners.subscribe(|_| {});
        assert_ne!(a, b);
        assert!(!listeners.unsubscribe(a));
    }

    #[test]
    fn empty_notify_is_noop() {
        let mut listeners = Listeners::new();
        assert!(listeners.is_empty());
        listeners.notify(42.0);
    }
}
