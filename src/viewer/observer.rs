//! Change notification: explicit subscribe/unsubscribe, no ambient globals.
//!
//! Subscriptions are acquired and released through the engine, independent
//! of any UI framework lifecycle. Dropping the engine drops every callback.

use rustc_hash::FxHashMap;

/// Notification emitted after a state mutation or once a transition
/// settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The active selection moved.
    ActiveChanged {
        /// Previous active global index.
        from: usize,
        /// New active global index.
        to: usize,
    },
    /// The content collection was replaced.
    ItemsReplaced {
        /// Size of the new collection.
        total_items: usize,
    },
    /// The layout strategy changed.
    StrategyChanged {
        /// Resolved strategy name (after any default fallback).
        name: String,
    },
    /// Every applied transform settled; the engine is Idle again.
    Settled,
}

/// Handle identifying one subscription, returned by
/// [`ViewerEngine::subscribe`](super::ViewerEngine::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer callback invoked synchronously on the engine's thread.
pub type ObserverFn = Box<dyn FnMut(&ViewerEvent)>;

/// Registered observers keyed by subscription handle.
pub(crate) struct ObserverSet {
    next_id: u64,
    observers: FxHashMap<SubscriptionId, ObserverFn>,
}

impl ObserverSet {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            observers: FxHashMap::default(),
        }
    }

    pub(crate) fn subscribe(&mut self, observer: ObserverFn) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let _ = self.observers.insert(id, observer);
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    pub(crate) fn notify(&mut self, event: &ViewerEvent) {
        for observer in self.observers.values_mut() {
            observer(event);
        }
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_subscribe_notify_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = ObserverSet::new();

        let sink = Rc::clone(&seen);
        let id = set.subscribe(Box::new(move |event| {
            sink.borrow_mut().push(event.clone());
        }));

        set.notify(&ViewerEvent::Settled);
        assert_eq!(*seen.borrow(), vec![ViewerEvent::Settled]);

        assert!(set.unsubscribe(id));
        assert!(!set.unsubscribe(id));
        set.notify(&ViewerEvent::Settled);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut set = ObserverSet::new();
        let a = set.subscribe(Box::new(|_| {}));
        let b = set.subscribe(Box::new(|_| {}));
        assert_ne!(a, b);
    }
}
