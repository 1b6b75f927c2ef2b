//! Reactive state stores consumed by the rendering layer.
//!
//! A [`Store`] holds a piece of UI state behind an interior lock and notifies
//! its subscribers synchronously after every mutation. Stores are plain values
//! constructed by the composition root and handed to the parts of the system
//! that need them; there is no process-global instance. `reset` restores the
//! default state for test isolation.

pub mod chat;
pub mod image_cache;

pub use chat::{ChatState, ChatStore};
pub use image_cache::{ImageCache, ResolveTicket};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

type Callback<S> = Box<dyn Fn(&S) + Send + Sync + 'static>;

struct Inner<S> {
    state: RwLock<S>,
    subscribers: RwLock<Vec<(u64, Callback<S>)>>,
    next_id: AtomicU64,
}

/// A reactive container for a single piece of state.
///
/// All operations are total: reads and writes cannot fail, last write wins,
/// and every state change invokes the current subscribers with the new state.
///
/// Subscriber callbacks run synchronously on the mutating call and must not
/// mutate the store they observe.
pub struct Store<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store<S> {
    /// Creates a store holding `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(initial),
                subscribers: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Reads the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let state = self.inner.state.read().unwrap_or_else(|e| e.into_inner());
        f(&state)
    }

    /// Mutates the state and notifies subscribers with the result.
    ///
    /// Returns whatever the closure returns, so callers can extract a value
    /// from the old state in the same critical section (`take`-style ops).
    pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let result = {
            let mut state = self.inner.state.write().unwrap_or_else(|e| e.into_inner());
            f(&mut state)
        };
        self.notify();
        result
    }

    /// Replaces the entire state and notifies subscribers.
    pub fn replace(&self, next: S) {
        self.update(|state| *state = next);
    }

    /// Registers a subscriber invoked with the new state after every change.
    ///
    /// Dropping the returned [`Subscription`] unsubscribes.
    pub fn subscribe(&self, f: impl Fn(&S) + Send + Sync + 'static) -> Subscription
    where
        S: Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        {
            let mut subs = self
                .inner
                .subscribers
                .write()
                .unwrap_or_else(|e| e.into_inner());
            subs.push((id, Box::new(f)));
        }
        let weak: Weak<Inner<S>> = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut subs = inner.subscribers.write().unwrap_or_else(|e| e.into_inner());
                    subs.retain(|(sub_id, _)| *sub_id != id);
                }
            })),
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    fn notify(&self) {
        let state = self.inner.state.read().unwrap_or_else(|e| e.into_inner());
        let subs = self
            .inner
            .subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner());
        for (_, callback) in subs.iter() {
            callback(&state);
        }
    }
}

impl<S: Clone> Store<S> {
    /// Returns a clone of the current state.
    pub fn snapshot(&self) -> S {
        self.read(Clone::clone)
    }
}

impl<S: Default> Store<S> {
    /// Restores the default state. Intended for test isolation.
    pub fn reset(&self) {
        self.replace(S::default());
    }
}

/// Handle for an active store subscription. Unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_last_write_wins() {
        let store = Store::new(0u32);
        store.replace(1);
        store.replace(2);
        assert_eq!(store.snapshot(), 2);
    }

    #[test]
    fn test_update_returns_closure_result() {
        let store = Store::new(String::from("hello"));
        let taken = store.update(std::mem::take);
        assert_eq!(taken, "hello");
        assert_eq!(store.snapshot(), "");
    }

    #[test]
    fn test_subscriber_sees_every_change() {
        let store = Store::new(0u32);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let _sub = store.subscribe(move |state| {
            seen_clone.lock().unwrap().push(*state);
        });

        store.replace(1);
        store.replace(2);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let store = Store::new(0u32);
        let sub = store.subscribe(|_| {});
        assert_eq!(store.subscriber_count(), 1);
        drop(sub);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_reset_restores_default() {
        let store = Store::new(7u32);
        store.reset();
        assert_eq!(store.snapshot(), 0);
    }
}
