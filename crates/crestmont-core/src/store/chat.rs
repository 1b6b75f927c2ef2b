//! Chat widget UI state.

use super::{Store, Subscription};

/// State of the site chat widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatState {
    /// Whether the chat widget is currently open.
    pub is_open: bool,
    /// Query text to prefill when the widget opens.
    pub prefilled_query: String,
}

/// Store for the chat widget state.
///
/// Producers set the prefilled query before opening so the widget reads a
/// fresh query alongside the open transition; the widget consumes it with
/// [`ChatStore::take_query`], which returns and clears the value atomically.
#[derive(Clone, Default)]
pub struct ChatStore {
    store: Store<ChatState>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> ChatState {
        self.store.snapshot()
    }

    pub fn is_open(&self) -> bool {
        self.store.read(|state| state.is_open)
    }

    /// Opens or closes the widget. Setting the current value is a no-op
    /// transition and does not notify subscribers.
    pub fn set_open(&self, open: bool) {
        if self.store.read(|state| state.is_open == open) {
            return;
        }
        self.store.update(|state| state.is_open = open);
    }

    pub fn set_prefilled_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.store.update(|state| state.prefilled_query = query);
    }

    /// Returns the prefilled query and clears it.
    pub fn take_query(&self) -> String {
        self.store
            .update(|state| std::mem::take(&mut state.prefilled_query))
    }

    /// Subscribes to state changes. Dropping the handle unsubscribes.
    pub fn subscribe(&self, f: impl Fn(&ChatState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(f)
    }

    /// Restores the initial closed/empty state. Intended for test isolation.
    pub fn reset(&self) {
        self.store.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_initial_state() {
        let chat = ChatStore::new();
        assert_eq!(
            chat.state(),
            ChatState {
                is_open: false,
                prefilled_query: String::new(),
            }
        );
    }

    #[test]
    fn test_query_then_open() {
        let chat = ChatStore::new();
        chat.set_prefilled_query("admission deadlines");
        chat.set_open(true);

        let state = chat.state();
        assert!(state.is_open);
        assert_eq!(state.prefilled_query, "admission deadlines");
    }

    #[test]
    fn test_set_open_is_idempotent() {
        let chat = ChatStore::new();
        let notifications = Arc::new(AtomicUsize::new(0));
        let notifications_clone = Arc::clone(&notifications);
        let _sub = chat.subscribe(move |_| {
            notifications_clone.fetch_add(1, Ordering::SeqCst);
        });

        chat.set_open(true);
        chat.set_open(true);

        assert!(chat.is_open());
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_take_query_clears() {
        let chat = ChatStore::new();
        chat.set_prefilled_query("housing options");
        assert_eq!(chat.take_query(), "housing options");
        assert_eq!(chat.take_query(), "");
    }

    #[test]
    fn test_close_does_not_clear_query_until_taken() {
        let chat = ChatStore::new();
        chat.set_prefilled_query("tuition");
        chat.set_open(true);
        chat.set_open(false);
        assert_eq!(chat.take_query(), "tuition");
    }
}
