//! Chat widget triggers.

use crestmont_core::store::ChatStore;

/// UI-facing chat actions.
///
/// `ask` is the "Ask AI" button: it sets the prefilled query first and opens
/// the widget second, so the widget reads a fresh query alongside the open
/// transition.
#[derive(Clone)]
pub struct ChatUseCase {
    chat: ChatStore,
}

impl ChatUseCase {
    pub fn new(chat: ChatStore) -> Self {
        Self { chat }
    }

    pub fn ask(&self, query: impl Into<String>) {
        self.chat.set_prefilled_query(query);
        self.chat.set_open(true);
    }

    pub fn open(&self) {
        self.chat.set_open(true);
    }

    pub fn dismiss(&self) {
        self.chat.set_open(false);
    }

    /// Consumed by the widget exactly once per open transition.
    pub fn take_prefilled_query(&self) -> String {
        self.chat.take_query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_sets_query_before_opening() {
        let store = ChatStore::new();
        let chat = ChatUseCase::new(store.clone());

        chat.ask("transfer credits");
        let state = store.state();
        assert!(state.is_open);
        assert_eq!(state.prefilled_query, "transfer credits");

        assert_eq!(chat.take_prefilled_query(), "transfer credits");
        assert_eq!(chat.take_prefilled_query(), "");
        // Taking the query leaves the widget open.
        assert!(store.is_open());
    }
}
