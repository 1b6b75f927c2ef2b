//! Client-side cache of resolved image URLs.
//!
//! Maps a logical image key (e.g. `"favicon"`, `"hero-banner"`) to the
//! possibly-rotating URL resolved from object storage. Absence of a key means
//! "not yet resolved" and the rendering layer shows a placeholder.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{Store, Subscription};

/// Ticket issued by [`ImageCache::begin_resolve`]. A completion is applied
/// only while its ticket is still the latest issued for the key, so a slow
/// fetch cannot overwrite fresher state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTicket {
    key: String,
    seq: u64,
}

impl ResolveTicket {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Store mapping logical image keys to resolved URLs.
///
/// Resolve sequence numbers are tracked separately from the rendered mapping:
/// issuing a ticket does not notify subscribers, only URL changes do.
#[derive(Clone, Default)]
pub struct ImageCache {
    store: Store<HashMap<String, String>>,
    /// Latest issued resolve sequence per key. Monotonic for the lifetime of
    /// the cache, even across `set_images` replacements.
    latest_seq: Arc<Mutex<HashMap<String, u64>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the resolved URL for `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.store.read(|entries| entries.get(key).cloned())
    }

    /// Returns a snapshot of all resolved entries.
    pub fn urls(&self) -> HashMap<String, String> {
        self.store.snapshot()
    }

    pub fn len(&self) -> usize {
        self.store.read(HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.store.read(HashMap::is_empty)
    }

    /// Upserts a single entry, preserving all others. Invalidates any
    /// in-flight resolve for the same key.
    pub fn set_image(&self, key: impl Into<String>, url: impl Into<String>) {
        let key = key.into();
        let url = url.into();
        {
            let mut seqs = self.latest_seq.lock().unwrap_or_else(|e| e.into_inner());
            *seqs.entry(key.clone()).or_insert(0) += 1;
        }
        self.store.update(|entries| {
            entries.insert(key, url);
        });
    }

    /// Replaces the entire cache contents. Callers pass the complete desired
    /// state, not a delta: untouched keys are evicted. Every in-flight
    /// resolve is invalidated.
    pub fn set_images(&self, mapping: HashMap<String, String>) {
        {
            let mut seqs = self.latest_seq.lock().unwrap_or_else(|e| e.into_inner());
            let touched: Vec<String> = seqs.keys().chain(mapping.keys()).cloned().collect();
            for key in touched {
                *seqs.entry(key).or_insert(0) += 1;
            }
        }
        self.store.replace(mapping);
    }

    /// Starts an asynchronous resolve for `key`, superseding any ticket
    /// issued earlier for the same key. Does not notify subscribers.
    pub fn begin_resolve(&self, key: impl Into<String>) -> ResolveTicket {
        let key = key.into();
        let mut seqs = self.latest_seq.lock().unwrap_or_else(|e| e.into_inner());
        let seq = seqs.entry(key.clone()).or_insert(0);
        *seq += 1;
        ResolveTicket { key, seq: *seq }
    }

    /// Applies a resolved URL if `ticket` is still the latest issued for its
    /// key. Returns `false` when the completion was stale and discarded.
    pub fn complete_resolve(&self, ticket: &ResolveTicket, url: impl Into<String>) -> bool {
        let url = url.into();
        {
            let seqs = self.latest_seq.lock().unwrap_or_else(|e| e.into_inner());
            if seqs.get(&ticket.key) != Some(&ticket.seq) {
                return false;
            }
        }
        self.store.update(|entries| {
            entries.insert(ticket.key.clone(), url);
        });
        true
    }

    /// Subscribes to mapping changes. Dropping the handle unsubscribes.
    pub fn subscribe(
        &self,
        f: impl Fn(&HashMap<String, String>) + Send + Sync + 'static,
    ) -> Subscription {
        self.store.subscribe(f)
    }

    /// Clears all entries and tickets. Intended for test isolation.
    pub fn reset(&self) {
        {
            let mut seqs = self.latest_seq.lock().unwrap_or_else(|e| e.into_inner());
            seqs.clear();
        }
        self.store.reset();
    }
}
