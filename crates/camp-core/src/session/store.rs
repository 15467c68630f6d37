//! Keyed in-memory session storage.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Maps opaque transport session keys to per-key conversation state.
///
/// Entries are created on first contact. Each entry sits behind its own
/// `Mutex` so that concurrent deliveries for the same key serialize, while
/// distinct keys proceed independently. No data ever crosses keys.
pub struct SessionStore<T> {
    entries: RwLock<HashMap<String, Arc<Mutex<T>>>>,
}

impl<T: Default> SessionStore<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the entry for `key`, creating a fresh one on first contact.
    pub async fn entry(&self, key: &str) -> Arc<Mutex<T>> {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(key) {
                return entry.clone();
            }
        }

        let mut entries = self.entries.write().await;
        entries
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(T::default())))
            .clone()
    }

    /// Drops the entry for `key`, if any.
    pub async fn remove(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }

    /// Number of keys currently tracked.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Default> Default for SessionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_entry_creates_on_first_contact() {
        let store: SessionStore<u32> = SessionStore::new();
        assert!(store.is_empty().await);

        let entry = store.entry("chat-1").await;
        *entry.lock().await = 7;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_entries_are_stable_per_key() {
        let store: SessionStore<u32> = SessionStore::new();
        let first = store.entry("chat-1").await;
        *first.lock().await = 42;

        let again = store.entry("chat-1").await;
        assert_eq!(*again.lock().await, 42);
    }

    #[tokio::test]
    async fn test_keys_do_not_share_state() {
        let store: SessionStore<u32> = SessionStore::new();
        *store.entry("a").await.lock().await = 1;
        *store.entry("b").await.lock().await = 2;

        assert_eq!(*store.entry("a").await.lock().await, 1);
        assert_eq!(*store.entry("b").await.lock().await, 2);
    }

    #[tokio::test]
    async fn test_remove_drops_entry() {
        let store: SessionStore<u32> = SessionStore::new();
        *store.entry("a").await.lock().await = 1;
        store.remove("a").await;

        // A fresh entry starts from the default again
        assert_eq!(*store.entry("a").await.lock().await, 0);
    }
}
