// Persisted list shared by the favorites, history and action ledgers
//
// The whole list lives under one key. A mutation holds the lock across
// load, modify and store, so no update is lost within the process.
// Storage failures are logged and the in-memory list stays authoritative.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::repositories::{load_json, save_json, KeyValueStore};

pub(crate) struct PersistedList<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    cache: Mutex<Option<Vec<T>>>,
}

impl<T> PersistedList<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            cache: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<T>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Vec<T> {
        match load_json::<Vec<T>>(self.store.as_ref(), self.key) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to load {}, starting empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Run `f` against the current list
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let mut guard = self.lock();
        let items = guard.get_or_insert_with(|| self.load());
        f(items)
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.read(|items| items.to_vec())
    }

    /// Load, apply `f`, and persist the full list when `f` reports a
    /// change.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> (R, bool)) -> R {
        let mut guard = self.lock();
        let items = guard.get_or_insert_with(|| self.load());

        let (result, changed) = f(items);
        if changed {
            if let Err(e) = save_json(self.store.as_ref(), self.key, items.as_slice()) {
                log::error!("Failed to persist {}: {}", self.key, e);
            }
        }
        result
    }

    /// Drop the stored list and the cache
    pub fn clear(&self) -> usize {
        let mut guard = self.lock();
        let removed = guard.get_or_insert_with(|| self.load()).len();
        *guard = Some(Vec::new());

        if let Err(e) = self.store.remove(self.key) {
            log::error!("Failed to remove {}: {}", self.key, e);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryKeyValueStore;
    use crate::services::test_support::failing_store;

    #[test]
    fn test_mutation_is_persisted() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let list: PersistedList<u32> = PersistedList::new(store.clone(), "nums");

        list.mutate(|items| {
            items.push(1);
            ((), true)
        });

        let reopened: PersistedList<u32> = PersistedList::new(store, "nums");
        assert_eq!(reopened.snapshot(), vec![1]);
    }

    #[test]
    fn test_unchanged_mutation_does_not_write() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let list: PersistedList<u32> = PersistedList::new(store.clone(), "nums");

        list.mutate(|_| ((), false));

        assert_eq!(store.get("nums").unwrap(), None);
    }

    #[test]
    fn test_storage_failure_keeps_memory_state() {
        let list: PersistedList<u32> = PersistedList::new(failing_store(), "nums");

        list.mutate(|items| {
            items.push(7);
            ((), true)
        });

        assert_eq!(list.snapshot(), vec![7]);
        assert_eq!(list.clear(), 1);
        assert!(list.snapshot().is_empty());
    }

    #[test]
    fn test_corrupt_blob_starts_empty() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set("nums", "{oops").unwrap();

        let list: PersistedList<u32> = PersistedList::new(store, "nums");
        assert!(list.snapshot().is_empty());
    }
}
