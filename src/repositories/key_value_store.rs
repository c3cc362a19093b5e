// Flat key-value persistence for the ledgers
//
// Values are JSON text. The store is durable but not transactional
// across keys.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};

/// Storage keys; existing stored data depends on these exact names
pub mod keys {
    pub const FAVORITES: &str = "userFavorites";
    pub const HISTORY: &str = "userHistory";
    pub const PREFERENCES: &str = "userPreferences";
    pub const ACTIONS: &str = "userActions";
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Read and decode the JSON value under `key`
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> AppResult<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode `value` and write it under `key`
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

pub struct SqliteKeyValueStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let value = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// Process-local store for tests and headless runs
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| AppError::Persistence("in-memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, get_connection, initialize_database};

    fn sqlite_store() -> (tempfile::TempDir, SqliteKeyValueStore) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&dir.path().join("kv.db")).unwrap();
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        (dir, SqliteKeyValueStore::new(Arc::new(pool)))
    }

    #[test]
    fn test_sqlite_set_get_remove() {
        let (_dir, store) = sqlite_store();

        assert_eq!(store.get("missing").unwrap(), None);

        store.set(keys::FAVORITES, "[]").unwrap();
        store.set(keys::FAVORITES, "[1]").unwrap();
        assert_eq!(store.get(keys::FAVORITES).unwrap().as_deref(), Some("[1]"));

        store.remove(keys::FAVORITES).unwrap();
        assert_eq!(store.get(keys::FAVORITES).unwrap(), None);
    }

    #[test]
    fn test_sqlite_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.db");

        {
            let pool = create_connection_pool(&path).unwrap();
            initialize_database(&get_connection(&pool).unwrap()).unwrap();
            SqliteKeyValueStore::new(Arc::new(pool))
                .set(keys::HISTORY, r#"["x"]"#)
                .unwrap();
        }

        let pool = create_connection_pool(&path).unwrap();
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        let store = SqliteKeyValueStore::new(Arc::new(pool));
        assert_eq!(store.get(keys::HISTORY).unwrap().as_deref(), Some(r#"["x"]"#));
    }

    #[test]
    fn test_json_helpers() {
        let store = InMemoryKeyValueStore::new();

        save_json(&store, "nums", &vec![1, 2, 3]).unwrap();
        let nums: Option<Vec<i32>> = load_json(&store, "nums").unwrap();
        assert_eq!(nums, Some(vec![1, 2, 3]));

        let missing: Option<Vec<i32>> = load_json(&store, "other").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        let store = InMemoryKeyValueStore::new();
        store.set("nums", "not json").unwrap();

        let result: AppResult<Option<Vec<i32>>> = load_json(&store, "nums");
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }
}
