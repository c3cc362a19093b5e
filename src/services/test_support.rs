// Shared fixtures for service tests

use mockall::mock;
use std::sync::Arc;

use crate::domain::Dish;
use crate::error::{AppError, AppResult};
use crate::events::EventBus;
use crate::repositories::{CatalogRepository, CatalogStore, InMemoryKeyValueStore, KeyValueStore};

mock! {
    pub Store {}

    impl KeyValueStore for Store {
        fn get(&self, key: &str) -> AppResult<Option<String>>;
        fn set(&self, key: &str, value: &str) -> AppResult<()>;
        fn remove(&self, key: &str) -> AppResult<()>;
    }
}

/// A store whose every call fails
pub fn failing_store() -> Arc<dyn KeyValueStore> {
    let mut store = MockStore::new();
    store
        .expect_get()
        .returning(|_| Err(AppError::Persistence("disk unavailable".to_string())));
    store
        .expect_set()
        .returning(|_, _| Err(AppError::Persistence("disk unavailable".to_string())));
    store
        .expect_remove()
        .returning(|_| Err(AppError::Persistence("disk unavailable".to_string())));
    Arc::new(store)
}

pub fn memory_store() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

pub fn event_bus() -> Arc<EventBus> {
    Arc::new(EventBus::new())
}

pub fn catalog() -> Arc<CatalogStore> {
    Arc::new(CatalogStore::builtin().unwrap())
}

/// Built-in dish by id
pub fn dish(id: &str) -> Dish {
    catalog().get_by_id(id).cloned().unwrap()
}
