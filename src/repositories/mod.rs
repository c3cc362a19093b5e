// Repository layer
//
// RULES:
// - Repositories are plain data mappers
// - No ledger logic (caps, ordering, dedup live in services)
// - No event emission

pub mod catalog_repository;
pub mod key_value_store;

pub use catalog_repository::{CatalogRepository, CatalogStore};
pub use key_value_store::{
    keys, load_json, save_json, InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore,
};
