use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{sort_favorites, Dish, FavoriteEntry, FavoriteSort};
use crate::events::{DishFavorited, DishUnfavorited, EventBus, FavoritesBatchRemoved};
use crate::repositories::{keys, KeyValueStore};
use crate::services::ledger::PersistedList;

/// Saved dishes, at most one entry per dish id.
/// Stored order is insertion order (oldest first).
pub struct FavoritesLedger {
    entries: PersistedList<FavoriteEntry>,
    event_bus: Arc<EventBus>,
}

impl FavoritesLedger {
    pub fn new(store: Arc<dyn KeyValueStore>, event_bus: Arc<EventBus>) -> Self {
        Self {
            entries: PersistedList::new(store, keys::FAVORITES),
            event_bus,
        }
    }

    pub fn list(&self) -> Vec<FavoriteEntry> {
        self.entries.snapshot()
    }

    pub fn len(&self) -> usize {
        self.entries.read(|entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_favorite(&self, dish_id: &str) -> bool {
        self.entries
            .read(|entries| entries.iter().any(|e| e.dish_id == dish_id))
    }

    /// Ids of every saved dish, for annotating catalog lists
    pub fn favorite_ids(&self) -> HashSet<String> {
        self.entries
            .read(|entries| entries.iter().map(|e| e.dish_id.clone()).collect())
    }

    pub fn add(&self, dish: &Dish) -> FavoriteEntry {
        self.add_at(dish, Utc::now())
    }

    /// Idempotent: an existing entry is returned unchanged, keeping its
    /// original `favorite_time`.
    pub fn add_at(&self, dish: &Dish, at: DateTime<Utc>) -> FavoriteEntry {
        let (entry, added, count) = self.entries.mutate(|entries| {
            if let Some(existing) = entries.iter().find(|e| e.dish_id == dish.id) {
                return ((existing.clone(), false, entries.len()), false);
            }
            let entry = FavoriteEntry::new(dish.clone(), at);
            entries.push(entry.clone());
            ((entry, true, entries.len()), true)
        });

        if added {
            log::info!("Favorited {}", dish.id);
            self.event_bus.emit(DishFavorited::new(dish.id.clone(), count));
        }
        entry
    }

    /// True if an entry was removed
    pub fn remove(&self, dish_id: &str) -> bool {
        let (removed, count) = self.entries.mutate(|entries| {
            let before = entries.len();
            entries.retain(|e| e.dish_id != dish_id);
            let removed = entries.len() != before;
            ((removed, entries.len()), removed)
        });

        if removed {
            log::info!("Unfavorited {}", dish_id);
            self.event_bus
                .emit(DishUnfavorited::new(dish_id.to_string(), count));
        }
        removed
    }

    /// Number of entries removed
    pub fn remove_batch(&self, dish_ids: &HashSet<String>) -> usize {
        let removed = self.entries.mutate(|entries| {
            let before = entries.len();
            entries.retain(|e| !dish_ids.contains(&e.dish_id));
            let removed = before - entries.len();
            (removed, removed > 0)
        });

        if removed > 0 {
            log::info!("Removed {} favorites", removed);
            let mut ids: Vec<String> = dish_ids.iter().cloned().collect();
            ids.sort();
            self.event_bus.emit(FavoritesBatchRemoved::new(ids, removed));
        }
        removed
    }

    pub fn toggle(&self, dish: &Dish) -> bool {
        self.toggle_at(dish, Utc::now())
    }

    /// Returns the new favorite state
    pub fn toggle_at(&self, dish: &Dish, at: DateTime<Utc>) -> bool {
        if self.remove(&dish.id) {
            false
        } else {
            self.add_at(dish, at);
            true
        }
    }

    /// Sorted projection; stored order is untouched
    pub fn sorted(&self, sort: FavoriteSort) -> Vec<FavoriteEntry> {
        self.entries.read(|entries| sort_favorites(entries, sort))
    }
}
