use chrono::Utc;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::action::actions;
use crate::domain::{StatisticsSnapshot, UserStatistics};
use crate::events::{
    DishFavorited, DishUnfavorited, EventBus, FavoritesBatchRemoved, HistoryCleared,
    HistoryEntryRemoved, HistoryRecorded,
};
use crate::services::{ActionLog, FavoritesLedger, HistoryLedger};

fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Profile counters, derived from the ledgers and the action log.
///
/// The last snapshot is cached and dropped whenever a ledger changes.
pub struct StatisticsService {
    history: Arc<HistoryLedger>,
    favorites: Arc<FavoritesLedger>,
    actions: Arc<ActionLog>,
    event_bus: Arc<EventBus>,
    cached: Arc<Mutex<Option<StatisticsSnapshot>>>,
}

impl StatisticsService {
    pub fn new(
        history: Arc<HistoryLedger>,
        favorites: Arc<FavoritesLedger>,
        actions: Arc<ActionLog>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            history,
            favorites,
            actions,
            event_bus,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calculate(&self) -> UserStatistics {
        UserStatistics {
            history_count: saturating_count(self.history.len()),
            favorite_count: saturating_count(self.favorites.len()),
            cooking_count: saturating_count(self.actions.count_action(actions::START_COOKING)),
        }
    }

    /// Cached snapshot, recomputed when missing.
    /// The cooking count only refreshes with the next ledger change.
    pub fn current(&self) -> StatisticsSnapshot {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        cached
            .get_or_insert_with(|| StatisticsSnapshot::new(self.calculate(), Utc::now()))
            .clone()
    }

    /// Recompute now and replace the cache
    pub fn refresh(&self) -> StatisticsSnapshot {
        let snapshot = StatisticsSnapshot::new(self.calculate(), Utc::now());
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot.clone());
        snapshot
    }

    /// Drop the cache on every ledger change
    pub fn register_event_handlers(&self) {
        fn invalidate(cached: &Arc<Mutex<Option<StatisticsSnapshot>>>) {
            *cached.lock().unwrap_or_else(PoisonError::into_inner) = None;
        }

        let cached = Arc::clone(&self.cached);
        self.event_bus
            .subscribe::<DishFavorited, _>(move |_| invalidate(&cached));
        let cached = Arc::clone(&self.cached);
        self.event_bus
            .subscribe::<DishUnfavorited, _>(move |_| invalidate(&cached));
        let cached = Arc::clone(&self.cached);
        self.event_bus
            .subscribe::<FavoritesBatchRemoved, _>(move |_| invalidate(&cached));
        let cached = Arc::clone(&self.cached);
        self.event_bus
            .subscribe::<HistoryRecorded, _>(move |_| invalidate(&cached));
        let cached = Arc::clone(&self.cached);
        self.event_bus
            .subscribe::<HistoryEntryRemoved, _>(move |_| invalidate(&cached));
        let cached = Arc::clone(&self.cached);
        self.event_bus
            .subscribe::<HistoryCleared, _>(move |_| invalidate(&cached));
    }
}
