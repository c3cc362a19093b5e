use chrono::{DateTime, Local, TimeZone, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::domain::{Dish, HistoryEntry, HistorySource, HistoryWindow};
use crate::events::{EventBus, HistoryCleared, HistoryEntryRemoved, HistoryRecorded};
use crate::repositories::{keys, KeyValueStore};
use crate::services::ledger::PersistedList;

/// Dish-view log, newest first, one entry per dish, capped
pub struct HistoryLedger {
    entries: PersistedList<HistoryEntry>,
    capacity: usize,
    event_bus: Arc<EventBus>,
}

impl HistoryLedger {
    pub fn new(store: Arc<dyn KeyValueStore>, event_bus: Arc<EventBus>) -> Self {
        Self::with_capacity(store, event_bus, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(
        store: Arc<dyn KeyValueStore>,
        event_bus: Arc<EventBus>,
        capacity: usize,
    ) -> Self {
        Self {
            entries: PersistedList::new(store, keys::HISTORY),
            capacity: capacity.max(1),
            event_bus,
        }
    }

    /// Newest first
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.snapshot()
    }

    pub fn len(&self) -> usize {
        self.entries.read(|entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `n` newest entries
    pub fn recent(&self, n: usize) -> Vec<HistoryEntry> {
        self.entries
            .read(|entries| entries.iter().take(n).cloned().collect())
    }

    pub fn record(&self, dish: &Dish, source: HistorySource) -> HistoryEntry {
        self.record_at(dish, source, Utc::now())
    }

    /// Move-to-front insert: any entry for the same dish is dropped first,
    /// then the list is truncated to capacity.
    pub fn record_at(&self, dish: &Dish, source: HistorySource, at: DateTime<Utc>) -> HistoryEntry {
        let capacity = self.capacity;
        let entry = self.entries.mutate(|entries| {
            entries.retain(|e| e.dish_id != dish.id);
            let entry = HistoryEntry::new(dish.clone(), source, at);
            entries.insert(0, entry.clone());
            entries.truncate(capacity);
            (entry, true)
        });

        log::debug!("Recorded {} from {}", dish.id, source);
        self.event_bus
            .emit(HistoryRecorded::new(entry.id, entry.dish_id.clone(), source));
        entry
    }

    /// True if an entry was removed
    pub fn remove(&self, entry_id: Uuid) -> bool {
        let removed = self.entries.mutate(|entries| {
            let before = entries.len();
            entries.retain(|e| e.id != entry_id);
            let removed = entries.len() != before;
            (removed, removed)
        });

        if removed {
            self.event_bus.emit(HistoryEntryRemoved::new(entry_id));
        }
        removed
    }

    pub fn clear(&self) {
        let removed = self.entries.clear();
        log::info!("Cleared {} history entries", removed);
        self.event_bus.emit(HistoryCleared::new(removed));
    }

    /// Entries inside `window`, judged against the local calendar day
    pub fn filter_by_window(&self, window: HistoryWindow) -> Vec<HistoryEntry> {
        self.filter_by_window_at(window, &Local::now())
    }

    pub fn filter_by_window_at<Tz: TimeZone>(
        &self,
        window: HistoryWindow,
        now: &DateTime<Tz>,
    ) -> Vec<HistoryEntry> {
        self.entries.read(|entries| {
            entries
                .iter()
                .filter(|entry| window.contains(entry, now))
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Cuisine, Difficulty};
    use crate::services::test_support::{dish, event_bus, failing_store, memory_store};
    use chrono::{Duration, FixedOffset};

    fn ledger() -> HistoryLedger {
        HistoryLedger::new(memory_store(), event_bus())
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn ids(entries: &[HistoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.dish_id.as_str()).collect()
    }

    #[test]
    fn test_record_moves_to_front() {
        let ledger = ledger();
        let x = dish("dish001");
        let y = dish("dish002");

        ledger.record_at(&x, HistorySource::Random, t0());
        ledger.record_at(&y, HistorySource::Random, t0() + Duration::seconds(1));
        let last = ledger.record_at(&x, HistorySource::Detail, t0() + Duration::seconds(2));

        let list = ledger.list();
        assert_eq!(ids(&list), vec!["dish001", "dish002"]);
        assert_eq!(list[0].select_time, (t0() + Duration::seconds(2)).timestamp_millis());
        assert_eq!(list[0].id, last.id);
        assert_eq!(list[0].source, HistorySource::Detail);
    }

    #[test]
    fn test_capped_at_fifty() {
        let ledger = ledger();
        for n in 0..60 {
            let dish = Dish::new(
                format!("d{:02}", n),
                format!("Dish {}", n),
                Category::Meat,
                Cuisine::Home,
                Difficulty::Easy,
                10,
            );
            ledger.record_at(&dish, HistorySource::Search, t0() + Duration::seconds(n));
        }

        let list = ledger.list();
        assert_eq!(list.len(), 50);
        assert_eq!(list[0].dish_id, "d59");
        assert_eq!(list[49].dish_id, "d10");
    }

    #[test]
    fn test_remove_and_clear() {
        let ledger = ledger();
        let a = ledger.record(&dish("dish001"), HistorySource::Random);
        ledger.record(&dish("dish002"), HistorySource::Category);

        assert!(ledger.remove(a.id));
        assert!(!ledger.remove(a.id));
        assert_eq!(ids(&ledger.list()), vec!["dish002"]);

        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_recent() {
        let ledger = ledger();
        for (i, id) in ["dish001", "dish002", "dish003", "dish004", "dish005"].iter().enumerate() {
            ledger.record_at(&dish(id), HistorySource::Random, t0() + Duration::seconds(i as i64));
        }
        assert_eq!(ids(&ledger.recent(2)), vec!["dish005", "dish004"]);
        assert_eq!(ledger.recent(10).len(), 5);
    }

    #[test]
    fn test_filter_by_window() {
        let ledger = ledger();
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        // 2024-05-10 10:00 at +08:00
        let now = tz.with_ymd_and_hms(2024, 5, 10, 10, 0, 0).unwrap();
        let at = |d: Duration| (now - d).with_timezone(&Utc);

        ledger.record_at(&dish("dish001"), HistorySource::Random, at(Duration::days(10)));
        // 6 days before local midnight, exactly on the bound
        ledger.record_at(&dish("dish002"), HistorySource::Random, at(Duration::days(6) + Duration::hours(10)));
        // yesterday 23:00 local
        ledger.record_at(&dish("dish003"), HistorySource::Random, at(Duration::hours(11)));
        ledger.record_at(&dish("dish004"), HistorySource::Random, at(Duration::hours(1)));

        assert_eq!(ids(&ledger.filter_by_window_at(HistoryWindow::Today, &now)), vec!["dish004"]);
        assert_eq!(
            ids(&ledger.filter_by_window_at(HistoryWindow::Week, &now)),
            vec!["dish004", "dish003", "dish002"]
        );
        assert_eq!(ledger.filter_by_window_at(HistoryWindow::All, &now).len(), 4);
    }

    #[test]
    fn test_storage_failure_still_records() {
        let ledger = HistoryLedger::new(failing_store(), event_bus());
        ledger.record(&dish("dish003"), HistorySource::Detail);
        assert_eq!(ledger.len(), 1);
    }
}
