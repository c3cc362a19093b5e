use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::DEFAULT_ACTION_LOG_CAPACITY;
use crate::domain::ActionLogEntry;
use crate::repositories::{keys, KeyValueStore};
use crate::services::ledger::PersistedList;

/// Capped ring buffer of user interactions.
///
/// Write-only for the rest of the crate apart from the profile counters.
/// Appending never fails the caller.
pub struct ActionLog {
    entries: PersistedList<ActionLogEntry>,
    capacity: usize,
}

impl ActionLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_capacity(store, DEFAULT_ACTION_LOG_CAPACITY)
    }

    pub fn with_capacity(store: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        Self {
            entries: PersistedList::new(store, keys::ACTIONS),
            capacity: capacity.max(1),
        }
    }

    pub fn append(&self, action: &str, data: serde_json::Value, page: &str) {
        self.append_at(action, data, page, Utc::now())
    }

    /// Oldest entries drop off the front once past capacity
    pub fn append_at(&self, action: &str, data: serde_json::Value, page: &str, at: DateTime<Utc>) {
        let capacity = self.capacity;
        self.entries.mutate(|entries| {
            entries.push(ActionLogEntry::new(action, data, page, at));
            if entries.len() > capacity {
                let overflow = entries.len() - capacity;
                entries.drain(..overflow);
            }
            ((), true)
        });
        log::trace!("Action {} on {}", action, page);
    }

    /// Oldest first
    pub fn entries(&self) -> Vec<ActionLogEntry> {
        self.entries.snapshot()
    }

    pub fn count_action(&self, action: &str) -> usize {
        self.entries
            .read(|entries| entries.iter().filter(|e| e.action == action).count())
    }
}
