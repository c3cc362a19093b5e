// All events in the system.
// Each event represents an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No ledger logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{FilterCriteria, HistorySource};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// FAVORITES
// ============================================================================

/// Emitted when a dish is added to favorites (not on idempotent re-adds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishFavorited {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub dish_id: String,
    pub favorite_count: usize,
}

impl DishFavorited {
    pub fn new(dish_id: String, favorite_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            dish_id,
            favorite_count,
        }
    }
}

impl_domain_event!(DishFavorited);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishUnfavorited {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub dish_id: String,
    pub favorite_count: usize,
}

impl DishUnfavorited {
    pub fn new(dish_id: String, favorite_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            dish_id,
            favorite_count,
        }
    }
}

impl_domain_event!(DishUnfavorited);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesBatchRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub dish_ids: Vec<String>,
    pub removed: usize,
}

impl FavoritesBatchRemoved {
    pub fn new(dish_ids: Vec<String>, removed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            dish_ids,
            removed,
        }
    }
}

impl_domain_event!(FavoritesBatchRemoved);

// ============================================================================
// HISTORY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecorded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: Uuid,
    pub dish_id: String,
    pub source: HistorySource,
}

impl HistoryRecorded {
    pub fn new(entry_id: Uuid, dish_id: String, source: HistorySource) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
            dish_id,
            source,
        }
    }
}

impl_domain_event!(HistoryRecorded);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: Uuid,
}

impl HistoryEntryRemoved {
    pub fn new(entry_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
        }
    }
}

impl_domain_event!(HistoryEntryRemoved);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub removed: usize,
}

impl HistoryCleared {
    pub fn new(removed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            removed,
        }
    }
}

impl_domain_event!(HistoryCleared);

// ============================================================================
// PREFERENCES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl PreferencesUpdated {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for PreferencesUpdated {
    fn default() -> Self {
        Self::new()
    }
}

impl_domain_event!(PreferencesUpdated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesReset {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl PreferencesReset {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for PreferencesReset {
    fn default() -> Self {
        Self::new()
    }
}

impl_domain_event!(PreferencesReset);

// ============================================================================
// SELECTION
// ============================================================================

/// Emitted after a random pick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishPicked {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub dish_id: String,
    /// False when nothing matched and the pick fell back to the whole catalog
    pub matched_criteria: bool,
}

impl DishPicked {
    pub fn new(dish_id: String, matched_criteria: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            dish_id,
            matched_criteria,
        }
    }
}

impl_domain_event!(DishPicked);

/// Emitted when a deferred search completes and is still current
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub sequence: u64,
    pub criteria: FilterCriteria,
    pub result_count: usize,
}

impl SearchCompleted {
    pub fn new(sequence: u64, criteria: FilterCriteria, result_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            sequence,
            criteria,
            result_count,
        }
    }
}

impl_domain_event!(SearchCompleted);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(DishFavorited::new("dish001".into(), 1).event_type(), "DishFavorited");
        assert_eq!(HistoryCleared::new(3).event_type(), "HistoryCleared");
        assert_eq!(PreferencesReset::new().event_type(), "PreferencesReset");
    }

    #[test]
    fn test_events_have_distinct_ids() {
        let a = HistoryEntryRemoved::new(Uuid::new_v4());
        let b = HistoryEntryRemoved::new(a.entry_id);
        assert_ne!(a.event_id(), b.event_id());
    }
}
