// Internal Event System - Public API
//
// The handler type alias stays private to the bus module.

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Favorites
    DishFavorited,
    DishUnfavorited,
    FavoritesBatchRemoved,
    // History
    HistoryCleared,
    HistoryEntryRemoved,
    HistoryRecorded,
    // Preferences
    PreferencesReset,
    PreferencesUpdated,
    // Selection
    DishPicked,
    SearchCompleted,
};

pub use bus::{EventBus, EventLogEntry};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
