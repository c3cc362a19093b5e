// Domain root: declares every domain module and re-exports its public API.
// Other layers import from `crate::domain::*`.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod action;
pub mod criteria;
pub mod dish;
pub mod favorite;
pub mod history;
pub mod preferences;
pub mod relative_time;
pub mod statistics;
pub mod taxonomy;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Catalog
pub use dish::{validate_catalog, validate_dish, Category, Cuisine, Difficulty, Dish, Nutrition};
pub use taxonomy::{CategoryInfo, CookingTimeOption, CuisineInfo, DifficultyOption, Taxonomy};

// Filtering
pub use criteria::FilterCriteria;

// Ledgers
pub use favorite::{sort_favorites, FavoriteEntry, FavoriteSort};
pub use history::{HistoryEntry, HistorySource, HistoryWindow};

// Settings
pub use preferences::{Preferences, PreferencesPatch};

// Analytics
pub use action::ActionLogEntry;
pub use statistics::{StatisticsSnapshot, UserStatistics};

pub use relative_time::{format_relative_time, DateStyle, RelativeTime};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of catalog rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
