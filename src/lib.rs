// dishpick - "what should I cook today" core
//
// Architecture:
// - Domain-centric: dish catalog, criteria and ledger entries live in `domain`
// - Local-first: favorites, history, preferences and the action log persist
//   to a key-value store; the cloud mirror only receives copies
// - Event-driven: ledgers announce changes on a synchronous event bus
// - Explicit: the AppContext is built from config and passed by reference
// - Application Layer: page commands for a UI shell

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    format_relative_time,
    sort_favorites,
    // Settings
    Preferences,
    PreferencesPatch,
    // Catalog
    Category,
    Cuisine,
    Difficulty,
    Dish,
    Nutrition,
    Taxonomy,
    // Filtering
    FilterCriteria,
    // Ledgers
    FavoriteEntry,
    FavoriteSort,
    HistoryEntry,
    HistorySource,
    HistoryWindow,
    // Analytics
    ActionLogEntry,
    UserStatistics,
};

// ============================================================================
// PUBLIC API - Errors, config, events
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use events::{create_event_bus, DomainEvent, EventBus, EventLogEntry};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use repositories::{
    CatalogRepository, CatalogStore, InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    ActionLog, FavoritesLedger, HistoryLedger, PreferencesStore, RandomPick, RandomSelector,
    RecommendationService, SearchOutcome, SearchService, StatisticsService, SyncReport,
    SyncService,
};

// ============================================================================
// PUBLIC API - Application
// ============================================================================

pub use application::{AppContext, ErrorResponse, UiPorts};
pub use integrations::{CloudFunctionClient, NoopRemoteMirror, RemoteMirror};
