// Application context
//
// Built once at start-up and passed by reference to every command.
// Wiring order follows the layers: infrastructure, stores, services,
// event handler registration.

use std::sync::Arc;

use crate::application::ports::UiPorts;
use crate::config::AppConfig;
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
};
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{CloudFunctionClient, NoopRemoteMirror, RemoteMirror};
use crate::repositories::{
    CatalogRepository, CatalogStore, InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore,
};
use crate::services::{
    ActionLog, FavoritesLedger, HistoryLedger, PreferencesStore, RandomSelector,
    RecommendationService, SearchService, StatisticsService, SyncService,
};

/// Everything a command can reach. All fields are Arc-wrapped so the
/// context can be shared with spawned tasks.
pub struct AppContext {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub favorites: Arc<FavoritesLedger>,
    pub history: Arc<HistoryLedger>,
    pub preferences: Arc<PreferencesStore>,
    pub actions: Arc<ActionLog>,
    pub random: Arc<RandomSelector>,
    pub search: Arc<SearchService>,
    pub recommendations: Arc<RecommendationService>,
    pub statistics: Arc<StatisticsService>,
    pub sync: Arc<SyncService>,
    pub ui: UiPorts,
}

impl AppContext {
    /// Wire the services over explicit collaborators
    pub fn new(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<dyn CatalogRepository>,
        mirror: Arc<dyn RemoteMirror>,
        random: Arc<RandomSelector>,
        ui: UiPorts,
    ) -> Self {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());

        // 2. LEDGERS
        let favorites = Arc::new(FavoritesLedger::new(store.clone(), event_bus.clone()));
        let history = Arc::new(HistoryLedger::with_capacity(
            store.clone(),
            event_bus.clone(),
            config.history_limit(),
        ));
        let preferences = Arc::new(PreferencesStore::new(store.clone(), event_bus.clone()));
        let actions = Arc::new(ActionLog::with_capacity(store, config.action_log_limit()));

        // 3. SERVICES
        let search = Arc::new(SearchService::new(
            catalog.clone(),
            event_bus.clone(),
            config.search_delay(),
        ));
        let recommendations = Arc::new(RecommendationService::new(catalog.clone(), random.clone()));
        let statistics = Arc::new(StatisticsService::new(
            history.clone(),
            favorites.clone(),
            actions.clone(),
            event_bus.clone(),
        ));
        let sync = Arc::new(SyncService::new(
            mirror,
            preferences.clone(),
            history.clone(),
            favorites.clone(),
        ));

        // 4. EVENT HANDLER REGISTRATION
        statistics.register_event_handlers();

        Self {
            config,
            event_bus,
            catalog,
            favorites,
            history,
            preferences,
            actions,
            random,
            search,
            recommendations,
            statistics,
            sync,
            ui,
        }
    }

    /// Built-in catalog over SQLite, with the cloud mirror when a base URL
    /// is configured
    pub fn open(config: AppConfig, ui: UiPorts) -> AppResult<Self> {
        let db_path = config.resolve_database_path()?;
        let pool = Arc::new(create_connection_pool(&db_path)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }
        log::info!("Opened store at {}", db_path.display());

        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(pool));
        let catalog: Arc<dyn CatalogRepository> = Arc::new(CatalogStore::builtin()?);
        let mirror: Arc<dyn RemoteMirror> = match &config.api_base_url {
            Some(base_url) => Arc::new(CloudFunctionClient::new(base_url.clone())?),
            None => Arc::new(NoopRemoteMirror),
        };

        Ok(Self::new(
            config,
            store,
            catalog,
            mirror,
            Arc::new(RandomSelector::new()),
            ui,
        ))
    }

    /// Volatile context over the built-in catalog, no mirror
    pub fn in_memory(config: AppConfig, ui: UiPorts) -> AppResult<Self> {
        Ok(Self::new(
            config,
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(CatalogStore::builtin()?),
            Arc::new(NoopRemoteMirror),
            Arc::new(RandomSelector::new()),
            ui,
        ))
    }
}
