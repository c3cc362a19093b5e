// Services Module - Orchestration Layer
//
// RULES:
// - Ledgers own their persisted lists; nothing else writes those keys
// - Services take collaborators as Arc<dyn ...> and never reach for globals
// - Storage failures on the ledger paths are logged, never surfaced

pub mod action_log;
pub mod favorites_ledger;
pub mod filter_engine;
pub mod history_ledger;
pub mod preferences_store;
pub mod random_selector;
pub mod recommendation_service;
pub mod search_service;
pub mod statistics_service;
pub mod sync_service;

mod ledger;

#[cfg(test)]
mod test_support;

pub use action_log::ActionLog;
pub use favorites_ledger::FavoritesLedger;
pub use history_ledger::HistoryLedger;
pub use preferences_store::PreferencesStore;
pub use random_selector::{RandomPick, RandomSelector};
pub use recommendation_service::{Recommendation, RecommendationService};
pub use search_service::{SearchOutcome, SearchService, SearchTicket};
pub use statistics_service::StatisticsService;
pub use sync_service::{PartOutcome, SyncReport, SyncService};
