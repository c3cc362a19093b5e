// Remote mirror port
//
// One method per cloud function on the backend. Local ledgers
// stay authoritative; a mirror only receives copies and answers optional
// catalog queries.

use async_trait::async_trait;

use crate::domain::{Category, Dish, FilterCriteria, HistorySource, Preferences};
use crate::error::AppResult;

#[async_trait]
pub trait RemoteMirror: Send + Sync {
    async fn recommended_dishes(&self, limit: usize) -> AppResult<Vec<Dish>>;
    async fn dish_detail(&self, dish_id: &str) -> AppResult<Option<Dish>>;
    async fn random_dish(&self, criteria: &FilterCriteria) -> AppResult<Option<Dish>>;
    async fn dishes_by_category(&self, category: Category, page: usize, limit: usize) -> AppResult<Vec<Dish>>;
    async fn search_dishes(&self, criteria: &FilterCriteria) -> AppResult<Vec<Dish>>;

    async fn save_preferences(&self, preferences: &Preferences) -> AppResult<()>;
    async fn add_to_history(&self, dish_id: &str, source: HistorySource) -> AppResult<()>;
    async fn add_to_favorites(&self, dish_id: &str) -> AppResult<()>;
    async fn remove_from_favorites(&self, dish_id: &str) -> AppResult<()>;
    async fn record_user_action(&self, action: &str, data: &serde_json::Value) -> AppResult<()>;

    /// False for the offline mirror
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Offline mirror: queries come back empty, pushes are accepted and dropped
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRemoteMirror;

#[async_trait]
impl RemoteMirror for NoopRemoteMirror {
    async fn recommended_dishes(&self, _limit: usize) -> AppResult<Vec<Dish>> {
        Ok(Vec::new())
    }

    async fn dish_detail(&self, _dish_id: &str) -> AppResult<Option<Dish>> {
        Ok(None)
    }

    async fn random_dish(&self, _criteria: &FilterCriteria) -> AppResult<Option<Dish>> {
        Ok(None)
    }

    async fn dishes_by_category(&self, _category: Category, _page: usize, _limit: usize) -> AppResult<Vec<Dish>> {
        Ok(Vec::new())
    }

    async fn search_dishes(&self, _criteria: &FilterCriteria) -> AppResult<Vec<Dish>> {
        Ok(Vec::new())
    }

    async fn save_preferences(&self, _preferences: &Preferences) -> AppResult<()> {
        Ok(())
    }

    async fn add_to_history(&self, _dish_id: &str, _source: HistorySource) -> AppResult<()> {
        Ok(())
    }

    async fn add_to_favorites(&self, _dish_id: &str) -> AppResult<()> {
        Ok(())
    }

    async fn remove_from_favorites(&self, _dish_id: &str) -> AppResult<()> {
        Ok(())
    }

    async fn record_user_action(&self, _action: &str, _data: &serde_json::Value) -> AppResult<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
