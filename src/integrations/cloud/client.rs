// Cloud function client
//
// ARCHITECTURE:
// - Each cloud function is a POST to `{base_url}/{name}` with a JSON body
// - Responses carry `{"success": bool, "message"?: string, "data"?: any}`
// - Anything but `success: true` is a Remote error
//
// This is infrastructure: it returns plain records and never touches the
// local ledgers.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::domain::{Category, Dish, FilterCriteria, HistorySource, Preferences};
use crate::error::{AppError, AppResult};
use crate::integrations::cloud::mirror::RemoteMirror;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Response envelope shared by every cloud function
#[derive(Debug, Deserialize)]
struct CloudResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    data: Option<serde_json::Value>,
}

impl CloudResponse {
    fn into_result(self, function: &str) -> AppResult<serde_json::Value> {
        if !self.success {
            let message = self.message.unwrap_or_else(|| "request failed".to_string());
            return Err(AppError::Remote(format!("{}: {}", function, message)));
        }
        Ok(self.data.unwrap_or(serde_json::Value::Null))
    }
}

pub struct CloudFunctionClient {
    base_url: String,
    http_client: Client,
}

impl CloudFunctionClient {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Remote(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn function_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    /// Call `name` and return the envelope's `data`
    async fn call(&self, name: &str, data: serde_json::Value) -> AppResult<serde_json::Value> {
        let response = self
            .http_client
            .post(self.function_url(name))
            .header(header::ACCEPT, "application/json")
            .json(&data)
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("{} request failed: {}", name, e)))?;

        if !response.status().is_success() {
            return Err(AppError::Remote(format!(
                "{} returned status: {}",
                name,
                response.status()
            )));
        }

        let envelope: CloudResponse = response
            .json()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to parse {} response: {}", name, e)))?;

        envelope.into_result(name)
    }

    async fn call_for<T: DeserializeOwned>(&self, name: &str, data: serde_json::Value) -> AppResult<T> {
        let value = self.call(name, data).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl RemoteMirror for CloudFunctionClient {
    async fn recommended_dishes(&self, limit: usize) -> AppResult<Vec<Dish>> {
        self.call_for("getRecommendedDishes", json!({ "limit": limit })).await
    }

    async fn dish_detail(&self, dish_id: &str) -> AppResult<Option<Dish>> {
        self.call_for("getDishDetail", json!({ "dishId": dish_id })).await
    }

    async fn random_dish(&self, criteria: &FilterCriteria) -> AppResult<Option<Dish>> {
        self.call_for("getRandomDish", serde_json::to_value(criteria)?).await
    }

    async fn dishes_by_category(&self, category: Category, page: usize, limit: usize) -> AppResult<Vec<Dish>> {
        self.call_for(
            "getDishesByCategory",
            json!({ "category": category, "page": page, "limit": limit }),
        )
        .await
    }

    async fn search_dishes(&self, criteria: &FilterCriteria) -> AppResult<Vec<Dish>> {
        self.call_for("searchDishes", serde_json::to_value(criteria)?).await
    }

    async fn save_preferences(&self, preferences: &Preferences) -> AppResult<()> {
        self.call("saveUserPreferences", json!({ "preferences": preferences }))
            .await
            .map(|_| ())
    }

    async fn add_to_history(&self, dish_id: &str, source: HistorySource) -> AppResult<()> {
        self.call("addToHistory", json!({ "dishId": dish_id, "source": source }))
            .await
            .map(|_| ())
    }

    async fn add_to_favorites(&self, dish_id: &str) -> AppResult<()> {
        self.call("addToFavorites", json!({ "dishId": dish_id }))
            .await
            .map(|_| ())
    }

    async fn remove_from_favorites(&self, dish_id: &str) -> AppResult<()> {
        self.call("removeFromFavorites", json!({ "dishId": dish_id }))
            .await
            .map(|_| ())
    }

    async fn record_user_action(&self, action: &str, data: &serde_json::Value) -> AppResult<()> {
        self.call("recordUserAction", json!({ "action": action, "data": data }))
            .await
            .map(|_| ())
    }
}
