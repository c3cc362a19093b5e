use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user interaction, kept for analytics only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogEntry {
    pub action: String,

    #[serde(default)]
    pub data: serde_json::Value,

    /// Epoch milliseconds
    pub timestamp: i64,

    /// Page the action happened on
    #[serde(default)]
    pub page: String,
}

impl ActionLogEntry {
    pub fn new(
        action: impl Into<String>,
        data: serde_json::Value,
        page: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            action: action.into(),
            data,
            timestamp: at.timestamp_millis(),
            page: page.into(),
        }
    }
}

/// Action names written by the page flows
pub mod actions {
    pub const RANDOM_CHOICE: &str = "random_choice";
    pub const QUICK_CHOICE: &str = "quick_choice";
    pub const FILTER_SEARCH: &str = "filter_search";
    pub const VIEW_DISH: &str = "view_dish";
    pub const VIEW_DETAIL: &str = "view_detail";
    pub const VIEW_RECOMMENDATION: &str = "view_recommendation";
    pub const VIEW_RECENT: &str = "view_recent";
    pub const BROWSE_CATEGORY: &str = "browse_category";
    pub const BROWSE_CUISINE: &str = "browse_cuisine";
    pub const ADD_FAVORITE: &str = "add_favorite";
    pub const REMOVE_FAVORITE: &str = "remove_favorite";
    pub const REMOVE_BATCH_FAVORITES: &str = "remove_batch_favorites";
    pub const SORT_FAVORITES: &str = "sort_favorites";
    pub const ADD_TO_HISTORY: &str = "add_to_history";
    pub const START_COOKING: &str = "start_cooking";
    pub const FILTER_HISTORY: &str = "filter_history";
    pub const DELETE_HISTORY_ITEM: &str = "delete_history_item";
    pub const CLEAR_ALL_HISTORY: &str = "clear_all_history";
    pub const SAVE_PREFERENCES: &str = "save_preferences";
    pub const RESET_PREFERENCES: &str = "reset_preferences";
}

/// Page names attached to action log entries
pub mod pages {
    pub const INDEX: &str = "index";
    pub const CHOOSE: &str = "choose";
    pub const DETAIL: &str = "detail";
    pub const FAVORITES: &str = "favorites";
    pub const HISTORY: &str = "history";
    pub const SETTINGS: &str = "settings";
    pub const PROFILE: &str = "profile";
}
