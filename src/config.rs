// Runtime configuration
//
// Every field has a default. `from_env` reads
// DISHPICK_* overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::db::default_database_path;
use crate::error::AppResult;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 800;
pub const DEFAULT_QUICK_CHOICE_DELAY_MS: u64 = 1500;
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;
pub const DEFAULT_ACTION_LOG_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub version: String,
    /// Base URL of the cloud functions; `None` keeps the remote mirror off
    pub api_base_url: Option<String>,
    pub default_page_size: usize,
    /// Artificial latency before a filtered search completes
    pub search_delay_ms: u64,
    /// Latency of the home page's quick choice
    pub quick_choice_delay_ms: u64,
    /// Lowered for tests; never above `DEFAULT_HISTORY_CAPACITY`
    pub history_capacity: usize,
    /// Lowered for tests; never above `DEFAULT_ACTION_LOG_CAPACITY`
    pub action_log_capacity: usize,
    /// `None` uses `{data_dir}/dishpick/dishpick.db`
    pub database_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_base_url: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            quick_choice_delay_ms: DEFAULT_QUICK_CHOICE_DELAY_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            action_log_capacity: DEFAULT_ACTION_LOG_CAPACITY,
            database_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an explicit variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            version: defaults.version,
            api_base_url: lookup("DISHPICK_API_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            default_page_size: parse_or(&lookup, "DISHPICK_PAGE_SIZE", defaults.default_page_size),
            search_delay_ms: parse_or(&lookup, "DISHPICK_SEARCH_DELAY_MS", defaults.search_delay_ms),
            quick_choice_delay_ms: parse_or(
                &lookup,
                "DISHPICK_QUICK_CHOICE_DELAY_MS",
                defaults.quick_choice_delay_ms,
            ),
            history_capacity: defaults.history_capacity,
            action_log_capacity: defaults.action_log_capacity,
            database_path: lookup("DISHPICK_DATABASE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn quick_choice_delay(&self) -> Duration {
        Duration::from_millis(self.quick_choice_delay_ms)
    }

    pub fn history_limit(&self) -> usize {
        self.history_capacity.min(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn action_log_limit(&self) -> usize {
        self.action_log_capacity.min(DEFAULT_ACTION_LOG_CAPACITY)
    }

    /// Configured database path, or the per-user default
    pub fn resolve_database_path(&self) -> AppResult<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => default_database_path(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.search_delay(), Duration::from_millis(800));
        assert_eq!(config.quick_choice_delay(), Duration::from_millis(1500));
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.action_log_capacity, 100);
        assert!(config.api_base_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DISHPICK_API_BASE_URL", "https://example.test/fn/"),
            ("DISHPICK_SEARCH_DELAY_MS", "0"),
            ("DISHPICK_DATABASE_PATH", "/tmp/dp.db"),
        ]));

        assert_eq!(config.api_base_url.as_deref(), Some("https://example.test/fn"));
        assert_eq!(config.search_delay_ms, 0);
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/dp.db")));
        assert_eq!(config.resolve_database_path().unwrap(), PathBuf::from("/tmp/dp.db"));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DISHPICK_PAGE_SIZE", "lots"),
            ("DISHPICK_API_BASE_URL", "  "),
        ]));

        assert_eq!(config.default_page_size, 10);
        assert!(config.api_base_url.is_none());
    }

    #[test]
    fn test_capacities_are_not_raised() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DISHPICK_HISTORY_CAPACITY", "500"),
            ("DISHPICK_ACTION_LOG_CAPACITY", "1000"),
        ]));
        assert_eq!(config.history_limit(), 50);
        assert_eq!(config.action_log_limit(), 100);

        let config: AppConfig =
            serde_json::from_str(r#"{"history_capacity":80,"action_log_capacity":3}"#).unwrap();
        assert_eq!(config.history_limit(), 50);
        assert_eq!(config.action_log_limit(), 3);
    }

    #[test]
    fn test_partial_json_config() {
        let config: AppConfig = serde_json::from_str(r#"{"search_delay_ms":5}"#).unwrap();
        assert_eq!(config.search_delay_ms, 5);
        assert_eq!(config.history_capacity, 50);
    }
}
