use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counters shown on the profile page.
/// Derived from the ledgers and the action log, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub history_count: u32,
    pub favorite_count: u32,
    /// Number of `start_cooking` actions
    pub cooking_count: u32,
}

/// A statistics value together with the moment it was computed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub statistics: UserStatistics,
    pub generated_at: DateTime<Utc>,
}

impl StatisticsSnapshot {
    pub fn new(statistics: UserStatistics, generated_at: DateTime<Utc>) -> Self {
        Self {
            statistics,
            generated_at,
        }
    }
}

impl std::fmt::Display for UserStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "history={} favorites={} cooking={}",
            self.history_count, self.favorite_count, self.cooking_count
        )
    }
}
