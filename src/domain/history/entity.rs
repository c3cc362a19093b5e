use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dish::Dish;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// One dish-view event.
///
/// `dish` is a snapshot frozen at record time, never re-linked to the
/// live catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Entry identity used by manual deletion.
    /// Blobs written without one get a fresh id on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub dish_id: String,

    /// Epoch milliseconds
    pub select_time: i64,

    pub source: HistorySource,

    pub dish: Dish,
}

/// Where the user came from when the dish was viewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistorySource {
    Random,
    Category,
    Cuisine,
    Search,
    Recommendation,
    Detail,
    Favorite,
}

/// Time window for the history page filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryWindow {
    Today,
    Week,
    #[default]
    All,
}

impl HistoryEntry {
    pub fn new(dish: Dish, source: HistorySource, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            dish_id: dish.id.clone(),
            select_time: at.timestamp_millis(),
            source,
            dish,
        }
    }
}

impl HistorySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistorySource::Random => "random",
            HistorySource::Category => "category",
            HistorySource::Cuisine => "cuisine",
            HistorySource::Search => "search",
            HistorySource::Recommendation => "recommendation",
            HistorySource::Detail => "detail",
            HistorySource::Favorite => "favorite",
        }
    }

    /// Translation key for the source label
    pub fn label_key(&self) -> String {
        format!("history.source.{}", self.as_str())
    }
}

impl std::fmt::Display for HistorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HistoryWindow {
    /// Inclusive lower bound in epoch millis, `None` for `All`.
    ///
    /// "today" starts at local midnight of `now`; "week" starts six days
    /// before that.
    pub fn lower_bound<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<i64> {
        match self {
            HistoryWindow::All => None,
            HistoryWindow::Today => Some(start_of_day_millis(now)),
            HistoryWindow::Week => Some(start_of_day_millis(now) - 6 * DAY_MILLIS),
        }
    }

    pub fn contains<Tz: TimeZone>(&self, entry: &HistoryEntry, now: &DateTime<Tz>) -> bool {
        self.lower_bound(now)
            .map_or(true, |bound| entry.select_time >= bound)
    }
}

fn start_of_day_millis<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let midnight = now.date_naive().and_time(chrono::NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start.timestamp_millis(),
        // Midnight skipped by a DST jump; the naive instant is close enough
        None => midnight.and_utc().timestamp_millis(),
    }
}
