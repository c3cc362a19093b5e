// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - Every dish leaving the application layer carries `isFavorite`
// - Labels travel as translation keys; the shell localizes them
// - Conversion FROM domain entities only (never TO)

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::collections::HashSet;

use crate::domain::{
    DateStyle, Dish, FavoriteEntry, HistoryEntry, Preferences, RelativeTime, StatisticsSnapshot,
    Taxonomy, UserStatistics,
};
use crate::services::{RandomPick, Recommendation};

// ============================================================================
// DISH DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCardDto {
    #[serde(flatten)]
    pub dish: Dish,
    pub is_favorite: bool,
}

impl DishCardDto {
    pub fn new(dish: Dish, favorite_ids: &HashSet<String>) -> Self {
        let is_favorite = favorite_ids.contains(&dish.id);
        Self { dish, is_favorite }
    }

    pub fn annotate(dishes: Vec<Dish>, favorite_ids: &HashSet<String>) -> Vec<Self> {
        dishes
            .into_iter()
            .map(|dish| Self::new(dish, favorite_ids))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishDetailDto {
    #[serde(flatten)]
    pub card: DishCardDto,
    pub category_key: String,
    pub cuisine_key: String,
    pub difficulty_key: String,
    pub related: Vec<DishCardDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    #[serde(flatten)]
    pub card: DishCardDto,
    pub reason_key: String,
    pub tag_key: String,
}

impl RecommendationDto {
    pub fn new(recommendation: Recommendation, favorite_ids: &HashSet<String>) -> Self {
        Self {
            card: DishCardDto::new(recommendation.dish, favorite_ids),
            reason_key: recommendation.reason_key.to_string(),
            tag_key: recommendation.tag_key.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomPickDto {
    #[serde(flatten)]
    pub card: DishCardDto,
    /// False when nothing matched and the pick came from the whole catalog
    pub matched_criteria: bool,
}

impl RandomPickDto {
    pub fn new(pick: RandomPick, favorite_ids: &HashSet<String>) -> Self {
        Self {
            card: DishCardDto::new(pick.dish, favorite_ids),
            matched_criteria: pick.matched_criteria,
        }
    }
}

// ============================================================================
// HOME DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDto {
    pub today: Vec<RecommendationDto>,
    pub taxonomy: Taxonomy,
}

// ============================================================================
// LEDGER DTOs
// ============================================================================

/// Relative time as display text plus the key form for localizing shells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTextDto {
    pub text: String,
    pub key: String,
    pub params: Vec<(String, String)>,
}

impl TimeTextDto {
    pub fn new<Tz: TimeZone>(now: &DateTime<Tz>, timestamp_ms: i64, style: DateStyle) -> Self {
        let relative = RelativeTime::between(now, timestamp_ms);
        let (key, params) = relative.translation(style);
        Self {
            text: relative.format(style),
            key: key.to_string(),
            params: params
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItemDto {
    pub dish_id: String,
    pub favorite_time: i64,
    pub time: TimeTextDto,
    pub dish: Dish,
}

impl FavoriteItemDto {
    pub fn new<Tz: TimeZone>(entry: FavoriteEntry, now: &DateTime<Tz>) -> Self {
        Self {
            time: TimeTextDto::new(now, entry.favorite_time, DateStyle::MonthDayTime),
            dish_id: entry.dish_id,
            favorite_time: entry.favorite_time,
            dish: entry.dish,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemDto {
    pub id: String,
    pub dish_id: String,
    pub select_time: i64,
    pub time: TimeTextDto,
    pub source: String,
    pub source_key: String,
    pub is_favorite: bool,
    pub dish: Dish,
}

impl HistoryItemDto {
    pub fn new<Tz: TimeZone>(
        entry: HistoryEntry,
        now: &DateTime<Tz>,
        style: DateStyle,
        favorite_ids: &HashSet<String>,
    ) -> Self {
        Self {
            id: entry.id.to_string(),
            is_favorite: favorite_ids.contains(&entry.dish_id),
            time: TimeTextDto::new(now, entry.select_time, style),
            source: entry.source.as_str().to_string(),
            source_key: entry.source.label_key(),
            select_time: entry.select_time,
            dish_id: entry.dish_id,
            dish: entry.dish,
        }
    }
}

// ============================================================================
// SETTINGS / PROFILE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
    pub preferences: Preferences,
    pub taxonomy: Taxonomy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatisticsDto {
    pub history_count: u32,
    pub favorite_count: u32,
    pub cooking_count: u32,
    pub generated_at: String,
}

impl From<StatisticsSnapshot> for UserStatisticsDto {
    fn from(snapshot: StatisticsSnapshot) -> Self {
        let UserStatistics {
            history_count,
            favorite_count,
            cooking_count,
        } = snapshot.statistics;
        Self {
            history_count,
            favorite_count,
            cooking_count,
            generated_at: snapshot.generated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub statistics: UserStatisticsDto,
    pub recent: Vec<HistoryItemDto>,
    pub recommendations: Vec<DishCardDto>,
}
