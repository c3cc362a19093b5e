use chrono::{DateTime, Utc};
use pinyin::ToPinyin;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::dish::Dish;

/// A dish the user saved.
///
/// `dish` is a snapshot taken when the favorite was added. Later catalog
/// edits do not reach it; readers must tolerate stale values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub dish_id: String,

    /// Epoch milliseconds, set once at insertion
    pub favorite_time: i64,

    pub dish: Dish,
}

/// Projection orders for the favorites page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteSort {
    /// Newest first
    #[default]
    Time,
    Name,
    /// Highest first
    Rating,
}

impl FavoriteEntry {
    pub fn new(dish: Dish, at: DateTime<Utc>) -> Self {
        Self {
            dish_id: dish.id.clone(),
            favorite_time: at.timestamp_millis(),
            dish,
        }
    }
}

/// Sorts a copy of `entries`; the input order is left alone.
pub fn sort_favorites(entries: &[FavoriteEntry], sort: FavoriteSort) -> Vec<FavoriteEntry> {
    let mut sorted = entries.to_vec();
    match sort {
        FavoriteSort::Time => sorted.sort_by(|a, b| b.favorite_time.cmp(&a.favorite_time)),
        FavoriteSort::Name => sorted.sort_by(|a, b| compare_names(&a.dish.name, &b.dish.name)),
        FavoriteSort::Rating => sorted.sort_by(|a, b| {
            b.dish
                .rating
                .partial_cmp(&a.dish.rating)
                .unwrap_or(Ordering::Equal)
        }),
    }
    sorted
}

/// zh-CN style name order: Han characters compare by their pinyin
/// syllable, everything else case-folded. Code points break ties so the
/// order stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// One unit per character: the toneless pinyin of a Han character, or
/// the lowercased character itself
fn collation_key(name: &str) -> Vec<String> {
    name.chars()
        .map(|c| match c.to_pinyin() {
            Some(syllable) => syllable.plain().to_string(),
            None => c.to_lowercase().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish::{Category, Cuisine, Difficulty};
    use chrono::TimeZone;

    fn entry(id: &str, name: &str, rating: f32, millis: i64) -> FavoriteEntry {
        let mut dish = Dish::new(id, name, Category::Meat, Cuisine::Home, Difficulty::Easy, 10);
        dish.rating = rating;
        FavoriteEntry::new(dish, Utc.timestamp_millis_opt(millis).unwrap())
    }

    #[test]
    fn test_sort_projections_leave_input_untouched() {
        let entries = vec![
            entry("a", "banana", 4.1, 100),
            entry("b", "Apple", 4.9, 300),
            entry("c", "cherry", 3.0, 200),
        ];

        let by_time: Vec<_> = sort_favorites(&entries, FavoriteSort::Time)
            .into_iter()
            .map(|e| e.dish_id)
            .collect();
        assert_eq!(by_time, vec!["b", "c", "a"]);

        let by_name: Vec<_> = sort_favorites(&entries, FavoriteSort::Name)
            .into_iter()
            .map(|e| e.dish_id)
            .collect();
        assert_eq!(by_name, vec!["b", "a", "c"]);

        let by_rating: Vec<_> = sort_favorites(&entries, FavoriteSort::Rating)
            .into_iter()
            .map(|e| e.dish_id)
            .collect();
        assert_eq!(by_rating, vec!["b", "a", "c"]);

        assert_eq!(entries[0].dish_id, "a");
    }

    #[test]
    fn test_han_names_sort_by_pinyin() {
        let entries: Vec<_> = ["宫保鸡丁", "麻婆豆腐", "白切鸡", "西红柿鸡蛋汤", "蛋炒饭"]
            .iter()
            .enumerate()
            .map(|(i, name)| entry(&format!("dish00{}", i + 1), name, 4.0, i as i64))
            .collect();

        let by_name: Vec<_> = sort_favorites(&entries, FavoriteSort::Name)
            .into_iter()
            .map(|e| e.dish.name)
            .collect();
        assert_eq!(
            by_name,
            vec!["白切鸡", "蛋炒饭", "宫保鸡丁", "麻婆豆腐", "西红柿鸡蛋汤"]
        );
    }

    #[test]
    fn test_name_order_is_total() {
        assert_eq!(compare_names("Apple", "apple"), Ordering::Less);
        assert_eq!(compare_names("鸡", "鸡"), Ordering::Equal);
        assert_eq!(compare_names("蛋", "汤"), Ordering::Less);
    }

    #[test]
    fn test_camel_case_layout() {
        let json = serde_json::to_value(entry("dish001", "x", 1.0, 42)).unwrap();
        assert_eq!(json["dishId"], "dish001");
        assert_eq!(json["favoriteTime"], 42);
    }
}
