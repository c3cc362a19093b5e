use serde::{Deserialize, Serialize};

use super::dish::{Category, Cuisine, Difficulty, Dish};

/// Optional filter predicates, ANDed together.
/// An absent field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Cuisine>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    /// Inclusive upper bound in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cooking_time: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_cuisine(mut self, cuisine: Cuisine) -> Self {
        self.cuisine = Some(cuisine);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_max_cooking_time(mut self, minutes: u32) -> Self {
        self.max_cooking_time = Some(minutes);
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Keyword trimmed and lowercased; blank keywords count as absent
    pub fn normalized_keyword(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
    }

    /// True when no field constrains anything
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.cuisine.is_none()
            && self.difficulty.is_none()
            && self.max_cooking_time.is_none()
            && self.normalized_keyword().is_none()
    }

    /// Whether a dish satisfies every set predicate
    pub fn matches(&self, dish: &Dish) -> bool {
        self.matches_with_keyword(dish, self.normalized_keyword().as_deref())
    }

    /// Same as `matches` with the keyword already normalized, so callers
    /// filtering many dishes lowercase it once.
    pub(crate) fn matches_with_keyword(&self, dish: &Dish, keyword: Option<&str>) -> bool {
        if self.category.is_some_and(|c| c != dish.category) {
            return false;
        }
        if self.cuisine.is_some_and(|c| c != dish.cuisine) {
            return false;
        }
        if self.difficulty.is_some_and(|d| d != dish.difficulty) {
            return false;
        }
        if self.max_cooking_time.is_some_and(|max| dish.cooking_time > max) {
            return false;
        }
        keyword.map_or(true, |k| dish.matches_keyword(k))
    }
}
