use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::dish::{Cuisine, Difficulty};

pub const DEFAULT_MAX_COOKING_TIME: u32 = 60;

/// The user's settings singleton.
///
/// Every field has a default, so a partially written blob still loads:
/// missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub favorite_cuisines: BTreeSet<Cuisine>,
    pub disliked_ingredients: BTreeSet<String>,
    pub difficulty_level: Difficulty,
    /// Minutes
    pub max_cooking_time: u32,
    pub vegetarian_only: bool,
    pub smart_recommend: bool,
    pub seasonal_recommend: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            favorite_cuisines: BTreeSet::new(),
            disliked_ingredients: BTreeSet::new(),
            difficulty_level: Difficulty::Easy,
            max_cooking_time: DEFAULT_MAX_COOKING_TIME,
            vegetarian_only: false,
            smart_recommend: true,
            seasonal_recommend: true,
        }
    }
}

/// Shallow partial update; `None` leaves the field as is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesPatch {
    pub favorite_cuisines: Option<BTreeSet<Cuisine>>,
    pub disliked_ingredients: Option<BTreeSet<String>>,
    pub difficulty_level: Option<Difficulty>,
    pub max_cooking_time: Option<u32>,
    pub vegetarian_only: Option<bool>,
    pub smart_recommend: Option<bool>,
    pub seasonal_recommend: Option<bool>,
}

impl Preferences {
    /// Apply a patch field by field
    pub fn apply(&mut self, patch: PreferencesPatch) {
        if let Some(cuisines) = patch.favorite_cuisines {
            self.favorite_cuisines = cuisines;
        }
        if let Some(ingredients) = patch.disliked_ingredients {
            self.disliked_ingredients = ingredients;
        }
        if let Some(level) = patch.difficulty_level {
            self.difficulty_level = level;
        }
        if let Some(minutes) = patch.max_cooking_time {
            self.max_cooking_time = minutes;
        }
        if let Some(flag) = patch.vegetarian_only {
            self.vegetarian_only = flag;
        }
        if let Some(flag) = patch.smart_recommend {
            self.smart_recommend = flag;
        }
        if let Some(flag) = patch.seasonal_recommend {
            self.seasonal_recommend = flag;
        }
    }
}

impl PreferencesPatch {
    pub fn is_empty(&self) -> bool {
        *self == PreferencesPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.difficulty_level, Difficulty::Easy);
        assert_eq!(prefs.max_cooking_time, 60);
        assert!(prefs.favorite_cuisines.is_empty());
        assert!(!prefs.vegetarian_only);
        assert!(prefs.smart_recommend && prefs.seasonal_recommend);
    }

    #[test]
    fn test_partial_blob_merges_with_defaults() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"maxCookingTime":30,"difficultyLevel":"简单"}"#).unwrap();
        assert_eq!(prefs.max_cooking_time, 30);
        assert_eq!(prefs.difficulty_level, Difficulty::Easy);
        assert!(prefs.smart_recommend);
    }

    #[test]
    fn test_apply_is_shallow() {
        let mut prefs = Preferences::default();
        prefs.apply(PreferencesPatch {
            max_cooking_time: Some(30),
            ..Default::default()
        });
        assert_eq!(prefs.max_cooking_time, 30);
        assert_eq!(prefs.difficulty_level, Difficulty::Easy);
    }
}
