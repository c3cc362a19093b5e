use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// A single catalog record.
/// Dishes are owned by the catalog and never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Stable identifier, unique within the catalog
    pub id: String,

    pub name: String,

    pub category: Category,

    pub cuisine: Cuisine,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub description: String,

    pub difficulty: Difficulty,

    /// Minutes
    pub cooking_time: u32,

    #[serde(default)]
    pub calories: u32,

    /// Ordered as displayed
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Ordered cooking steps
    #[serde(default)]
    pub steps: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub nutrition: Nutrition,

    /// 0.0 ..= 5.0
    #[serde(default)]
    pub rating: f32,

    #[serde(default)]
    pub favorite_count: u32,
}

/// Macro values per serving plus the audience note
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    pub fiber: f32,
    #[serde(default)]
    pub suitable_for: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Meat,
    Vegetable,
    Soup,
    Staple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cuisine {
    Sichuan,
    Cantonese,
    Shandong,
    Jiangsu,
    Home,
}

/// Canonical difficulty key.
/// Older persisted blobs carry the localized label, accepted on read only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[serde(alias = "简单")]
    Easy,
    #[serde(alias = "中等")]
    Medium,
    #[serde(alias = "困难")]
    Hard,
}

impl Dish {
    /// Create a dish with the required fields; the rest start empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        cuisine: Cuisine,
        difficulty: Difficulty,
        cooking_time: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            cuisine,
            image_url: String::new(),
            description: String::new(),
            difficulty,
            cooking_time,
            calories: 0,
            ingredients: Vec::new(),
            steps: Vec::new(),
            tags: Vec::new(),
            nutrition: Nutrition::default(),
            rating: 0.0,
            favorite_count: 0,
        }
    }

    /// Case-insensitive substring match over name, description and tags.
    /// `needle` must already be lowercased.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Meat,
        Category::Vegetable,
        Category::Soup,
        Category::Staple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meat => "meat",
            Category::Vegetable => "vegetable",
            Category::Soup => "soup",
            Category::Staple => "staple",
        }
    }
}

impl Cuisine {
    pub const ALL: [Cuisine; 5] = [
        Cuisine::Sichuan,
        Cuisine::Cantonese,
        Cuisine::Shandong,
        Cuisine::Jiangsu,
        Cuisine::Home,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Sichuan => "sichuan",
            Cuisine::Cantonese => "cantonese",
            Cuisine::Shandong => "shandong",
            Cuisine::Jiangsu => "jiangsu",
            Cuisine::Home => "home",
        }
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownValue {
                kind: "category",
                value: s.to_string(),
            })
    }
}

impl FromStr for Cuisine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuisine::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownValue {
                kind: "cuisine",
                value: s.to_string(),
            })
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" | "简单" => Ok(Difficulty::Easy),
            "medium" | "中等" => Ok(Difficulty::Medium),
            "hard" | "困难" => Ok(Difficulty::Hard),
            _ => Err(DomainError::UnknownValue {
                kind: "difficulty",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_accepts_legacy_labels() {
        let d: Difficulty = serde_json::from_str("\"中等\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"medium\"");
        assert_eq!("困难".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_unknown_cuisine_is_rejected() {
        assert!("martian".parse::<Cuisine>().is_err());
        assert_eq!("home".parse::<Cuisine>().unwrap(), Cuisine::Home);
    }

    #[test]
    fn test_keyword_matches_tags_case_insensitively() {
        let mut dish = Dish::new("d1", "Fried Rice", Category::Staple, Cuisine::Home, Difficulty::Easy, 10);
        dish.tags = vec!["Quick".to_string()];
        assert!(dish.matches_keyword("quick"));
        assert!(dish.matches_keyword("rice"));
        assert!(!dish.matches_keyword("soup"));
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let json = r#"{"id":"x","name":"X","category":"soup","cuisine":"home","difficulty":"easy","cookingTime":5}"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert!(dish.tags.is_empty());
        assert_eq!(dish.favorite_count, 0);
    }
}
