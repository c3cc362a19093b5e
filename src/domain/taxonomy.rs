use serde::Serialize;

use crate::domain::dish::{Category, Cuisine, Difficulty};

/// Browse tile for a category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: Category,
    pub name_key: String,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Browse tile for a cuisine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineInfo {
    pub id: Cuisine,
    pub name_key: String,
    pub icon: &'static str,
    pub description_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyOption {
    pub id: Difficulty,
    pub name_key: String,
    pub description_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingTimeOption {
    pub id: &'static str,
    pub name_key: String,
    /// Minutes
    pub time: u32,
}

/// Lookup tables shown by the browse and settings pages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    pub categories: Vec<CategoryInfo>,
    pub cuisines: Vec<CuisineInfo>,
    pub difficulties: Vec<DifficultyOption>,
    pub cooking_times: Vec<CookingTimeOption>,
    pub common_ingredients: Vec<String>,
}

impl Category {
    pub fn label_key(&self) -> String {
        format!("categories.{}", self.as_str())
    }
}

impl Cuisine {
    pub fn label_key(&self) -> String {
        format!("cuisines.{}", self.as_str())
    }
}

impl Difficulty {
    pub fn label_key(&self) -> String {
        format!("difficulty.{}", self.as_str())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        let categories = Category::ALL
            .iter()
            .map(|category| {
                let (icon, color) = match category {
                    Category::Meat => ("🥩", "#FF6B35"),
                    Category::Vegetable => ("🥬", "#4CAF50"),
                    Category::Soup => ("🍲", "#2196F3"),
                    Category::Staple => ("🍚", "#FF9800"),
                };
                CategoryInfo {
                    id: *category,
                    name_key: category.label_key(),
                    icon,
                    color,
                }
            })
            .collect();

        let cuisines = Cuisine::ALL
            .iter()
            .map(|cuisine| {
                let icon = match cuisine {
                    Cuisine::Sichuan => "🌶️",
                    Cuisine::Cantonese => "🦐",
                    Cuisine::Shandong => "🐟",
                    Cuisine::Jiangsu => "🦆",
                    Cuisine::Home => "🏠",
                };
                CuisineInfo {
                    id: *cuisine,
                    name_key: cuisine.label_key(),
                    icon,
                    description_key: format!("cuisines.description.{}", cuisine.as_str()),
                }
            })
            .collect();

        let difficulties = Difficulty::ALL
            .iter()
            .map(|difficulty| DifficultyOption {
                id: *difficulty,
                name_key: difficulty.label_key(),
                description_key: format!("difficulty.description.{}", difficulty.as_str()),
            })
            .collect();

        let cooking_times = [("quick", 15), ("normal", 30), ("slow", 60)]
            .into_iter()
            .map(|(id, time)| CookingTimeOption {
                id,
                name_key: format!("cookingTime.{}", id),
                time,
            })
            .collect();

        let common_ingredients = [
            "香菜", "胡萝卜", "洋葱", "青椒", "茄子", "豆腐", "鸡蛋", "猪肉", "牛肉", "鸡肉", "鱼类",
            "虾类",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            categories,
            cuisines,
            difficulties,
            cooking_times,
            common_ingredients,
        }
    }
}
