// Read-only dish catalog
//
// Loaded once at start from fixture data and validated; there is no
// mutation API.

use crate::domain::{validate_catalog, Category, Dish, Taxonomy};
use crate::error::AppResult;

const BUILTIN_DISHES: &str = include_str!("../../data/dishes.json");

pub trait CatalogRepository: Send + Sync {
    /// Every dish, in catalog order
    fn all(&self) -> &[Dish];
    /// `None` for an unknown id
    fn get_by_id(&self, id: &str) -> Option<&Dish>;
    fn by_category(&self, category: Category) -> Vec<Dish>;
    /// Case-insensitive substring match over name, description and tags
    fn search(&self, keyword: &str) -> Vec<Dish>;
    fn taxonomy(&self) -> &Taxonomy;
}

pub struct CatalogStore {
    dishes: Vec<Dish>,
    taxonomy: Taxonomy,
}

impl CatalogStore {
    /// Build a catalog from `dishes`, rejecting invalid records and
    /// duplicate ids.
    pub fn new(dishes: Vec<Dish>) -> AppResult<Self> {
        validate_catalog(&dishes)?;
        Ok(Self {
            dishes,
            taxonomy: Taxonomy::default(),
        })
    }

    /// The five dishes shipped with the app
    pub fn builtin() -> AppResult<Self> {
        let dishes: Vec<Dish> = serde_json::from_str(BUILTIN_DISHES)?;
        log::debug!("Loaded {} built-in dishes", dishes.len());
        Self::new(dishes)
    }

    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }
}

impl CatalogRepository for CatalogStore {
    fn all(&self) -> &[Dish] {
        &self.dishes
    }

    fn get_by_id(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    fn by_category(&self, category: Category) -> Vec<Dish> {
        self.dishes
            .iter()
            .filter(|dish| dish.category == category)
            .cloned()
            .collect()
    }

    fn search(&self, keyword: &str) -> Vec<Dish> {
        let needle = keyword.trim().to_lowercase();
        self.dishes
            .iter()
            .filter(|dish| dish.matches_keyword(&needle))
            .cloned()
            .collect()
    }

    fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cuisine, Difficulty};
    use crate::error::AppError;

    fn ids(dishes: &[Dish]) -> Vec<&str> {
        dishes.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = CatalogStore::builtin().unwrap();

        assert_eq!(
            ids(catalog.all()),
            vec!["dish001", "dish002", "dish003", "dish004", "dish005"]
        );
        let first = catalog.get_by_id("dish001").unwrap();
        assert_eq!(first.difficulty, Difficulty::Medium);
        assert_eq!(first.cuisine, Cuisine::Sichuan);
        assert_eq!(first.cooking_time, 30);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = CatalogStore::builtin().unwrap();
        assert!(catalog.get_by_id("dish999").is_none());
    }

    #[test]
    fn test_by_category_keeps_catalog_order() {
        let catalog = CatalogStore::builtin().unwrap();
        assert_eq!(ids(&catalog.by_category(Category::Meat)), vec!["dish001", "dish003"]);
    }

    #[test]
    fn test_search_matches_name_description_and_tags() {
        let catalog = CatalogStore::builtin().unwrap();

        // tag
        assert_eq!(ids(&catalog.search("川菜")), vec!["dish001", "dish002"]);
        // name
        assert_eq!(ids(&catalog.search("蛋炒饭")), vec!["dish005"]);
        // description
        assert_eq!(ids(&catalog.search("原汁原味")), vec!["dish003"]);
        assert!(catalog.search("pizza").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut dish = Dish::new("d1", "Mapo Tofu", Category::Vegetable, Cuisine::Sichuan, Difficulty::Easy, 20);
        dish.tags = vec!["Spicy".to_string()];
        let catalog = CatalogStore::new(vec![dish]).unwrap();

        assert_eq!(catalog.search("TOFU").len(), 1);
        assert_eq!(catalog.search("spicy").len(), 1);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let a = Dish::new("d1", "A", Category::Meat, Cuisine::Home, Difficulty::Easy, 10);
        let b = Dish::new("d1", "B", Category::Soup, Cuisine::Home, Difficulty::Easy, 10);

        assert!(matches!(CatalogStore::new(vec![a, b]), Err(AppError::Domain(_))));
    }
}
