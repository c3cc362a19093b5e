// Recommendation lists for the home, detail and profile pages

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Category, Dish, HistoryEntry, Preferences};
use crate::repositories::CatalogRepository;
use crate::services::random_selector::RandomSelector;

pub const TODAY_COUNT: usize = 3;
pub const RELATED_COUNT: usize = 5;
pub const PROFILE_COUNT: usize = 3;

/// Related lists are padded with unrelated dishes below this size
const RELATED_MIN: usize = 3;

const TAG_KEYS: [&str; 5] = [
    "recommend.tag.hot",
    "recommend.tag.healthy",
    "recommend.tag.quick",
    "recommend.tag.classic",
    "recommend.tag.featured",
];

const REASON_KEYS: [&str; 5] = [
    "recommend.reason.classic",
    "recommend.reason.nutritious",
    "recommend.reason.easy",
    "recommend.reason.rich",
    "recommend.reason.homely",
];

/// One of today's picks
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub dish: Dish,
    pub reason_key: &'static str,
    pub tag_key: &'static str,
}

pub struct RecommendationService {
    catalog: Arc<dyn CatalogRepository>,
    random: Arc<RandomSelector>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, random: Arc<RandomSelector>) -> Self {
        Self { catalog, random }
    }

    /// Three dishes, drawn from the favorite cuisines when any dish
    /// matches them. Tags follow position; reasons are random.
    pub fn today(&self, prefs: &Preferences) -> Vec<Recommendation> {
        let all = self.catalog.all();

        let preferred: Vec<Dish> = all
            .iter()
            .filter(|dish| prefs.favorite_cuisines.contains(&dish.cuisine))
            .cloned()
            .collect();
        let mut pool = if preferred.is_empty() {
            all.to_vec()
        } else {
            preferred
        };

        self.random.shuffle(&mut pool);
        pool.truncate(TODAY_COUNT);

        pool.into_iter()
            .enumerate()
            .map(|(index, dish)| Recommendation {
                dish,
                reason_key: self.random.choose(&REASON_KEYS).copied().unwrap_or(REASON_KEYS[0]),
                tag_key: TAG_KEYS[index % TAG_KEYS.len()],
            })
            .collect()
    }

    /// Up to five other dishes sharing category or cuisine, padded with
    /// the rest of the catalog when fewer than three relate.
    pub fn related(&self, dish: &Dish) -> Vec<Dish> {
        let others = self.catalog.all().iter().filter(|d| d.id != dish.id);

        let (mut related, rest): (Vec<Dish>, Vec<Dish>) = others
            .cloned()
            .partition(|d| d.category == dish.category || d.cuisine == dish.cuisine);

        if related.len() < RELATED_MIN {
            related.extend(rest);
        }

        self.random.shuffle(&mut related);
        related.truncate(RELATED_COUNT);
        related
    }

    /// Profile page picks: favorite cuisines first, then unseen dishes
    /// from categories in history, then anything neither seen nor saved.
    pub fn for_profile(
        &self,
        prefs: &Preferences,
        history: &[HistoryEntry],
        favorite_ids: &HashSet<String>,
    ) -> Vec<Dish> {
        let all = self.catalog.all();
        let seen: HashSet<&str> = history.iter().map(|h| h.dish_id.as_str()).collect();

        let mut picks: Vec<Dish> = all
            .iter()
            .filter(|dish| prefs.favorite_cuisines.contains(&dish.cuisine))
            .cloned()
            .collect();

        if picks.len() < PROFILE_COUNT && !history.is_empty() {
            let categories: HashSet<Category> = history.iter().map(|h| h.dish.category).collect();
            let additions: Vec<Dish> = all
                .iter()
                .filter(|dish| categories.contains(&dish.category))
                .filter(|dish| !seen.contains(dish.id.as_str()))
                .filter(|dish| !picks.iter().any(|p| p.id == dish.id))
                .cloned()
                .collect();
            picks.extend(additions);
        }

        if picks.len() < PROFILE_COUNT {
            let additions: Vec<Dish> = all
                .iter()
                .filter(|dish| !picks.iter().any(|p| p.id == dish.id))
                .filter(|dish| !seen.contains(dish.id.as_str()))
                .filter(|dish| !favorite_ids.contains(&dish.id))
                .cloned()
                .collect();
            picks.extend(additions);
        }

        self.random.shuffle(&mut picks);
        picks.truncate(PROFILE_COUNT);
        picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cuisine, HistorySource};
    use crate::services::test_support::{catalog, dish};
    use chrono::Utc;

    fn service() -> RecommendationService {
        RecommendationService::new(catalog(), Arc::new(RandomSelector::seeded(42)))
    }

    fn ids(dishes: &[Dish]) -> HashSet<String> {
        dishes.iter().map(|d| d.id.clone()).collect()
    }

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_today_uses_favorite_cuisines() {
        let mut prefs = Preferences::default();
        prefs.favorite_cuisines.insert(Cuisine::Sichuan);

        let recs = service().today(&prefs);
        let dishes: Vec<Dish> = recs.iter().map(|r| r.dish.clone()).collect();

        assert_eq!(ids(&dishes), set(&["dish001", "dish002"]));
        assert_eq!(recs[0].tag_key, "recommend.tag.hot");
        assert_eq!(recs[1].tag_key, "recommend.tag.healthy");
        assert!(recs.iter().all(|r| REASON_KEYS.contains(&r.reason_key)));
    }

    #[test]
    fn test_today_falls_back_to_whole_catalog() {
        let mut prefs = Preferences::default();
        prefs.favorite_cuisines.insert(Cuisine::Shandong);

        let recs = service().today(&prefs);
        assert_eq!(recs.len(), 3);
        let unique: HashSet<&str> = recs.iter().map(|r| r.dish.id.as_str()).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_related_prefers_shared_category_or_cuisine() {
        // dish001: meat/sichuan -> dish002 (sichuan), dish003 (meat), padded
        let related = service().related(&dish("dish001"));

        assert_eq!(related.len(), 4);
        assert!(!ids(&related).contains("dish001"));
    }

    #[test]
    fn test_related_without_padding() {
        let mut catalog_dishes = catalog().all().to_vec();
        for n in 0..6 {
            let mut extra = dish("dish004");
            extra.id = format!("soup{}", n);
            catalog_dishes.push(extra);
        }
        let store = crate::repositories::CatalogStore::new(catalog_dishes).unwrap();
        let service = RecommendationService::new(Arc::new(store), Arc::new(RandomSelector::seeded(1)));

        let related = service.related(&dish("dish004"));
        assert_eq!(related.len(), 5);
        assert!(related
            .iter()
            .all(|d| d.category == Category::Soup || d.cuisine == Cuisine::Home));
    }

    #[test]
    fn test_profile_without_signals_suggests_unseen() {
        let history = vec![HistoryEntry::new(dish("dish001"), HistorySource::Random, Utc::now())];
        let favorites = set(&["dish002"]);

        let picks = service().for_profile(&Preferences::default(), &history, &favorites);

        // dish003 shares a category with history, dish004/dish005 are unseen
        assert_eq!(ids(&picks), set(&["dish003", "dish004", "dish005"]));
    }

    #[test]
    fn test_profile_prefers_favorite_cuisines() {
        let mut prefs = Preferences::default();
        prefs.favorite_cuisines = [Cuisine::Home, Cuisine::Cantonese].into_iter().collect();

        let picks = service().for_profile(&prefs, &[], &HashSet::new());
        assert_eq!(ids(&picks), set(&["dish003", "dish004", "dish005"]));
    }
}
