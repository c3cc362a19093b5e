// Filter evaluation over a dish list
//
// Pure functions: no state, no persistence, stable output order.

use crate::domain::{Dish, FilterCriteria};
use crate::error::{AppError, AppResult};

/// Dishes satisfying every set predicate, in input order.
/// Empty criteria return every dish.
pub fn apply(dishes: &[Dish], criteria: &FilterCriteria) -> Vec<Dish> {
    let keyword = criteria.normalized_keyword();
    dishes
        .iter()
        .filter(|dish| criteria.matches_with_keyword(dish, keyword.as_deref()))
        .cloned()
        .collect()
}

/// Explicit search path: refuses criteria that constrain nothing.
pub fn search(dishes: &[Dish], criteria: &FilterCriteria) -> AppResult<Vec<Dish>> {
    if criteria.is_empty() {
        return Err(AppError::EmptyCriteria);
    }
    Ok(apply(dishes, criteria))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Cuisine, Difficulty};
    use crate::repositories::{CatalogRepository, CatalogStore};

    fn catalog() -> Vec<Dish> {
        CatalogStore::builtin().unwrap().all().to_vec()
    }

    fn ids(dishes: &[Dish]) -> Vec<&str> {
        dishes.iter().map(|d| d.id.as_str()).collect()
    }

    fn all_criteria() -> Vec<FilterCriteria> {
        let mut out = Vec::new();
        for category in [None, Some(Category::Meat), Some(Category::Soup)] {
            for cuisine in [None, Some(Cuisine::Sichuan), Some(Cuisine::Home)] {
                for difficulty in [None, Some(Difficulty::Easy), Some(Difficulty::Medium)] {
                    for max in [None, Some(0), Some(15), Some(30)] {
                        for keyword in [None, Some("家常菜"), Some("川菜")] {
                            out.push(FilterCriteria {
                                category,
                                cuisine,
                                difficulty,
                                max_cooking_time: max,
                                keyword: keyword.map(str::to_string),
                            });
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_category_meat_scenario() {
        let result = apply(&catalog(), &FilterCriteria::new().with_category(Category::Meat));
        assert_eq!(ids(&result), vec!["dish001", "dish003"]);
    }

    #[test]
    fn test_empty_search_is_rejected() {
        assert!(matches!(
            search(&catalog(), &FilterCriteria::new()),
            Err(AppError::EmptyCriteria)
        ));
        assert!(matches!(
            search(&catalog(), &FilterCriteria::new().with_keyword("  ")),
            Err(AppError::EmptyCriteria)
        ));
    }

    #[test]
    fn test_results_are_sound_and_complete() {
        let dishes = catalog();
        for criteria in all_criteria().into_iter().filter(|c| !c.is_empty()) {
            let result = search(&dishes, &criteria).unwrap();
            let result_ids = ids(&result);

            for dish in &dishes {
                assert_eq!(
                    criteria.matches(dish),
                    result_ids.contains(&dish.id.as_str()),
                    "{:?} vs {}",
                    criteria,
                    dish.id
                );
            }

            // catalog order preserved
            let positions: Vec<usize> = result
                .iter()
                .map(|d| dishes.iter().position(|x| x.id == d.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_combined_predicates() {
        let criteria = FilterCriteria::new()
            .with_cuisine(Cuisine::Home)
            .with_max_cooking_time(10);
        assert_eq!(ids(&apply(&catalog(), &criteria)), vec!["dish005"]);

        let criteria = FilterCriteria::new()
            .with_difficulty(Difficulty::Easy)
            .with_keyword("川菜");
        assert_eq!(ids(&apply(&catalog(), &criteria)), vec!["dish002"]);
    }

    #[test]
    fn test_zero_minutes_matches_nothing_here() {
        let result = search(&catalog(), &FilterCriteria::new().with_max_cooking_time(0)).unwrap();
        assert!(result.is_empty());
    }
}
