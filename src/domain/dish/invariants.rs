use std::collections::HashSet;

use super::entity::Dish;
use crate::domain::{DomainError, DomainResult};

/// Validates all Dish invariants
pub fn validate_dish(dish: &Dish) -> DomainResult<()> {
    validate_id(&dish.id)?;
    validate_name(dish)?;
    validate_rating(dish)?;
    Ok(())
}

/// Validates every dish and rejects duplicate ids
pub fn validate_catalog(dishes: &[Dish]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(dishes.len());
    for dish in dishes {
        validate_dish(dish)?;
        if !seen.insert(dish.id.as_str()) {
            return Err(DomainError::DuplicateId(dish.id.clone()));
        }
    }
    Ok(())
}

fn validate_id(id: &str) -> DomainResult<()> {
    if id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Dish id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(dish: &Dish) -> DomainResult<()> {
    if dish.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Dish {} has an empty name",
            dish.id
        )));
    }
    Ok(())
}

fn validate_rating(dish: &Dish) -> DomainResult<()> {
    if !dish.rating.is_finite() || !(0.0..=5.0).contains(&dish.rating) {
        return Err(DomainError::InvariantViolation(format!(
            "Dish {} rating {} is outside 0..=5",
            dish.id, dish.rating
        )));
    }
    Ok(())
}

/// Invariants that must hold for the Dish domain:
///
/// 1. Id is never empty
/// 2. No two catalog dishes share an id
/// 3. Rating lies in 0..=5
/// 4. Dishes are immutable once loaded

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish::{Category, Cuisine, Difficulty};

    fn dish(id: &str) -> Dish {
        Dish::new(id, "Mapo Tofu", Category::Vegetable, Cuisine::Sichuan, Difficulty::Easy, 20)
    }

    #[test]
    fn test_valid_dish() {
        assert!(validate_dish(&dish("dish002")).is_ok());
    }

    #[test]
    fn test_empty_id_fails() {
        assert!(validate_dish(&dish("  ")).is_err());
    }

    #[test]
    fn test_rating_out_of_range_fails() {
        let mut d = dish("dish002");
        d.rating = 5.5;
        assert!(validate_dish(&d).is_err());
    }

    #[test]
    fn test_duplicate_ids_fail() {
        let result = validate_catalog(&[dish("a"), dish("b"), dish("a")]);
        assert!(matches!(result, Err(DomainError::DuplicateId(id)) if id == "a"));
    }
}
