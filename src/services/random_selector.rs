// Random dish selection
//
// Uniform pick among the dishes matching the criteria, falling back to
// the whole catalog when nothing matches.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::domain::{Dish, FilterCriteria, Preferences};
use crate::error::{AppError, AppResult};
use crate::services::filter_engine;

/// Outcome of a random pick
#[derive(Debug, Clone, PartialEq)]
pub struct RandomPick {
    pub dish: Dish,
    /// False when the filtered set was empty and the pick came from the
    /// full catalog
    pub matched_criteria: bool,
}

/// Picks with an explicit RNG
pub fn pick_random_with<R: Rng + ?Sized>(
    dishes: &[Dish],
    criteria: &FilterCriteria,
    rng: &mut R,
) -> AppResult<RandomPick> {
    let filtered = filter_engine::apply(dishes, criteria);

    if let Some(dish) = filtered.choose(rng) {
        return Ok(RandomPick {
            dish: dish.clone(),
            matched_criteria: true,
        });
    }

    let dish = dishes.choose(rng).ok_or(AppError::NoDishAvailable)?;
    log::debug!("No dish matched {:?}, falling back to the full catalog", criteria);
    Ok(RandomPick {
        dish: dish.clone(),
        matched_criteria: false,
    })
}

/// Default criteria for a preference-driven pick: the time ceiling and
/// difficulty from preferences plus one favorite cuisine chosen
/// uniformly, when there are any.
pub fn criteria_from_preferences_with<R: Rng + ?Sized>(
    prefs: &Preferences,
    rng: &mut R,
) -> FilterCriteria {
    let cuisines: Vec<_> = prefs.favorite_cuisines.iter().copied().collect();
    FilterCriteria {
        category: None,
        cuisine: cuisines.choose(rng).copied(),
        difficulty: Some(prefs.difficulty_level),
        max_cooking_time: Some(prefs.max_cooking_time),
        keyword: None,
    }
}

/// Shared randomness source for selection and recommendations
pub struct RandomSelector {
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence, for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    pub fn pick_random(&self, dishes: &[Dish], criteria: &FilterCriteria) -> AppResult<RandomPick> {
        self.with_rng(|rng| pick_random_with(dishes, criteria, rng))
    }

    pub fn criteria_from_preferences(&self, prefs: &Preferences) -> FilterCriteria {
        self.with_rng(|rng| criteria_from_preferences_with(prefs, rng))
    }

    pub fn choose<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.with_rng(|rng| items.choose(rng))
    }

    pub fn shuffle<T>(&self, items: &mut [T]) {
        self.with_rng(|rng| items.shuffle(rng))
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}
