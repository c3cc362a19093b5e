pub mod entity;
pub mod invariants;

pub use entity::{Category, Cuisine, Difficulty, Dish, Nutrition};
pub use invariants::{validate_catalog, validate_dish};
