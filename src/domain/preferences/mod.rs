pub mod entity;

pub use entity::{Preferences, PreferencesPatch, DEFAULT_MAX_COOKING_TIME};
