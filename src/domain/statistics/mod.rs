//! Statistics invariants:
//!
//! 1. Always derived, never primary
//! 2. A cached snapshot is dropped whenever a ledger changes
//! 3. Never alter ledger state

pub mod entity;
pub use entity::{StatisticsSnapshot, UserStatistics};
