//! History invariants:
//!
//! 1. Newest entry first
//! 2. At most one entry per dish id (re-recording moves it to the front)
//! 3. Capped; the oldest entries fall off the end
//! 4. Snapshots are never refreshed from the catalog

pub mod entity;

pub use entity::{HistoryEntry, HistorySource, HistoryWindow};
