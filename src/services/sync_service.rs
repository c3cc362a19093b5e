// Remote mirror sync
//
// RULES:
// - Local ledgers are authoritative; nothing read back is applied locally
// - Each part is pushed independently; one failing part never stops the rest
// - A disabled mirror is skipped without touching the ledgers

use serde::Serialize;
use std::sync::Arc;

use crate::integrations::RemoteMirror;
use crate::services::{FavoritesLedger, HistoryLedger, PreferencesStore};

/// Outcome of one pushed part
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartOutcome {
    pub pushed: usize,
    pub error: Option<String>,
}

impl PartOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub skipped: bool,
    pub preferences: PartOutcome,
    pub history: PartOutcome,
    pub favorites: PartOutcome,
}

impl SyncReport {
    pub fn is_complete(&self) -> bool {
        !self.skipped && self.preferences.is_ok() && self.history.is_ok() && self.favorites.is_ok()
    }
}

pub struct SyncService {
    mirror: Arc<dyn RemoteMirror>,
    preferences: Arc<PreferencesStore>,
    history: Arc<HistoryLedger>,
    favorites: Arc<FavoritesLedger>,
}

impl SyncService {
    pub fn new(
        mirror: Arc<dyn RemoteMirror>,
        preferences: Arc<PreferencesStore>,
        history: Arc<HistoryLedger>,
        favorites: Arc<FavoritesLedger>,
    ) -> Self {
        Self {
            mirror,
            preferences,
            history,
            favorites,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.mirror.is_enabled()
    }

    /// Push preferences, history (oldest first) and favorites
    pub async fn push_all(&self) -> SyncReport {
        if !self.mirror.is_enabled() {
            log::debug!("Remote mirror disabled, sync skipped");
            return SyncReport {
                skipped: true,
                ..SyncReport::default()
            };
        }

        let report = SyncReport {
            skipped: false,
            preferences: self.push_preferences().await,
            history: self.push_history().await,
            favorites: self.push_favorites().await,
        };

        if report.is_complete() {
            log::info!(
                "Sync complete: {} history, {} favorites",
                report.history.pushed,
                report.favorites.pushed
            );
        } else {
            log::warn!("Sync finished with errors: {:?}", report);
        }
        report
    }

    async fn push_preferences(&self) -> PartOutcome {
        match self.mirror.save_preferences(&self.preferences.get()).await {
            Ok(()) => PartOutcome {
                pushed: 1,
                error: None,
            },
            Err(e) => PartOutcome {
                pushed: 0,
                error: Some(e.to_string()),
            },
        }
    }

    async fn push_history(&self) -> PartOutcome {
        let mut outcome = PartOutcome::default();
        // Ledger is newest first; replay in the order it happened
        for entry in self.history.list().iter().rev() {
            match self.mirror.add_to_history(&entry.dish_id, entry.source).await {
                Ok(()) => outcome.pushed += 1,
                Err(e) => {
                    outcome.error = Some(e.to_string());
                    break;
                }
            }
        }
        outcome
    }

    async fn push_favorites(&self) -> PartOutcome {
        let mut outcome = PartOutcome::default();
        for entry in self.favorites.list() {
            match self.mirror.add_to_favorites(&entry.dish_id).await {
                Ok(()) => outcome.pushed += 1,
                Err(e) => {
                    outcome.error = Some(e.to_string());
                    break;
                }
            }
        }
        outcome
    }
}
