use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{Preferences, PreferencesPatch};
use crate::events::{EventBus, PreferencesReset, PreferencesUpdated};
use crate::repositories::{keys, load_json, save_json, KeyValueStore};

/// The user's settings singleton.
///
/// Created with defaults on first read; storage failures are logged and
/// the in-memory value stays current.
pub struct PreferencesStore {
    store: Arc<dyn KeyValueStore>,
    current: Mutex<Option<Preferences>>,
    event_bus: Arc<EventBus>,
}

impl PreferencesStore {
    pub fn new(store: Arc<dyn KeyValueStore>, event_bus: Arc<EventBus>) -> Self {
        Self {
            store,
            current: Mutex::new(None),
            event_bus,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Preferences>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Preferences {
        match load_json::<Preferences>(self.store.as_ref(), keys::PREFERENCES) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Preferences::default(),
            Err(e) => {
                log::warn!("Failed to load preferences, using defaults: {}", e);
                Preferences::default()
            }
        }
    }

    fn persist(&self, prefs: &Preferences) {
        if let Err(e) = save_json(self.store.as_ref(), keys::PREFERENCES, prefs) {
            log::error!("Failed to persist preferences: {}", e);
        }
    }

    pub fn get(&self) -> Preferences {
        self.lock().get_or_insert_with(|| self.load()).clone()
    }

    /// Shallow merge of `patch`, persisted; returns the new snapshot
    pub fn update(&self, patch: PreferencesPatch) -> Preferences {
        let updated = {
            let mut guard = self.lock();
            let prefs = guard.get_or_insert_with(|| self.load());
            prefs.apply(patch);
            self.persist(prefs);
            prefs.clone()
        };

        log::info!("Preferences updated");
        self.event_bus.emit(PreferencesUpdated::new());
        updated
    }

    /// Restore defaults and persist them
    pub fn reset(&self) -> Preferences {
        let defaults = Preferences::default();
        {
            let mut guard = self.lock();
            self.persist(&defaults);
            *guard = Some(defaults.clone());
        }

        log::info!("Preferences reset to defaults");
        self.event_bus.emit(PreferencesReset::new());
        defaults
    }
}
