// UI Ports
//
// ARCHITECTURE:
// - The shell implements these; the core only calls them
// - Every call is fire-and-forget; a shell failure never reaches the core
// - Logging implementations stand in for a real shell in headless use

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Transient toast-style message
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Blocking busy overlay around slow operations
pub trait BusyIndicator: Send + Sync {
    fn show_busy(&self, message: &str);
    fn hide_busy(&self);
}

pub trait Navigator: Send + Sync {
    fn open_dish_detail(&self, dish_id: &str);
    fn go_back(&self);
}

/// Resolves translation keys, substituting `{name}` parameters
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, params: &[(&str, String)]) -> String;
}

/// The set of ports a shell hands to the application layer
#[derive(Clone)]
pub struct UiPorts {
    pub notifier: Arc<dyn Notifier>,
    pub busy: Arc<dyn BusyIndicator>,
    pub navigator: Arc<dyn Navigator>,
    pub translator: Arc<dyn Translator>,
}

impl UiPorts {
    /// Translate `key` and show it
    pub fn notify_key(&self, key: &str, params: &[(&str, String)]) {
        let message = self.translator.translate(key, params);
        self.notifier.notify(&message);
    }

    /// Log-only ports with the key-echo translator
    pub fn headless() -> Self {
        let ui = Arc::new(LoggingUi);
        Self {
            notifier: ui.clone(),
            busy: ui.clone(),
            navigator: ui,
            translator: Arc::new(KeyTranslator::new()),
        }
    }
}

impl Default for UiPorts {
    fn default() -> Self {
        Self::headless()
    }
}

/// Writes every UI request to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingUi;

impl Notifier for LoggingUi {
    fn notify(&self, message: &str) {
        log::info!("[notify] {}", message);
    }
}

impl BusyIndicator for LoggingUi {
    fn show_busy(&self, message: &str) {
        log::debug!("[busy] {}", message);
    }

    fn hide_busy(&self) {
        log::debug!("[busy] done");
    }
}

impl Navigator for LoggingUi {
    fn open_dish_detail(&self, dish_id: &str) {
        log::info!("[navigate] detail {}", dish_id);
    }

    fn go_back(&self) {
        log::info!("[navigate] back");
    }
}

/// Looks keys up in a table and falls back to the key itself
#[derive(Debug, Default, Clone)]
pub struct KeyTranslator {
    messages: HashMap<String, String>,
}

impl KeyTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages<I, K, V>(messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            messages: messages
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Translator for KeyTranslator {
    fn translate(&self, key: &str, params: &[(&str, String)]) -> String {
        let mut text = self
            .messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string());

        for (name, value) in params {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

/// Remembers every UI call, in order. Used by shell-less tests.
#[derive(Debug, Default)]
pub struct RecordingUi {
    calls: Mutex<Vec<String>>,
}

impl RecordingUi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn push(&self, call: String) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
    }

    /// Ports routing everything here, with the key-echo translator
    pub fn ports(self: &Arc<Self>) -> UiPorts {
        UiPorts {
            notifier: self.clone(),
            busy: self.clone(),
            navigator: self.clone(),
            translator: Arc::new(KeyTranslator::new()),
        }
    }
}

impl Notifier for RecordingUi {
    fn notify(&self, message: &str) {
        self.push(format!("notify:{}", message));
    }
}

impl BusyIndicator for RecordingUi {
    fn show_busy(&self, message: &str) {
        self.push(format!("busy:{}", message));
    }

    fn hide_busy(&self) {
        self.push("idle".to_string());
    }
}

impl Navigator for RecordingUi {
    fn open_dish_detail(&self, dish_id: &str) {
        self.push(format!("open:{}", dish_id));
    }

    fn go_back(&self) {
        self.push("back".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_translator_substitutes_params() {
        let translator = KeyTranslator::with_messages([("time.minutesAgo", "{count} minutes ago")]);

        assert_eq!(
            translator.translate("time.minutesAgo", &[("count", "5".to_string())]),
            "5 minutes ago"
        );
        assert_eq!(translator.translate("choose.noResults", &[]), "choose.noResults");
    }

    #[test]
    fn test_notify_key_goes_through_translator() {
        let ui = RecordingUi::new();
        ui.ports().notify_key("favorites.removed", &[]);
        assert_eq!(ui.calls(), vec!["notify:favorites.removed"]);
    }
}
