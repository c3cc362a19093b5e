// Settings page commands

use serde_json::json;

use crate::application::dto::*;
use crate::application::state::AppContext;
use crate::domain::action::{actions, pages};
use crate::domain::{Preferences, PreferencesPatch};
use crate::services::SyncReport;

pub fn load_settings(ctx: &AppContext) -> SettingsDto {
    SettingsDto {
        preferences: ctx.preferences.get(),
        taxonomy: ctx.catalog.taxonomy().clone(),
    }
}

/// Apply a partial update; an empty patch changes nothing and records nothing
pub fn save_preferences(ctx: &AppContext, patch: PreferencesPatch) -> Preferences {
    if patch.is_empty() {
        return ctx.preferences.get();
    }

    let data = serde_json::to_value(&patch).unwrap_or_default();
    let updated = ctx.preferences.update(patch);
    ctx.actions
        .append(actions::SAVE_PREFERENCES, data, pages::SETTINGS);
    ctx.ui.notify_key("settings.saved", &[]);
    updated
}

pub fn reset_preferences(ctx: &AppContext) -> Preferences {
    let defaults = ctx.preferences.reset();
    ctx.actions
        .append(actions::RESET_PREFERENCES, json!({}), pages::SETTINGS);
    ctx.ui.notify_key("settings.reset", &[]);
    defaults
}

/// Push the local ledgers to the cloud mirror, if one is configured
pub async fn sync_now(ctx: &AppContext) -> SyncReport {
    if !ctx.sync.is_enabled() {
        ctx.ui.notify_key("settings.syncDisabled", &[]);
        return ctx.sync.push_all().await;
    }

    ctx.ui.busy.show_busy("settings.syncing");
    let report = ctx.sync.push_all().await;
    ctx.ui.busy.hide_busy();

    let key = if report.is_complete() {
        "settings.syncDone"
    } else {
        "settings.syncFailed"
    };
    ctx.ui.notify_key(key, &[]);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::context;
    use crate::domain::{Cuisine, Difficulty};

    #[test]
    fn test_save_and_reset() {
        let (ctx, ui) = context();

        let saved = save_preferences(
            &ctx,
            PreferencesPatch {
                favorite_cuisines: Some([Cuisine::Sichuan].into_iter().collect()),
                max_cooking_time: Some(20),
                ..PreferencesPatch::default()
            },
        );
        assert_eq!(saved.max_cooking_time, 20);
        assert_eq!(saved.difficulty_level, Difficulty::Easy);
        assert_eq!(load_settings(&ctx).preferences, saved);

        let defaults = reset_preferences(&ctx);
        assert_eq!(defaults, Preferences::default());
        assert_eq!(ui.calls(), vec!["notify:settings.saved", "notify:settings.reset"]);
    }

    #[test]
    fn test_empty_patch_is_ignored() {
        let (ctx, ui) = context();
        save_preferences(&ctx, PreferencesPatch::default());
        assert!(ctx.actions.entries().is_empty());
        assert!(ui.calls().is_empty());
    }

    #[tokio::test]
    async fn test_sync_without_mirror_is_skipped() {
        let (ctx, ui) = context();
        let report = sync_now(&ctx).await;
        assert!(report.skipped);
        assert_eq!(ui.calls(), vec!["notify:settings.syncDisabled"]);
    }
}
