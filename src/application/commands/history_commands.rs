// History page commands

use chrono::Local;
use serde_json::json;
use uuid::Uuid;

use crate::application::commands::{reported, CommandResult};
use crate::application::dto::*;
use crate::application::state::AppContext;
use crate::domain::action::{actions, pages};
use crate::domain::{DateStyle, HistoryWindow};
use crate::error::AppError;

pub fn list_history(ctx: &AppContext, window: HistoryWindow) -> Vec<HistoryItemDto> {
    let now = Local::now();
    let favorite_ids = ctx.favorites.favorite_ids();
    ctx.history
        .filter_by_window(window)
        .into_iter()
        .map(|entry| HistoryItemDto::new(entry, &now, DateStyle::MonthDayTime, &favorite_ids))
        .collect()
}

/// Same as `list_history`, recorded as a filter change
pub fn filter_history(ctx: &AppContext, window: HistoryWindow) -> Vec<HistoryItemDto> {
    ctx.actions
        .append(actions::FILTER_HISTORY, json!({ "filter": window }), pages::HISTORY);
    list_history(ctx, window)
}

/// Delete one entry by its id string
pub fn delete_history_item(ctx: &AppContext, entry_id: &str) -> CommandResult<bool> {
    // A malformed id cannot name an entry
    let id = reported(
        ctx,
        Uuid::parse_str(entry_id).map_err(|_| AppError::not_found(entry_id)),
    )?;

    let removed = ctx.history.remove(id);
    if removed {
        ctx.actions
            .append(actions::DELETE_HISTORY_ITEM, json!({ "itemId": entry_id }), pages::HISTORY);
        ctx.ui.notify_key("history.deleted", &[]);
    }
    Ok(removed)
}

/// Clear everything; an empty history only notifies
pub fn clear_history(ctx: &AppContext) -> bool {
    if ctx.history.is_empty() {
        ctx.ui.notify_key("history.empty", &[]);
        return false;
    }

    ctx.history.clear();
    ctx.actions
        .append(actions::CLEAR_ALL_HISTORY, json!({}), pages::HISTORY);
    ctx.ui.notify_key("history.cleared", &[]);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::context;
    use crate::domain::HistorySource;

    fn record(ctx: &AppContext, id: &str) -> String {
        let dish = ctx.catalog.get_by_id(id).cloned().unwrap();
        ctx.history.record(&dish, HistorySource::Random).id.to_string()
    }

    #[test]
    fn test_list_marks_favorites_and_sources() {
        let (ctx, _ui) = context();
        record(&ctx, "dish001");
        record(&ctx, "dish002");
        let dish = ctx.catalog.get_by_id("dish002").cloned().unwrap();
        ctx.favorites.add(&dish);

        let items = filter_history(&ctx, HistoryWindow::Today);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].dish_id, "dish002");
        assert!(items[0].is_favorite);
        assert!(!items[1].is_favorite);
        assert_eq!(items[1].source_key, "history.source.random");
        assert_eq!(ctx.actions.entries()[0].data, json!({ "filter": "today" }));
    }

    #[test]
    fn test_delete_by_id() {
        let (ctx, _ui) = context();
        let id = record(&ctx, "dish003");

        assert!(delete_history_item(&ctx, &id).unwrap());
        assert!(!delete_history_item(&ctx, &id).unwrap());
        assert!(ctx.history.is_empty());
    }

    #[test]
    fn test_delete_with_malformed_id() {
        let (ctx, ui) = context();
        let err = delete_history_item(&ctx, "not-a-uuid").unwrap_err();
        assert_eq!(err.message_key, "error.notFound");
        assert_eq!(ui.calls().len(), 1);
    }

    #[test]
    fn test_clear() {
        let (ctx, ui) = context();
        assert!(!clear_history(&ctx));

        record(&ctx, "dish004");
        assert!(clear_history(&ctx));
        assert!(ctx.history.is_empty());
        assert_eq!(ui.calls(), vec!["notify:history.empty", "notify:history.cleared"]);
    }
}
