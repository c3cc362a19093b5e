// Profile page commands

use chrono::Local;
use serde_json::json;

use crate::application::commands::{find_dish, reported, CommandResult};
use crate::application::dto::*;
use crate::application::state::AppContext;
use crate::domain::action::{actions, pages};
use crate::domain::DateStyle;

const RECENT_COUNT: usize = 5;

/// Counters, the five most recent dishes and a few suggestions
pub fn load_profile(ctx: &AppContext) -> ProfileDto {
    let now = Local::now();
    let prefs = ctx.preferences.get();
    let history = ctx.history.list();
    let favorite_ids = ctx.favorites.favorite_ids();

    let recommendations = DishCardDto::annotate(
        ctx.recommendations.for_profile(&prefs, &history, &favorite_ids),
        &favorite_ids,
    );
    let recent = history
        .into_iter()
        .take(RECENT_COUNT)
        .map(|entry| HistoryItemDto::new(entry, &now, DateStyle::MonthDay, &favorite_ids))
        .collect();

    ProfileDto {
        statistics: ctx.statistics.refresh().into(),
        recent,
        recommendations,
    }
}

/// Open a recent or suggested dish from the profile page
pub fn view_recent(ctx: &AppContext, dish_id: &str) -> CommandResult<()> {
    let dish = reported(ctx, find_dish(ctx, dish_id))?;
    ctx.actions
        .append(actions::VIEW_RECENT, json!({ "dishId": dish.id }), pages::PROFILE);
    ctx.ui.navigator.open_dish_detail(&dish.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::context;
    use crate::application::commands::{start_cooking, toggle_favorite};

    #[test]
    fn test_profile_counts_and_recent() {
        let (ctx, _ui) = context();
        for id in ["dish001", "dish002", "dish003", "dish004", "dish005", "dish001"] {
            start_cooking(&ctx, id).unwrap();
        }
        toggle_favorite(&ctx, "dish004", pages::DETAIL).unwrap();

        let profile = load_profile(&ctx);

        assert_eq!(profile.statistics.history_count, 5);
        assert_eq!(profile.statistics.favorite_count, 1);
        assert_eq!(profile.statistics.cooking_count, 6);
        assert_eq!(profile.recent.len(), 5);
        assert_eq!(profile.recent[0].dish_id, "dish001");
    }

    #[test]
    fn test_empty_profile_suggests_dishes() {
        let (ctx, _ui) = context();
        let profile = load_profile(&ctx);

        assert_eq!(profile.statistics.history_count, 0);
        assert!(profile.recent.is_empty());
        assert_eq!(profile.recommendations.len(), 3);
    }

    #[test]
    fn test_view_recent_navigates() {
        let (ctx, ui) = context();
        view_recent(&ctx, "dish005").unwrap();
        assert_eq!(ui.calls(), vec!["open:dish005"]);
        assert_eq!(ctx.actions.entries()[0].page, pages::PROFILE);
    }
}
