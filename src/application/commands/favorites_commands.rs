// Favorites commands
//
// Toggle lives here but is called from every page that shows a heart;
// the page name only tags the recorded action.

use chrono::Local;
use serde_json::json;
use std::collections::HashSet;

use crate::application::commands::{find_dish, reported, CommandResult};
use crate::application::dto::*;
use crate::application::state::AppContext;
use crate::domain::action::{actions, pages};
use crate::domain::FavoriteSort;

pub fn list_favorites(ctx: &AppContext, sort: FavoriteSort) -> Vec<FavoriteItemDto> {
    let now = Local::now();
    ctx.favorites
        .sorted(sort)
        .into_iter()
        .map(|entry| FavoriteItemDto::new(entry, &now))
        .collect()
}

/// Same as `list_favorites`, recorded as a user re-sort
pub fn sort_favorites(ctx: &AppContext, sort: FavoriteSort) -> Vec<FavoriteItemDto> {
    ctx.actions
        .append(actions::SORT_FAVORITES, json!({ "sort": sort }), pages::FAVORITES);
    list_favorites(ctx, sort)
}

/// Flip the favorite state of `dish_id`; returns the new state.
///
/// Removal works for saved dishes that left the catalog; adding needs a
/// catalog dish.
pub fn toggle_favorite(ctx: &AppContext, dish_id: &str, page: &str) -> CommandResult<bool> {
    let is_favorite = if ctx.favorites.remove(dish_id) {
        false
    } else {
        let dish = reported(ctx, find_dish(ctx, dish_id))?;
        ctx.favorites.add(&dish);
        true
    };

    let (action, key) = if is_favorite {
        (actions::ADD_FAVORITE, "favorites.added")
    } else {
        (actions::REMOVE_FAVORITE, "favorites.removed")
    };
    ctx.actions.append(action, json!({ "dishId": dish_id }), page);
    ctx.ui.notify_key(key, &[]);

    Ok(is_favorite)
}

pub fn remove_favorite(ctx: &AppContext, dish_id: &str) -> bool {
    let removed = ctx.favorites.remove(dish_id);
    if removed {
        ctx.actions
            .append(actions::REMOVE_FAVORITE, json!({ "dishId": dish_id }), pages::FAVORITES);
        ctx.ui.notify_key("favorites.removed", &[]);
    }
    removed
}

/// Remove every selected favorite; an empty selection only notifies
pub fn remove_favorites(ctx: &AppContext, dish_ids: &HashSet<String>) -> usize {
    if dish_ids.is_empty() {
        ctx.ui.notify_key("favorites.selectItems", &[]);
        return 0;
    }

    let removed = ctx.favorites.remove_batch(dish_ids);
    ctx.actions.append(
        actions::REMOVE_BATCH_FAVORITES,
        json!({ "count": removed }),
        pages::FAVORITES,
    );
    ctx.ui
        .notify_key("favorites.batchRemoved", &[("count", removed.to_string())]);
    removed
}
