// Choose page commands
//
// RULES:
// - A random choice never fails on criteria; it falls back to the catalog
// - A filtered search needs at least one criterion
// - Results of a superseded search are dropped silently

use serde_json::json;

use crate::application::commands::{find_dish, reported, CommandResult};
use crate::application::dto::*;
use crate::application::state::AppContext;
use crate::domain::action::{actions, pages};
use crate::domain::FilterCriteria;
use crate::events::DishPicked;
use crate::services::SearchOutcome;

pub fn random_choice(ctx: &AppContext, criteria: &FilterCriteria) -> CommandResult<RandomPickDto> {
    let pick = reported(ctx, ctx.random.pick_random(ctx.catalog.all(), criteria))?;

    ctx.event_bus
        .emit(DishPicked::new(pick.dish.id.clone(), pick.matched_criteria));
    ctx.actions.append(
        actions::RANDOM_CHOICE,
        json!({ "dishId": pick.dish.id, "filters": criteria }),
        pages::CHOOSE,
    );

    Ok(RandomPickDto::new(pick, &ctx.favorites.favorite_ids()))
}

/// Deferred filtered search.
///
/// `Ok(None)` means a newer search started meanwhile; the caller keeps
/// whatever it shows.
pub async fn filter_search(
    ctx: &AppContext,
    criteria: FilterCriteria,
) -> CommandResult<Option<Vec<DishCardDto>>> {
    let ticket = reported(ctx, ctx.search.begin(criteria))?;
    let filters = ticket.criteria.clone();

    ctx.ui.busy.show_busy("choose.searching");
    let outcome = ctx.search.complete(ticket).await;

    let results = match outcome {
        SearchOutcome::Current { results, .. } => results,
        SearchOutcome::Superseded { sequence } => {
            log::debug!("Dropping results of search #{}", sequence);
            return Ok(None);
        }
    };
    ctx.ui.busy.hide_busy();

    ctx.actions.append(
        actions::FILTER_SEARCH,
        json!({ "filters": filters, "resultCount": results.len() }),
        pages::CHOOSE,
    );
    if results.is_empty() {
        ctx.ui.notify_key("choose.noResults", &[]);
    }

    Ok(Some(DishCardDto::annotate(results, &ctx.favorites.favorite_ids())))
}

pub fn view_dish(ctx: &AppContext, dish_id: &str) -> CommandResult<()> {
    let dish = reported(ctx, find_dish(ctx, dish_id))?;
    ctx.actions
        .append(actions::VIEW_DISH, json!({ "dishId": dish.id }), pages::CHOOSE);
    ctx.ui.navigator.open_dish_detail(&dish.id);
    Ok(())
}
