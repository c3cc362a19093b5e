// Home page commands

use serde_json::json;

use crate::application::commands::{find_dish, reported, CommandResult};
use crate::application::dto::*;
use crate::application::state::AppContext;
use crate::domain::action::{actions, pages};
use crate::domain::{Category, Cuisine, FilterCriteria};
use crate::events::DishPicked;
use crate::services::filter_engine;

/// Today's recommendations plus the browse taxonomy
pub fn load_home(ctx: &AppContext) -> HomeDto {
    let prefs = ctx.preferences.get();
    let favorite_ids = ctx.favorites.favorite_ids();

    let today = ctx
        .recommendations
        .today(&prefs)
        .into_iter()
        .map(|rec| RecommendationDto::new(rec, &favorite_ids))
        .collect();

    HomeDto {
        today,
        taxonomy: ctx.catalog.taxonomy().clone(),
    }
}

/// Preference-driven random pick after the quick-choice delay
pub async fn quick_choice(ctx: &AppContext) -> CommandResult<RandomPickDto> {
    ctx.ui.busy.show_busy("home.choosing");
    tokio::time::sleep(ctx.config.quick_choice_delay()).await;

    let criteria = ctx.random.criteria_from_preferences(&ctx.preferences.get());
    let result = ctx.random.pick_random(ctx.catalog.all(), &criteria);
    ctx.ui.busy.hide_busy();

    let pick = reported(ctx, result)?;
    ctx.event_bus
        .emit(DishPicked::new(pick.dish.id.clone(), pick.matched_criteria));
    ctx.actions
        .append(actions::QUICK_CHOICE, json!({ "dishId": pick.dish.id }), pages::INDEX);

    Ok(RandomPickDto::new(pick, &ctx.favorites.favorite_ids()))
}

pub fn view_recommendation(ctx: &AppContext, dish_id: &str) -> CommandResult<()> {
    let dish = reported(ctx, find_dish(ctx, dish_id))?;
    ctx.actions
        .append(actions::VIEW_RECOMMENDATION, json!({ "dishId": dish.id }), pages::INDEX);
    ctx.ui.navigator.open_dish_detail(&dish.id);
    Ok(())
}

/// Dishes of one category, with the criteria the choose page opens with
pub fn browse_category(ctx: &AppContext, category: Category) -> (FilterCriteria, Vec<DishCardDto>) {
    ctx.actions
        .append(actions::BROWSE_CATEGORY, json!({ "category": category }), pages::INDEX);

    let dishes = ctx.catalog.by_category(category);
    (
        FilterCriteria::new().with_category(category),
        DishCardDto::annotate(dishes, &ctx.favorites.favorite_ids()),
    )
}

pub fn browse_cuisine(ctx: &AppContext, cuisine: Cuisine) -> (FilterCriteria, Vec<DishCardDto>) {
    ctx.actions
        .append(actions::BROWSE_CUISINE, json!({ "cuisine": cuisine }), pages::INDEX);

    let criteria = FilterCriteria::new().with_cuisine(cuisine);
    let dishes = filter_engine::apply(ctx.catalog.all(), &criteria);
    (criteria, DishCardDto::annotate(dishes, &ctx.favorites.favorite_ids()))
}
