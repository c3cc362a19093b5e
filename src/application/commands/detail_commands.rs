// Detail page commands

use chrono::Local;
use serde_json::json;

use crate::application::commands::{find_dish, reported, CommandResult};
use crate::application::dto::*;
use crate::application::error_handling::{report_error, ErrorResponse};
use crate::application::state::AppContext;
use crate::domain::action::{actions, pages};
use crate::domain::{DateStyle, HistorySource};
use crate::error::AppError;

/// Full dish view with related dishes.
/// An unknown id notifies and navigates back.
pub fn open_detail(ctx: &AppContext, dish_id: &str) -> CommandResult<DishDetailDto> {
    let dish = match find_dish(ctx, dish_id) {
        Ok(dish) => dish,
        Err(e @ AppError::NotFound(_)) => {
            log::warn!("Detail requested for unknown dish {}", dish_id);
            ctx.ui.notify_key("detail.notFound", &[]);
            ctx.ui.navigator.go_back();
            return Err(ErrorResponse::from_app_error(&e));
        }
        Err(e) => return Err(report_error(&ctx.ui, &e)),
    };

    let favorite_ids = ctx.favorites.favorite_ids();
    let related = DishCardDto::annotate(ctx.recommendations.related(&dish), &favorite_ids);

    ctx.actions
        .append(actions::VIEW_DETAIL, json!({ "dishId": dish.id }), pages::DETAIL);

    Ok(DishDetailDto {
        category_key: dish.category.label_key(),
        cuisine_key: dish.cuisine.label_key(),
        difficulty_key: dish.difficulty.label_key(),
        card: DishCardDto::new(dish, &favorite_ids),
        related,
    })
}

pub fn add_to_history(ctx: &AppContext, dish_id: &str) -> CommandResult<HistoryItemDto> {
    let dish = reported(ctx, find_dish(ctx, dish_id))?;

    let entry = ctx.history.record(&dish, HistorySource::Detail);
    ctx.actions
        .append(actions::ADD_TO_HISTORY, json!({ "dishId": dish.id }), pages::DETAIL);
    ctx.ui.notify_key("detail.addedToHistory", &[]);

    Ok(HistoryItemDto::new(
        entry,
        &Local::now(),
        DateStyle::MonthDayTime,
        &ctx.favorites.favorite_ids(),
    ))
}

/// Records the dish in history and counts a cooking session
pub fn start_cooking(ctx: &AppContext, dish_id: &str) -> CommandResult<()> {
    let dish = reported(ctx, find_dish(ctx, dish_id))?;

    ctx.history.record(&dish, HistorySource::Detail);
    ctx.actions.append(
        actions::START_COOKING,
        json!({ "dishId": dish.id, "cookingTime": dish.cooking_time }),
        pages::DETAIL,
    );
    ctx.ui
        .notify_key("detail.startCooking", &[("name", dish.name.clone())]);
    Ok(())
}
