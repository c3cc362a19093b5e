// Command Handlers
//
// ARCHITECTURE:
// - One module per page of the shell
// - Commands take the AppContext, call services, return DTOs
// - Failures are reported through the notifier and returned as ErrorResponse
// - Commands NEVER contain ledger or filtering logic

pub mod choose_commands;
pub mod detail_commands;
pub mod favorites_commands;
pub mod history_commands;
pub mod home_commands;
pub mod profile_commands;
pub mod settings_commands;

pub use choose_commands::*;
pub use detail_commands::*;
pub use favorites_commands::*;
pub use history_commands::*;
pub use home_commands::*;
pub use profile_commands::*;
pub use settings_commands::*;

use crate::application::error_handling::{report_error, ErrorResponse};
use crate::application::state::AppContext;
use crate::domain::Dish;
use crate::error::{AppError, AppResult};

pub type CommandResult<T> = Result<T, ErrorResponse>;

/// Report a failed service call through the UI and convert it
pub(crate) fn reported<T>(ctx: &AppContext, result: AppResult<T>) -> CommandResult<T> {
    result.map_err(|e| report_error(&ctx.ui, &e))
}

/// Catalog lookup shared by the pages that act on a dish id
pub(crate) fn find_dish(ctx: &AppContext, dish_id: &str) -> AppResult<Dish> {
    ctx.catalog
        .get_by_id(dish_id)
        .cloned()
        .ok_or_else(|| AppError::not_found(dish_id))
}
