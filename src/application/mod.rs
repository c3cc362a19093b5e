// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the services
// - It provides the boundary between the UI shell and the core
// - It translates between DTOs and domain entities
// - The shell plugs in through the ports in `ports`

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod ports;
pub mod state;

pub use commands::CommandResult;
pub use dto::*;
pub use error_handling::{report_error, ErrorResponse, ErrorType};
pub use ports::{
    BusyIndicator, KeyTranslator, LoggingUi, Navigator, Notifier, RecordingUi, Translator, UiPorts,
};
pub use state::AppContext;
