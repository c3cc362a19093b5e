// Error handling for commands
//
// ARCHITECTURE:
// - Maps internal errors to a UI category plus a translation key
// - Never exposes internal implementation details
// - Logs errors for debugging
// - Nothing is fatal: the shell shows a transient notification

use serde::{Deserialize, Serialize};

use crate::application::ports::UiPorts;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message_key: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Unknown dish id
    NotFound,

    /// Input the user can fix, such as a search with no filter
    Validation,

    /// Catalog invariant violation
    DomainError,

    /// Storage or pool failure
    Storage,

    /// Cloud mirror failure
    ExternalService,

    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message_key: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message_key: message_key.to_string(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: &AppError) -> Self {
        match error {
            AppError::NotFound(what) => {
                Self::new(ErrorType::NotFound, "error.notFound", Some(what.clone()))
            }

            AppError::EmptyCriteria => Self::new(ErrorType::Validation, "choose.selectFilter", None),

            AppError::NoDishAvailable => Self::new(ErrorType::Validation, "error.noDish", None),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "error.invalidData",
                Some(domain_error.to_string()),
            ),

            AppError::Database(_) | AppError::Pool(_) | AppError::Persistence(_) => {
                log::error!("Storage error: {}", error);
                Self::new(ErrorType::Storage, "error.storage", None)
            }

            AppError::Remote(message) => {
                log::warn!("Remote error: {}", message);
                Self::new(ErrorType::ExternalService, "error.network", None)
            }

            AppError::Serialization(_) | AppError::Io(_) | AppError::Other(_) => {
                log::error!("Internal error: {}", error);
                Self::new(ErrorType::Internal, "error.unknown", None)
            }
        }
    }

    pub fn validation(message_key: &str) -> Self {
        Self::new(ErrorType::Validation, message_key, None)
    }
}

/// Show `error` as a transient notification and hand back its response
pub fn report_error(ui: &UiPorts, error: &AppError) -> ErrorResponse {
    let response = ErrorResponse::from_app_error(error);
    ui.notify_key(&response.message_key, &[]);
    response
}
