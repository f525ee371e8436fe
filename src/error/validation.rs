//! Local precondition failures.
//!
//! These short-circuit an action before any request leaves the process.

use thiserror::Error;

/// A user action rejected locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Generation requested with no trends selected.
    #[error("no trends selected")]
    EmptySelection,

    /// Generation requested with every platform toggled off.
    #[error("no platforms selected")]
    NoPlatforms,

    /// Publish requested without generated content for the platform.
    #[error("no generated content for {platform}")]
    NothingToPublish { platform: String },

    /// The action already has a request in flight.
    #[error("{action} is already in progress")]
    AlreadyPending { action: &'static str },
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::EmptySelection => {
                "Select at least one trend before generating content.".to_string()
            }
            ValidationError::NoPlatforms => {
                "Enable at least one platform before generating content.".to_string()
            }
            ValidationError::NothingToPublish { platform } => {
                format!("Generate {} content before publishing.", platform)
            }
            ValidationError::AlreadyPending { action } => {
                format!("{} is already running. Please wait.", action)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptySelection => "E_VAL_SELECTION",
            ValidationError::NoPlatforms => "E_VAL_PLATFORMS",
            ValidationError::NothingToPublish { .. } => "E_VAL_PUBLISH",
            ValidationError::AlreadyPending { .. } => "E_VAL_PENDING",
        }
    }
}
