//! Unified error type for dashboard actions.

use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::validation::ValidationError;

/// Anything an action can fail with.
///
/// Both variants are caught at the action boundary in [`crate::app::App`];
/// neither ever reaches `main`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::Network(err) => match err {
                NetworkError::ConnectionFailed { .. }
                | NetworkError::Timeout { .. }
                | NetworkError::InvalidUrl { .. }
                | NetworkError::Other { .. } => ErrorCategory::Network,
                NetworkError::HttpStatus { .. } if err.is_server_side() => ErrorCategory::Server,
                NetworkError::HttpStatus { .. } | NetworkError::InvalidResponse { .. } => {
                    ErrorCategory::Client
                }
            },
            DashboardError::Validation(_) => ErrorCategory::User,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Network(err) => err.user_message(),
            DashboardError::Validation(err) => err.user_message(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::Network(err) => err.error_code(),
            DashboardError::Validation(err) => err.error_code(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let conn: DashboardError = NetworkError::ConnectionFailed {
            url: "u".to_string(),
            message: "m".to_string(),
        }
        .into();
        assert_eq!(conn.category(), ErrorCategory::Network);

        let server: DashboardError = NetworkError::HttpStatus {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(server.category(), ErrorCategory::Server);

        let not_found: DashboardError = NetworkError::HttpStatus {
            status: 404,
            message: "missing".to_string(),
        }
        .into();
        assert_eq!(not_found.category(), ErrorCategory::Client);

        let empty: DashboardError = ValidationError::EmptySelection.into();
        assert_eq!(empty.category(), ErrorCategory::User);
        assert!(empty.is_validation());
    }

    #[test]
    fn test_transparent_display() {
        let err: DashboardError = ValidationError::NoPlatforms.into();
        assert_eq!(err.to_string(), "no platforms selected");
        assert_eq!(err.error_code(), "E_VAL_PLATFORMS");
    }
}
