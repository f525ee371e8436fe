//! Network-related error types.
//!
//! Every failed backend call ends up here: transport failures, non-2xx
//! statuses and bodies that do not decode into the expected shape.

use std::fmt;

use crate::traits::{HttpError, Response};

/// A backend request that did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the backend failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String, message: String },

    /// The configured base URL is not a valid URL.
    InvalidUrl { url: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// The body did not match the expected JSON shape.
    InvalidResponse { message: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Map a transport failure from the [`crate::traits::HttpClient`] layer.
    pub fn from_transport(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(message) => NetworkError::Timeout {
                url: url.to_string(),
                message,
            },
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
                url: url.to_string(),
            },
            HttpError::Other(message) => NetworkError::Other { message },
        }
    }

    /// Build an `HttpStatus` error from a non-2xx response.
    ///
    /// The backend reports failures as `{"detail": "..."}`; when that is
    /// present it becomes the message, otherwise the raw body does.
    pub fn from_status(response: &Response) -> Self {
        let message = response
            .json::<serde_json::Value>()
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .unwrap_or_else(|| response.text_lossy());
        NetworkError::HttpStatus {
            status: response.status,
            message,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { url, .. } => {
                format!("Unable to reach the backend at {}. Is it running?", url)
            }
            NetworkError::Timeout { .. } => {
                "The backend did not answer in time. Please try again.".to_string()
            }
            NetworkError::InvalidUrl { url } => {
                format!("The backend URL '{}' is not valid. Check BACKEND_URL.", url)
            }
            NetworkError::HttpStatus { status, message } => match *status {
                404 => format!("Not found: {}", message),
                500..=599 if !message.is_empty() => format!("Backend error: {}", message),
                500..=599 => "The backend is experiencing issues. Please try again later.".to_string(),
                _ => format!("The backend returned HTTP {}: {}", status, message),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an unexpected response from the backend.".to_string()
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// True for failures on the server side of the wire.
    pub fn is_server_side(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status, .. } if *status >= 500)
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url, message } => {
                write!(f, "Request to '{}' timed out: {}", url, message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL '{}'", url),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}
