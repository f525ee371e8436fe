//! Error category classification.

use std::fmt;

/// High-level classification used to decide how an error is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Could not talk to the backend (connection, timeout, bad URL).
    Network,

    /// The backend answered with a 5xx.
    Server,

    /// The backend rejected the request or answered with an unexpected shape.
    Client,

    /// A local precondition failed; the user has to change something.
    User,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
        }
    }

    /// Title used for the notification raised by an error in this category.
    pub fn notification_title(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Connection problem",
            ErrorCategory::Server => "Backend error",
            ErrorCategory::Client => "Request failed",
            ErrorCategory::User => "Action needed",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
