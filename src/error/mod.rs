//! Error handling for trendboard.
//!
//! - [`NetworkError`]: a backend request failed (transport, status, decode)
//! - [`ValidationError`]: a local precondition failed before any request
//! - [`DashboardError`]: the union both action paths return
//! - [`ErrorCategory`]: coarse classification for notification titles
//!
//! | Category | Source | Surfaced as |
//! |----------|--------|-------------|
//! | Network | connection, timeout, bad URL | notification |
//! | Server | HTTP 5xx | notification |
//! | Client | HTTP 4xx, bad JSON | notification |
//! | User | validation | notification, no request sent |

mod category;
mod dashboard_error;
mod network;
mod validation;

pub use category::ErrorCategory;
pub use dashboard_error::DashboardError;
pub use network::NetworkError;
pub use validation::ValidationError;

/// Result alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
