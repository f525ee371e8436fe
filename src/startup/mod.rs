//! Startup: configuration and logging, everything that happens before the
//! terminal switches to the alternate screen.
//!
//! - [`config`] - [`DashboardConfig`] built from env and CLI flags
//! - [`logging`] - file-backed `tracing` subscriber

pub mod config;
pub mod logging;

pub use config::DashboardConfig;
pub use logging::{default_log_path, init_logging};
