//! Command-line interface.
//!
//! Flags are handled before the terminal switches to TUI mode:
//!
//! ```ignore
//! use trendboard::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let config = DashboardConfig::from_env();
//! if let Some(result) = run_cli_command(&command, &config).await {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod check;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use check::handle_check_command;
pub use version::{version_line, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::startup::DashboardConfig;

/// Run a non-TUI command.
///
/// Returns `None` for `RunTui`, otherwise the command's outcome.
pub async fn run_cli_command(
    command: &CliCommand,
    config: &DashboardConfig,
) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}\n\n{}", version_line(), USAGE);
            Some(Ok(()))
        }
        CliCommand::Check { .. } => Some(handle_check_command(config).await),
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::RunTui { .. } => None,
    }
}
