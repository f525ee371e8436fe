//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Ping the backend and print its status, without the TUI
    Check { backend_url: Option<String> },
    /// Run the TUI application (default)
    RunTui { backend_url: Option<String> },
    /// Arguments could not be parsed
    Invalid(String),
}

impl CliCommand {
    /// Backend override given with `--backend-url`.
    pub fn backend_url(&self) -> Option<&str> {
        match self {
            CliCommand::Check { backend_url } | CliCommand::RunTui { backend_url } => {
                backend_url.as_deref()
            }
            _ => None,
        }
    }
}

pub const USAGE: &str = "\
Usage: trendboard [OPTIONS]

Options:
  --backend-url <URL>  Backend origin (overrides BACKEND_URL)
  --check              Ping the backend, print its status and exit
  -V, --version        Print version
  -h, --help           Print this help

Environment:
  BACKEND_URL                       Backend origin (default http://localhost:8001)
  TRENDBOARD_REQUEST_TIMEOUT_SECS   Per-request timeout, 0 disables (default 30)
  TRENDBOARD_LOG                    Log filter directive (default info)";

/// Parse command-line arguments and return the command to execute.
///
/// `--version` and `--help` win as soon as they are seen. Unknown flags are
/// ignored.
///
/// # Examples
///
/// ```
/// use trendboard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["trendboard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut backend_url = None;
    let mut check = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--check" => check = true,
            "--backend-url" => match args.next() {
                Some(url) if !url.starts_with('-') => backend_url = Some(url),
                _ => return CliCommand::Invalid("--backend-url requires a value".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--backend-url=") {
                    if url.is_empty() {
                        return CliCommand::Invalid("--backend-url requires a value".to_string());
                    }
                    backend_url = Some(url.to_string());
                }
            }
        }
    }

    if check {
        CliCommand::Check { backend_url }
    } else {
        CliCommand::RunTui { backend_url }
    }
}
