//! Input handling module for keyboard commands.
//!
//! All key input goes through one path:
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> execute_command() -> App mutation
//! ```
//!
//! - [`command`] - The [`Command`] enum with all user actions
//! - [`context`] - [`InputContext`] snapshot used for dispatch
//! - [`keybindings`] - Default key binding configuration
//! - [`registry`] - [`CommandRegistry`] mapping keys to commands
//! - [`handlers`] - Command execution

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use handlers::execute_command;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
