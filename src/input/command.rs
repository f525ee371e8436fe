//! Command definitions for keyboard input handling.

use crate::models::Platform;
use crate::state::Feature;

/// Every action a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Quit the application (`q`, Ctrl+C)
    Quit,
    /// Switch focus between panels (Tab)
    CycleFocus,
    MoveUp,
    MoveDown,
    /// Toggle the trend under the cursor (Space, Enter)
    ToggleCursorTrend,
    ClearSelection,
    CollectTrends,
    TogglePlatform(Platform),
    ToggleFeature(Feature),
    GenerateContent,
    PublishTelegram,
    RunAutomation,
    RefreshStats,
    /// Close the notification on screen (Enter, Esc)
    DismissNotification,
    /// Swallow the key
    Noop,
}
