//! Command execution.

use crate::app::App;

use super::command::Command;

/// Apply a command to the App. Returns `true` if it changed anything.
pub fn execute_command(app: &mut App, cmd: Command) -> bool {
    if app.notifications.is_blocking() && !matches!(cmd, Command::Quit | Command::DismissNotification) {
        return false;
    }

    match cmd {
        Command::Quit => app.shutdown(),
        Command::CycleFocus => app.cycle_focus(),
        Command::MoveUp => app.move_up(),
        Command::MoveDown => app.move_down(),
        Command::ToggleCursorTrend => app.toggle_cursor_trend(),
        Command::ClearSelection => app.clear_selection(),
        Command::CollectTrends => app.collect_trends(),
        Command::TogglePlatform(platform) => app.toggle_platform(platform),
        Command::ToggleFeature(feature) => app.toggle_feature(feature),
        Command::GenerateContent => app.generate_content(),
        Command::PublishTelegram => app.publish_telegram(),
        Command::RunAutomation => app.run_automation(),
        Command::RefreshStats => app.refresh_stats(),
        Command::DismissNotification => app.dismiss_notification(),
        Command::Noop => return false,
    }
    true
}
