//! Click action handler.
//!
//! Translates actions dispatched from the hit area registry into App calls.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();
    tracing::debug!("Click: {:?}", action);

    // A visible notification captures all input
    if app.notifications.is_blocking() {
        if action == ClickAction::DismissNotification {
            app.dismiss_notification();
        }
        return;
    }

    match action {
        ClickAction::ToggleTrend(id) => {
            if let Some(index) = app.trends.position_of(&id) {
                app.trends.set_cursor(index);
            }
            app.toggle_trend(&id);
        }
        ClickAction::CollectTrends => app.collect_trends(),
        ClickAction::ClearSelection => app.clear_selection(),
        ClickAction::TogglePlatform(platform) => app.toggle_platform(platform),
        ClickAction::ToggleFeature(feature) => app.toggle_feature(feature),
        ClickAction::GenerateContent => app.generate_content(),
        ClickAction::PublishTelegram => app.publish_telegram(),
        ClickAction::RunAutomation => app.run_automation(),
        ClickAction::RefreshStats => app.refresh_stats(),
        ClickAction::DismissNotification => {}
    }
}
