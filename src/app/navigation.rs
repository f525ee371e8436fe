//! Navigation and local toggles for the App.
//!
//! Nothing here talks to the backend; every method updates local state and
//! marks the frame dirty in the same call.

use crate::models::Platform;
use crate::state::Feature;

use super::{App, Panel};

impl App {
    /// Toggle a trend's membership in the selection.
    pub fn toggle_trend(&mut self, id: &str) -> bool {
        let selected = self.selection.toggle(id);
        self.mark_dirty();
        selected
    }

    /// Toggle the trend under the cursor, if any.
    pub fn toggle_cursor_trend(&mut self) {
        if let Some(id) = self.trends.cursor_trend().map(|t| t.id.clone()) {
            self.toggle_trend(&id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.mark_dirty();
    }

    pub fn toggle_platform(&mut self, platform: Platform) {
        self.composer.toggle_platform(platform);
        self.mark_dirty();
    }

    pub fn toggle_feature(&mut self, feature: Feature) {
        self.composer.toggle_feature(feature);
        self.mark_dirty();
    }

    /// Switch focus between the trend list and the composer
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        self.mark_dirty();
    }

    /// Move up in the focused panel
    pub fn move_up(&mut self) {
        match self.focus {
            Panel::Trends => self.trends.move_up(),
            Panel::Composer => self.composer.scroll_up(),
        }
        self.mark_dirty();
    }

    /// Move down in the focused panel
    pub fn move_down(&mut self) {
        match self.focus {
            Panel::Trends => self.trends.move_down(),
            Panel::Composer => self.composer.scroll_down(),
        }
        self.mark_dirty();
    }

    /// Close the notification on screen, revealing the next one.
    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use crate::adapters::MockHttpClient;
    use crate::models::Trend;

    use super::*;

    #[test]
    fn test_selection_count_tracks_toggles() {
        let mut app = test_app(&MockHttpClient::new());
        let ops = ["a", "b", "a", "c", "c", "c", "d"];
        let mut expected = std::collections::HashSet::new();
        for id in ops {
            app.toggle_trend(id);
            if !expected.remove(id) {
                expected.insert(id);
            }
            assert_eq!(app.selection().len(), expected.len());
        }
        app.clear_selection();
        assert!(app.selection().is_empty());
    }

    #[test]
    fn test_toggle_cursor_trend() {
        let mut app = test_app(&MockHttpClient::new());
        app.toggle_cursor_trend();
        assert!(app.selection().is_empty());

        app.trends.replace(vec![Trend::new("t1", "One"), Trend::new("t2", "Two")]);
        app.move_down();
        app.toggle_cursor_trend();
        assert!(app.selection().contains("t2"));
    }

    #[test]
    fn test_move_follows_focus() {
        let mut app = test_app(&MockHttpClient::new());
        app.trends.replace(vec![Trend::new("t1", "One"), Trend::new("t2", "Two")]);
        app.cycle_focus();
        assert_eq!(app.focus, Panel::Composer);

        app.move_down();
        assert_eq!(app.trends.cursor(), 0);
        assert_eq!(app.composer.scroll, 1);
    }

    #[test]
    fn test_local_toggles_mark_dirty() {
        let mut app = test_app(&MockHttpClient::new());
        app.needs_redraw = false;
        app.toggle_platform(Platform::Tiktok);
        assert!(app.needs_redraw);
        assert!(app.composer.is_platform_enabled(Platform::Tiktok));

        app.needs_redraw = false;
        app.toggle_feature(Feature::Monetization);
        assert!(app.needs_redraw);
        assert!(app.composer.flags.monetization);
    }
}
