//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::Panel;
use crate::models::Platform;
use crate::state::Feature;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active regardless of focus
    pub global: HashMap<KeyCombo, Command>,
    /// Active only when the panel has focus
    pub focus: HashMap<Panel, HashMap<KeyCombo, Command>>,
    /// Active while a notification is open; everything else is swallowed
    pub notification: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            focus: HashMap::new(),
            notification: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_focus_bindings();
        config.setup_notification_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        let global = &mut self.global;
        global.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        global.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        global.insert(KeyCombo::plain(KeyCode::Tab), Command::CycleFocus);

        global.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        global.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        global.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        global.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);

        global.insert(KeyCombo::plain(KeyCode::Char('c')), Command::CollectTrends);
        global.insert(KeyCombo::plain(KeyCode::Char('x')), Command::ClearSelection);
        global.insert(KeyCombo::plain(KeyCode::Char('g')), Command::GenerateContent);
        global.insert(KeyCombo::plain(KeyCode::Char('p')), Command::PublishTelegram);
        global.insert(KeyCombo::plain(KeyCode::Char('a')), Command::RunAutomation);
        global.insert(KeyCombo::plain(KeyCode::Char('r')), Command::RefreshStats);

        for platform in Platform::ALL {
            global.insert(
                KeyCombo::plain(KeyCode::Char(platform.hotkey())),
                Command::TogglePlatform(platform),
            );
        }

        global.insert(
            KeyCombo::plain(KeyCode::Char('v')),
            Command::ToggleFeature(Feature::Video),
        );
        global.insert(
            KeyCombo::plain(KeyCode::Char('o')),
            Command::ToggleFeature(Feature::Voice),
        );
        global.insert(
            KeyCombo::plain(KeyCode::Char('m')),
            Command::ToggleFeature(Feature::Monetization),
        );
    }

    fn setup_focus_bindings(&mut self) {
        let mut trends = HashMap::new();
        trends.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleCursorTrend);
        trends.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleCursorTrend);
        self.focus.insert(Panel::Trends, trends);
        self.focus.insert(Panel::Composer, HashMap::new());
    }

    fn setup_notification_bindings(&mut self) {
        self.notification
            .insert(KeyCombo::plain(KeyCode::Enter), Command::DismissNotification);
        self.notification
            .insert(KeyCombo::plain(KeyCode::Esc), Command::DismissNotification);
        self.notification
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<Command> {
        self.global.get(combo).copied()
    }

    pub fn get_focus(&self, focus: Panel, combo: &KeyCombo) -> Option<Command> {
        self.focus.get(&focus).and_then(|m| m.get(combo)).copied()
    }

    pub fn get_notification(&self, combo: &KeyCombo) -> Option<Command> {
        self.notification.get(combo).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_hotkeys_bound() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::Char('1'))),
            Some(Command::TogglePlatform(Platform::Telegram))
        );
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::Char('4'))),
            Some(Command::TogglePlatform(Platform::Instagram))
        );
    }

    #[test]
    fn test_space_only_bound_on_trend_list() {
        let config = KeybindingConfig::new();
        let space = KeyCombo::plain(KeyCode::Char(' '));
        assert_eq!(
            config.get_focus(Panel::Trends, &space),
            Some(Command::ToggleCursorTrend)
        );
        assert_eq!(config.get_focus(Panel::Composer, &space), None);
    }
}
