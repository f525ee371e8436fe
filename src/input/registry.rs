//! Command registry for dispatching keyboard input to commands.
//!
//! Priority:
//! 1. Ctrl+C always quits
//! 2. An open notification takes every key (Enter/Esc dismiss, rest swallowed)
//! 3. Focus bindings of the focused panel
//! 4. Global bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a key event to a command. `None` means the key is unbound.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = normalize(key);

        if context.notification_open {
            return Some(self.config.get_notification(&combo).unwrap_or(Command::Noop));
        }

        self.config
            .get_focus(context.focus, &combo)
            .or_else(|| self.config.get_global(&combo))
    }
}

/// Drop SHIFT from character keys; the shifted character already encodes it.
fn normalize(key: KeyEvent) -> KeyCombo {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    KeyCombo::new(key.code, modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Panel;
    use crate::state::Feature;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new(Panel::Trends).with_notification(true);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.dispatch(ctrl_c, &ctx), Some(Command::Quit));
    }

    #[test]
    fn test_notification_swallows_keys() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new(Panel::Trends).with_notification(true);
        assert_eq!(registry.dispatch(key(KeyCode::Char('g')), &ctx), Some(Command::Noop));
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &ctx),
            Some(Command::DismissNotification)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Enter), &ctx),
            Some(Command::DismissNotification)
        );
    }

    #[test]
    fn test_focus_bindings_before_global() {
        let registry = CommandRegistry::new();
        let trends = InputContext::new(Panel::Trends);
        let composer = InputContext::new(Panel::Composer);

        assert_eq!(
            registry.dispatch(key(KeyCode::Enter), &trends),
            Some(Command::ToggleCursorTrend)
        );
        assert_eq!(registry.dispatch(key(KeyCode::Enter), &composer), None);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('o')), &composer),
            Some(Command::ToggleFeature(Feature::Voice))
        );
    }

    #[test]
    fn test_shifted_chars_are_normalized() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new(Panel::Trends);
        let shifted = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::SHIFT);
        assert_eq!(registry.dispatch(shifted, &ctx), Some(Command::GenerateContent));
        assert_eq!(registry.dispatch(key(KeyCode::Char('z')), &ctx), None);
    }
}
