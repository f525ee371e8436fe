//! Button Row Component
//!
//! A horizontal row of clickable controls. Each button registers its own hit
//! area; disabled and busy buttons are drawn dimmed and register nothing, so
//! a click on them is a no-op.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BUSY, COLOR_CURSOR_BG, COLOR_DIM, COLOR_SELECTED};

/// Gap between buttons
const BUTTON_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Disabled,
    /// Action in flight; the label carries the busy text
    Busy,
    /// Toggle switched on
    On,
    /// Toggle switched off
    Off,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub state: ButtonState,
    pub action: Option<ClickAction>,
}

impl Button {
    /// Push button, enabled or disabled.
    pub fn action(label: impl Into<String>, enabled: bool, action: ClickAction) -> Self {
        Self {
            label: label.into(),
            state: if enabled {
                ButtonState::Enabled
            } else {
                ButtonState::Disabled
            },
            action: Some(action),
        }
    }

    /// Push button replaced by a busy label while its action is pending.
    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: ButtonState::Busy,
            action: None,
        }
    }

    pub fn toggle(label: impl Into<String>, on: bool, action: ClickAction) -> Self {
        Self {
            label: label.into(),
            state: if on { ButtonState::On } else { ButtonState::Off },
            action: Some(action),
        }
    }

    /// Text as drawn.
    pub fn text(&self) -> String {
        match self.state {
            ButtonState::Enabled | ButtonState::Disabled | ButtonState::Busy => {
                format!("[ {} ]", self.label)
            }
            ButtonState::On => format!("[x] {}", self.label),
            ButtonState::Off => format!("[ ] {}", self.label),
        }
    }

    fn style(&self) -> Style {
        match self.state {
            ButtonState::Enabled => Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
            ButtonState::Disabled => Style::default().fg(COLOR_DIM),
            ButtonState::Busy => Style::default().fg(COLOR_BUSY),
            ButtonState::On => Style::default().fg(COLOR_SELECTED),
            ButtonState::Off => Style::default().fg(COLOR_ACCENT),
        }
    }

    fn is_clickable(&self) -> bool {
        !matches!(self.state, ButtonState::Disabled | ButtonState::Busy)
    }
}

/// Draw `buttons` left to right on the first row of `area`.
///
/// Buttons that do not fit are dropped. Returns the number drawn.
pub fn render_button_row(
    buf: &mut Buffer,
    area: Rect,
    buttons: &[Button],
    registry: &mut HitAreaRegistry,
) -> usize {
    if area.height == 0 {
        return 0;
    }

    let right = area.x + area.width;
    let mut x = area.x;
    let mut drawn = 0;

    for button in buttons {
        let text = button.text();
        let width = text.width() as u16;
        if x + width > right {
            break;
        }

        buf.set_stringn(x, area.y, &text, width as usize, button.style());

        if button.is_clickable() {
            if let Some(action) = &button.action {
                registry.register(
                    Rect::new(x, area.y, width, 1),
                    action.clone(),
                    Some(Style::default().bg(COLOR_CURSOR_BG)),
                );
            }
        }

        x = x.saturating_add(width + BUTTON_GAP);
        drawn += 1;
    }

    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn test_button_text() {
        assert_eq!(
            Button::action("Generate", true, ClickAction::GenerateContent).text(),
            "[ Generate ]"
        );
        assert_eq!(
            Button::toggle("Telegram", true, ClickAction::CollectTrends).text(),
            "[x] Telegram"
        );
        assert_eq!(
            Button::toggle("Video", false, ClickAction::CollectTrends).text(),
            "[ ] Video"
        );
    }

    #[test]
    fn test_only_clickable_buttons_register() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        let mut registry = HitAreaRegistry::new();
        let buttons = [
            Button::action("Generate", true, ClickAction::GenerateContent),
            Button::action("Publish", false, ClickAction::PublishTelegram),
            Button::busy("◐ Collecting..."),
        ];

        let drawn = render_button_row(&mut buf, area, &buttons, &mut registry);

        assert_eq!(drawn, 3);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.hit_test(2, 0), Some(ClickAction::GenerateContent));
        assert_eq!(registry.hit_test(16, 0), None);
        assert!(row_text(&buf, 0).starts_with("[ Generate ]  [ Publish ]"));
    }

    #[test]
    fn test_overflowing_buttons_are_dropped() {
        let area = Rect::new(0, 0, 14, 1);
        let mut buf = Buffer::empty(area);
        let mut registry = HitAreaRegistry::new();
        let buttons = [
            Button::action("Generate", true, ClickAction::GenerateContent),
            Button::action("Publish", true, ClickAction::PublishTelegram),
        ];

        assert_eq!(render_button_row(&mut buf, area, &buttons, &mut registry), 1);
        assert_eq!(registry.len(), 1);
    }
}
