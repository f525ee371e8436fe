//! Notification modal
//!
//! Draws the front notification centered over the dashboard. The whole
//! dialog is one dismiss target.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::context::RenderContext;
use crate::state::{Notification, NotificationKind};
use crate::ui::components::{calculate_dialog_width, render_dialog_frame, DialogFrameConfig};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_SELECTED, COLOR_SUCCESS};

fn kind_marker(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Info => ("\u{2139}", COLOR_SELECTED),
        NotificationKind::Success => ("\u{2713}", COLOR_SUCCESS),
        NotificationKind::Error => ("\u{2717}", COLOR_ERROR),
    }
}

/// Rows `text` needs when wrapped at `width` columns.
pub(crate) fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    text.lines()
        .map(|line| line.width().div_ceil(width).max(1) as u16)
        .sum::<u16>()
        .max(1)
}

/// Hint line under the message.
pub fn dismiss_hint(queued: usize) -> String {
    if queued > 0 {
        format!("Enter/Esc to dismiss  (+{} more)", queued)
    } else {
        "Enter/Esc to dismiss".to_string()
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    notification: &Notification,
    ctx: &RenderContext,
    registry: &mut HitAreaRegistry,
) {
    let (marker, color) = kind_marker(notification.kind);
    let title = Line::from(vec![
        Span::styled(format!(" {} ", marker), Style::default().fg(color)),
        Span::styled(
            format!("{} ", notification.title),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let probe = DialogFrameConfig::with_title_line(title.clone(), 0).border_color(color);
    let text_width = calculate_dialog_width(&ctx.layout, &probe, area.width).saturating_sub(4);
    // One spare row because word wrapping can break earlier than columns suggest
    let message_rows = wrapped_height(&notification.message, text_width) + 1;
    let config = DialogFrameConfig::with_title_line(title, message_rows + 2).border_color(color);

    let inner = render_dialog_frame(frame, area, &ctx.layout, &config);
    if inner.height == 0 || inner.width < 4 {
        return;
    }

    let text_area = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);
    let hint_row = text_area.y + text_area.height - 1;
    let message_area = Rect::new(
        text_area.x,
        text_area.y,
        text_area.width,
        text_area.height.saturating_sub(2),
    );

    frame.render_widget(
        Paragraph::new(notification.message.as_str())
            .style(Style::default().fg(COLOR_ACCENT))
            .wrap(Wrap { trim: true }),
        message_area,
    );
    frame.render_widget(
        Line::styled(
            dismiss_hint(ctx.queued_notifications),
            Style::default().fg(COLOR_DIM),
        ),
        Rect::new(text_area.x, hint_row, text_area.width, 1),
    );

    // Dialog including its border
    let dialog = Rect::new(
        inner.x.saturating_sub(1),
        inner.y.saturating_sub(1),
        inner.width + 2,
        inner.height + 2,
    );
    registry.register(dialog, ClickAction::DismissNotification, None);
}
