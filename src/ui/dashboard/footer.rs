//! Footer hints for the dashboard
//!
//! Key hints on the left depend on the focused panel; the right side shows
//! which actions are in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use super::context::RenderContext;
use crate::app::Panel;
use crate::ui::components::StatusIndicatorType;
use crate::ui::theme::COLOR_DIM;

/// Context-aware key hints
pub fn get_footer_hint(ctx: &RenderContext) -> &'static str {
    if ctx.notification.is_some() {
        "enter/esc dismiss  ctrl+c quit"
    } else {
        match ctx.focus {
            Panel::Trends => {
                "\u{2191}\u{2193} move  space select  c collect  g generate  p publish  tab composer  q quit"
            }
            Panel::Composer => {
                "1-4 platforms  v/o/m features  \u{2191}\u{2193} scroll  g generate  p publish  tab trends  q quit"
            }
        }
    }
}

/// Names of the actions currently pending.
pub fn pending_actions(ctx: &RenderContext) -> Vec<&'static str> {
    [
        &ctx.trends.collect,
        &ctx.composer.generate,
        &ctx.composer.publish,
        ctx.automation,
        &ctx.summary.refresh,
    ]
    .into_iter()
    .filter(|tracker| tracker.is_pending())
    .map(|tracker| tracker.name())
    .collect()
}

pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext) {
    if area.height == 0 {
        return;
    }

    let pending = pending_actions(ctx);
    let status = if pending.is_empty() {
        None
    } else {
        Some(Line::from(
            StatusIndicatorType::spinner(format!("{}...", pending.join(", ")), ctx.spinner)
                .to_spans(),
        ))
    };
    let status_width = status.as_ref().map(Line::width).unwrap_or(0) as u16;

    let hint_width = area.width.saturating_sub(status_width + 1);
    Line::from(Span::styled(
        get_footer_hint(ctx),
        Style::default().fg(COLOR_DIM),
    ))
    .render(Rect::new(area.x, area.y, hint_width, 1), buf);

    if let Some(status) = status {
        if status_width < area.width {
            let x = area.x + area.width - status_width;
            status.render(Rect::new(x, area.y, status_width, 1), buf);
        }
    }
}
