//! Dashboard header
//!
//! Logo and backend address on the left, service status on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::context::RenderContext;
use crate::ui::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

const LOGO: &str = "▲ TRENDBOARD";

pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext) {
    if area.height == 0 || area.width < 20 {
        return;
    }

    let left = Line::from(vec![
        Span::styled(
            LOGO,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(ctx.backend_url.to_string(), Style::default().fg(COLOR_DIM)),
    ]);
    left.render(Rect::new(area.x + 1, area.y, area.width.saturating_sub(1), 1), buf);

    let right = status_line(ctx);
    let right_width = right.width() as u16;
    let left_width = LOGO.width() as u16 + 2 + ctx.backend_url.width() as u16;
    if right_width + left_width + 4 <= area.width {
        let x = area.x + area.width - right_width - 1;
        right.render(Rect::new(x, area.y, right_width, 1), buf);
    }
}

/// `● running  services 3/4`, or a hollow dot before the first answer.
pub fn status_line(ctx: &RenderContext) -> Line<'static> {
    match ctx.summary.status() {
        Some(status) => {
            let total = status.services.len();
            let active = status.active_count();
            let color = if total > 0 && active == total {
                COLOR_ACTIVE
            } else {
                COLOR_ERROR
            };
            Line::from(vec![
                Span::styled("\u{25CF} ", Style::default().fg(color)),
                Span::styled(status.status.clone(), Style::default().fg(COLOR_HEADER)),
                Span::styled(
                    format!("  services {}/{}", active, total),
                    Style::default().fg(COLOR_DIM),
                ),
            ])
        }
        None => Line::from(vec![
            Span::styled("\u{25CB} ", Style::default().fg(COLOR_DIM)),
            Span::styled("status unknown", Style::default().fg(COLOR_DIM)),
        ]),
    }
}
