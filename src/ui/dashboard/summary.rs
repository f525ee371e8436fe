//! Stats strip: totals, per-platform counts, recent trend titles and the
//! refresh/automation controls. Short terminals get the totals and controls
//! only.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::context::RenderContext;
use crate::models::{DashboardStats, Platform};
use crate::ui::components::{get_spinner_char, render_button_row, Button};
use crate::ui::helpers::truncate_to_width;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext, registry: &mut HitAreaRegistry) {
    let block = Block::default()
        .title(Span::styled(
            " Overview ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 {
        return;
    }

    totals_line(ctx).render(Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1), buf);

    let text_width = inner.width.saturating_sub(1);
    let mut next_y = inner.y + 1;
    if inner.height >= 3 {
        platforms_line(ctx).render(Rect::new(inner.x + 1, next_y, text_width, 1), buf);
        next_y += 1;
    }
    if inner.height >= 4 {
        if let Some(stats) = ctx.summary.stats() {
            recent_line(stats, text_width as usize)
                .render(Rect::new(inner.x + 1, next_y, text_width, 1), buf);
        }
        next_y += 1;
    }

    if next_y < inner.y + inner.height {
        let row = Rect::new(inner.x + 1, next_y, inner.width.saturating_sub(1), 1);
        render_button_row(buf, row, &controls(ctx), registry);
    }
}

fn totals_line(ctx: &RenderContext) -> Line<'static> {
    let Some(stats) = ctx.summary.stats() else {
        let text = if ctx.summary.refresh.is_pending() {
            "Loading stats..."
        } else {
            "No stats yet"
        };
        return Line::styled(text, Style::default().fg(COLOR_DIM));
    };

    let value = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(COLOR_DIM);
    let mut spans = vec![
        Span::styled(stats.totals.trends.to_string(), value),
        Span::styled(" trends   ", label),
        Span::styled(stats.totals.content.to_string(), value),
        Span::styled(" content   ", label),
        Span::styled(stats.totals.publications.to_string(), value),
        Span::styled(" publications", label),
    ];
    if let Some(at) = ctx.summary.refreshed_at() {
        spans.push(Span::styled(
            format!("   updated {}", at.with_timezone(&chrono::Local).format("%H:%M:%S")),
            label,
        ));
    }
    Line::from(spans)
}

fn platforms_line(ctx: &RenderContext) -> Line<'static> {
    let Some(stats) = ctx.summary.stats() else {
        return Line::default();
    };
    let mut spans = Vec::new();
    for platform in Platform::ALL {
        spans.push(Span::styled(
            format!("{} ", platform.label()),
            Style::default().fg(COLOR_DIM),
        ));
        spans.push(Span::styled(
            format!("{}   ", stats.platform_count(platform.as_str())),
            Style::default().fg(COLOR_ACCENT),
        ));
    }
    Line::from(spans)
}

/// Titles of the newest stored trends, as many as fit.
pub fn recent_line(stats: &DashboardStats, width: usize) -> Line<'static> {
    const PREFIX: &str = "Recent: ";
    if stats.recent_trends.is_empty() {
        return Line::styled("Recent: none", Style::default().fg(COLOR_DIM));
    }
    let titles = stats
        .recent_trends
        .iter()
        .map(|t| t.title.as_str())
        .collect::<Vec<_>>()
        .join(" \u{00B7} ");
    Line::from(vec![
        Span::styled(PREFIX, Style::default().fg(COLOR_DIM)),
        Span::styled(
            truncate_to_width(&titles, width.saturating_sub(PREFIX.len())),
            Style::default().fg(COLOR_ACCENT),
        ),
    ])
}

fn controls(ctx: &RenderContext) -> Vec<Button> {
    let spinner = get_spinner_char(ctx.spinner);
    let refresh = if ctx.summary.refresh.is_pending() {
        Button::busy(format!("{} Refreshing...", spinner))
    } else {
        Button::action("r Refresh", true, ClickAction::RefreshStats)
    };
    let automation = if ctx.automation.is_pending() {
        Button::busy(format!("{} Starting...", spinner))
    } else {
        Button::action("a Run automation", true, ClickAction::RunAutomation)
    };
    vec![refresh, automation]
}
