//! Trend browser panel
//!
//! ```text
//! ╭ Trends ──────────────────────────────╮
//! │ [ c Collect ]  [ x Clear ]           │
//! │ Found: 30   Selected: 2              │
//! │ [x] Rust 2.0 announced   reddit  1.2k│
//! │ [ ] ...                              │
//! ╰──────────────────────────────────────╯
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::context::RenderContext;
use crate::app::Panel;
use crate::models::Trend;
use crate::ui::components::{get_spinner_char, render_button_row, Button};
use crate::ui::helpers::{format_count, truncate_to_width};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_CURSOR_BG, COLOR_DIM, COLOR_HEADER,
    COLOR_SELECTED,
};

/// Rows above the list: controls and counts
const CHROME_ROWS: u16 = 2;

pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext, registry: &mut HitAreaRegistry) {
    let focused = ctx.is_focused(Panel::Trends);
    let block = Block::default()
        .title(Span::styled(
            " Trends ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            COLOR_BORDER_FOCUSED
        } else {
            COLOR_BORDER
        }));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height < CHROME_ROWS || inner.width < 10 {
        return;
    }

    let content = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);

    render_button_row(
        buf,
        Rect::new(content.x, content.y, content.width, 1),
        &controls(ctx),
        registry,
    );
    counts_line(ctx).render(Rect::new(content.x, content.y + 1, content.width, 1), buf);

    let list = Rect::new(
        content.x,
        content.y + CHROME_ROWS,
        content.width,
        content.height - CHROME_ROWS,
    );
    render_rows(buf, list, ctx, focused, registry);
}

fn controls(ctx: &RenderContext) -> Vec<Button> {
    let collect = if ctx.trends.collect.is_pending() {
        Button::busy(format!("{} Collecting...", get_spinner_char(ctx.spinner)))
    } else {
        Button::action("c Collect", true, ClickAction::CollectTrends)
    };
    vec![
        collect,
        Button::action("x Clear", !ctx.selection.is_empty(), ClickAction::ClearSelection),
    ]
}

/// `Found: N   Selected: M`; `Found` appears after the first collection.
pub fn counts_line(ctx: &RenderContext) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(found) = ctx.trends.found_label() {
        spans.push(Span::styled(found, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(
        format!("Selected: {}", ctx.selection.len()),
        Style::default().fg(if ctx.selection.is_empty() {
            COLOR_DIM
        } else {
            COLOR_SELECTED
        }),
    ));
    Line::from(spans)
}

/// First row index to draw so the cursor stays visible.
pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        cursor.saturating_sub(visible - 1)
    }
}

fn render_rows(
    buf: &mut Buffer,
    area: Rect,
    ctx: &RenderContext,
    focused: bool,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 {
        return;
    }

    let trends = ctx.trends.trends();
    if trends.is_empty() {
        let hint = if ctx.trends.has_collected() {
            "No trends found"
        } else {
            "Press c to collect trends"
        };
        Line::styled(hint, Style::default().fg(COLOR_DIM)).render(area, buf);
        return;
    }

    let visible = area.height as usize;
    let offset = scroll_offset(ctx.trends.cursor(), visible);

    for (row, (index, trend)) in trends.iter().enumerate().skip(offset).take(visible).enumerate() {
        let rect = Rect::new(area.x, area.y + row as u16, area.width, 1);
        let is_cursor = focused && index == ctx.trends.cursor();
        let selected = ctx.selection.contains(&trend.id);

        let line = trend_row(trend, selected, rect.width as usize, ctx.layout.max_title_length());
        if is_cursor {
            buf.set_style(rect, Style::default().bg(COLOR_CURSOR_BG));
        }
        line.render(rect, buf);

        registry.register(
            rect,
            ClickAction::ToggleTrend(trend.id.clone()),
            Some(Style::default().bg(COLOR_CURSOR_BG)),
        );
    }
}

/// One trend row: checkbox, title, then source and score right-aligned.
pub fn trend_row(trend: &Trend, selected: bool, width: usize, max_title: usize) -> Line<'static> {
    let marker = if selected { "[x] " } else { "[ ] " };
    let meta = if trend.source.is_empty() {
        format!("\u{25B2}{}", format_count(trend.popularity_score))
    } else {
        format!("{}  \u{25B2}{}", trend.source, format_count(trend.popularity_score))
    };

    let title_room = width
        .saturating_sub(marker.width() + meta.width() + 1)
        .min(max_title);
    let title = truncate_to_width(&trend.title, title_room);
    let pad = width.saturating_sub(marker.width() + title.width() + meta.width());

    let title_style = if selected {
        Style::default()
            .fg(COLOR_SELECTED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };

    Line::from(vec![
        Span::styled(
            marker,
            Style::default().fg(if selected { COLOR_SELECTED } else { COLOR_DIM }),
        ),
        Span::styled(title, title_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(meta, Style::default().fg(COLOR_DIM)),
    ])
}
