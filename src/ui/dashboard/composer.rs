//! Content composer panel
//!
//! Platform and feature toggles, the generate/publish controls and the most
//! recent generated bundle, grouped by platform.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::context::RenderContext;
use crate::app::Panel;
use crate::models::{GeneratedContentBundle, Platform};
use crate::state::{Feature, PUBLISH_PLATFORM};
use crate::ui::components::{get_spinner_char, render_button_row, Button};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED,
    COLOR_SUCCESS,
};

/// Platform toggles per row
const PLATFORMS_PER_ROW: usize = 2;

pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext, registry: &mut HitAreaRegistry) {
    let focused = ctx.is_focused(Panel::Composer);
    let block = Block::default()
        .title(Span::styled(
            " Composer ",
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

    if inner.width < 10 {
        return;
    }

    let content = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
    let bottom = content.y + content.height;
    let mut y = content.y;

    let rows: Vec<Vec<Button>> = platform_buttons(ctx)
        .chunks(PLATFORMS_PER_ROW)
        .map(<[Button]>::to_vec)
        .chain([feature_buttons(ctx), action_buttons(ctx)])
        .collect();
    for buttons in &rows {
        if y >= bottom {
            return;
        }
        render_button_row(buf, Rect::new(content.x, y, content.width, 1), buttons, registry);
        y += 1;
    }

    if y < bottom {
        publish_status_line(ctx).render(Rect::new(content.x, y, content.width, 1), buf);
        y += 1;
    }
    if y < bottom {
        Line::styled(
            "\u{2500}".repeat(content.width as usize),
            Style::default().fg(COLOR_BORDER),
        )
        .render(Rect::new(content.x, y, content.width, 1), buf);
        y += 1;
    }
    if y < bottom {
        let bundle_area = Rect::new(content.x, y, content.width, bottom - y);
        Paragraph::new(bundle_lines(ctx.composer.bundle()))
            .wrap(Wrap { trim: false })
            .scroll((ctx.composer.scroll, 0))
            .render(bundle_area, buf);
    }
}

fn platform_buttons(ctx: &RenderContext) -> Vec<Button> {
    Platform::ALL
        .into_iter()
        .map(|platform| {
            Button::toggle(
                format!("{} {}", platform.hotkey(), platform.label()),
                ctx.composer.is_platform_enabled(platform),
                ClickAction::TogglePlatform(platform),
            )
        })
        .collect()
}

fn feature_buttons(ctx: &RenderContext) -> Vec<Button> {
    let flags = ctx.composer.flags;
    vec![
        Button::toggle("v Video", flags.video, ClickAction::ToggleFeature(Feature::Video)),
        Button::toggle("o Voice", flags.voice, ClickAction::ToggleFeature(Feature::Voice)),
        Button::toggle(
            "m Monetize",
            flags.monetization,
            ClickAction::ToggleFeature(Feature::Monetization),
        ),
    ]
}

fn action_buttons(ctx: &RenderContext) -> Vec<Button> {
    let spinner = get_spinner_char(ctx.spinner);
    let generate = if ctx.composer.generate.is_pending() {
        Button::busy(format!("{} Generating...", spinner))
    } else {
        Button::action(
            "g Generate",
            !ctx.selection.is_empty(),
            ClickAction::GenerateContent,
        )
    };
    let publish = if ctx.composer.publish.is_pending() {
        Button::busy(format!("{} Publishing...", spinner))
    } else {
        Button::action(
            format!("p Publish to {}", PUBLISH_PLATFORM.label()),
            ctx.composer.publish_enabled(),
            ClickAction::PublishTelegram,
        )
    };
    vec![generate, publish]
}

fn publish_status_line(ctx: &RenderContext) -> Line<'static> {
    match ctx.composer.last_publish() {
        Some(ack) => Line::from(vec![
            Span::styled("\u{25CF} ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(ack.message.clone(), Style::default().fg(COLOR_DIM)),
        ]),
        None => Line::default(),
    }
}

/// The bundle as display lines: a heading per platform, then its items.
pub fn bundle_lines(bundle: Option<&GeneratedContentBundle>) -> Vec<Line<'static>> {
    let Some(bundle) = bundle else {
        return vec![Line::styled(
            "Select trends and press g to generate content",
            Style::default().fg(COLOR_DIM),
        )];
    };
    if bundle.is_empty() {
        return vec![Line::styled(
            "The backend generated no content",
            Style::default().fg(COLOR_DIM),
        )];
    }

    let mut lines = Vec::new();
    for (name, items) in &bundle.by_platform {
        let label = Platform::from_wire(name)
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| name.clone());
        lines.push(Line::styled(
            format!("{} ({})", label, items.len()),
            Style::default()
                .fg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD),
        ));

        for item in items {
            lines.push(Line::from(vec![
                Span::styled("\u{2022} ", Style::default().fg(COLOR_DIM)),
                Span::styled(
                    item.title.clone(),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            for body_line in item.body.lines().filter(|l| !l.trim().is_empty()) {
                lines.push(Line::styled(
                    format!("  {}", body_line),
                    Style::default().fg(COLOR_ACCENT),
                ));
            }
            if !item.hashtags.is_empty() {
                lines.push(Line::styled(
                    format!("  {}", item.hashtags.join(" ")),
                    Style::default().fg(COLOR_DIM),
                ));
            }
        }
        lines.push(Line::default());
    }
    lines
}
