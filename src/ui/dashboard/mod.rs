//! Dashboard UI module
//!
//! The single dashboard screen: header, overview card, trend browser,
//! content composer and footer, with the notification modal drawn on top.

pub mod composer;
pub mod context;
pub mod footer;
pub mod header;
pub mod notification;
pub mod summary;
pub mod trend_list;

pub use context::RenderContext;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    Frame,
};

use crate::ui::interaction::HitAreaRegistry;
use crate::ui::theme::COLOR_BUSY;

/// Below this the dashboard is replaced by a resize hint
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

// ============================================================================
// Main Dashboard Rendering
// ============================================================================

/// Render the complete dashboard view
///
/// # Layout
/// ```text
/// +------------------------------------------+
/// | ▲ TRENDBOARD  url        ● ok services n/m|
/// +------------------------------------------+
/// | Overview: totals, per-platform, controls |
/// +--------------------+---------------------+
/// | Trends             | Composer            |
/// |  [x] title  ▲score |  [x] 1 Telegram ... |
/// |  [ ] title  ▲score |  generated bundle   |
/// +--------------------+---------------------+
/// | key hints                       ◐ pending |
/// +------------------------------------------+
/// ```
///
/// Below 80 columns the two panels are stacked instead.
pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    registry: &mut HitAreaRegistry,
) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                          // Header
            Constraint::Length(ctx.layout.summary_height()), // Overview
            Constraint::Min(6),                             // Panels
            Constraint::Length(1),                          // Footer
        ])
        .split(area);

    header::render(frame.buffer_mut(), chunks[0], ctx);
    summary::render(frame.buffer_mut(), chunks[1], ctx, registry);

    let (trends_area, composer_area) = split_panels(chunks[2], ctx);
    trend_list::render(frame.buffer_mut(), trends_area, ctx, registry);
    composer::render(frame.buffer_mut(), composer_area, ctx, registry);

    footer::render(frame.buffer_mut(), chunks[3], ctx);

    if let Some(note) = ctx.notification {
        notification::render(frame, area, note, ctx, registry);
    }
}

/// Side by side on wide terminals, stacked on narrow ones.
fn split_panels(area: Rect, ctx: &RenderContext) -> (Rect, Rect) {
    if ctx.layout.should_stack_panels() {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        (parts[0], parts[1])
    } else {
        let (left, right) = ctx.layout.two_column_widths();
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(left), Constraint::Length(right)])
            .split(area);
        (parts[0], parts[1])
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let warning = Line::styled(
        "\u{26A0} terminal too small",
        Style::default()
            .fg(COLOR_BUSY)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(warning, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, Panel};
    use crate::startup::DashboardConfig;
    use crate::state::Notification;
    use crate::ui::interaction::ClickAction;
    use crate::ui::layout::LayoutContext;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> (Terminal<TestBackend>, HitAreaRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut registry = HitAreaRegistry::new();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let ctx = RenderContext::from_app(app, LayoutContext::new(area.width, area.height));
                render_dashboard(frame, area, &ctx, &mut registry);
            })
            .unwrap();
        (terminal, registry)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_dashboard_shows_all_panels() {
        let app = App::new(DashboardConfig::new());
        let (terminal, registry) = draw(&app, 120, 32);
        let text = screen(&terminal);

        assert!(text.contains("TRENDBOARD"));
        assert!(text.contains("Overview"));
        assert!(text.contains("Trends"));
        assert!(text.contains("Composer"));
        assert!(registry
            .areas()
            .iter()
            .any(|a| a.action == ClickAction::CollectTrends));
    }

    #[test]
    fn test_tiny_terminal_shows_hint() {
        let app = App::new(DashboardConfig::new());
        let (terminal, registry) = draw(&app, 30, 8);
        assert!(screen(&terminal).contains("terminal too small"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_notification_is_topmost_target() {
        let mut app = App::new(DashboardConfig::new());
        app.focus = Panel::Composer;
        app.notifications
            .push(Notification::error("Publishing failed", "backend down"));

        let (terminal, registry) = draw(&app, 100, 30);
        let text = screen(&terminal);

        assert!(text.contains("Publishing failed"));
        assert!(text.contains("backend down"));
        assert_eq!(
            registry.hit_test(50, 15),
            Some(ClickAction::DismissNotification)
        );
    }

    #[test]
    fn test_narrow_terminal_stacks_panels() {
        let app = App::new(DashboardConfig::new());
        let (terminal, _) = draw(&app, 60, 40);
        let buf = terminal.backend().buffer();
        let row_of = |needle: &str| {
            (0..buf.area.height).find(|&y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
                    .contains(needle)
            })
        };
        let trends = row_of(" Trends ").unwrap();
        let composer = row_of(" Composer ").unwrap();
        assert!(composer > trends);
    }
}
