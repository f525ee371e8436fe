//! Rendering and mouse interaction through `ui::render`.

mod common;

use common::*;
use ratatui::{backend::TestBackend, Terminal};
use trendboard::app::{App, Panel};
use trendboard::models::{ContentItem, GeneratedContentBundle, Platform, Trend};
use trendboard::state::Notification;
use trendboard::ui;
use trendboard::ui::interaction::{handle_click_action, ClickAction};

fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buf = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect())
        .collect()
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|l| l.contains(needle))
}

fn click(app: &mut App, action: &ClickAction) {
    let area = app
        .hit_areas
        .areas()
        .iter()
        .find(|a| &a.action == action)
        .map(|a| a.rect)
        .unwrap_or_else(|| panic!("no hit area for {:?}", action));
    let hit = app.hit_areas.hit_test(area.x, area.y).unwrap();
    handle_click_action(app, hit);
}

fn app_with_trends() -> App {
    let mut app = test_app(&MockHttpClient::new());
    app.trends.replace(vec![
        Trend::new("t1", "Rust 2024 edition").with_source("reddit").with_score(1_240),
        Trend::new("t2", "Terminal UIs are back").with_source("youtube").with_score(87),
    ]);
    app
}

#[test]
fn test_empty_dashboard_prompts_collection() {
    let mut app = test_app(&MockHttpClient::new());
    let lines = render(&mut app, 120, 32);

    assert!(contains(&lines, "Press c to collect trends"));
    assert!(contains(&lines, "No stats yet"));
    assert!(contains(&lines, "[x] 1 Telegram"));
    assert!(contains(&lines, "[ ] 2 YouTube Shorts"));
}

#[test]
fn test_clicking_rows_toggles_selection() {
    let mut app = app_with_trends();
    render(&mut app, 120, 32);

    click(&mut app, &ClickAction::ToggleTrend("t2".to_string()));
    assert_eq!(app.selection().ids(), vec!["t2"]);
    assert_eq!(app.trends.cursor(), 1);

    let lines = render(&mut app, 120, 32);
    assert!(contains(&lines, "Selected: 1"));
    assert!(contains(&lines, "[x] Terminal UIs are back"));

    click(&mut app, &ClickAction::ToggleTrend("t2".to_string()));
    assert!(app.selection().is_empty());
}

#[test]
fn test_disabled_buttons_are_not_clickable() {
    let mut app = app_with_trends();
    render(&mut app, 120, 32);

    // Nothing selected and no bundle yet
    let actions: Vec<ClickAction> = app.hit_areas.areas().iter().map(|a| a.action.clone()).collect();
    assert!(!actions.contains(&ClickAction::GenerateContent));
    assert!(!actions.contains(&ClickAction::PublishTelegram));
    assert!(!actions.contains(&ClickAction::ClearSelection));

    app.toggle_trend("t1");
    render(&mut app, 120, 32);
    let actions: Vec<ClickAction> = app.hit_areas.areas().iter().map(|a| a.action.clone()).collect();
    assert!(actions.contains(&ClickAction::GenerateContent));
    assert!(actions.contains(&ClickAction::ClearSelection));
}

#[test]
fn test_platform_toggle_by_click() {
    let mut app = app_with_trends();
    render(&mut app, 120, 32);

    click(&mut app, &ClickAction::TogglePlatform(Platform::Instagram));
    assert!(app.composer.is_platform_enabled(Platform::Instagram));

    let lines = render(&mut app, 120, 32);
    assert!(contains(&lines, "[x] 4 Instagram"));
}

#[tokio::test]
async fn test_pending_collection_shows_spinner_label() {
    let mut app = app_with_trends();
    app.collect_trends();

    let lines = render(&mut app, 120, 32);
    assert!(contains(&lines, "Collecting..."));
    assert!(!app
        .hit_areas
        .areas()
        .iter()
        .any(|a| a.action == ClickAction::CollectTrends));
}

#[test]
fn test_bundle_is_listed_in_composer() {
    let mut app = app_with_trends();
    let mut bundle = GeneratedContentBundle::default();
    let mut item = ContentItem::new("c1", "Why Rust TUIs", "Short take on ratatui");
    item.hashtags = vec!["#rust".to_string()];
    bundle.by_platform.insert("telegram".to_string(), vec![item]);
    app.composer.replace_bundle(bundle);
    app.focus = Panel::Composer;

    let lines = render(&mut app, 120, 40);

    assert!(contains(&lines, "Telegram (1)"));
    assert!(contains(&lines, "Why Rust TUIs"));
    assert!(contains(&lines, "#rust"));
    assert!(app
        .hit_areas
        .areas()
        .iter()
        .any(|a| a.action == ClickAction::PublishTelegram));
}

#[test]
fn test_notification_swallows_clicks_until_dismissed() {
    let mut app = app_with_trends();
    app.notifications
        .push(Notification::error("Trend collection failed", "Backend error: down"));
    let lines = render(&mut app, 120, 32);
    assert!(contains(&lines, "Trend collection failed"));
    assert!(contains(&lines, "Enter/Esc to dismiss"));

    handle_click_action(&mut app, ClickAction::ToggleTrend("t1".to_string()));
    assert!(app.selection().is_empty());

    click(&mut app, &ClickAction::DismissNotification);
    assert!(app.notifications.is_empty());

    let lines = render(&mut app, 120, 32);
    assert!(!contains(&lines, "Trend collection failed"));
}

#[test]
fn test_narrow_terminal_still_renders_rows() {
    let mut app = app_with_trends();
    let lines = render(&mut app, 60, 40);

    assert!(contains(&lines, "Rust 2024"));
    assert!(contains(&lines, "Composer"));
}
