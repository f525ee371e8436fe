use trendboard::app::{App, AppMessage};
use trendboard::cli::{parse_args, run_cli_command};
use trendboard::input::{execute_command, CommandRegistry, InputContext};
use trendboard::startup::{default_log_path, init_logging, DashboardConfig};
use trendboard::terminal::{setup_panic_hook, TerminalManager};
use trendboard::ui;
use trendboard::ui::interaction::handle_click_action;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Frame tick; drives spinners while requests are in flight
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    let mut config = DashboardConfig::from_env();
    if let Some(url) = command.backend_url() {
        config = config.with_backend_url(url);
    }

    let log_path = default_log_path();
    if let Err(e) = init_logging(&config.log_filter, &log_path) {
        eprintln!(
            "Warning: could not open log file {}: {}",
            log_path.display(),
            e
        );
    }

    let runtime = tokio::runtime::Runtime::new()?;

    if let Some(result) = runtime.block_on(run_cli_command(&command, &config)) {
        return result;
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    runtime.block_on(async move {
        let mut term_manager = TerminalManager::new()?;
        let size = term_manager.size()?;

        let mut app = App::new(config);
        app.set_terminal_size(size.width, size.height);
        app.initialize();

        let result = run_app(term_manager.terminal(), &mut app).await;

        app.shutdown();
        term_manager.restore()?;
        info!("Dashboard closed");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.should_quit {
            return Ok(());
        }

        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                let Some(Ok(event)) = event_result else {
                    continue;
                };
                match event {
                    Event::Resize(width, height) => {
                        app.set_terminal_size(width, height);
                    }
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let context = InputContext::from_app(app);
                        if let Some(cmd) = registry.dispatch(key, &context) {
                            debug!(?cmd, "Key command");
                            if execute_command(app, cmd) {
                                app.mark_dirty();
                            }
                        }
                    }
                    Event::Mouse(mouse_event) => match mouse_event.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            if let Some(action) =
                                app.hit_areas.hit_test(mouse_event.column, mouse_event.row)
                            {
                                handle_click_action(app, action);
                            }
                        }
                        MouseEventKind::Moved => {
                            if app.hit_areas.update_hover(mouse_event.column, mouse_event.row) {
                                app.mark_dirty();
                            }
                        }
                        MouseEventKind::ScrollUp => {
                            if !app.notifications.is_blocking() {
                                app.move_up();
                            }
                        }
                        MouseEventKind::ScrollDown => {
                            if !app.notifications.is_blocking() {
                                app.move_down();
                            }
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
