//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Panel`] - Which panel has keyboard focus
//! - [`AppMessage`] - Results of spawned backend calls
//!
//! The App is the root of the dashboard. It owns the trend selection and
//! hands out read-only views of it; every backend call is spawned onto the
//! tokio runtime and reports back through the message channel, so all state
//! mutation happens on the UI task.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod state_methods;
mod types;

pub use messages::AppMessage;
pub use types::Panel;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::backend::BackendClient;
use crate::models::AutomationAck;
use crate::startup::DashboardConfig;
use crate::state::{
    ActionTracker, ContentComposerState, DashboardSummaryState, NotificationQueue, SelectionStore,
    TrendBrowserState,
};
use crate::ui::interaction::HitAreaRegistry;

/// Main application state
pub struct App {
    pub config: DashboardConfig,
    /// Backend client (cheap to clone into spawned tasks)
    pub backend: BackendClient,
    /// Checked trends; mutate only through `toggle_trend` / `clear_selection`
    selection: SelectionStore,
    pub trends: TrendBrowserState,
    pub composer: ContentComposerState,
    pub summary: DashboardSummaryState,
    /// Automation trigger lifecycle
    pub automation: ActionTracker,
    /// Last acknowledged automation run
    pub last_automation: Option<AutomationAck>,
    pub notifications: NotificationQueue,
    /// Panel receiving navigation keys
    pub focus: Panel,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Stats refresh scheduled after an automation run
    scheduled_refresh: Option<JoinHandle<()>>,
    /// Bumped on every schedule; only the latest one may fire
    refresh_generation: u64,
    /// Tick counter for animations (spinners)
    pub tick_count: u64,
    /// Dirty flag: set on state mutations, cleared after each draw
    pub needs_redraw: bool,
    /// Clickable regions from the last render
    pub hit_areas: HitAreaRegistry,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl App {
    /// Create an App talking to the backend named in `config`.
    pub fn new(config: DashboardConfig) -> Self {
        let backend = BackendClient::from_config(&config);
        Self::with_backend(config, backend)
    }

    /// Create an App with a custom backend client
    pub fn with_backend(config: DashboardConfig, backend: BackendClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let composer = ContentComposerState::new(&config.default_platforms);

        Self {
            config,
            backend,
            selection: SelectionStore::new(),
            trends: TrendBrowserState::new(),
            composer,
            summary: DashboardSummaryState::new(),
            automation: ActionTracker::new("Automation run"),
            last_automation: None,
            notifications: NotificationQueue::new(),
            focus: Panel::default(),
            should_quit: false,
            message_rx: Some(message_rx),
            message_tx,
            scheduled_refresh: None,
            refresh_generation: 0,
            tick_count: 0,
            needs_redraw: true,
            hit_areas: HitAreaRegistry::new(),
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Read-only view of the current selection.
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("backend", &self.backend)
            .field("selected", &self.selection.len())
            .field("trends", &self.trends.trends().len())
            .field("focus", &self.focus)
            .field("should_quit", &self.should_quit)
            .finish()
    }
}
