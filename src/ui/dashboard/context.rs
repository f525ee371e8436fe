//! Render context for dashboard components
//!
//! A borrowed, read-only view of everything the dashboard draws. Built once
//! per frame from the App so render functions never see `&mut App`.

use crate::app::{App, Panel};
use crate::state::{
    ActionTracker, ContentComposerState, DashboardSummaryState, Notification, SelectionStore,
    TrendBrowserState,
};
use crate::ui::components::spinner_frame;
use crate::ui::layout::LayoutContext;

#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub trends: &'a TrendBrowserState,
    pub selection: &'a SelectionStore,
    pub composer: &'a ContentComposerState,
    pub summary: &'a DashboardSummaryState,
    pub automation: &'a ActionTracker,
    /// Notification on screen, if any
    pub notification: Option<&'a Notification>,
    /// Notifications queued behind the visible one
    pub queued_notifications: usize,
    pub focus: Panel,
    pub backend_url: &'a str,
    pub layout: LayoutContext,
    /// Current spinner frame
    pub spinner: usize,
}

impl<'a> RenderContext<'a> {
    pub fn from_app(app: &'a App, layout: LayoutContext) -> Self {
        Self {
            trends: &app.trends,
            selection: app.selection(),
            composer: &app.composer,
            summary: &app.summary,
            automation: &app.automation,
            notification: app.notifications.current(),
            queued_notifications: app.notifications.len().saturating_sub(1),
            focus: app.focus,
            backend_url: &app.config.backend_url,
            layout,
            spinner: spinner_frame(app.tick_count),
        }
    }

    pub fn is_focused(&self, panel: Panel) -> bool {
        self.focus == panel
    }
}
