//! Input context for determining which commands are available.

use crate::app::{App, Panel};

/// Snapshot of the App state that key dispatch depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub focus: Panel,
    /// A notification is on screen and captures input
    pub notification_open: bool,
}

impl InputContext {
    pub fn new(focus: Panel) -> Self {
        Self {
            focus,
            notification_open: false,
        }
    }

    pub fn with_notification(mut self, open: bool) -> Self {
        self.notification_open = open;
        self
    }

    pub fn from_app(app: &App) -> Self {
        Self::new(app.focus).with_notification(app.notifications.is_blocking())
    }
}
