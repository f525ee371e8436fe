//! AppMessage enum for async communication within the application.

use crate::error::DashboardError;
use crate::models::{
    AutomationAck, DashboardStats, GeneratedContentBundle, PublishAck, SystemStatus,
    TrendCollection,
};
use crate::state::RequestToken;

/// Results of spawned backend calls, delivered back to the UI task.
///
/// Every variant carries the token issued when its action started; a result
/// whose token no longer matches the action's pending token is dropped.
#[derive(Debug)]
pub enum AppMessage {
    /// `GET /api/trends` finished
    TrendsCollected {
        token: RequestToken,
        result: Result<TrendCollection, DashboardError>,
    },
    /// `POST /api/content/generate` finished
    ContentGenerated {
        token: RequestToken,
        result: Result<GeneratedContentBundle, DashboardError>,
    },
    /// `POST /api/publish/telegram` finished
    PublishAcknowledged {
        token: RequestToken,
        result: Result<PublishAck, DashboardError>,
    },
    /// `GET /api/automation/run` finished
    AutomationStarted {
        token: RequestToken,
        result: Result<AutomationAck, DashboardError>,
    },
    /// `GET /api/stats/dashboard` finished
    StatsLoaded {
        token: RequestToken,
        result: Result<DashboardStats, DashboardError>,
    },
    /// `GET /api/status` finished
    SystemStatusLoaded {
        token: RequestToken,
        result: Result<SystemStatus, DashboardError>,
    },
    /// The delay after an automation run elapsed.
    ///
    /// `generation` names the schedule that fired; a replaced schedule's
    /// message may still be queued and is ignored.
    ScheduledRefreshDue { generation: u64 },
}

impl AppMessage {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::TrendsCollected { .. } => "TrendsCollected",
            AppMessage::ContentGenerated { .. } => "ContentGenerated",
            AppMessage::PublishAcknowledged { .. } => "PublishAcknowledged",
            AppMessage::AutomationStarted { .. } => "AutomationStarted",
            AppMessage::StatsLoaded { .. } => "StatsLoaded",
            AppMessage::SystemStatusLoaded { .. } => "SystemStatusLoaded",
            AppMessage::ScheduledRefreshDue { .. } => "ScheduledRefreshDue",
        }
    }
}
