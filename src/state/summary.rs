//! Dashboard summary and system status snapshots.

use chrono::{DateTime, Utc};

use crate::models::{DashboardStats, SystemStatus};

use super::action::ActionTracker;

#[derive(Debug, Clone)]
pub struct DashboardSummaryState {
    stats: Option<DashboardStats>,
    /// Local time the current stats arrived
    refreshed_at: Option<DateTime<Utc>>,
    pub refresh: ActionTracker,
    status: Option<SystemStatus>,
    pub status_fetch: ActionTracker,
}

impl Default for DashboardSummaryState {
    fn default() -> Self {
        Self {
            stats: None,
            refreshed_at: None,
            refresh: ActionTracker::new("Stats refresh"),
            status: None,
            status_fetch: ActionTracker::new("System status"),
        }
    }
}

impl DashboardSummaryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    pub fn replace_stats(&mut self, stats: DashboardStats) {
        self.stats = Some(stats);
        self.refreshed_at = Some(Utc::now());
    }

    pub fn status(&self) -> Option<&SystemStatus> {
        self.status.as_ref()
    }

    pub fn replace_status(&mut self, status: SystemStatus) {
        self.status = Some(status);
    }
}
