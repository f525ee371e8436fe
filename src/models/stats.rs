use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Trend;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Totals {
    #[serde(default)]
    pub trends: u64,
    #[serde(default)]
    pub content: u64,
    #[serde(default)]
    pub publications: u64,
}

/// Response body of `GET /api/stats/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub totals: Totals,
    /// Generated content count per platform wire name
    #[serde(default)]
    pub platform_stats: BTreeMap<String, u64>,
    /// Newest first, as stored by the backend
    #[serde(default)]
    pub recent_trends: Vec<Trend>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl DashboardStats {
    pub fn platform_count(&self, platform: &str) -> u64 {
        self.platform_stats.get(platform).copied().unwrap_or(0)
    }
}
