use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reported state of one backend service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl ServiceState {
    pub fn is_active(&self) -> bool {
        matches!(self, ServiceState::Active)
    }
}

/// Response body of `GET /api/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SystemStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub services: BTreeMap<String, ServiceState>,
    #[serde(default)]
    pub last_trends_collection: Option<String>,
    #[serde(default)]
    pub last_content_generation: Option<String>,
    #[serde(default)]
    pub last_publication: Option<String>,
}

impl SystemStatus {
    pub fn active_count(&self) -> usize {
        self.services.values().filter(|s| s.is_active()).count()
    }
}
