use serde::{Deserialize, Serialize};

use super::deserialize_display;

/// Response body of `POST /api/publish/telegram`.
///
/// Only acknowledges that a background publish job was queued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PublishAck {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub content_count: Option<u64>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// Response body of `GET /api/automation/run`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AutomationAck {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub estimated_time: String,
}

impl AutomationAck {
    /// Text shown to the user after triggering a run.
    pub fn summary(&self) -> String {
        let mut text = self.message.clone();
        if !self.steps.is_empty() {
            text.push_str("\n\nSteps: ");
            text.push_str(&self.steps.join(" → "));
        }
        if !self.estimated_time.is_empty() {
            text.push_str("\nEstimated time: ");
            text.push_str(&self.estimated_time);
        }
        text
    }
}

/// Response body of `GET /api/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiInfo {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub version: String,
}
