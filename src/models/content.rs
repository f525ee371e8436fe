use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{deserialize_id, Platform};

/// One generated post for one platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    /// Used later as the publish key
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Body text
    #[serde(default, rename = "content")]
    pub body: String,
    /// Ordered as generated
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub trend_id: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ContentItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            hashtags: Vec::new(),
            trend_id: String::new(),
            platform: String::new(),
            content_type: String::new(),
            keywords: Vec::new(),
        }
    }
}

/// Response body of `POST /api/content/generate`: items grouped by platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneratedContentBundle {
    #[serde(rename = "content")]
    pub by_platform: BTreeMap<String, Vec<ContentItem>>,
    /// Present only when video generation was requested; shape is backend-defined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<serde_json::Value>,
    #[serde(default)]
    pub total_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl GeneratedContentBundle {
    pub fn items_for(&self, platform: Platform) -> &[ContentItem] {
        self.by_platform
            .get(platform.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ids of the items generated for `platform`, in order.
    pub fn content_ids_for(&self, platform: Platform) -> Vec<String> {
        self.items_for(platform).iter().map(|item| item.id.clone()).collect()
    }

    pub fn has_items_for(&self, platform: Platform) -> bool {
        !self.items_for(platform).is_empty()
    }

    /// Total across platforms; prefers the backend's own count when present.
    pub fn item_count(&self) -> usize {
        self.total_items
            .map(|n| n as usize)
            .unwrap_or_else(|| self.by_platform.values().map(Vec::len).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.by_platform.values().all(Vec::is_empty)
    }
}
