use serde::{Deserialize, Serialize};

use super::Platform;

/// Request body for `POST /api/content/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentGenerationRequest {
    pub trend_ids: Vec<String>,
    pub platforms: Vec<Platform>,
    pub generate_videos: bool,
    pub with_voice: bool,
}

/// Request body for `POST /api/publish/telegram`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishRequest {
    pub content_ids: Vec<String>,
    pub channel_key: String,
    pub delay_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_request_wire_shape() {
        let request = ContentGenerationRequest {
            trend_ids: vec!["t1".to_string(), "t2".to_string()],
            platforms: vec![Platform::Telegram, Platform::YoutubeShorts],
            generate_videos: false,
            with_voice: true,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "trend_ids": ["t1", "t2"],
                "platforms": ["telegram", "youtube_shorts"],
                "generate_videos": false,
                "with_voice": true
            })
        );
    }

    #[test]
    fn test_publish_request_wire_shape() {
        let request = PublishRequest {
            content_ids: vec!["c1".to_string()],
            channel_key: "main".to_string(),
            delay_seconds: 10,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"content_ids": ["c1"], "channel_key": "main", "delay_seconds": 10})
        );
    }
}
