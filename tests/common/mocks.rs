//! Fixtures for mocked backend responses.
//!
//! Re-exports the mock HTTP client and builds JSON bodies shaped like the
//! backend's.

pub use trendboard::adapters::{MockHttpClient, MockResponse};
pub use trendboard::traits::{HttpError, Response};

use serde_json::{json, Value};

/// `GET /api/trends` body with `n` trends `t1..tn`.
pub fn trends_json(n: usize) -> Value {
    let trends: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "id": format!("t{}", i),
                "title": format!("Trend number {}", i),
                "source": if i % 2 == 0 { "reddit" } else { "youtube" },
                "popularity_score": i * 100,
                "keywords": ["rust", "tui"],
                "url": format!("https://example.com/{}", i),
                "timestamp": "2024-03-01T10:00:00"
            })
        })
        .collect();
    json!({ "trends": trends, "total": n, "timestamp": "2024-03-01T10:00:00" })
}

/// `POST /api/content/generate` body with `telegram` items `c1..cn`.
pub fn telegram_bundle_json(n: usize) -> Value {
    let items: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "id": format!("c{}", i),
                "trend_id": "t1",
                "platform": "telegram",
                "content_type": "post",
                "title": format!("Post {}", i),
                "content": format!("Body of post {}", i),
                "hashtags": ["#trend"],
                "keywords": []
            })
        })
        .collect();
    json!({
        "content": { "telegram": items },
        "videos": null,
        "total_items": n,
        "timestamp": "2024-03-01T10:00:00"
    })
}

pub fn publish_ack_json() -> Value {
    json!({
        "message": "Publishing 3 posts to Telegram channel",
        "content_count": 3,
        "channel": "main"
    })
}

pub fn automation_ack_json() -> Value {
    json!({ "message": "ok", "steps": ["a", "b"], "estimated_time": "5m" })
}

pub fn stats_json(trends: u64) -> Value {
    json!({
        "totals": { "trends": trends, "content": 45, "publications": 12 },
        "platform_stats": { "telegram": 20, "tiktok": 5 },
        "recent_trends": [],
        "last_updated": "2024-03-01T10:00:00"
    })
}

pub fn status_json() -> Value {
    json!({
        "status": "running",
        "services": {
            "trend_collector": "active",
            "content_generator": "active",
            "telegram_publisher": "inactive"
        },
        "last_trends_collection": null,
        "last_content_generation": null,
        "last_publication": null
    })
}
