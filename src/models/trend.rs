use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_score};

/// A discovered topic candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trend {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Where the trend was found (e.g. "youtube", "reddit", "google_trends")
    #[serde(default)]
    pub source: String,
    /// Rounded to a whole number when the backend sends a fraction
    #[serde(default, deserialize_with = "deserialize_score")]
    pub popularity_score: i64,
    /// Ordered, most relevant first
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Raw timestamp as sent; the backend emits naive ISO-8601 strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Trend {
    /// Minimal constructor, mostly for tests and fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            source: String::new(),
            popularity_score: 0,
            keywords: Vec::new(),
            url: String::new(),
            description: String::new(),
            category: String::new(),
            timestamp: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.popularity_score = score;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Parse `timestamp`, accepting RFC 3339 or a naive (UTC) ISO-8601 string.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_backend_timestamp(self.timestamp.as_deref()?)
    }
}

/// Parse a timestamp the way the backend writes them.
pub fn parse_backend_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Response body of `GET /api/trends`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrendCollection {
    pub trends: Vec<Trend>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_deserialize_full_trend() {
        let json = r#"{
            "id": "t-1",
            "title": "Rust 2024 edition",
            "source": "reddit",
            "url": "https://reddit.com/r/rust/1",
            "popularity_score": 870,
            "keywords": ["rust", "edition", "release"],
            "timestamp": "2024-03-01T10:15:30.123456",
            "description": "",
            "category": "tech"
        }"#;
        let trend: Trend = serde_json::from_str(json).unwrap();
        assert_eq!(trend.id, "t-1");
        assert_eq!(trend.popularity_score, 870);
        assert_eq!(trend.keywords, vec!["rust", "edition", "release"]);

        let ts = trend.parsed_timestamp().unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_deserialize_sparse_trend() {
        let trend: Trend = serde_json::from_str(r#"{"id": 7, "title": "Old"}"#).unwrap();
        assert_eq!(trend.id, "7");
        assert!(trend.keywords.is_empty());
        assert!(trend.parsed_timestamp().is_none());
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let ts = parse_backend_timestamp("2024-03-01T10:15:30Z").unwrap();
        assert_eq!(ts.minute(), 15);
        assert!(parse_backend_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_fractional_score_does_not_fail_collection() {
        let json = r#"{"trends": [
            {"id": "a", "title": "A", "popularity_score": 87.5},
            {"id": "b", "title": "B", "popularity_score": 12}
        ]}"#;
        let c: TrendCollection = serde_json::from_str(json).unwrap();
        assert_eq!(c.trends.len(), 2);
        assert_eq!(c.trends[0].popularity_score, 88);
        assert_eq!(c.trends[1].popularity_score, 12);
    }

    #[test]
    fn test_collection_without_total() {
        let c: TrendCollection = serde_json::from_str(r#"{"trends": []}"#).unwrap();
        assert!(c.trends.is_empty());
        assert!(c.total.is_none());
    }
}
