//! Wire types for the trend automation backend.
//!
//! Everything here is plain serde data. Fields the dashboard never reads
//! are still modelled when the backend always sends them, and defaulted
//! when it might not (recent-trend previews in the stats payload are
//! stored documents and can be missing newer fields).

pub mod ack;
pub mod content;
pub mod platform;
pub mod request;
pub mod stats;
pub mod status;
pub mod trend;

pub use ack::{ApiInfo, AutomationAck, PublishAck};
pub use content::{ContentItem, GeneratedContentBundle};
pub use platform::Platform;
pub use request::{ContentGenerationRequest, PublishRequest};
pub use stats::{DashboardStats, Totals};
pub use status::{ServiceState, SystemStatus};
pub use trend::{Trend, TrendCollection};

use serde::Deserializer;

/// Deserialize an identifier that may arrive as a string or an integer.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientStringVisitor("a string or integer id"))
}

/// Deserialize a free-form display value (string or number) into a string.
///
/// `null` becomes an empty string.
pub(crate) fn deserialize_display<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientStringVisitor("a string or number"))
}

/// Deserialize a popularity score sent as an integer, a float or a numeric
/// string. Fractions are rounded; `null` and non-numeric strings become 0.
pub(crate) fn deserialize_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScoreVisitor)
}

struct ScoreVisitor;

impl<'de> serde::de::Visitor<'de> for ScoreVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a numeric score")
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<i64, E> {
        Ok(i64::try_from(value).unwrap_or(i64::MAX))
    }

    fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<i64, E> {
        // `as` saturates and maps NaN to 0
        Ok(value.round() as i64)
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<i64, E> {
        let value = value.trim();
        Ok(value
            .parse::<i64>()
            .ok()
            .or_else(|| value.parse::<f64>().ok().map(|f| f.round() as i64))
            .unwrap_or(0))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }
}

struct LenientStringVisitor(&'static str);

impl<'de> serde::de::Visitor<'de> for LenientStringVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(self.0)
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: serde::de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}
