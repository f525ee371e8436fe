use std::fmt;

use serde::{Deserialize, Serialize};

/// A publishing destination known to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Telegram,
    YoutubeShorts,
    Tiktok,
    Instagram,
}

impl Platform {
    /// All platforms in display order.
    pub const ALL: [Platform; 4] = [
        Platform::Telegram,
        Platform::YoutubeShorts,
        Platform::Tiktok,
        Platform::Instagram,
    ];

    /// Wire name, also the key in bundles and platform stats.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Telegram => "telegram",
            Platform::YoutubeShorts => "youtube_shorts",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Telegram => "Telegram",
            Platform::YoutubeShorts => "YouTube Shorts",
            Platform::Tiktok => "TikTok",
            Platform::Instagram => "Instagram",
        }
    }

    pub fn from_wire(name: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Digit key bound to this platform's toggle (1-based).
    pub fn hotkey(&self) -> char {
        match self {
            Platform::Telegram => '1',
            Platform::YoutubeShorts => '2',
            Platform::Tiktok => '3',
            Platform::Instagram => '4',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.hotkey() == key)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
