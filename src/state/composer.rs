//! Content composer state: platform choices, feature flags, the latest
//! generated bundle and the generate/publish actions.

use std::collections::BTreeSet;

use crate::backend::GenerationOptions;
use crate::models::{GeneratedContentBundle, Platform, PublishAck};

use super::action::ActionTracker;

/// The only platform the dashboard can publish to directly.
pub const PUBLISH_PLATFORM: Platform = Platform::Telegram;

/// Toggles shown under the platform row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub video: bool,
    pub voice: bool,
    /// Kept locally; the backend has no monetization parameter
    pub monetization: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            video: false,
            voice: true,
            monetization: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Video,
    Voice,
    Monetization,
}

#[derive(Debug, Clone)]
pub struct ContentComposerState {
    platforms: BTreeSet<Platform>,
    pub flags: FeatureFlags,
    bundle: Option<GeneratedContentBundle>,
    last_publish: Option<PublishAck>,
    /// First visible line of the bundle view
    pub scroll: u16,
    pub generate: ActionTracker,
    pub publish: ActionTracker,
}

impl ContentComposerState {
    pub fn new(default_platforms: &[Platform]) -> Self {
        Self {
            platforms: default_platforms.iter().copied().collect(),
            flags: FeatureFlags::default(),
            bundle: None,
            last_publish: None,
            scroll: 0,
            generate: ActionTracker::new("Content generation"),
            publish: ActionTracker::new("Telegram publishing"),
        }
    }

    pub fn is_platform_enabled(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Returns the new state of the platform toggle.
    pub fn toggle_platform(&mut self, platform: Platform) -> bool {
        if self.platforms.remove(&platform) {
            false
        } else {
            self.platforms.insert(platform);
            true
        }
    }

    /// Enabled platforms in display order.
    pub fn platforms(&self) -> Vec<Platform> {
        self.platforms.iter().copied().collect()
    }

    pub fn toggle_feature(&mut self, feature: Feature) -> bool {
        let flag = match feature {
            Feature::Video => &mut self.flags.video,
            Feature::Voice => &mut self.flags.voice,
            Feature::Monetization => &mut self.flags.monetization,
        };
        *flag = !*flag;
        *flag
    }

    /// What the backend gets from the feature flags.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            generate_videos: self.flags.video,
            with_voice: self.flags.voice,
        }
    }

    pub fn bundle(&self) -> Option<&GeneratedContentBundle> {
        self.bundle.as_ref()
    }

    /// Replace the bundle wholesale; no merging with the previous one.
    pub fn replace_bundle(&mut self, bundle: GeneratedContentBundle) {
        self.bundle = Some(bundle);
        self.scroll = 0;
    }

    pub fn last_publish(&self) -> Option<&PublishAck> {
        self.last_publish.as_ref()
    }

    pub fn record_publish(&mut self, ack: PublishAck) {
        self.last_publish = Some(ack);
    }

    /// Publish needs a non-empty list for the publish platform.
    pub fn publish_available(&self) -> bool {
        self.bundle
            .as_ref()
            .is_some_and(|b| b.has_items_for(PUBLISH_PLATFORM))
    }

    /// Enabled = available and not already publishing.
    pub fn publish_enabled(&self) -> bool {
        self.publish_available() && !self.publish.is_pending()
    }

    /// Content ids a publish would send, in bundle order.
    pub fn publish_ids(&self) -> Vec<String> {
        self.bundle
            .as_ref()
            .map(|b| b.content_ids_for(PUBLISH_PLATFORM))
            .unwrap_or_default()
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}
