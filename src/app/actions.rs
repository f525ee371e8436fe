//! User-triggered backend actions.
//!
//! Each action claims its [`ActionTracker`](crate::state::ActionTracker),
//! spawns the request and returns immediately. The result comes back as an
//! [`AppMessage`] carrying the token the action was started with.

use tracing::{debug, info, warn};

use crate::error::{DashboardError, ValidationError};
use crate::state::{Notification, RequestToken, PUBLISH_PLATFORM};

use super::{App, AppMessage};

impl App {
    /// Load the summary cards. Stats and status are fetched concurrently.
    pub fn initialize(&mut self) {
        info!(backend = %self.backend.api_base(), "Initializing dashboard");
        self.refresh_stats();
        self.fetch_system_status();
    }

    /// Start a trend collection.
    pub fn collect_trends(&mut self) {
        let Some(token) = self.claim(|app| app.trends.collect.begin()) else {
            return;
        };
        info!("Collecting trends");

        let tx = self.message_tx.clone();
        let backend = self.backend.clone();
        tokio::spawn(async move {
            let result = backend.collect_trends().await.map_err(DashboardError::from);
            let _ = tx.send(AppMessage::TrendsCollected { token, result });
        });
    }

    /// Generate content for the selected trends on the enabled platforms.
    ///
    /// An empty selection or platform set is reported without touching the
    /// network or any state other than the notification queue.
    pub fn generate_content(&mut self) {
        if self.selection().is_empty() {
            self.report_error("Content generation", ValidationError::EmptySelection.into());
            return;
        }
        let platforms = self.composer.platforms();
        if platforms.is_empty() {
            self.report_error("Content generation", ValidationError::NoPlatforms.into());
            return;
        }
        let Some(token) = self.claim(|app| app.composer.generate.begin()) else {
            return;
        };

        let trend_ids = self.selection().ids();
        let options = self.composer.generation_options();
        info!(
            trends = trend_ids.len(),
            platforms = platforms.len(),
            "Generating content"
        );

        let tx = self.message_tx.clone();
        let backend = self.backend.clone();
        tokio::spawn(async move {
            let result = backend.generate_content(trend_ids, platforms, options).await;
            let _ = tx.send(AppMessage::ContentGenerated { token, result });
        });
    }

    /// Queue the generated Telegram posts for publishing.
    pub fn publish_telegram(&mut self) {
        if !self.composer.publish_available() {
            self.report_error(
                "Publishing",
                ValidationError::NothingToPublish {
                    platform: PUBLISH_PLATFORM.label().to_string(),
                }
                .into(),
            );
            return;
        }
        let Some(token) = self.claim(|app| app.composer.publish.begin()) else {
            return;
        };

        let content_ids = self.composer.publish_ids();
        let channel_key = self.config.channel_key.clone();
        let delay = self.config.publish_delay_seconds;
        info!(
            items = content_ids.len(),
            channel = %channel_key,
            delay,
            "Publishing to Telegram"
        );

        let tx = self.message_tx.clone();
        let backend = self.backend.clone();
        tokio::spawn(async move {
            let result = backend
                .publish_telegram(content_ids, &channel_key, delay)
                .await
                .map_err(DashboardError::from);
            let _ = tx.send(AppMessage::PublishAcknowledged { token, result });
        });
    }

    /// Trigger the server-side automation pipeline.
    pub fn run_automation(&mut self) {
        let Some(token) = self.claim(|app| app.automation.begin()) else {
            return;
        };
        info!("Starting automation run");

        let tx = self.message_tx.clone();
        let backend = self.backend.clone();
        tokio::spawn(async move {
            let result = backend.run_automation().await.map_err(DashboardError::from);
            let _ = tx.send(AppMessage::AutomationStarted { token, result });
        });
    }

    /// Re-fetch dashboard stats. Failures are logged only.
    pub fn refresh_stats(&mut self) {
        let token = match self.summary.refresh.begin() {
            Ok(token) => token,
            Err(e) => {
                debug!("{}", e);
                return;
            }
        };

        let tx = self.message_tx.clone();
        let backend = self.backend.clone();
        tokio::spawn(async move {
            let result = backend
                .fetch_dashboard_stats()
                .await
                .map_err(DashboardError::from);
            let _ = tx.send(AppMessage::StatsLoaded { token, result });
        });
    }

    /// Fetch service status for the header. Failures are logged only.
    pub fn fetch_system_status(&mut self) {
        let token = match self.summary.status_fetch.begin() {
            Ok(token) => token,
            Err(e) => {
                debug!("{}", e);
                return;
            }
        };

        let tx = self.message_tx.clone();
        let backend = self.backend.clone();
        tokio::spawn(async move {
            let result = backend
                .fetch_system_status()
                .await
                .map_err(DashboardError::from);
            let _ = tx.send(AppMessage::SystemStatusLoaded { token, result });
        });
    }

    /// Schedule the single stats refresh that follows an automation run.
    ///
    /// Replaces (and aborts) any refresh that is still waiting.
    pub(super) fn schedule_refresh(&mut self) {
        if let Some(previous) = self.scheduled_refresh.take() {
            debug!("Replacing pending scheduled refresh");
            previous.abort();
        }

        self.refresh_generation += 1;
        let generation = self.refresh_generation;
        let delay = self.config.automation_refresh_delay;
        let tx = self.message_tx.clone();
        self.scheduled_refresh = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppMessage::ScheduledRefreshDue { generation });
        }));
        debug!(
            generation,
            delay_ms = delay.as_millis() as u64,
            "Scheduled stats refresh"
        );
    }

    /// Whether a post-automation refresh is still waiting to fire.
    pub fn has_scheduled_refresh(&self) -> bool {
        self.scheduled_refresh
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop background work owned by the App. Called once on quit.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.scheduled_refresh.take() {
            handle.abort();
            debug!("Aborted scheduled refresh on shutdown");
        }
        self.should_quit = true;
    }

    /// Claim an action's tracker. A second trigger while Pending is dropped.
    fn claim<F>(&mut self, begin: F) -> Option<RequestToken>
    where
        F: FnOnce(&mut Self) -> Result<RequestToken, ValidationError>,
    {
        match begin(self) {
            Ok(token) => {
                self.mark_dirty();
                Some(token)
            }
            Err(e) => {
                debug!("Ignoring trigger: {}", e);
                None
            }
        }
    }

    /// Log an action failure and queue a blocking notification for it.
    pub(super) fn report_error(&mut self, action: &str, err: DashboardError) {
        warn!(code = err.error_code(), "{} failed: {}", action, err);
        self.notifications.push(Notification::from_error(action, &err));
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use crate::adapters::MockHttpClient;
    use crate::models::{ContentItem, GeneratedContentBundle, Platform, Trend};
    use crate::state::NotificationKind;

    #[tokio::test]
    async fn test_generate_with_empty_selection_sends_nothing() {
        let mock = MockHttpClient::new();
        let mut app = test_app(&mock);

        app.generate_content();

        assert!(mock.get_requests().is_empty());
        assert!(!app.composer.generate.is_pending());
        assert!(app.composer.bundle().is_none());
        let note = app.notifications.current().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert!(note.message.contains("Select at least one trend"));
    }

    #[tokio::test]
    async fn test_generate_with_no_platforms_sends_nothing() {
        let mock = MockHttpClient::new();
        let mut app = test_app(&mock);
        app.trends.replace(vec![Trend::new("t1", "One")]);
        app.toggle_trend("t1");
        app.toggle_platform(Platform::Telegram);

        app.generate_content();

        assert!(mock.get_requests().is_empty());
        assert!(!app.composer.generate.is_pending());
        assert_eq!(app.notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_publish_without_bundle_is_rejected() {
        let mock = MockHttpClient::new();
        let mut app = test_app(&mock);

        app.publish_telegram();

        assert!(mock.get_requests().is_empty());
        assert!(!app.composer.publish.is_pending());
        assert!(app.notifications.is_blocking());
    }

    #[tokio::test]
    async fn test_second_trigger_while_pending_is_dropped() {
        let mock = MockHttpClient::new();
        let mut app = test_app(&mock);
        let mut bundle = GeneratedContentBundle::default();
        bundle.by_platform.insert(
            "telegram".to_string(),
            vec![ContentItem::new("c1", "One", "body")],
        );
        app.composer.replace_bundle(bundle);

        app.publish_telegram();
        assert!(app.composer.publish.is_pending());
        app.publish_telegram();

        // Only the first trigger claimed the tracker; no notification for the second
        assert!(app.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_aborts_scheduled_refresh() {
        let mock = MockHttpClient::new();
        let mut app = test_app(&mock);
        app.schedule_refresh();
        assert!(app.has_scheduled_refresh());

        app.shutdown();

        assert!(!app.has_scheduled_refresh());
        assert!(app.should_quit);
    }
}
