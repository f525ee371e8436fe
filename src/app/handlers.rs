//! Message handling for the App.

use tracing::{debug, info, warn};

use crate::state::Notification;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message.
    ///
    /// Results are applied only if their token still matches the pending
    /// request of their action; anything else is a superseded response.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        debug!("Handling {}", msg.kind());

        match msg {
            AppMessage::TrendsCollected { token, result } => {
                if !self.trends.collect.finish(token) {
                    return;
                }
                match result {
                    Ok(collection) => {
                        let count = collection.trends.len();
                        self.trends.replace(collection.trends);
                        let known = self.trends.trends().iter().map(|t| t.id.as_str());
                        let dropped = self.selection.retain_known(known);
                        if dropped > 0 {
                            debug!(dropped, "Pruned selections missing from new collection");
                        }
                        info!(count, "Trends collected");
                    }
                    Err(e) => self.report_error(self.trends.collect.name(), e),
                }
            }

            AppMessage::ContentGenerated { token, result } => {
                if !self.composer.generate.finish(token) {
                    return;
                }
                match result {
                    Ok(bundle) => {
                        info!(items = bundle.item_count(), "Content generated");
                        self.composer.replace_bundle(bundle);
                    }
                    Err(e) => self.report_error(self.composer.generate.name(), e),
                }
            }

            AppMessage::PublishAcknowledged { token, result } => {
                if !self.composer.publish.finish(token) {
                    return;
                }
                match result {
                    Ok(ack) => {
                        info!(message = %ack.message, "Publish acknowledged");
                        self.notifications
                            .push(Notification::success("Publishing queued", ack.message.clone()));
                        self.composer.record_publish(ack);
                    }
                    Err(e) => self.report_error(self.composer.publish.name(), e),
                }
            }

            AppMessage::AutomationStarted { token, result } => {
                if !self.automation.finish(token) {
                    return;
                }
                match result {
                    Ok(ack) => {
                        info!(steps = ack.steps.len(), "Automation started");
                        self.notifications
                            .push(Notification::info("Automation started", ack.summary()));
                        self.last_automation = Some(ack);
                        self.schedule_refresh();
                    }
                    Err(e) => self.report_error(self.automation.name(), e),
                }
            }

            AppMessage::StatsLoaded { token, result } => {
                if !self.summary.refresh.finish(token) {
                    return;
                }
                match result {
                    Ok(stats) => self.summary.replace_stats(stats),
                    Err(e) => warn!(code = e.error_code(), "Stats refresh failed: {}", e),
                }
            }

            AppMessage::SystemStatusLoaded { token, result } => {
                if !self.summary.status_fetch.finish(token) {
                    return;
                }
                match result {
                    Ok(status) => self.summary.replace_status(status),
                    Err(e) => warn!(code = e.error_code(), "System status fetch failed: {}", e),
                }
            }

            AppMessage::ScheduledRefreshDue { generation } => {
                if generation != self.refresh_generation {
                    debug!(generation, "Ignoring replaced scheduled refresh");
                    return;
                }
                self.scheduled_refresh = None;
                debug!("Scheduled refresh due");

                // A fetch sent before the delay ran out does not count
                if self.summary.refresh.is_pending() {
                    debug!("Superseding in-flight stats fetch");
                    self.summary.refresh.abandon();
                }
                self.refresh_stats();
            }
        }
    }
}
