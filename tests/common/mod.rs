//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{test_app, trends_json};
//!
//! let mock = MockHttpClient::new();
//! mock.set_response(&api("/trends"), MockResponse::json(trends_json(30)));
//! let mut app = test_app(&mock);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use trendboard::app::App;
use trendboard::backend::BackendClient;
use trendboard::startup::DashboardConfig;

/// Backend origin used by every mocked test.
pub const TEST_BACKEND: &str = "http://backend.test";

/// Full URL of an API path on the test backend.
pub fn api(path: &str) -> String {
    format!("{}/api{}", TEST_BACKEND, path)
}

/// Config with a short automation refresh delay so scheduling tests finish fast.
pub fn test_config() -> DashboardConfig {
    DashboardConfig::new()
        .with_backend_url(TEST_BACKEND)
        .with_automation_refresh_delay(Duration::from_millis(50))
}

/// App wired to `mock` instead of the network.
pub fn test_app(mock: &MockHttpClient) -> App {
    test_app_with(mock, test_config())
}

pub fn test_app_with(mock: &MockHttpClient, config: DashboardConfig) -> App {
    let backend = BackendClient::with_http(TEST_BACKEND, Arc::new(mock.clone()));
    App::with_backend(config, backend)
}

/// Apply the next `n` messages, failing if the channel closes first.
pub async fn drain(app: &mut App, n: usize) {
    for _ in 0..n {
        let handled = tokio::time::timeout(Duration::from_secs(2), app.process_next_message())
            .await
            .expect("timed out waiting for an app message");
        assert!(handled, "message channel closed");
    }
}
