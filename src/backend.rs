//! Backend API client.
//!
//! One method per backend operation. Every call is a single request with no
//! retry and no backoff; failures come back as [`NetworkError`] for the
//! caller to surface.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::adapters::ReqwestHttpClient;
use crate::error::{DashboardError, NetworkError, ValidationError};
use crate::models::{
    ApiInfo, AutomationAck, ContentGenerationRequest, DashboardStats, GeneratedContentBundle,
    Platform, PublishAck, PublishRequest, SystemStatus, TrendCollection,
};
use crate::startup::DashboardConfig;
use crate::traits::{Headers, HttpClient, Response};

/// Optional generation features the backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Render videos for video platforms
    pub generate_videos: bool,
    /// Add a voice-over to generated videos
    pub with_voice: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            generate_videos: false,
            with_voice: true,
        }
    }
}

/// Client for the trend automation backend.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct BackendClient {
    /// `{backend_url}/api`
    api_base: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    /// Create a client from config using the reqwest adapter.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let http = match config.request_timeout {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout),
            None => ReqwestHttpClient::new(),
        };
        Self::with_http(&config.backend_url, Arc::new(http))
    }

    /// Create a client over any [`HttpClient`] (tests inject a mock here).
    pub fn with_http(backend_url: &str, http: Arc<dyn HttpClient>) -> Self {
        Self {
            api_base: format!("{}/api", backend_url.trim_end_matches('/')),
            http,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, NetworkError> {
        if !response.is_success() {
            let err = NetworkError::from_status(&response);
            tracing::warn!(url, status = response.status, "Backend returned error status");
            return Err(err);
        }
        response.json::<T>().map_err(|e| {
            tracing::warn!(url, "Undecodable backend response: {}", e);
            NetworkError::InvalidResponse {
                message: e.to_string(),
            }
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetworkError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(&url, &Self::json_headers())
            .await
            .map_err(|e| NetworkError::from_transport(e, &url))?;
        Self::decode(&url, response)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, NetworkError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let body = serde_json::to_value(body).map_err(|e| NetworkError::Other {
            message: format!("Failed to encode request: {}", e),
        })?;
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post_json(&url, &body, &Self::json_headers())
            .await
            .map_err(|e| NetworkError::from_transport(e, &url))?;
        Self::decode(&url, response)
    }

    /// `GET /api/`: backend name and version.
    pub async fn ping(&self) -> Result<ApiInfo, NetworkError> {
        self.get_json("/").await
    }

    /// `GET /api/trends`: run a trend collection and return the result.
    pub async fn collect_trends(&self) -> Result<TrendCollection, NetworkError> {
        self.get_json("/trends").await
    }

    /// `POST /api/content/generate`.
    ///
    /// An empty `trend_ids` is rejected before anything is sent.
    pub async fn generate_content(
        &self,
        trend_ids: Vec<String>,
        platforms: Vec<Platform>,
        options: GenerationOptions,
    ) -> Result<GeneratedContentBundle, DashboardError> {
        if trend_ids.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }
        let request = ContentGenerationRequest {
            trend_ids,
            platforms,
            generate_videos: options.generate_videos,
            with_voice: options.with_voice,
        };
        Ok(self.post_json("/content/generate", &request).await?)
    }

    /// `POST /api/publish/telegram`: queue a publish job.
    ///
    /// The acknowledgement only means the job was accepted.
    pub async fn publish_telegram(
        &self,
        content_ids: Vec<String>,
        channel_key: &str,
        delay_seconds: u64,
    ) -> Result<PublishAck, NetworkError> {
        let request = PublishRequest {
            content_ids,
            channel_key: channel_key.to_string(),
            delay_seconds,
        };
        self.post_json("/publish/telegram", &request).await
    }

    /// `GET /api/automation/run`: start the full pipeline server-side.
    ///
    /// Returns as soon as the backend has queued the run.
    pub async fn run_automation(&self) -> Result<AutomationAck, NetworkError> {
        self.get_json("/automation/run").await
    }

    /// `GET /api/stats/dashboard`.
    pub async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, NetworkError> {
        self.get_json("/stats/dashboard").await
    }

    /// `GET /api/status`.
    pub async fn fetch_system_status(&self) -> Result<SystemStatus, NetworkError> {
        self.get_json("/status").await
    }
}
