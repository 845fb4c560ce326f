//! HTTP client for the prediction service endpoints.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use newscheck_core::PredictionRecord;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Typed client for the prediction service.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    client: Client,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Classify a piece of news content.
    ///
    /// The title is optional; content must be non-empty (the service
    /// rejects empty submissions with a 400). On a non-success status the
    /// service's `{detail}` body becomes [`ApiError::Api`].
    pub async fn predict(
        &self,
        title: Option<&str>,
        content: &str,
    ) -> Result<PredictionRecord> {
        let url = format!("{}/api/v1/predict", self.config.base_url);
        let body = PredictRequest {
            title: title.map(str::to_owned),
            content: content.to_owned(),
        };

        debug!(url = %url, "Submitting prediction request");
        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<PredictionRecord>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Fetch up to `limit` of the most recent predictions, newest first.
    ///
    /// An empty list is a valid result, not an error.
    pub async fn history(&self, limit: usize) -> Result<Vec<PredictionRecord>> {
        let url = format!("{}/api/v1/history", self.config.base_url);

        debug!(url = %url, limit, "Fetching prediction history");
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: HistoryResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        Ok(body.items)
    }

    /// Query service health and model availability.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/api/v1/health", self.config.base_url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

/// Decode a non-success response into [`ApiError::Api`].
///
/// The service reports failures as `{"detail": "..."}`; anything else falls
/// back to a generic message so the status is never lost.
async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| "Server error".to_string());

    ApiError::Api { status, detail }
}

/// Service liveness report from `GET /api/v1/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
    #[serde(default)]
    pub model_version: Option<String>,
}

// Wire types for the prediction service.
#[derive(Debug, Serialize)]
struct PredictRequest {
    title: Option<String>,
    content: String,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    items: Vec<PredictionRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}
