//! HTTP client for the metrics GraphQL endpoint.

use common::Metric;
use common::config::GraphQlConfig;
use thiserror::Error;

use super::models::{GraphQlRequest, GraphQlResponse, MetricsData};

/// GraphQL client error types. `Display` is the message shown to the user.
#[derive(Error, Debug)]
pub enum GraphQlError {
    #[error("Invalid authorization header: {0}")]
    InvalidHeader(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Response not successful: Received status code {status}")]
    Status { status: u16 },

    #[error("{}", .0.join(", "))]
    GraphQl(Vec<String>),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Client for the single `GetMetrics` query.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    /// Create a client for the configured endpoint.
    ///
    /// The `Authorization` header is only attached when an auth token is
    /// configured.
    pub fn new(config: &GraphQlConfig) -> Result<Self, GraphQlError> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = &config.auth_token {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| GraphQlError::InvalidHeader(e.to_string()))?,
            );
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GraphQlError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run `GetMetrics` once and return the metrics in server order.
    pub async fn fetch_metrics(&self) -> Result<Vec<Metric>, GraphQlError> {
        tracing::debug!(endpoint = %self.endpoint, "sending GetMetrics");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest::get_metrics())
            .send()
            .await
            .map_err(|e| GraphQlError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GraphQlError::Network(e.to_string()))?;

        let parsed = serde_json::from_str::<GraphQlResponse<MetricsData>>(&body);

        // Servers may report GraphQL errors with a non-2xx status.
        let graphql_errors = parsed
            .as_ref()
            .map(|envelope| envelope.errors.as_slice())
            .unwrap_or_default();
        if !graphql_errors.is_empty() {
            return Err(GraphQlError::GraphQl(
                graphql_errors.iter().map(|e| e.message.clone()).collect(),
            ));
        }

        if !status.is_success() {
            return Err(GraphQlError::Status {
                status: status.as_u16(),
            });
        }

        let metrics = parsed
            .map_err(|e| GraphQlError::Malformed(e.to_string()))?
            .data
            .ok_or_else(|| GraphQlError::Malformed("response has no data".to_string()))?
            .metrics;

        tracing::info!(count = metrics.len(), "fetched metrics");
        Ok(metrics)
    }
}
