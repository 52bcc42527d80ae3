//! Data fetch layer: one `GetMetrics` request, surfaced as a tri-state result.

pub mod graphql;
pub mod models;

use common::Metric;

pub use self::graphql::{GraphQlClient, GraphQlError};

/// Outcome of the metrics fetch as the page sees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Pending,
    Failed(String),
    Succeeded(Vec<Metric>),
}

impl FetchState {
    pub fn metrics(&self) -> Option<&[Metric]> {
        match self {
            FetchState::Succeeded(metrics) => Some(metrics),
            _ => None,
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Pending => "Loading",
            FetchState::Failed(_) => "Failed",
            FetchState::Succeeded(_) => "Loaded",
        }
    }
}

impl From<Result<Vec<Metric>, GraphQlError>> for FetchState {
    fn from(result: Result<Vec<Metric>, GraphQlError>) -> Self {
        match result {
            Ok(metrics) => FetchState::Succeeded(metrics),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}

/// Run the fetch once, collapsing every failure into its message.
pub async fn fetch(client: &GraphQlClient) -> FetchState {
    FetchState::from(client.fetch_metrics().await)
}
