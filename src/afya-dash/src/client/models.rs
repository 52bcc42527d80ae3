//! GraphQL wire types for the `GetMetrics` operation.

use common::Metric;
use serde::{Deserialize, Serialize};

pub const GET_METRICS_OPERATION: &str = "GetMetrics";

pub const GET_METRICS_QUERY: &str = "query GetMetrics {
  metrics {
    name
    value
  }
}";

/// Body of a GraphQL-over-HTTP `POST`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a> {
    pub operation_name: &'a str,
    pub query: &'a str,
}

impl GraphQlRequest<'static> {
    pub fn get_metrics() -> Self {
        Self {
            operation_name: GET_METRICS_OPERATION,
            query: GET_METRICS_QUERY,
        }
    }
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

/// `data` of the `GetMetrics` operation.
#[derive(Debug, Deserialize)]
pub struct MetricsData {
    pub metrics: Vec<Metric>,
}
