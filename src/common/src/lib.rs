//! Shared building blocks for the Afya analytics dashboard: configuration,
//! CLI plumbing, the metric model and the view-model derivation.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod model;

pub use dashboard::{DashboardView, Selection, derive};
pub use model::Metric;
