//! View-model derivation: `(metrics, selection)` to cards and chart datasets.
//!
//! [`derive`] is pure. The presentation layer calls it again whenever the
//! selection changes and renders whatever comes back.

pub mod dataset;
pub mod selection;

use serde::Serialize;

pub use self::dataset::{ChartDataset, Rgba, Series, SeriesStyle};
pub use self::selection::Selection;
use self::dataset::{ALL_METRICS_STYLE, SELECTED_METRIC_STYLE, TREND_STYLE};
use crate::model::Metric;

pub const ALL_METRICS_LABEL: &str = "Metrics Values";
pub const SELECTED_METRIC_LABEL: &str = "Selected Metric Value";
pub const DEFAULT_TREND_LABEL: &str = "Access to Primary Care";

/// Category labels of the synthetic trend line.
pub const TREND_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
/// Trend points shown while nothing is selected.
pub const DEFAULT_TREND_POINTS: [f64; 6] = [10.0, 20.0, 15.0, 25.0, 30.0, 40.0];
/// Multipliers applied to the selected value to fake a six-month trend.
pub const TREND_MULTIPLIERS: [f64; 6] = [0.1, 0.2, 0.15, 0.25, 0.3, 0.4];

/// One card per metric: what to display and which name its trigger selects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardSummary {
    pub name: String,
    pub value: f64,
}

impl CardSummary {
    /// The card's "View Details" trigger.
    pub fn activate(&self, selection: &mut Selection) {
        selection.select(self.name.clone());
    }
}

/// Everything the page renders once metrics have been fetched.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub selection: Selection,
    pub cards: Vec<CardSummary>,
    pub all_metrics: ChartDataset,
    pub selected_metric: ChartDataset,
    pub trend: ChartDataset,
}

impl DashboardView {
    /// Whether the drill-in charts (selected bar and trend line) are shown.
    pub fn shows_details(&self) -> bool {
        !self.selection.is_none()
    }
}

/// Value of the first metric named by `selection`, or `0` when nothing is
/// selected or the name is not in `metrics`.
pub fn selected_value(metrics: &[Metric], selection: &Selection) -> f64 {
    selection
        .name()
        .and_then(|name| metrics.iter().find(|m| m.name == name))
        .map(|m| m.value)
        .unwrap_or(0.0)
}

/// Derive the dashboard view model.
pub fn derive(metrics: &[Metric], selection: &Selection) -> DashboardView {
    let cards = metrics
        .iter()
        .map(|m| CardSummary {
            name: m.name.clone(),
            value: m.value,
        })
        .collect();

    let all_metrics = ChartDataset::single(
        metrics.iter().map(|m| m.name.clone()).collect(),
        ALL_METRICS_LABEL,
        metrics.iter().map(|m| m.value).collect(),
        ALL_METRICS_STYLE,
    );

    let value = selected_value(metrics, selection);

    let selected_metric = match selection.name() {
        Some(name) => ChartDataset::single(
            vec![name.to_string()],
            SELECTED_METRIC_LABEL,
            vec![value],
            SELECTED_METRIC_STYLE,
        ),
        None => ChartDataset::single(
            Vec::new(),
            SELECTED_METRIC_LABEL,
            Vec::new(),
            SELECTED_METRIC_STYLE,
        ),
    };

    let (trend_label, trend_points) = match selection.name() {
        Some(name) => (
            format!("Trend for {name}"),
            TREND_MULTIPLIERS.iter().map(|k| value * k).collect(),
        ),
        None => (
            DEFAULT_TREND_LABEL.to_string(),
            DEFAULT_TREND_POINTS.to_vec(),
        ),
    };
    let trend = ChartDataset::single(
        TREND_MONTHS.iter().map(|m| m.to_string()).collect(),
        trend_label,
        trend_points,
        TREND_STYLE,
    );

    DashboardView {
        selection: selection.clone(),
        cards,
        all_metrics,
        selected_metric,
        trend,
    }
}
