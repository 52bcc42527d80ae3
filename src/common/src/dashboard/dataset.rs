//! Chart-ready datasets in the shape Chart.js consumes.
//!
//! The serialized form (`labels` plus `datasets[]` with `label`, `data`,
//! `backgroundColor`, `borderColor`, `borderWidth`, `fill`) is what the
//! `show --json` report prints.

use std::fmt;

use serde::{Serialize, Serializer};

/// An RGBA color as written in CSS (`rgba(75, 192, 192, 0.2)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fixed presentation constants of a series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub background_color: Rgba,
    pub border_color: Rgba,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// All-metrics bar series.
pub const ALL_METRICS_STYLE: SeriesStyle = SeriesStyle {
    background_color: Rgba::new(75, 192, 192, 0.2),
    border_color: Rgba::new(75, 192, 192, 1.0),
    border_width: Some(1),
    fill: None,
};

/// Selected-metric bar series.
pub const SELECTED_METRIC_STYLE: SeriesStyle = SeriesStyle {
    background_color: Rgba::new(75, 192, 192, 0.6),
    border_color: Rgba::new(75, 192, 192, 1.0),
    border_width: Some(1),
    fill: None,
};

/// Synthetic trend line.
pub const TREND_STYLE: SeriesStyle = SeriesStyle {
    background_color: Rgba::new(75, 192, 192, 1.0),
    border_color: Rgba::new(75, 192, 192, 0.5),
    border_width: None,
    fill: Some(false),
};

/// One labelled sequence of points.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    #[serde(rename = "data")]
    pub points: Vec<f64>,
    #[serde(flatten)]
    pub style: SeriesStyle,
}

/// Category labels plus the series plotted against them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    #[serde(rename = "datasets")]
    pub series: Vec<Series>,
}

impl ChartDataset {
    /// Dataset with a single series.
    pub fn single(
        labels: Vec<String>,
        label: impl Into<String>,
        points: Vec<f64>,
        style: SeriesStyle,
    ) -> Self {
        Self {
            labels,
            series: vec![Series {
                label: label.into(),
                points,
                style,
            }],
        }
    }

    /// The first series. Every dataset the dashboard derives has exactly one.
    pub fn primary(&self) -> Option<&Series> {
        self.series.first()
    }

    /// Points of the first series, or an empty slice.
    pub fn points(&self) -> &[f64] {
        self.primary().map(|s| s.points.as_slice()).unwrap_or(&[])
    }

    /// `(label, point)` pairs of the first series in category order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.points().iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.points().is_empty()
    }
}
