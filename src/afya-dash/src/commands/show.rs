use std::fmt::Write as _;

use clap::Args;
use common::Selection;
use common::dashboard::{ChartDataset, DashboardView, derive};
use common::model::format_value;

use crate::client::GraphQlClient;

/// Fetch the metrics once and print the derived dashboard
#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Metric to drill into, as if its card had been selected
    #[arg(long)]
    pub select: Option<String>,

    /// Print the chart datasets as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub async fn run(self, client: &GraphQlClient) -> anyhow::Result<()> {
        println!("{}", self.render(client).await?);
        Ok(())
    }

    async fn render(&self, client: &GraphQlClient) -> anyhow::Result<String> {
        let metrics = client.fetch_metrics().await?;
        log::info!("Fetched {} metrics from {}", metrics.len(), client.endpoint());

        let view = derive(&metrics, &Selection::from(self.select.clone()));
        if self.json {
            Ok(serde_json::to_string_pretty(&view)?)
        } else {
            Ok(text_report(&view))
        }
    }
}

fn write_dataset(out: &mut String, title: &str, dataset: &ChartDataset) {
    let Some(series) = dataset.primary() else {
        return;
    };
    let _ = writeln!(out, "\n{title} ({})", series.label);
    let width = dataset
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in dataset.pairs() {
        let _ = writeln!(out, "  {label:<width$}  {}", format_value(value));
    }
}

/// Plain text rendering of the dashboard for terminals without the TUI.
pub fn text_report(view: &DashboardView) -> String {
    let mut out = String::new();
    out.push_str("Analytics Dashboard\n");
    out.push_str("===================\n");

    if view.cards.is_empty() {
        out.push_str("No metrics\n");
    }
    write_dataset(&mut out, "Bar Chart (All Metrics)", &view.all_metrics);

    match view.selection.name() {
        Some(name) => {
            let _ = writeln!(out, "\nSelected: {name}");
            write_dataset(&mut out, "Bar Chart (Selected Metric)", &view.selected_metric);
            write_dataset(&mut out, "Line Chart", &view.trend);
        }
        None => out.push_str("\nNo selection\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use common::Metric;
    use common::config::GraphQlConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn server_with(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> GraphQlClient {
        GraphQlClient::new(&GraphQlConfig {
            endpoint: format!("{}/graphql", server.uri()),
            auth_token: None,
        })
        .unwrap()
    }

    fn metrics_body() -> serde_json::Value {
        serde_json::json!({
            "data": {
                "metrics": [
                    { "name": "BP Checks", "value": 120 },
                    { "name": "Visits", "value": 300 }
                ]
            }
        })
    }

    #[test]
    fn text_report_without_selection() {
        let view = derive(
            &[Metric::new("BP Checks", 120.0), Metric::new("Visits", 300.0)],
            &Selection::none(),
        );
        let report = text_report(&view);
        assert!(report.contains("Bar Chart (All Metrics) (Metrics Values)"));
        assert!(report.contains("BP Checks  120"));
        assert!(report.contains("No selection"));
        assert!(!report.contains("Line Chart"));
    }

    #[test]
    fn text_report_with_selection_lists_trend() {
        let view = derive(&[Metric::new("Visits", 300.0)], &Selection::of("Visits"));
        let report = text_report(&view);
        assert!(report.contains("Selected: Visits"));
        assert!(report.contains("Line Chart (Trend for Visits)"));
        assert!(report.contains("Jan  30"));
        assert!(report.contains("Jun  120"));
    }

    #[test]
    fn text_report_aligns_non_ascii_names() {
        let view = derive(
            &[Metric::new("Chanjo – Watoto", 42.0), Metric::new("Visits", 300.0)],
            &Selection::none(),
        );
        let report = text_report(&view);
        assert!(report.contains("  Chanjo – Watoto  42\n"));
        assert!(report.contains("  Visits           300\n"));
    }

    #[test]
    fn text_report_for_empty_list() {
        let report = text_report(&derive(&[], &Selection::none()));
        assert!(report.contains("No metrics"));
    }

    #[tokio::test]
    async fn render_text_report_from_server() {
        let server = server_with(metrics_body()).await;
        let args = ShowArgs {
            select: Some("BP Checks".into()),
            json: false,
        };
        let report = args.render(&client_for(&server)).await.unwrap();
        assert!(report.contains("Selected: BP Checks"));
        assert!(report.contains("Trend for BP Checks"));
    }

    #[tokio::test]
    async fn render_json_has_chart_shape() {
        let server = server_with(metrics_body()).await;
        let args = ShowArgs {
            select: None,
            json: true,
        };
        let json = args.render(&client_for(&server)).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["allMetrics"]["labels"][1], "Visits");
        assert_eq!(value["allMetrics"]["datasets"][0]["data"][1], 300.0);
        assert_eq!(
            value["trend"]["datasets"][0]["label"],
            "Access to Primary Care"
        );
    }

    #[tokio::test]
    async fn render_failure_carries_message() {
        let server = server_with(serde_json::json!({
            "errors": [{ "message": "Network error" }]
        }))
        .await;
        let err = ShowArgs::default()
            .render(&client_for(&server))
            .await
            .unwrap_err();
        assert_eq!(format!("Error: {err}"), "Error: Network error");
    }
}
