//! Bar and line chart panels

use common::dashboard::{ChartDataset, DashboardView};
use common::model::format_value;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
};

use super::Component;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::widgets::bars::{FULL_HEIGHT, bar_heights, terminal_color};

pub const ALL_METRICS_TITLE: &str = "Bar Chart (All Metrics)";
pub const SELECTED_METRIC_TITLE: &str = "Bar Chart (Selected Metric)";
pub const TREND_TITLE: &str = "Line Chart";

const MAX_BAR_WIDTH: u16 = 12;

/// Chart column: the all-metrics bar chart, plus the selected metric's bar
/// and trend line once a card has been selected.
pub struct ChartsPanel;

impl ChartsPanel {
    pub fn new() -> Self {
        Self
    }

    fn panel_block(title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {title} "),
                Style::default().add_modifier(Modifier::BOLD),
            ))
    }

    /// Split a panel into a one-line legend and the plot area below it.
    fn legend_and_plot(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        dataset: &ChartDataset,
    ) -> Rect {
        let block = Self::panel_block(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [legend_area, plot_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        if let Some(series) = dataset.primary() {
            let legend = Line::from(vec![
                Span::styled(
                    "■ ",
                    Style::default().fg(terminal_color(series.style.border_color)),
                ),
                Span::raw(series.label.as_str()),
            ]);
            frame.render_widget(Paragraph::new(legend).centered(), legend_area);
        }
        plot_area
    }

    fn render_bars(frame: &mut Frame, area: Rect, title: &str, dataset: &ChartDataset) {
        let plot = Self::legend_and_plot(frame, area, title, dataset);
        let Some(series) = dataset.primary() else {
            return;
        };

        let heights = bar_heights(&series.points);
        let color = terminal_color(series.style.border_color);
        let bars: Vec<Bar> = dataset
            .pairs()
            .zip(heights)
            .map(|((label, value), height)| {
                Bar::default()
                    .value(height)
                    .label(Line::from(label.to_string()))
                    .text_value(format_value(value))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();

        let count = bars.len().max(1) as u16;
        let gap = 1;
        let bar_width =
            (plot.width.saturating_sub(gap * count) / count).clamp(1, MAX_BAR_WIDTH);

        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(gap)
            .max(FULL_HEIGHT);
        frame.render_widget(chart, plot);
    }

    fn render_trend(frame: &mut Frame, area: Rect, dataset: &ChartDataset) {
        let plot = Self::legend_and_plot(frame, area, TREND_TITLE, dataset);
        let Some(series) = dataset.primary() else {
            return;
        };

        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, &y)| (i as f64, y))
            .collect();

        let y_max = series
            .points
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
        let x_max = dataset.labels.len().saturating_sub(1).max(1) as f64;

        let line = Dataset::default()
            .name(series.label.as_str())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(terminal_color(series.style.border_color)))
            .data(&points);

        let axis_style = Style::default().fg(Color::DarkGray);
        let chart = Chart::new(vec![line])
            .legend_position(None)
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(
                        dataset
                            .labels
                            .iter()
                            .map(|month| Span::raw(month.as_str()))
                            .collect::<Vec<_>>(),
                    )
                    .style(axis_style),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, y_max])
                    .labels(vec![Span::raw("0"), Span::raw(format!("{y_max:.0}"))])
                    .style(axis_style),
            );
        frame.render_widget(chart, plot);
    }

    fn render_view(frame: &mut Frame, area: Rect, view: &DashboardView) {
        if !view.shows_details() {
            Self::render_bars(frame, area, ALL_METRICS_TITLE, &view.all_metrics);
            return;
        }

        let [all_area, selected_area, trend_area] = Layout::vertical([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(area);

        Self::render_bars(frame, all_area, ALL_METRICS_TITLE, &view.all_metrics);
        Self::render_bars(
            frame,
            selected_area,
            SELECTED_METRIC_TITLE,
            &view.selected_metric,
        );
        Self::render_trend(frame, trend_area, &view.trend);
    }
}

impl Component for ChartsPanel {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Option<Action> {
        None
    }

    fn update(&mut self, _action: &Action, _state: &mut AppState) {}

    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        if let Some(view) = state.view() {
            Self::render_view(frame, area, view);
        }
    }
}

#[cfg(test)]
mod tests {
    use common::Metric;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::client::FetchState;
    use crate::tui::test_helpers::{assert_buffer_contains, assert_buffer_lacks};

    fn loaded() -> AppState {
        let mut state = AppState::new("http://localhost:4000/graphql".into());
        state.set_fetch(FetchState::Succeeded(vec![
            Metric::new("BP", 120.0),
            Metric::new("Visits", 300.0),
        ]));
        state
    }

    fn render(state: &AppState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 45)).unwrap();
        let panel = ChartsPanel::new();
        terminal
            .draw(|frame| panel.render(frame, frame.area(), state))
            .unwrap();
        terminal
    }

    #[test]
    fn without_selection_only_all_metrics_chart() {
        let terminal = render(&loaded());
        assert_buffer_contains(&terminal, ALL_METRICS_TITLE);
        assert_buffer_contains(&terminal, "Metrics Values");
        assert_buffer_lacks(&terminal, SELECTED_METRIC_TITLE);
        assert_buffer_lacks(&terminal, TREND_TITLE);
    }

    #[test]
    fn bars_are_labelled_with_metric_names() {
        let terminal = render(&loaded());
        assert_buffer_contains(&terminal, "Visits");
    }

    #[test]
    fn selection_adds_detail_charts() {
        let mut state = loaded();
        state.select("Visits");
        let terminal = render(&state);
        assert_buffer_contains(&terminal, ALL_METRICS_TITLE);
        assert_buffer_contains(&terminal, SELECTED_METRIC_TITLE);
        assert_buffer_contains(&terminal, "Selected Metric Value");
        assert_buffer_contains(&terminal, TREND_TITLE);
        assert_buffer_contains(&terminal, "Trend for Visits");
        assert_buffer_contains(&terminal, "Jan");
        assert_buffer_contains(&terminal, "Jun");
    }

    #[test]
    fn absent_selection_still_shows_detail_charts() {
        let mut state = loaded();
        state.select("Unknown");
        let terminal = render(&state);
        assert_buffer_contains(&terminal, "Trend for Unknown");
    }

    #[test]
    fn pending_state_draws_nothing() {
        let state = AppState::new("http://localhost:4000/graphql".into());
        let terminal = render(&state);
        assert_buffer_lacks(&terminal, ALL_METRICS_TITLE);
    }
}
