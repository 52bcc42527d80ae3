//! Bottom status bar component

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use super::Component;
use crate::client::FetchState;
use crate::tui::action::Action;
use crate::tui::state::AppState;

/// Bottom status bar with fetch state, current selection, and keybind hints.
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for StatusBar {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Option<Action> {
        None
    }

    fn update(&mut self, _action: &Action, _state: &mut AppState) {}

    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::horizontal([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(area);

        let color = match &state.fetch {
            FetchState::Pending => Color::Yellow,
            FetchState::Failed(_) => Color::Red,
            FetchState::Succeeded(_) => Color::Green,
        };

        let when = state
            .fetched_at
            .map(|ts| {
                chrono::DateTime::<chrono::Local>::from(ts)
                    .format("%H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| "--:--:--".to_string());
        let left_text = format!(
            "{label} {url} [{when}]",
            label = state.fetch.label(),
            url = state.endpoint
        );
        let left = Paragraph::new(Span::styled(left_text, Style::default().fg(color)));
        frame.render_widget(left, chunks[0]);

        let selection_text = match state.selection.name() {
            Some(name) => format!("Selected: {name}"),
            None => "No selection".to_string(),
        };
        let center = Paragraph::new(selection_text)
            .style(Style::default().fg(Color::White))
            .centered();
        frame.render_widget(center, chunks[1]);

        let right = Paragraph::new("q: Quit  Enter: Details  ?: Help")
            .style(Style::default().fg(Color::DarkGray))
            .right_aligned();
        frame.render_widget(right, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use common::Metric;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::tui::test_helpers::assert_buffer_contains;

    fn render_status_bar(state: &AppState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(140, 1)).unwrap();
        let bar = StatusBar::new();
        terminal
            .draw(|frame| {
                bar.render(frame, frame.area(), state);
            })
            .unwrap();
        terminal
    }

    #[test]
    fn status_bar_loaded() {
        let mut state = AppState::new("http://localhost:4000/graphql".into());
        state.set_fetch(FetchState::Succeeded(vec![Metric::new("Visits", 3.0)]));

        let terminal = render_status_bar(&state);
        assert_buffer_contains(&terminal, "Loaded");
        assert_buffer_contains(&terminal, "http://localhost:4000/graphql");
        assert_buffer_contains(&terminal, "No selection");
        assert_buffer_contains(&terminal, "q: Quit");
    }

    #[test]
    fn status_bar_pending_has_no_timestamp() {
        let state = AppState::new("http://localhost:4000/graphql".into());
        let terminal = render_status_bar(&state);
        assert_buffer_contains(&terminal, "Loading");
        assert_buffer_contains(&terminal, "--:--:--");
    }

    #[test]
    fn status_bar_shows_selection() {
        let mut state = AppState::new("http://localhost:4000/graphql".into());
        state.set_fetch(FetchState::Succeeded(vec![Metric::new("Visits", 3.0)]));
        state.select("Visits");

        let terminal = render_status_bar(&state);
        assert_buffer_contains(&terminal, "Selected: Visits");
    }
}
