//! Main TUI application: owns the event loop, terminal, and render cycle.

use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use super::action::{Action, map_key_to_action};
use super::components::Component;
use super::components::cards::MetricCards;
use super::components::charts::ChartsPanel;
use super::components::header::{HEADER_HEIGHT, Header};
use super::components::help::HelpOverlay;
use super::components::status_bar::StatusBar;
use super::event::{Event, EventHandler};
use super::state::AppState;
use super::terminal::Tui;
use crate::client::{self, FetchState, GraphQlClient};

pub const LOADING_TEXT: &str = "Loading...";

/// Top-level TUI application.
pub struct App {
    client: GraphQlClient,
    render_interval: Duration,
    running: bool,
    show_help: bool,
    pub state: AppState,
    header: Header,
    cards: MetricCards,
    charts: ChartsPanel,
    status_bar: StatusBar,
    help: HelpOverlay,
}

impl App {
    pub fn new(client: GraphQlClient, render_interval: Duration) -> Self {
        let state = AppState::new(client.endpoint().to_string());
        Self {
            client,
            render_interval,
            running: true,
            show_help: false,
            state,
            header: Header::new(),
            cards: MetricCards::new(),
            charts: ChartsPanel::new(),
            status_bar: StatusBar::new(),
            help: HelpOverlay::new(),
        }
    }

    /// Start the metrics fetch and run the event loop until quit.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut tui = Tui::new()?;
        tui.init()?;

        let mut events = EventHandler::new(self.render_interval);
        let tx = events.sender();
        let client = self.client.clone();
        tokio::spawn(async move {
            let fetched = client::fetch(&client).await;
            // Receiver is gone once the user quit before the response arrived
            let _ = tx.send(Event::Fetched(fetched));
        });

        let result = self.event_loop(&mut tui, &mut events).await;
        tui.exit()?;
        result
    }

    async fn event_loop(
        &mut self,
        tui: &mut Tui,
        events: &mut EventHandler,
    ) -> anyhow::Result<()> {
        while self.running {
            let event = events.next().await?;
            match event {
                Event::Render => {
                    tui.terminal.draw(|frame| self.render(frame))?;
                }
                other => self.handle_event(other),
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let action = self.action_for_key(key);
                self.handle_action(action);
            }
            Event::Fetched(fetched) => {
                match &fetched {
                    FetchState::Succeeded(metrics) => {
                        log::info!("Fetched {} metrics", metrics.len());
                    }
                    FetchState::Failed(message) => log::error!("Fetch failed: {message}"),
                    FetchState::Pending => {}
                }
                self.state.set_fetch(fetched);
            }
            Event::Render => {}
        }
    }

    fn action_for_key(&mut self, key: KeyEvent) -> Action {
        if map_key_to_action(key) == Action::Quit {
            return Action::Quit;
        }
        if self.show_help {
            return self.help.handle_key_event(key).unwrap_or(Action::None);
        }
        self.cards
            .handle_key_event(key)
            .unwrap_or_else(|| map_key_to_action(key))
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            // The overlay is only drawn over the loaded dashboard
            Action::ToggleHelp => {
                if self.state.view().is_some() {
                    self.show_help = !self.show_help;
                }
            }
            Action::None => {}
            action => {
                self.cards.update(&action, &mut self.state);
                self.charts.update(&action, &mut self.state);
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match &self.state.fetch {
            FetchState::Pending => {
                render_message(frame, area, LOADING_TEXT.to_string(), Color::Reset)
            }
            FetchState::Failed(message) => {
                render_message(frame, area, format!("Error: {message}"), Color::Red)
            }
            FetchState::Succeeded(_) => self.render_dashboard(frame, area),
        }
    }

    fn render_dashboard(&self, frame: &mut Frame, area: Rect) {
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let [cards_area, charts_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body_area);

        self.header.render(frame, header_area, &self.state);
        self.cards.render(frame, cards_area, &self.state);
        self.charts.render(frame, charts_area, &self.state);
        self.status_bar.render(frame, status_area, &self.state);

        if self.show_help {
            self.help.render(frame, area, &self.state);
        }
    }
}

/// Whole-screen message for the loading and error states.
fn render_message(frame: &mut Frame, area: Rect, text: String, color: Color) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use common::Metric;
    use common::config::GraphQlConfig;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::tui::test_helpers::{
        assert_buffer_contains, assert_buffer_lacks, create_test_terminal,
    };

    fn make_app() -> App {
        let client = GraphQlClient::new(&GraphQlConfig::default()).unwrap();
        App::new(client, Duration::from_millis(33))
    }

    fn loaded_app() -> App {
        let mut app = make_app();
        app.handle_event(Event::Fetched(FetchState::Succeeded(vec![
            Metric::new("BP Checks", 120.0),
            Metric::new("Visits", 300.0),
        ])));
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn screen(app: &App) -> ratatui::Terminal<ratatui::backend::TestBackend> {
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
    }

    #[test]
    fn app_new_is_running_and_pending() {
        let app = make_app();
        assert!(app.running);
        assert_eq!(app.state.fetch, FetchState::Pending);
        assert_eq!(app.state.endpoint, "http://localhost:4000/graphql");
    }

    #[test]
    fn quit_action_stops_app() {
        let mut app = make_app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn pending_renders_only_loading_text() {
        let app = make_app();
        let terminal = screen(&app);
        assert_buffer_contains(&terminal, LOADING_TEXT);
        assert_buffer_lacks(&terminal, "Analytics Dashboard");
        assert_buffer_lacks(&terminal, "Bar Chart");
    }

    #[test]
    fn failure_renders_only_error_message() {
        let mut app = make_app();
        app.handle_event(Event::Fetched(FetchState::Failed("Network error".into())));
        let terminal = screen(&app);
        assert_buffer_contains(&terminal, "Error: Network error");
        assert_buffer_lacks(&terminal, "Bar Chart");
        assert_buffer_lacks(&terminal, "View Details");
        assert_buffer_lacks(&terminal, "Loading");
    }

    #[test]
    fn success_renders_dashboard_without_details() {
        let app = loaded_app();
        let terminal = screen(&app);
        assert_buffer_contains(&terminal, "Access Afya Kenya LTD");
        assert_buffer_contains(&terminal, "Analytics Dashboard");
        assert_buffer_contains(&terminal, "BP Checks");
        assert_buffer_contains(&terminal, "Bar Chart (All Metrics)");
        assert_buffer_contains(&terminal, "No selection");
        assert_buffer_lacks(&terminal, "Line Chart");
    }

    #[test]
    fn selecting_a_card_reveals_detail_charts() {
        let mut app = loaded_app();
        app.handle_event(key(KeyCode::Right));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.state.selection.name(), Some("Visits"));

        let terminal = screen(&app);
        assert_buffer_contains(&terminal, "Bar Chart (Selected Metric)");
        assert_buffer_contains(&terminal, "Line Chart");
        assert_buffer_contains(&terminal, "Trend for Visits");
        assert_buffer_contains(&terminal, "Selected: Visits");
    }

    #[test]
    fn help_overlay_toggles_and_captures_keys() {
        let mut app = loaded_app();
        app.handle_event(key(KeyCode::Char('?')));
        assert!(app.show_help);
        assert_buffer_contains(&screen(&app), " Help ");

        app.handle_event(key(KeyCode::Enter));
        assert!(app.state.selection.is_none(), "keys are captured by help");

        app.handle_event(key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn ctrl_c_quits_while_help_is_open() {
        let mut app = loaded_app();
        app.handle_event(key(KeyCode::Char('?')));
        assert!(app.show_help);

        app.handle_event(Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }));
        assert!(!app.running);
    }

    #[test]
    fn help_stays_closed_before_dashboard_loads() {
        let mut app = make_app();
        app.handle_event(key(KeyCode::Char('?')));
        assert!(!app.show_help);

        app.handle_event(Event::Fetched(FetchState::Failed("Network error".into())));
        app.handle_event(key(KeyCode::Char('?')));
        assert!(!app.show_help);

        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn navigation_before_load_is_ignored() {
        let mut app = make_app();
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.state.cursor, 0);
        assert!(app.state.selection.is_none());
    }
}
