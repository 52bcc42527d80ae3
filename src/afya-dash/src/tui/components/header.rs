//! App bar and page title

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::Component;
use crate::tui::action::Action;
use crate::tui::state::AppState;

pub const ORGANIZATION: &str = "Access Afya Kenya LTD";
pub const PAGE_TITLE: &str = "Analytics Dashboard";

/// Rows the header occupies: app bar, page title, spacer.
pub const HEADER_HEIGHT: u16 = 3;

/// Top app bar with the organization name, followed by the page title.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Header {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Option<Action> {
        None
    }

    fn update(&mut self, _action: &Action, _state: &mut AppState) {}

    fn render(&self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        let bar_style = Style::default().fg(Color::White).bg(Color::Blue);
        let app_bar = Paragraph::new(Line::from(vec![
            Span::styled(" ≡ ", bar_style),
            Span::styled(ORGANIZATION, bar_style.add_modifier(Modifier::BOLD)),
        ]))
        .style(bar_style);
        frame.render_widget(app_bar, rows[0]);

        let title = Paragraph::new(Span::styled(
            PAGE_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, rows[1]);
    }
}
