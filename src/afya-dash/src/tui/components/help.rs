//! Help overlay modal listing keyboard shortcuts.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::Component;
use crate::tui::action::{Action, map_key_to_action};
use crate::tui::state::AppState;

/// Modal help overlay with keybinding reference.
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn new() -> Self {
        Self
    }

    fn modal_area(area: Rect) -> Rect {
        let [horizontal] = Layout::horizontal([Constraint::Length(50)])
            .flex(Flex::Center)
            .areas(area);

        let height = 12u16.min(area.height);

        let [modal] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(horizontal);
        modal
    }
}

impl Component for HelpOverlay {
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => match map_key_to_action(key) {
                Action::Quit => Some(Action::Quit),
                _ => Some(Action::None),
            },
        }
    }

    fn update(&mut self, _action: &Action, _state: &mut AppState) {}

    fn render(&self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let modal = Self::modal_area(area);
        frame.render_widget(Clear, modal);

        let heading = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled("Cards", heading)),
            Line::from("  Arrows, h/j/k/l : Move between cards"),
            Line::from("  Enter / Space   : View details of card"),
            Line::from(""),
            Line::from(Span::styled("Global", heading)),
            Line::from("  ?  / Esc        : Toggle this help"),
            Line::from("  q / Ctrl-C      : Quit"),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(paragraph, modal);
    }
}
