//! Metric card grid

use common::dashboard::CardSummary;
use common::model::format_value;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Component;
use crate::tui::action::Action;
use crate::tui::state::{AppState, CARD_COLUMNS};

/// Rows per card: border, name, value, trigger, border.
pub const CARD_HEIGHT: u16 = 5;

const VIEW_DETAILS: &str = "[ View Details ]";

/// Grid of metric cards, two per row. The focused card is outlined and its
/// trigger selects the metric.
pub struct MetricCards;

impl MetricCards {
    pub fn new() -> Self {
        Self
    }

    /// First grid row to draw so the cursor row stays on screen.
    fn first_visible_row(cursor: usize, visible_rows: usize) -> usize {
        let cursor_row = cursor / CARD_COLUMNS;
        cursor_row.saturating_sub(visible_rows.saturating_sub(1))
    }

    fn render_card(
        frame: &mut Frame,
        area: Rect,
        card: &CardSummary,
        focused: bool,
        selected: bool,
    ) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else if selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let trigger_style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let lines = vec![
            Line::from(Span::styled(
                card.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format_value(card.value)),
            Line::from(Span::styled(VIEW_DETAILS, trigger_style)),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Component for MetricCards {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Option<Action> {
        None
    }

    fn update(&mut self, action: &Action, state: &mut AppState) {
        match action {
            Action::MoveUp => state.move_up(),
            Action::MoveDown => state.move_down(),
            Action::MoveLeft => state.move_left(),
            Action::MoveRight => state.move_right(),
            Action::Select => state.select_focused(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(view) = state.view() else {
            return;
        };

        if view.cards.is_empty() {
            let empty = Paragraph::new("No metrics")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, area);
            return;
        }

        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let first_row = Self::first_visible_row(state.cursor, visible_rows);
        let selected = view.selection.name();

        let rows = view
            .cards
            .chunks(CARD_COLUMNS)
            .enumerate()
            .skip(first_row)
            .take(visible_rows);

        for (offset, (row_index, row)) in rows.enumerate() {
            let y = area.y + offset as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let row_area = Rect::new(area.x, y, area.width, height);
            let columns = Layout::horizontal(
                [Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS],
            )
            .split(row_area);

            for (column, card) in row.iter().enumerate() {
                let index = row_index * CARD_COLUMNS + column;
                Self::render_card(
                    frame,
                    columns[column],
                    card,
                    index == state.cursor,
                    selected == Some(card.name.as_str()),
                );
            }
        }
    }
}
