//! Component trait and implementations

pub mod cards;
pub mod charts;
pub mod header;
pub mod help;
pub mod status_bar;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use super::action::Action;
use super::state::AppState;

/// Lifecycle trait for TUI components.
///
/// Each panel implements this trait so the main [`App`](super::app::App) can
/// delegate key handling, state updates, and rendering uniformly.
pub trait Component {
    /// Translate a key press into an [`Action`], or `None` to let the
    /// parent handle it.
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action>;

    /// React to an action that was dispatched globally.
    fn update(&mut self, action: &Action, state: &mut AppState);

    /// Draw the component into the given area.
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState);
}
