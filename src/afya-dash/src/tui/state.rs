//! Application state management

use std::time::SystemTime;

use common::dashboard::{DashboardView, derive};
use common::{Metric, Selection};

use crate::client::FetchState;

/// Cards per row in the metric grid.
pub const CARD_COLUMNS: usize = 2;

/// Main application state, owned by [`App`](super::app::App) and lent to
/// components for rendering and updates.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Result of the single metrics fetch
    pub fetch: FetchState,
    /// Metric currently drilled into
    pub selection: Selection,
    /// Index of the focused card
    pub cursor: usize,
    /// GraphQL endpoint the metrics come from
    pub endpoint: String,
    /// When the fetch completed
    pub fetched_at: Option<SystemTime>,
    /// Derivation of `fetch` and `selection`, refreshed whenever either changes
    view: Option<DashboardView>,
}

impl AppState {
    /// Create a new AppState waiting on the fetch
    pub fn new(endpoint: String) -> Self {
        Self {
            fetch: FetchState::Pending,
            selection: Selection::none(),
            cursor: 0,
            endpoint,
            fetched_at: None,
            view: None,
        }
    }

    /// Record the fetch outcome. The selection is kept as is.
    pub fn set_fetch(&mut self, fetch: FetchState) {
        self.fetch = fetch;
        self.fetched_at = Some(SystemTime::now());
        self.cursor = self.cursor.min(self.card_count().saturating_sub(1));
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.view = self
            .fetch
            .metrics()
            .map(|metrics| derive(metrics, &self.selection));
    }

    pub fn metrics(&self) -> &[Metric] {
        self.fetch.metrics().unwrap_or(&[])
    }

    pub fn card_count(&self) -> usize {
        self.metrics().len()
    }

    /// Derived view for the current metrics and selection, once loaded.
    pub fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    /// Move the card cursor by `delta` positions, clamped to the grid.
    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        let target = self.cursor as isize + delta;
        if (0..count as isize).contains(&target) {
            self.cursor = target as usize;
        }
    }

    pub fn move_up(&mut self) {
        self.move_cursor(-(CARD_COLUMNS as isize));
    }

    pub fn move_down(&mut self) {
        self.move_cursor(CARD_COLUMNS as isize);
    }

    pub fn move_left(&mut self) {
        self.move_cursor(-1);
    }

    pub fn move_right(&mut self) {
        self.move_cursor(1);
    }

    /// Fire the focused card's trigger, selecting its metric.
    pub fn select_focused(&mut self) {
        let card = self
            .view
            .as_ref()
            .and_then(|view| view.cards.get(self.cursor))
            .cloned();
        if let Some(card) = card {
            card.activate(&mut self.selection);
            self.refresh_view();
        }
    }

    /// Select a metric by name, whether or not it is in the fetched list.
    pub fn select(&mut self, name: impl Into<String>) {
        self.selection.select(name);
        self.refresh_view();
    }
}
