//! Async event handler for the TUI.
//!
//! Multiplexes crossterm input events, the render timer and events posted by
//! background tasks (the metrics fetch) into a single [`Event`] stream using
//! `tokio::select!`.

use std::time::Duration;

use crossterm::event::{EventStream, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::client::FetchState;

/// Events produced by the [`EventHandler`].
#[derive(Debug, Clone)]
pub enum Event {
    /// A key press from the user.
    Key(KeyEvent),
    /// Periodic render signal.
    Render,
    /// The metrics fetch finished.
    Fetched(FetchState),
}

/// Async event handler that merges crossterm, render and task streams.
pub struct EventHandler {
    crossterm_stream: EventStream,
    render_interval: tokio::time::Interval,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler redrawing every `render_interval`.
    pub fn new(render_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            crossterm_stream: EventStream::new(),
            render_interval: tokio::time::interval(render_interval),
            tx,
            rx,
        }
    }

    /// Handle for background tasks to post events into the loop.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Wait for the next event asynchronously.
    pub async fn next(&mut self) -> anyhow::Result<Event> {
        loop {
            tokio::select! {
                maybe_event = self.crossterm_stream.next() => {
                    match maybe_event {
                        Some(Ok(crossterm::event::Event::Key(key))) => {
                            // Press only, Windows also reports Release/Repeat
                            if key.kind == crossterm::event::KeyEventKind::Press {
                                return Ok(Event::Key(key));
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                        _ => {}
                    }
                }
                Some(event) = self.rx.recv() => {
                    return Ok(event);
                }
                _ = self.render_interval.tick() => {
                    return Ok(Event::Render);
                }
            }
        }
    }
}
