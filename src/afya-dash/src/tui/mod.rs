//! Terminal dashboard for the metrics page

pub mod action;
pub mod app;
pub mod components;
pub mod event;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub mod test_helpers;
