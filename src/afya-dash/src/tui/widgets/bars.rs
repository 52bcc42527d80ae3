//! Bar height scaling and color mapping for the chart panels.
//!
//! Ratatui's [`BarChart`](ratatui::widgets::BarChart) takes `u64` bar values.
//! [`bar_heights`] maps arbitrary `f64` metric values into `0..=100`
//! proportionally to the largest value, so fractional metrics still render.

use common::dashboard::Rgba;
use ratatui::style::Color;

/// Height every bar is scaled against.
pub const FULL_HEIGHT: u64 = 100;

/// Scale `f64` values into `0..=FULL_HEIGHT` relative to the largest value.
///
/// # Edge cases
///
/// - **Empty input** returns an empty `Vec`.
/// - **Negative, NaN and zero values** render as empty bars.
/// - **All values zero or negative** return all zeros.
pub fn bar_heights(values: &[f64]) -> Vec<u64> {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    if max <= 0.0 {
        return vec![0; values.len()];
    }

    values
        .iter()
        .map(|&v| {
            if v.is_finite() && v > 0.0 {
                ((v / max) * FULL_HEIGHT as f64).round() as u64
            } else {
                0
            }
        })
        .collect()
}

/// Terminal color for a chart color. Terminals have no alpha channel, so the
/// color is used at full opacity.
pub fn terminal_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
