//! Scroll offset to normalized progress.

use crate::domain::models::{ScrollMetrics, ScrollState};

/// Round to two decimal places (matches `toFixed(2)` for the value range we use)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `scroll_y / scrollable`, clamped to [0, 1] and rounded to 2 decimals.
/// A document without scrollable overflow always reports 0.
pub fn scroll_progress(scroll_y: f64, scrollable_height: f64) -> f64 {
    if scrollable_height <= 0.0 || !scrollable_height.is_finite() {
        return 0.0;
    }
    round2((scroll_y / scrollable_height).clamp(0.0, 1.0))
}

/// Full state published to subscribers after a scroll event
pub fn compute_scroll_state(metrics: ScrollMetrics) -> ScrollState {
    let scroll_y = if metrics.scroll_y.is_finite() {
        metrics.scroll_y.max(0.0).round() as u32
    } else {
        0
    };

    ScrollState {
        scroll_y,
        progress: scroll_progress(metrics.scroll_y, metrics.scrollable_height()),
    }
}
