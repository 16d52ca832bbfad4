//! Structured logging for the navigation bar
//!
//! Every event carries an `operation` field so the browser console (or the
//! desktop log) can be filtered per concern.

use crate::domain::models::{IndicatorGeometry, ScrollState};

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ScrollTracking,
    IndicatorSync,
    Measurement,
    SpringAnimation,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ScrollTracking => "scroll_tracking",
            LogOperation::IndicatorSync => "indicator_sync",
            LogOperation::Measurement => "measurement",
            LogOperation::SpringAnimation => "spring_animation",
            LogOperation::Config => "config",
        }
    }
}

/// Which of the two indicators an event is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    Active,
    Hover,
}

impl IndicatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::Active => "active",
            IndicatorKind::Hover => "hover",
        }
    }
}

/// Diagnostic hook for the page shell (replaces a raw console print)
pub fn log_scroll_progress(state: &ScrollState) {
    tracing::debug!(
        operation = LogOperation::ScrollTracking.as_str(),
        scroll_y = state.scroll_y,
        progress = state.progress,
        "Scroll progress"
    );
}

pub fn log_listener_attached() {
    tracing::debug!(
        operation = LogOperation::ScrollTracking.as_str(),
        passive = true,
        "Scroll listener attached"
    );
}

pub fn log_listener_detached() {
    tracing::debug!(
        operation = LogOperation::ScrollTracking.as_str(),
        "Scroll listener detached"
    );
}

pub fn log_listener_unavailable(reason: &str) {
    tracing::warn!(
        operation = LogOperation::ScrollTracking.as_str(),
        reason = reason,
        "Scroll tracking unavailable, progress stays at 0"
    );
}

pub fn log_indicator_target(kind: IndicatorKind, index: usize, geometry: &IndicatorGeometry) {
    tracing::trace!(
        operation = LogOperation::IndicatorSync.as_str(),
        indicator = kind.as_str(),
        index = index,
        left = geometry.left,
        width = geometry.width,
        "Indicator target updated"
    );
}

pub fn log_hover_fallback() {
    tracing::trace!(
        operation = LogOperation::IndicatorSync.as_str(),
        indicator = IndicatorKind::Hover.as_str(),
        "Hover cleared, following active indicator"
    );
}

/// Item not measurable this cycle; retried on the next layout pass
pub fn log_measure_skipped(kind: IndicatorKind, index: usize) {
    tracing::debug!(
        operation = LogOperation::Measurement.as_str(),
        indicator = kind.as_str(),
        index = index,
        "Item not measurable yet, skipping"
    );
}

pub fn log_layout_measured(measured: usize, total: usize) {
    tracing::debug!(
        operation = LogOperation::Measurement.as_str(),
        measured = measured,
        total = total,
        "Item row measured"
    );
}

pub fn log_measure_error(index: usize, error: &str) {
    tracing::debug!(
        operation = LogOperation::Measurement.as_str(),
        index = index,
        error = error,
        "Failed to measure item"
    );
}

pub fn log_spring_settled(value: f64, frames: usize) {
    tracing::trace!(
        operation = LogOperation::SpringAnimation.as_str(),
        value = value,
        frames = frames,
        "Spring settled"
    );
}

pub fn log_config_loaded(item_count: usize) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        item_count = item_count,
        "Navbar config loaded"
    );
}

pub fn log_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        error = error,
        "Invalid navbar config, using built-in defaults"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::ScrollTracking.as_str(), "scroll_tracking");
        assert_eq!(LogOperation::IndicatorSync.as_str(), "indicator_sync");
        assert_eq!(LogOperation::Measurement.as_str(), "measurement");
        assert_eq!(LogOperation::SpringAnimation.as_str(), "spring_animation");
        assert_eq!(LogOperation::Config.as_str(), "config");
    }

    #[test]
    fn test_indicator_kind_as_str() {
        assert_eq!(IndicatorKind::Active.as_str(), "active");
        assert_eq!(IndicatorKind::Hover.as_str(), "hover");
    }
}
