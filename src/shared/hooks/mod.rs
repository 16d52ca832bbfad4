// Custom Dioxus hooks
pub mod use_indicators;
pub mod use_scroll_progress;
pub mod use_spring;

pub use use_indicators::{use_indicators, UseIndicators};
pub use use_scroll_progress::use_scroll_progress;
pub use use_spring::use_spring;
