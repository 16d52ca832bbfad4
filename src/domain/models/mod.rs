// Domain models (transient UI state)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod scroll;

pub use navigation::{HoverTarget, IndicatorGeometry, NavItem, SelectionState};
pub use scroll::{ScrollMetrics, ScrollState};
