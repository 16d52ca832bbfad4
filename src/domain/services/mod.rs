// UI logic services
// Framework-agnostic, 100% testable

pub mod collapse;
pub mod indicator;
pub mod scroll_progress;
pub mod spring;

pub use collapse::{LinearMap, NavbarTransform};
pub use indicator::{IndicatorTargets, ItemLayout, MeasuredLayout, SyncOutcome};
pub use scroll_progress::{compute_scroll_state, round2, scroll_progress};
pub use spring::Spring;
