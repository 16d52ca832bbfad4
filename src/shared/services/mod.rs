// Shared services
// Browser plumbing behind the hooks: scroll listener, frame pacing, layout reads

pub mod frame_clock;
pub mod measure;
pub mod scroll_host;

pub use frame_clock::{FRAME_DT, FrameClock, next_frame};
pub use measure::{measure_in_row, measure_item, measure_row};
pub use scroll_host::{PlatformScrollHost, ScrollCallback, ScrollHost, ScrollSubscription};
