use serde::{Deserialize, Serialize};

/// Raw viewport readings taken on every scroll event
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_y: f64,         // window.scrollY
    pub scroll_height: f64,    // documentElement.scrollHeight
    pub viewport_height: f64,  // window.innerHeight
}

impl ScrollMetrics {
    pub fn new(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            scroll_height,
            viewport_height,
        }
    }

    /// Distance the document can actually scroll (may be <= 0)
    pub fn scrollable_height(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }
}

/// Published scroll position. Read-only to everything except the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    pub scroll_y: u32,
    pub progress: f64, // 0.0 to 1.0, two decimals
}
