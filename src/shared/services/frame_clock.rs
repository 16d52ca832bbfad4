//! Animation frame pacing for spring loops.

use crate::shared::constants::FRAME_INTERVAL_MS;

/// Nominal seconds per frame
pub const FRAME_DT: f64 = FRAME_INTERVAL_MS as f64 / 1000.0;

/// Yield until the next animation frame
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    gloo_timers::future::TimeoutFuture::new(FRAME_INTERVAL_MS).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    tokio::time::sleep(std::time::Duration::from_millis(FRAME_INTERVAL_MS as u64)).await;
}

/// Wall clock in seconds
#[cfg(target_arch = "wasm32")]
fn now_seconds() -> f64 {
    js_sys::Date::now() / 1000.0
}

#[cfg(not(target_arch = "wasm32"))]
fn now_seconds() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Measures real time between frames so a throttled tab still moves the
/// spring by the right amount.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: f64,
}

impl FrameClock {
    pub fn start() -> Self {
        Self { last: now_seconds() }
    }

    /// Wait for the next frame and return the elapsed seconds
    pub async fn tick(&mut self) -> f64 {
        next_frame().await;
        let now = now_seconds();
        let elapsed = elapsed_between(self.last, now);
        self.last = now;
        elapsed
    }
}

/// Elapsed time, falling back to a nominal frame when the clock went
/// backwards or did not advance
fn elapsed_between(last: f64, now: f64) -> f64 {
    let elapsed = now - last;
    if elapsed > 0.0 { elapsed } else { FRAME_DT }
}
