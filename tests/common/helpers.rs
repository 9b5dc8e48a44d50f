#![allow(dead_code)]

use std::time::Duration;
use topbar::{LoadingBar, LoadingBarBuilder, LoadingBarConfig, ProgressState};

// Common test constants, mirroring the default timing contract.
pub const TICK_MS: u64 = 15;
pub const HOLD_MS: u64 = 300;

/// Creates a loading bar with the default timing contract.
pub fn create_test_bar() -> LoadingBar {
    LoadingBarBuilder::new().build()
}

/// Creates a loading bar that force-finishes after the given timeout.
pub fn create_guarded_test_bar(safety_ms: u64) -> LoadingBar {
    LoadingBarBuilder::new()
        .safety_timeout(Duration::from_millis(safety_ms))
        .build()
}

/// Let spawned tasks run until the current wave of wakeups settles.
///
/// Tests run on a paused single-threaded runtime, so a bounded number of
/// yields is enough for every pending task to observe the latest state.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Advance the paused clock, letting timers register before the jump and
/// fire after it.
pub async fn advance_ms(ms: u64) {
    settle().await;
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}

/// Asserts the full state snapshot of the bar.
pub fn assert_state(bar: &LoadingBar, visible: bool, progress: u8) {
    assert_eq!(bar.state(), ProgressState { visible, progress });
}

/// Asserts that the bar is hidden and reset.
pub fn assert_hidden(bar: &LoadingBar) {
    assert_state(bar, false, 0);
}

/// Asserts that the configured defaults match the timing contract.
pub fn assert_default_config(bar: &LoadingBar) {
    assert_eq!(bar.tick_interval(), LoadingBarConfig::TICK_INTERVAL);
    assert_eq!(bar.tick_cap(), LoadingBarConfig::TICK_CAP);
    assert_eq!(bar.hold_delay(), LoadingBarConfig::HOLD_DELAY);
    assert_eq!(bar.safety_timeout(), None);
}
