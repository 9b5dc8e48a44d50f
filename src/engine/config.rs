//! Configuration structure and defaults for the progress engine.
//!
//! This module provides the configuration used by the [`LoadingBar`] and
//! [`LoadingBarBuilder`]. The defaults are the timing contract of the
//! loading bar: a 15 ms tick advancing progress by one point up to 80%,
//! and a 300 ms hold at 100% before the bar hides.
//!
//! [`LoadingBar`]: crate::engine::LoadingBar
//! [`LoadingBarBuilder`]: crate::engine::LoadingBarBuilder

use std::time::Duration;

/// Configuration for the progress engine.
#[derive(Clone, Debug)]
pub struct LoadingBarConfig {
    /// Interval between two automatic progress increments.
    pub tick_interval: Duration,
    /// Progress value at which automatic ticking stops.
    ///
    /// The bar parks here until `finish` is called; only `finish` may
    /// drive progress to 100.
    pub tick_cap: u8,
    /// How long the completed (100%) bar stays on screen before hiding.
    pub hold_delay: Duration,
    /// Optional maximum duration after which a started bar force-finishes.
    ///
    /// Disabled by default: a started bar with no matching `finish` stays
    /// parked at the cap indefinitely.
    pub safety_timeout: Option<Duration>,
}

impl LoadingBarConfig {
    /// Default interval between automatic progress increments.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(15);
    /// Default progress cap for automatic ticking.
    pub const TICK_CAP: u8 = 80;
    /// Default hold at 100% before the bar hides.
    pub const HOLD_DELAY: Duration = Duration::from_millis(300);
}

impl Default for LoadingBarConfig {
    fn default() -> Self {
        Self {
            tick_interval: Self::TICK_INTERVAL,
            tick_cap: Self::TICK_CAP,
            hold_delay: Self::HOLD_DELAY,
            safety_timeout: None,
        }
    }
}
