//! Builder pattern implementation for creating [`LoadingBar`] instances.
//!
//! The defaults reproduce the standard loading bar behavior (15 ms ticks
//! to 80%, 300 ms hold at 100%); the setters exist for embedders and
//! tests that need different pacing.
//!
//! # Examples
//!
//! ```rust
//! use topbar::LoadingBarBuilder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bar = LoadingBarBuilder::new().build();
//! # }
//! ```
//!
//! ## Hardened configuration
//!
//! ```rust
//! use std::time::Duration;
//! use topbar::LoadingBarBuilder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // Force-finish any bar still running after ten seconds.
//! let bar = LoadingBarBuilder::new()
//!     .safety_timeout(Duration::from_secs(10))
//!     .build();
//! # }
//! ```
//!
//! [`LoadingBar`]: crate::engine::LoadingBar

use super::{config::LoadingBarConfig, engine::LoadingBar};
use std::time::Duration;

/// A builder used to create a [`LoadingBar`].
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use topbar::LoadingBarBuilder;
///
/// let bar = LoadingBarBuilder::new().build();
/// # }
/// ```
#[derive(Default)]
pub struct LoadingBarBuilder {
    config: LoadingBarConfig,
}

impl LoadingBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        LoadingBarBuilder::default()
    }

    /// Set the interval between automatic progress increments.
    pub fn tick_interval(mut self, tick_interval: Duration) -> Self {
        self.config.tick_interval = tick_interval;
        self
    }

    /// Set the progress value at which automatic ticking stops.
    ///
    /// Values above 100 are clamped to 100.
    pub fn tick_cap(mut self, tick_cap: u8) -> Self {
        self.config.tick_cap = tick_cap.min(100);
        self
    }

    /// Set how long the completed bar stays on screen before hiding.
    pub fn hold_delay(mut self, hold_delay: Duration) -> Self {
        self.config.hold_delay = hold_delay;
        self
    }

    /// Force-finish a bar that is still running after `timeout`.
    ///
    /// Off by default: without it, a `start` with no matching `finish`
    /// leaves the bar parked at the cap until a route change or an
    /// explicit `finish` resolves it.
    pub fn safety_timeout(mut self, timeout: Duration) -> Self {
        self.config.safety_timeout = Some(timeout);
        self
    }

    /// Create the [`LoadingBar`] with the specified options.
    pub fn build(self) -> LoadingBar {
        LoadingBar::new(self.config)
    }
}
