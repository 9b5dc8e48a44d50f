//! Indicator display management.
//!
//! This module provides the [`IndicatorDisplay`] adapter that keeps a
//! live terminal bar in sync with [`ProgressState`] snapshots, and the
//! pure [`render`] function for environments that draw their own frames.
//!
//! # Examples
//!
//! ## Driving a Live Indicator
//!
//! ```rust,no_run
//! use topbar::{IndicatorDisplay, IndicatorStyle, LoadingBarBuilder, Theme};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let bar = LoadingBarBuilder::new().build();
//! let display = IndicatorDisplay::new(IndicatorStyle::for_theme(Theme::Dark));
//! tokio::spawn(display.attach(bar.subscribe()));
//! # }
//! ```
//!
//! ## Pure Rendering
//!
//! ```rust
//! use topbar::{indicator::render, ProgressState, Theme};
//!
//! let state = ProgressState { visible: true, progress: 50 };
//! let line = render(state, Theme::Dark, 40).unwrap();
//! assert!(render(ProgressState::default(), Theme::Dark, 40).is_none());
//! ```

use crate::engine::ProgressState;
use crate::indicator::IndicatorStyle;
use crate::theme::Theme;

use console::Style;
use indicatif::ProgressBar;
use tokio::sync::watch;

/// Keeps a terminal progress bar in sync with the loading bar state.
///
/// The underlying [`ProgressBar`] only exists while the state is visible:
/// it is created on the first visible snapshot and finished (and, by
/// default, cleared) when the state hides again, so a hidden indicator
/// occupies no terminal row.
pub struct IndicatorDisplay {
    style: IndicatorStyle,
    bar: Option<ProgressBar>,
}

impl IndicatorDisplay {
    /// Create a new display with the given style.
    pub fn new(style: IndicatorStyle) -> Self {
        Self { style, bar: None }
    }

    /// Whether a live bar is currently on screen.
    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Apply a state snapshot to the terminal.
    pub fn apply(&mut self, state: ProgressState) {
        if !state.visible {
            if let Some(bar) = self.bar.take() {
                if self.style.clear_on_hide {
                    bar.finish_and_clear();
                } else {
                    bar.finish();
                }
            }
            return;
        }
        let bar = self
            .bar
            .get_or_insert_with(|| self.style.clone().to_progress_bar());
        bar.set_position(u64::from(state.progress));
    }

    /// Re-render on every state change until the engine is torn down.
    pub async fn attach(mut self, mut states: watch::Receiver<ProgressState>) {
        let current = *states.borrow_and_update();
        self.apply(current);
        while states.changed().await.is_ok() {
            let current = *states.borrow_and_update();
            self.apply(current);
        }
        // Engine gone; never leave a stale bar on screen.
        self.apply(ProgressState::default());
    }
}

/// Render the indicator as a single styled line.
///
/// Pure function of `(state, theme, width)`: returns `None` when the bar
/// is not visible, otherwise a line of exactly `width` bar characters
/// whose filled portion is `progress`% of the width, colored for the
/// theme.
pub fn render(state: ProgressState, theme: Theme, width: usize) -> Option<String> {
    if !state.visible {
        return None;
    }
    let filled = width * usize::from(state.progress.min(100)) / 100;
    let style = match theme {
        Theme::Dark => Style::new().white().bold(),
        Theme::Light => Style::new().black().bold(),
    };
    let bar: String = "━".repeat(filled);
    let rest: String = "─".repeat(width - filled);
    Some(format!("{}{}", style.apply_to(bar), Style::new().dim().apply_to(rest)))
}
