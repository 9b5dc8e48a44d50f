//! Indicator styling and configuration options.
//!
//! This module provides styling options for the loading bar indicator.
//! The bar is a thin, full-width line whose filled portion tracks the
//! current progress percentage; the active theme only selects its color
//! (light bar on dark backgrounds, dark bar on light backgrounds).
//!
//! # Examples
//!
//! ## Theme-Based Styling
//!
//! ```rust
//! use topbar::{IndicatorStyle, Theme};
//!
//! let style = IndicatorStyle::for_theme(Theme::Dark);
//! ```
//!
//! ## Hidden Indicator
//!
//! ```rust
//! use topbar::IndicatorStyle;
//!
//! let style = IndicatorStyle::hidden();
//! assert!(!style.is_enabled());
//! ```

use crate::theme::Theme;
use indicatif::{ProgressBar, ProgressStyle};

/// Define the options for the loading bar indicator.
#[derive(Debug, Clone)]
pub struct IndicatorStyle {
    /// Indicator template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the indicator.
    pub(crate) enabled: bool,
    /// Clear the indicator from the terminal once hidden.
    pub(crate) clear_on_hide: bool,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        IndicatorStyle::for_theme(Theme::default())
    }
}

impl IndicatorStyle {
    /// Template for dark backgrounds: a thin white line.
    ///
    /// `━━━━━━━━━━━━━━━━━━╴─────────────────────`
    pub const TEMPLATE_DARK: &'static str = "{bar:40.white.bold}";
    /// Template for light backgrounds: a thin black line.
    pub const TEMPLATE_LIGHT: &'static str = "{bar:40.black.bold}";
    /// Use a line as progress characters: `"━╾╴─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`IndicatorStyle`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear_on_hide: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear_on_hide,
        }
    }

    /// Create the style matching the active theme.
    pub fn for_theme(theme: Theme) -> Self {
        let template = match theme {
            Theme::Dark => IndicatorStyle::TEMPLATE_DARK,
            Theme::Light => IndicatorStyle::TEMPLATE_LIGHT,
        };
        Self {
            template: Some(template.into()),
            progress_chars: Some(IndicatorStyle::CHARS_LINE.into()),
            enabled: true,
            clear_on_hide: true,
        }
    }

    /// Create a new [`IndicatorStyle`] which hides the indicator.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..IndicatorStyle::default()
        }
    }

    /// Return `false` if the indicator is disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set to `true` to clear the indicator from the terminal once hidden.
    pub fn set_clear_on_hide(&mut self, clear_on_hide: bool) {
        self.clear_on_hide = clear_on_hide;
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            style = style.template(&template).unwrap();
        }
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    ///
    /// The bar length is always 100: positions are the displayed
    /// completion percentage.
    pub fn to_progress_bar(self) -> ProgressBar {
        // Return a hidden progress bar if we disabled it.
        if !self.enabled {
            return ProgressBar::hidden();
        }

        // Otherwise returns a ProgressBar with the style.
        let style = self.to_progress_style();
        ProgressBar::new(100).with_style(style)
    }
}
