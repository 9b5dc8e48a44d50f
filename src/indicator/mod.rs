//! Indicator module containing the visual loading bar.
//!
//! This module renders the thin top bar whose width reflects the current
//! progress value. It is purely presentational: the engine owns the
//! state, and the indicator re-renders on every visibility or progress
//! change.
//!
//! # Overview
//!
//! The indicator module is organized into two main components:
//!
//! - `style` - Indicator styling options and theme-based templates
//! - `display` - Terminal display management and the pure renderer
//!
//! # Examples
//!
//! ## Custom Indicator Styling
//!
//! ```rust
//! use topbar::IndicatorStyle;
//!
//! let style = IndicatorStyle::new(
//!     Some("{bar:40.cyan/blue}".to_string()),
//!     Some("━╾╴─".to_string()),
//!     true,
//!     false,
//! );
//! ```
//!
//! ## Hidden Indicator
//!
//! ```rust
//! use topbar::IndicatorStyle;
//!
//! // Useful for headless environments and tests.
//! let hidden = IndicatorStyle::hidden();
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::{render, IndicatorDisplay};
pub use style::IndicatorStyle;
