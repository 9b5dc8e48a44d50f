//! Topbar is a crate providing a global top loading bar for asynchronous
//! terminal applications.
//!
//! The bar simulates indeterminate progress while a real asynchronous
//! operation is in flight: `start` begins a smooth animation that parks
//! at 80%, and `finish` flashes 100% before hiding the bar. A route
//! watcher resolves bars that pages abandon by navigating away.
//!
//! # Quick Start
//!
//! ```rust
//! use topbar::{coordinator, LoadingBarBuilder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), topbar::Error> {
//! let bar = LoadingBarBuilder::new().build();
//! let _scope = coordinator::install(&bar)?;
//!
//! // Any call site, e.g. a form submit handler:
//! let handle = coordinator::global()?;
//! handle.start();
//! // ... perform the real asynchronous operation ...
//! handle.finish();
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The topbar crate is organized into several modules:
//!
//! - [`engine`] - The progress engine owning the state and its timers
//! - [`indicator`] - Terminal rendering of the bar, theme-aware
//! - [`coordinator`] - The application-wide `start`/`finish` access point
//! - [`watcher`] - Automatic `finish` on navigation path changes
//! - [`theme`] - Light/dark theme selection
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod coordinator;
pub mod engine;
pub mod error;
pub mod indicator;
pub mod theme;
pub mod watcher;

pub use coordinator::CoordinatorScope;
pub use engine::{LoadingBar, LoadingBarBuilder, LoadingBarConfig, LoadingBarHandle, ProgressState};
pub use error::{Error, Result};
pub use indicator::{IndicatorDisplay, IndicatorStyle};
pub use theme::{detect_system_theme, Theme, ThemeMode};
pub use watcher::RouteWatcher;
