//! Progress engine module containing the core loading bar, builder
//! pattern, and configuration.
//!
//! This module provides the [`LoadingBar`] engine and its associated
//! builder for configuring the simulated progress animation. It owns the
//! progress state, the recurring tick, and the post-completion hold.
//!
//! # Overview
//!
//! The engine module is organized into three main components:
//!
//! - `engine` - Core `LoadingBar` with the start/finish state machine
//! - `builder` - `LoadingBarBuilder` for flexible configuration
//! - `config` - Configuration structure and the timing constants
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use topbar::LoadingBarBuilder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bar = LoadingBarBuilder::new().build();
//! let handle = bar.handle();
//!
//! handle.start();
//! // ... perform the real asynchronous operation ...
//! handle.finish();
//! # }
//! ```
//!
//! ## Custom Pacing
//!
//! ```rust
//! use std::time::Duration;
//! use topbar::LoadingBarBuilder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bar = LoadingBarBuilder::new()
//!     .tick_interval(Duration::from_millis(30))
//!     .hold_delay(Duration::from_millis(150))
//!     .build();
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod engine;

pub use builder::LoadingBarBuilder;
pub use config::LoadingBarConfig;
pub use engine::{LoadingBar, LoadingBarHandle, ProgressState};
