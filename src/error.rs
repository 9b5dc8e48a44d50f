//! Error handling for the topbar library.
//!
//! This module provides centralized error handling for the few failure
//! conditions the crate has. The progress engine itself cannot fail; the
//! only errors are integration mistakes around the global coordinator.

use thiserror::Error;

/// Errors that can happen when using topbar.
///
/// Both variants represent programmer/integration errors around the global
/// coordinator scope rather than runtime conditions, and are surfaced
/// eagerly so misuse shows up during development instead of silently
/// producing a bar that never moves.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The global loading bar was requested outside an installed
    /// coordinator scope.
    ///
    /// Returned by [`crate::coordinator::global`] when no
    /// [`crate::coordinator::CoordinatorScope`] is live. Install one for
    /// the lifetime of the application shell, or pass a
    /// [`crate::LoadingBarHandle`] explicitly.
    #[error("global loading bar used outside an installed coordinator scope")]
    CoordinatorMissing,

    /// A coordinator scope was installed while another one is still live.
    ///
    /// Exactly one global scope may exist per process; drop the previous
    /// [`crate::coordinator::CoordinatorScope`] first.
    #[error("a global loading bar coordinator is already installed")]
    CoordinatorInstalled,
}

/// Result type alias for operations that can fail with a topbar error.
pub type Result<T> = std::result::Result<T, Error>;
