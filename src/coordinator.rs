//! Global coordinator making one loading bar reachable application-wide.
//!
//! Any part of an application can drive the bar without threading a
//! handle through every layer: the shell installs its [`LoadingBar`] once
//! for its own lifetime, and arbitrary call sites look the handle up with
//! [`global`]. The lookup fails loudly when no scope is installed; a
//! silently inert stub would hide integration bugs until someone notices
//! a bar that never appears.
//!
//! Handles remain ordinary [`Clone`] values, so passing them explicitly
//! stays the first choice where it is practical; the global slot exists
//! for the call sites that cannot.
//!
//! # Examples
//!
//! ```rust
//! use topbar::{coordinator, LoadingBarBuilder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), topbar::Error> {
//! let bar = LoadingBarBuilder::new().build();
//! let scope = coordinator::install(&bar)?;
//!
//! // Anywhere else in the application:
//! let handle = coordinator::global()?;
//! handle.start();
//! handle.finish();
//!
//! drop(scope);
//! assert!(coordinator::global().is_err());
//! # Ok(())
//! # }
//! ```

use crate::engine::{LoadingBar, LoadingBarHandle};
use crate::error::{Error, Result};

use std::sync::Mutex;
use tracing::debug;

static GLOBAL: Mutex<Option<LoadingBarHandle>> = Mutex::new(None);

/// Guard bounding the lifetime of the installed coordinator scope.
///
/// Dropping it uninstalls the global handle; subsequent [`global`] calls
/// fail until a new scope is installed. Tie it to the application shell's
/// lifetime.
#[must_use = "dropping the scope immediately uninstalls the coordinator"]
#[derive(Debug)]
pub struct CoordinatorScope {
    _priv: (),
}

impl Drop for CoordinatorScope {
    fn drop(&mut self) {
        GLOBAL.lock().unwrap().take();
        debug!("loading bar coordinator uninstalled");
    }
}

/// Install `bar` as the process-wide loading bar.
///
/// Returns the scope guard whose lifetime bounds the installation.
///
/// # Errors
///
/// [`Error::CoordinatorInstalled`] if another scope is still live.
pub fn install(bar: &LoadingBar) -> Result<CoordinatorScope> {
    let mut slot = GLOBAL.lock().unwrap();
    if slot.is_some() {
        return Err(Error::CoordinatorInstalled);
    }
    *slot = Some(bar.handle());
    debug!("loading bar coordinator installed");
    Ok(CoordinatorScope { _priv: () })
}

/// Look up the process-wide loading bar handle.
///
/// # Errors
///
/// [`Error::CoordinatorMissing`] when called outside an installed scope.
/// This is an integration error: install a [`CoordinatorScope`] in the
/// application shell, or pass a [`LoadingBarHandle`] explicitly instead.
pub fn global() -> Result<LoadingBarHandle> {
    GLOBAL
        .lock()
        .unwrap()
        .clone()
        .ok_or(Error::CoordinatorMissing)
}
