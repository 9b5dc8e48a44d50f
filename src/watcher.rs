//! Route-change watcher resolving the bar on navigation.
//!
//! Pages that call `start` and then navigate away often rely on the
//! navigation itself to mean "done" and never call `finish`. The watcher
//! closes that gap: it observes the active navigation path and finishes
//! the bar on every path change. The very first observation is
//! suppressed, since no `start` necessarily preceded the initial path.
//!
//! `finish` is idempotent-safe, so rapid successive path changes (or a
//! page's own explicit `finish` racing the watcher's) are harmless.
//!
//! # Examples
//!
//! ```rust
//! use tokio::sync::watch;
//! use topbar::{LoadingBarBuilder, RouteWatcher};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bar = LoadingBarBuilder::new().build();
//! let (paths, paths_rx) = watch::channel("/login".to_string());
//!
//! let watcher = RouteWatcher::spawn(paths_rx, bar.handle());
//!
//! bar.start();
//! // ... the page navigates instead of calling finish ...
//! paths.send("/dashboard".to_string()).ok();
//! # drop(watcher);
//! # }
//! ```

use crate::engine::LoadingBarHandle;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchPhase {
    /// Waiting for the first observation of the current path.
    Initial,
    /// Every subsequent distinct path observation finishes the bar.
    Armed,
}

/// Decides, per observed path, whether the bar should finish.
#[derive(Debug)]
struct RouteTracker {
    phase: WatchPhase,
    last: Option<String>,
}

impl RouteTracker {
    fn new() -> Self {
        Self {
            phase: WatchPhase::Initial,
            last: None,
        }
    }

    /// Observe a path; returns `true` when the bar should finish.
    ///
    /// The first observation arms the tracker without finishing;
    /// afterwards only a path distinct from the previous one finishes.
    fn observe(&mut self, path: &str) -> bool {
        match self.phase {
            WatchPhase::Initial => {
                self.phase = WatchPhase::Armed;
                self.last = Some(path.to_owned());
                false
            }
            WatchPhase::Armed => {
                if self.last.as_deref() == Some(path) {
                    return false;
                }
                self.last = Some(path.to_owned());
                true
            }
        }
    }
}

/// Background task finishing the loading bar on navigation.
///
/// The observation loop runs until the path channel closes or the
/// watcher is dropped.
#[derive(Debug)]
pub struct RouteWatcher {
    task: JoinHandle<()>,
}

impl RouteWatcher {
    /// Spawn the watcher over the active navigation path.
    pub fn spawn(mut paths: watch::Receiver<String>, bar: LoadingBarHandle) -> Self {
        let task = tokio::spawn(async move {
            let mut tracker = RouteTracker::new();
            let initial = paths.borrow_and_update().clone();
            tracker.observe(&initial);
            while paths.changed().await.is_ok() {
                let path = paths.borrow_and_update().clone();
                if tracker.observe(&path) {
                    debug!(%path, "route changed, finishing loading bar");
                    bar.finish();
                }
            }
        });
        Self { task }
    }
}

impl Drop for RouteWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_suppressed() {
        let mut tracker = RouteTracker::new();
        assert!(!tracker.observe("/login"));
    }

    #[test]
    fn subsequent_distinct_paths_finish() {
        let mut tracker = RouteTracker::new();
        tracker.observe("/login");
        assert!(tracker.observe("/dashboard"));
        assert!(tracker.observe("/settings"));
    }

    #[test]
    fn repeated_path_does_not_finish_twice() {
        let mut tracker = RouteTracker::new();
        tracker.observe("/login");
        assert!(tracker.observe("/dashboard"));
        assert!(!tracker.observe("/dashboard"));
        assert!(tracker.observe("/login"));
    }

    #[test]
    fn stays_armed_across_changes() {
        let mut tracker = RouteTracker::new();
        tracker.observe("/a");
        for path in ["/b", "/c", "/d", "/e"] {
            assert!(tracker.observe(path));
        }
    }
}
