//! Core progress engine implementation.
//!
//! This module contains the [`LoadingBar`] engine that owns the progress
//! state and animates it while a real asynchronous operation is in flight.
//! Progress is simulated: it advances one point per tick up to a cap, so
//! the bar signals "still working" without lying about completion, and
//! only [`finish`] drives it to 100%.
//!
//! # Examples
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
//! [`finish`]: LoadingBarHandle::finish

use super::config::LoadingBarConfig;

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Snapshot of the loading bar state.
///
/// `progress` is a percentage in `[0, 100]`. Whenever the bar is hidden,
/// progress is zero; the only exception is the short hold window after
/// [`finish`] during which the completed bar is still on screen.
///
/// [`finish`]: LoadingBarHandle::finish
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    /// Whether the indicator should render.
    pub visible: bool,
    /// Current displayed completion percentage.
    pub progress: u8,
}

/// Pending timer tasks plus the generation stamp that invalidates them.
///
/// Every spawned task captures the generation it was created under and
/// re-checks it under this lock before mutating state, so a task that was
/// aborted but already past its await point can never apply a stale
/// mutation.
#[derive(Default)]
struct Timers {
    generation: u64,
    ticker: Option<JoinHandle<()>>,
    hold: Option<JoinHandle<()>>,
    safety: Option<JoinHandle<()>>,
}

impl Timers {
    /// Invalidate and abort every pending task, returning the fresh
    /// generation stamp.
    fn reset(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        for handle in [self.ticker.take(), self.hold.take(), self.safety.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }
        self.generation
    }
}

struct Shared {
    config: LoadingBarConfig,
    state: watch::Sender<ProgressState>,
    timers: Mutex<Timers>,
}

impl Drop for Shared {
    fn drop(&mut self) {
        // Background tasks only hold weak references, so the last handle
        // going away lands here; abort anything still scheduled.
        if let Ok(timers) = self.timers.get_mut() {
            timers.reset();
        }
    }
}

/// The progress engine behind the loading bar.
///
/// Exactly one engine should exist per application shell. Obtain
/// control-plane handles with [`LoadingBar::handle`] and state
/// subscriptions with [`LoadingBar::subscribe`].
///
/// The engine runs its timers on the ambient Tokio runtime, so
/// [`start`]/[`finish`] must be called from within one.
///
/// [`start`]: LoadingBarHandle::start
/// [`finish`]: LoadingBarHandle::finish
pub struct LoadingBar {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for LoadingBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingBar")
            .field("config", &self.shared.config)
            .field("state", &*self.shared.state.borrow())
            .finish()
    }
}

impl LoadingBar {
    /// Creates a new engine with the given configuration.
    pub(crate) fn new(config: LoadingBarConfig) -> Self {
        let (state, _) = watch::channel(ProgressState::default());
        Self {
            shared: Arc::new(Shared {
                config,
                state,
                timers: Mutex::new(Timers::default()),
            }),
        }
    }

    /// Reset the bar and begin the progress animation.
    ///
    /// Safe to call while already running: any pending tick, hide, or
    /// safety timer is cancelled first and progress restarts from zero.
    pub fn start(&self) {
        start(&self.shared);
    }

    /// Complete the bar: jump to 100% now, hide after the hold delay.
    ///
    /// Safe to call at any time, including before any [`start`] or
    /// repeatedly; each call restarts the hold delay.
    ///
    /// [`start`]: LoadingBar::start
    pub fn finish(&self) {
        finish(&self.shared);
    }

    /// Current state snapshot.
    pub fn state(&self) -> ProgressState {
        *self.shared.state.borrow()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver yields a fresh [`ProgressState`] on every visibility
    /// or progress change; renderers re-render on each one. The channel
    /// closes when the engine and all its handles are dropped.
    pub fn subscribe(&self) -> watch::Receiver<ProgressState> {
        self.shared.state.subscribe()
    }

    /// Create a control-plane handle exposing only `start` and `finish`.
    pub fn handle(&self) -> LoadingBarHandle {
        LoadingBarHandle {
            shared: self.shared.clone(),
        }
    }

    /// Gets the interval between automatic progress increments.
    pub fn tick_interval(&self) -> Duration {
        self.shared.config.tick_interval
    }

    /// Gets the progress value at which automatic ticking stops.
    pub fn tick_cap(&self) -> u8 {
        self.shared.config.tick_cap
    }

    /// Gets how long the completed bar stays on screen before hiding.
    pub fn hold_delay(&self) -> Duration {
        self.shared.config.hold_delay
    }

    /// Gets the configured safety timeout, if any.
    pub fn safety_timeout(&self) -> Option<Duration> {
        self.shared.config.safety_timeout
    }
}

/// Cloneable control-plane handle over a [`LoadingBar`].
///
/// Exposes exactly the two capabilities page-level code needs; it owns no
/// state of its own and keeps the engine alive while held.
#[derive(Clone)]
pub struct LoadingBarHandle {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for LoadingBarHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingBarHandle")
            .field("state", &*self.shared.state.borrow())
            .finish()
    }
}

impl LoadingBarHandle {
    /// Reset the bar and begin the progress animation.
    ///
    /// See [`LoadingBar::start`].
    pub fn start(&self) {
        start(&self.shared);
    }

    /// Complete the bar: jump to 100% now, hide after the hold delay.
    ///
    /// See [`LoadingBar::finish`].
    pub fn finish(&self) {
        finish(&self.shared);
    }
}

fn start(shared: &Arc<Shared>) {
    let mut timers = shared.timers.lock().unwrap();
    let generation = timers.reset();
    shared.state.send_replace(ProgressState {
        visible: true,
        progress: 0,
    });
    debug!("loading bar started");
    timers.ticker = Some(tokio::spawn(run_ticker(
        Arc::downgrade(shared),
        generation,
    )));
    if let Some(timeout) = shared.config.safety_timeout {
        timers.safety = Some(tokio::spawn(run_safety(
            Arc::downgrade(shared),
            generation,
            timeout,
        )));
    }
}

fn finish(shared: &Arc<Shared>) {
    let mut timers = shared.timers.lock().unwrap();
    finish_locked(shared, &mut timers);
}

fn finish_locked(shared: &Arc<Shared>, timers: &mut Timers) {
    let generation = timers.reset();
    shared.state.send_modify(|state| state.progress = 100);
    debug!("loading bar finished");
    timers.hold = Some(tokio::spawn(run_hold(Arc::downgrade(shared), generation)));
}

/// Advance progress by one point per tick until the cap is reached, then
/// stop ticking. The cap is never crossed; only `finish` sets 100.
async fn run_ticker(shared: Weak<Shared>, generation: u64) {
    let (tick_interval, tick_cap) = match shared.upgrade() {
        Some(shared) => (shared.config.tick_interval, shared.config.tick_cap),
        None => return,
    };
    let mut interval =
        tokio::time::interval_at(tokio::time::Instant::now() + tick_interval, tick_interval);
    loop {
        interval.tick().await;
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let timers = shared.timers.lock().unwrap();
        if timers.generation != generation {
            return;
        }
        let mut capped = false;
        shared.state.send_modify(|state| {
            if state.progress < tick_cap {
                state.progress += 1;
            }
            capped = state.progress >= tick_cap;
        });
        drop(timers);
        if capped {
            debug!(cap = tick_cap, "loading bar reached tick cap");
            return;
        }
    }
}

/// Let the completed bar render for the hold delay, then hide and reset.
async fn run_hold(shared: Weak<Shared>, generation: u64) {
    let hold_delay = match shared.upgrade() {
        Some(shared) => shared.config.hold_delay,
        None => return,
    };
    tokio::time::sleep(hold_delay).await;
    let Some(shared) = shared.upgrade() else {
        return;
    };
    let timers = shared.timers.lock().unwrap();
    if timers.generation != generation {
        return;
    }
    shared.state.send_replace(ProgressState {
        visible: false,
        progress: 0,
    });
    drop(timers);
    debug!("loading bar hidden");
}

/// Force-finish a bar whose `start` was never resolved within the
/// configured safety timeout.
async fn run_safety(shared: Weak<Shared>, generation: u64, timeout: Duration) {
    tokio::time::sleep(timeout).await;
    let Some(shared) = shared.upgrade() else {
        return;
    };
    let mut timers = shared.timers.lock().unwrap();
    if timers.generation != generation {
        return;
    }
    debug!(?timeout, "loading bar safety timeout elapsed, forcing finish");
    finish_locked(&shared, &mut timers);
}
