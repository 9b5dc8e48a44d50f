//! Tests for the route-change watcher.

use tokio::sync::watch;
use topbar::RouteWatcher;

mod common;
use common::helpers::*;

#[tokio::test(start_paused = true)]
async fn test_first_observation_does_not_finish() {
    let bar = create_test_bar();
    let (_paths, paths_rx) = watch::channel("/login".to_string());
    let _watcher = RouteWatcher::spawn(paths_rx, bar.handle());

    bar.start();
    advance_ms(10 * TICK_MS).await;

    // Still ticking: the initial path observation was suppressed.
    assert_state(&bar, true, 10);
}

#[tokio::test(start_paused = true)]
async fn test_path_change_finishes_the_bar() {
    let bar = create_test_bar();
    let (paths, paths_rx) = watch::channel("/login".to_string());
    let _watcher = RouteWatcher::spawn(paths_rx, bar.handle());
    settle().await;

    bar.start();
    advance_ms(10 * TICK_MS).await;

    paths.send("/dashboard".to_string()).unwrap();
    settle().await;
    assert_state(&bar, true, 100);
    advance_ms(HOLD_MS).await;
    assert_hidden(&bar);
}

#[tokio::test(start_paused = true)]
async fn test_redundant_path_notification_is_ignored() {
    let bar = create_test_bar();
    let (paths, paths_rx) = watch::channel("/login".to_string());
    let _watcher = RouteWatcher::spawn(paths_rx, bar.handle());
    settle().await;

    bar.start();
    paths.send("/login".to_string()).unwrap();
    settle().await;

    // Same path: no finish, the bar keeps ticking.
    advance_ms(10 * TICK_MS).await;
    assert_state(&bar, true, 10);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_path_changes_are_harmless() {
    let bar = create_test_bar();
    let (paths, paths_rx) = watch::channel("/login".to_string());
    let _watcher = RouteWatcher::spawn(paths_rx, bar.handle());
    settle().await;

    bar.start();
    for path in ["/a", "/b", "/c"] {
        paths.send(path.to_string()).unwrap();
        settle().await;
    }
    assert_state(&bar, true, 100);
    advance_ms(HOLD_MS).await;
    assert_hidden(&bar);
}

#[tokio::test(start_paused = true)]
async fn test_watcher_keeps_finishing_on_later_navigations() {
    let bar = create_test_bar();
    let (paths, paths_rx) = watch::channel("/login".to_string());
    let _watcher = RouteWatcher::spawn(paths_rx, bar.handle());
    settle().await;

    paths.send("/dashboard".to_string()).unwrap();
    settle().await;
    advance_ms(HOLD_MS).await;
    assert_hidden(&bar);

    // A later page starts the bar and navigates away again.
    bar.start();
    advance_ms(20 * TICK_MS).await;
    assert_state(&bar, true, 20);
    paths.send("/settings".to_string()).unwrap();
    settle().await;
    assert_state(&bar, true, 100);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_watcher_stops_observing() {
    let bar = create_test_bar();
    let (paths, paths_rx) = watch::channel("/login".to_string());
    let watcher = RouteWatcher::spawn(paths_rx, bar.handle());
    settle().await;

    drop(watcher);
    bar.start();
    paths.send("/dashboard".to_string()).ok();
    settle().await;
    advance_ms(10 * TICK_MS).await;

    // Nobody finished the bar.
    assert_state(&bar, true, 10);
}

#[tokio::test(start_paused = true)]
async fn test_closed_path_channel_ends_the_watcher() {
    let bar = create_test_bar();
    let (paths, paths_rx) = watch::channel("/login".to_string());
    let _watcher = RouteWatcher::spawn(paths_rx, bar.handle());
    settle().await;

    drop(paths);
    settle().await;

    // The loop exited without touching the bar.
    assert_hidden(&bar);
}
