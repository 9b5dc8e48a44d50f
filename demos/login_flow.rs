//! Example driving the loading bar through a simulated login-and-navigate flow.

use color_eyre::Result;
use std::time::Duration;
use tokio::sync::watch;
use topbar::{coordinator, IndicatorDisplay, IndicatorStyle, LoadingBarBuilder, RouteWatcher, ThemeMode};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Application shell: one engine, installed for the process lifetime.
    let bar = LoadingBarBuilder::new().build();
    let _scope = coordinator::install(&bar)?;

    // Render with the theme the terminal reports.
    let theme = ThemeMode::System.resolve();
    let display = IndicatorDisplay::new(IndicatorStyle::for_theme(theme));
    tokio::spawn(display.attach(bar.subscribe()));

    // Route watcher: navigation resolves bars that pages abandon.
    let (paths, paths_rx) = watch::channel("/login".to_string());
    let _watcher = RouteWatcher::spawn(paths_rx, coordinator::global()?);

    // A login form submit: start, call the backend, navigate on success.
    println!("Signing in...");
    coordinator::global()?.start();
    tokio::time::sleep(Duration::from_millis(900)).await;
    paths.send("/dashboard".to_string())?;
    tokio::time::sleep(Duration::from_millis(400)).await;
    println!("Signed in, landed on /dashboard.");

    // A page that finishes explicitly once its request settles.
    println!("Loading profile...");
    let handle = coordinator::global()?;
    handle.start();
    tokio::time::sleep(Duration::from_millis(600)).await;
    handle.finish();
    tokio::time::sleep(Duration::from_millis(400)).await;
    println!("Profile loaded.");

    Ok(())
}
