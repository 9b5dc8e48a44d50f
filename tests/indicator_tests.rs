//! Tests for the indicator styling and rendering.

use console::strip_ansi_codes;
use topbar::indicator::render;
use topbar::{IndicatorDisplay, IndicatorStyle, ProgressState, Theme};

mod common;
use common::helpers::*;

fn visible(progress: u8) -> ProgressState {
    ProgressState {
        visible: true,
        progress,
    }
}

#[test]
fn test_style_for_theme_is_enabled() {
    assert!(IndicatorStyle::for_theme(Theme::Dark).is_enabled());
    assert!(IndicatorStyle::for_theme(Theme::Light).is_enabled());
}

#[test]
fn test_style_hidden_is_disabled() {
    let style = IndicatorStyle::hidden();
    assert!(!style.is_enabled());
    assert!(style.to_progress_bar().is_hidden());
}

#[test]
fn test_style_to_progress_bar_is_percentage_scaled() {
    let pb = IndicatorStyle::for_theme(Theme::Dark).to_progress_bar();
    assert!(!pb.is_hidden());
    assert_eq!(pb.length(), Some(100));
}

#[test]
fn test_style_custom_template() {
    let style = IndicatorStyle::new(
        Some("{bar:40.cyan/blue}".to_string()),
        Some("━╾╴─".to_string()),
        true,
        false,
    );
    let pb = style.to_progress_bar();
    assert_eq!(pb.length(), Some(100));
}

#[test]
fn test_render_nothing_when_hidden() {
    assert!(render(ProgressState::default(), Theme::Dark, 40).is_none());
    assert!(render(
        ProgressState {
            visible: false,
            progress: 100
        },
        Theme::Light,
        40
    )
    .is_none());
}

#[test]
fn test_render_width_matches_request() {
    for progress in [0, 1, 37, 50, 99, 100] {
        let line = render(visible(progress), Theme::Dark, 40).unwrap();
        assert_eq!(strip_ansi_codes(&line).chars().count(), 40);
    }
}

#[test]
fn test_render_filled_portion_tracks_progress() {
    let filled = |progress: u8| {
        let line = render(visible(progress), Theme::Light, 40).unwrap();
        strip_ansi_codes(&line)
            .chars()
            .filter(|c| *c == '━')
            .count()
    };
    assert_eq!(filled(0), 0);
    assert_eq!(filled(50), 20);
    assert_eq!(filled(80), 32);
    assert_eq!(filled(100), 40);
}

#[test]
fn test_display_tracks_visibility() {
    let mut display = IndicatorDisplay::new(IndicatorStyle::for_theme(Theme::Dark));
    assert!(!display.is_active());

    display.apply(visible(10));
    assert!(display.is_active());
    display.apply(visible(80));
    assert!(display.is_active());

    display.apply(ProgressState::default());
    assert!(!display.is_active());
}

#[tokio::test(start_paused = true)]
async fn test_display_attach_ends_with_engine() {
    let bar = create_test_bar();
    let display = IndicatorDisplay::new(IndicatorStyle::hidden());
    let renderer = tokio::spawn(display.attach(bar.subscribe()));

    bar.start();
    advance_ms(10 * TICK_MS).await;
    bar.finish();
    advance_ms(HOLD_MS).await;
    assert!(!renderer.is_finished());

    drop(bar);
    settle().await;
    assert!(renderer.is_finished());
}
