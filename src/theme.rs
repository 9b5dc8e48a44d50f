//! Light/dark theme selection for the visual indicator.
//!
//! The indicator only consumes the theme to pick its bar color; nothing
//! else in the crate depends on it. Applications usually keep a
//! [`ThemeMode`] (which may be `System`) and resolve it to a concrete
//! [`Theme`] when rendering.

use std::env;

/// Resolved color theme consumed by the indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light background; the bar renders dark.
    Light,
    /// Dark background; the bar renders light.
    #[default]
    Dark,
}

/// User-facing theme preference, including following the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the terminal's reported background color.
    #[default]
    System,
}

impl ThemeMode {
    /// Cycle to the next mode: light, dark, system, light, ...
    pub fn cycle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Resolve the preference to a concrete theme.
    pub fn resolve(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => detect_system_theme(),
        }
    }
}

/// Guess the terminal theme from the `COLORFGBG` convention.
///
/// Terminals that set it report `"<fg>;<bg>"` (e.g. `"15;0"`); a light
/// background color index (7 or 15) means a light theme. Terminals that
/// don't set it are assumed dark.
pub fn detect_system_theme() -> Theme {
    theme_from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
}

fn theme_from_colorfgbg(value: Option<&str>) -> Theme {
    let Some(value) = value else {
        return Theme::Dark;
    };
    match value.rsplit(';').next().map(str::trim) {
        Some("7") | Some("15") => Theme::Light,
        _ => Theme::Dark,
    }
}
