//! Helper utilities for detecting environment defaults.

use dark_light::Mode as ThemePreference;
use iced::Theme;

pub(crate) fn detect_theme() -> Theme {
    match dark_light::detect() {
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Light => Theme::Light,
        ThemePreference::Default => Theme::Dark,
    }
}
