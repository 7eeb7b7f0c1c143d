//! Palette definitions so the launcher matches the Catchat brand language.

use iced::Color;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) surface_muted: Color,
    pub(crate) primary: Color,
    pub(crate) primary_hover: Color,
    pub(crate) primary_text: Color,
    pub(crate) secondary_hover: Color,
    pub(crate) secondary_text: Color,
    pub(crate) ghost_hover: Color,
    pub(crate) danger: Color,
    pub(crate) info: Color,
    pub(crate) text_primary: Color,
    pub(crate) text_secondary: Color,
    pub(crate) text_muted: Color,
    pub(crate) border: Color,
}

impl Palette {
    pub(crate) fn for_theme(theme: &iced::Theme) -> Self {
        match theme {
            iced::Theme::Dark => Self {
                // Warm amber accents on charcoal, echoing the web UI.
                background: Color::from_rgb(0.08, 0.07, 0.06),
                surface: Color::from_rgb(0.11, 0.10, 0.09),
                surface_muted: Color::from_rgb(0.14, 0.12, 0.10),
                primary: Color::from_rgb(0.92, 0.62, 0.18),
                primary_hover: Color::from_rgb(0.98, 0.72, 0.26),
                primary_text: Color::from_rgb(0.10, 0.07, 0.03),
                secondary_hover: Color::from_rgba(0.92, 0.62, 0.18, 0.25),
                secondary_text: Color::from_rgb(0.90, 0.78, 0.58),
                ghost_hover: Color::from_rgba(0.85, 0.60, 0.22, 0.18),
                danger: Color::from_rgb(0.90, 0.36, 0.32),
                info: Color::from_rgb(0.45, 0.78, 0.55),
                text_primary: Color::from_rgb(0.94, 0.90, 0.84),
                text_secondary: Color::from_rgb(0.66, 0.60, 0.52),
                text_muted: Color::from_rgb(0.46, 0.42, 0.36),
                border: Color::from_rgba(0.80, 0.58, 0.26, 0.35),
            },
            _ => Self {
                background: Color::from_rgb(0.97, 0.95, 0.92),
                surface: Color::from_rgb(0.99, 0.98, 0.96),
                surface_muted: Color::from_rgb(0.94, 0.91, 0.86),
                primary: Color::from_rgb(0.82, 0.50, 0.10),
                primary_hover: Color::from_rgb(0.90, 0.58, 0.16),
                primary_text: Color::from_rgb(0.99, 0.98, 0.96),
                secondary_hover: Color::from_rgba(0.82, 0.50, 0.10, 0.20),
                secondary_text: Color::from_rgb(0.48, 0.34, 0.16),
                ghost_hover: Color::from_rgba(0.70, 0.48, 0.18, 0.16),
                danger: Color::from_rgb(0.78, 0.22, 0.20),
                info: Color::from_rgb(0.16, 0.52, 0.30),
                text_primary: Color::from_rgb(0.16, 0.13, 0.10),
                text_secondary: Color::from_rgb(0.42, 0.38, 0.32),
                text_muted: Color::from_rgb(0.58, 0.54, 0.48),
                border: Color::from_rgba(0.55, 0.40, 0.18, 0.30),
            },
        }
    }
}
