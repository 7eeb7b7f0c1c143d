use iced::border::{Border, Radius};
use iced::widget::button;
use iced::{Background, Color, Shadow, Vector};

use crate::app::theme::Palette;

pub(super) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub(super) fn darken(color: Color, factor: f32) -> Color {
    let clamp = |value: f32| value.clamp(0.0, 1.0);
    Color {
        r: clamp(color.r * factor),
        g: clamp(color.g * factor),
        b: clamp(color.b * factor),
        ..color
    }
}

pub(super) fn primary_button_style(palette: Palette, status: button::Status) -> button::Style {
    let base = darken(palette.primary, 0.85);
    let mut style = button::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: base,
            width: 0.0,
            radius: Radius::from(3.0),
        },
        text_color: palette.primary_text,
        shadow: Shadow {
            offset: Vector::new(0.0, 1.0),
            ..Shadow::default()
        },
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered => {
            style.background = Some(Background::Color(palette.primary_hover));
            style.border.color = palette.primary_hover;
        }
        button::Status::Pressed => {
            let pressed = darken(palette.primary, 0.7);
            style.background = Some(Background::Color(pressed));
            style.border.color = pressed;
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Disabled => {
            let disabled_base = with_alpha(base, 0.6);
            style.background = Some(Background::Color(disabled_base));
            style.border.color = disabled_base;
            style.text_color = with_alpha(palette.primary_text, 0.6);
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn secondary_button_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: None,
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(3.0),
        },
        text_color: palette.secondary_text,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            style.background = Some(Background::Color(palette.secondary_hover));
            style.border.color = palette.primary;
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(palette.secondary_text, 0.6);
            style.border.color = with_alpha(palette.border, 0.5);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn ghost_button_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: None,
        border: Border::default(),
        text_color: palette.secondary_text,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            style.background = Some(Background::Color(palette.ghost_hover));
            style.text_color = palette.text_primary;
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(palette.secondary_text, 0.6);
        }
        button::Status::Active => {}
    }

    style
}
