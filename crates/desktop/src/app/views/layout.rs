use iced::alignment::{Horizontal, Vertical};
use iced::border::{Border, Radius};
use iced::widget::{column, container, text};
use iced::{Alignment, Background, Element, Length, Shadow};

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::CatchatLauncher;

pub(crate) fn compose(app: &CatchatLauncher) -> Element<'_, Message> {
    let heading = text("Open Catchat web UI")
        .size(18)
        .color(app.palette.text_primary);

    let mut content = column![heading, app.action_row()]
        .spacing(14)
        .align_x(Alignment::Center);

    if !app.embedded_available {
        content = content.push(
            text("Note: rebuild with the 'embedded-view' feature for the embedded window")
                .size(11)
                .color(app.palette.text_muted),
        );
    }

    let body = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding([12, 16])
        .style(move |_| surface_container_style(app.palette));

    let status = container(app.status_line())
        .width(Length::Fill)
        .padding([8, 16])
        .style(move |_| status_container_style(app.palette));

    container(
        column![body, status]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| app_background_style(app.palette))
    .into()
}

fn surface_container_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: 0.0,
            radius: Radius::from(0.0),
        },
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

fn status_container_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface_muted)),
        border: Border {
            color: palette.border,
            width: 0.0,
            radius: Radius::from(0.0),
        },
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

fn app_background_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.background)),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}
