use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::app::message::Message;

use super::styles::{primary_button_style, secondary_button_style};

use super::super::desktop::CatchatLauncher;

impl CatchatLauncher {
    pub(crate) fn action_row(&self) -> Element<'_, Message> {
        let palette = self.palette;

        let embedded_button = button(
            text("Open in App (embedded)")
                .size(14)
                .color(palette.primary_text),
        )
        .padding([8, 18])
        .on_press(Message::OpenEmbeddedPressed)
        .style(move |_, status| primary_button_style(palette, status));

        let browser_button = button(
            text("Open in Browser")
                .size(14)
                .color(palette.secondary_text),
        )
        .padding([8, 18])
        .on_press(Message::OpenBrowserPressed)
        .style(move |_, status| secondary_button_style(palette, status));

        row![embedded_button, browser_button]
            .spacing(12)
            .align_y(Alignment::Center)
            .into()
    }
}
