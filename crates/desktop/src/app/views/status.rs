use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Theme};

use crate::app::message::Message;
use crate::app::state::ToastKind;

use super::styles::ghost_button_style;

use super::super::desktop::CatchatLauncher;

impl CatchatLauncher {
    pub(crate) fn status_line(&self) -> Element<'_, Message> {
        let palette = self.palette;

        let left = match &self.status {
            Some(status) => {
                let color = match status.kind {
                    ToastKind::Info => palette.info,
                    ToastKind::Error => palette.danger,
                };
                text(&status.message).size(12).color(color)
            }
            None => text(&self.url).size(12).color(palette.text_secondary),
        };

        let theme_label = match self.theme {
            Theme::Dark => "Light",
            _ => "Dark",
        };
        let theme_button = button(text(theme_label).size(12).color(palette.secondary_text))
            .on_press(Message::ToggleTheme)
            .style(move |_, status| ghost_button_style(palette, status));

        row![left, Space::new().width(Length::Fill), theme_button]
            .align_y(Alignment::Center)
            .into()
    }
}
