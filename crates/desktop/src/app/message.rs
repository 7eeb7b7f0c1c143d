//! Message definitions passed around the launcher update loop.

use iced::Task;

#[derive(Debug, Clone)]
pub(crate) enum Message {
    OpenBrowserPressed,
    OpenEmbeddedPressed,
    ToggleTheme,
    Tick,
}

pub(crate) type Effect = Task<Message>;
