//! Core update loop translating launcher interactions into side effects.

use iced::Theme;

use crate::app::message::{Effect, Message};
use crate::app::state::StatusToast;
use crate::app::theme::Palette;
use crate::telemetry::Event as TelemetryEvent;

use super::desktop::CatchatLauncher;

const EMBEDDED_REMEDY: &str =
    "The embedded view is not available in this build. Reinstall with: cargo install catchat --features embedded-view";

impl CatchatLauncher {
    pub(super) fn react(&mut self, message: Message) -> Effect {
        self.prune_toast();
        match message {
            Message::OpenBrowserPressed => self.open_in_browser(),
            Message::OpenEmbeddedPressed => self.open_in_embedded_view(),
            Message::ToggleTheme => self.toggle_theme(),
            Message::Tick => Effect::none(),
        }
    }

    pub(super) fn open_in_browser(&mut self) -> Effect {
        match self.opener.open_browser(&self.url) {
            Ok(()) => {
                self.telemetry.record(TelemetryEvent::BrowserOpened);
                self.status = Some(StatusToast::info("Opened in the system browser"));
            }
            Err(err) => {
                // Whether a default browser exists is the operating system's
                // problem; log it and keep idling.
                self.telemetry
                    .record(TelemetryEvent::BrowserOpenFailed { error: err.clone() });
                tracing::warn!(error = %err, "system browser open failed");
            }
        }
        Effect::none()
    }

    pub(super) fn open_in_embedded_view(&mut self) -> Effect {
        if !self.embedded_available {
            self.telemetry.record(TelemetryEvent::EmbeddedViewUnavailable);
            tracing::warn!("embedded view requested but not compiled in");
            self.status = Some(StatusToast::error(EMBEDDED_REMEDY));
            return Effect::none();
        }

        match self.opener.start_embedded(&self.url, "Catchat") {
            Ok(()) => {
                self.telemetry.record(TelemetryEvent::EmbeddedViewStarted);
                self.status = Some(StatusToast::info("Embedded window started"));
            }
            Err(err) => {
                tracing::warn!(error = %err, "embedded view failed to start");
                self.status = Some(StatusToast::error(err));
            }
        }
        Effect::none()
    }

    pub(super) fn toggle_theme(&mut self) -> Effect {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        };
        self.palette = Palette::for_theme(&self.theme);
        Effect::none()
    }
}
