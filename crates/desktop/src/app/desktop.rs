//! Iced application implementation powering the Catchat launcher lifecycle.

use std::io::Cursor;
use std::time::Duration;

use anyhow::Result;
use iced::time;
use iced::{window, Size, Subscription, Theme};

use crate::app::helpers::detect_theme;
use crate::app::message::{Effect, Message};
use crate::app::options::{LauncherFlags, LauncherOptions};
use crate::app::state::StatusToast;
use crate::app::theme::Palette;
use crate::app::views;
use crate::capability;
use crate::launch::{Opener, SystemOpener};
use crate::telemetry::{self, Event as TelemetryEvent};

const TOAST_LIFETIME: Duration = Duration::from_secs(6);

pub fn run(options: LauncherOptions) -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let boot_flags = LauncherFlags::from(options);

    if !capability::windowing_available() {
        let telemetry = telemetry::Handle::new();
        headless_fallback(&SystemOpener, &telemetry, &boot_flags.url);
        return Ok(());
    }

    let window_settings = window::Settings {
        size: Size::new(440.0, 220.0),
        resizable: false,
        icon: load_window_icon(),
        ..window::Settings::default()
    };

    iced::application(
        move || CatchatLauncher::bootstrap(boot_flags.clone()),
        CatchatLauncher::react,
        views::compose_root,
    )
    .window(window_settings)
    .title(app_title)
    .theme(app_theme)
    .subscription(app_subscription)
    .run()?;

    Ok(())
}

/// Headless session: no window is ever constructed, the URL goes straight to
/// the system browser and the process exits normally.
pub(super) fn headless_fallback(opener: &dyn Opener, telemetry: &telemetry::Handle, url: &str) {
    eprintln!("No graphical session detected. Opening {url} in the system browser...");
    telemetry.record(TelemetryEvent::HeadlessFallback);
    if let Err(err) = opener.open_browser(url) {
        tracing::warn!(error = %err, "system browser open failed");
    }
}

fn app_title(_state: &CatchatLauncher) -> String {
    format!("Catchat v{}", env!("CARGO_PKG_VERSION"))
}

fn app_theme(state: &CatchatLauncher) -> Option<Theme> {
    Some(state.theme.clone())
}

fn app_subscription(state: &CatchatLauncher) -> Subscription<Message> {
    state.subscription()
}

fn load_window_icon() -> Option<window::Icon> {
    // Embed the brand icon so the native chrome reflects the app identity.
    const ICON_BYTES: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../icons/icon_256x256.png"
    ));

    let decoder = png::Decoder::new(Cursor::new(ICON_BYTES));
    let mut reader = decoder.read_info().ok()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).ok()?;
    let bytes = &buf[..frame.buffer_size()];

    window::icon::from_rgba(bytes.to_vec(), frame.width, frame.height).ok()
}

pub(crate) struct CatchatLauncher {
    pub(crate) url: String,
    pub(crate) embedded_available: bool,
    pub(crate) opener: Box<dyn Opener>,
    pub(crate) theme: Theme,
    pub(crate) palette: Palette,
    pub(crate) telemetry: telemetry::Handle,
    pub(crate) status: Option<StatusToast>,
}

impl CatchatLauncher {
    fn bootstrap(flags: LauncherFlags) -> (Self, Effect) {
        Self::with_opener(flags, Box::new(SystemOpener))
    }

    pub(crate) fn with_opener(flags: LauncherFlags, opener: Box<dyn Opener>) -> (Self, Effect) {
        let theme = detect_theme();
        let palette = Palette::for_theme(&theme);
        let telemetry = telemetry::Handle::new();
        telemetry.record(TelemetryEvent::AppStarted);

        (
            Self {
                url: flags.url,
                embedded_available: flags.embedded_available,
                opener,
                theme,
                palette,
                telemetry,
                status: None,
            },
            Effect::none(),
        )
    }

    pub(crate) fn subscription(&self) -> Subscription<Message> {
        // Only tick while a toast is showing; idle launchers stay idle.
        if self.status.is_some() {
            time::every(Duration::from_secs(1)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub(super) fn prune_toast(&mut self) {
        if let Some(toast) = &self.status {
            if toast.created_at.elapsed() > TOAST_LIFETIME {
                self.status = None;
            }
        }
    }
}
