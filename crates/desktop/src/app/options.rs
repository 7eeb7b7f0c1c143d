//! Configuration surfaces for the launcher window.

/// The fixed Catchat web UI location. Injected into the launcher at
/// construction; nothing re-derives it per action.
pub const CATCHAT_URL: &str = "https://awoo-co.github.io/catchat/";

#[derive(Debug, Clone)]
pub struct LauncherOptions {
    pub url: String,
}

impl Default for LauncherOptions {
    fn default() -> Self {
        Self {
            url: CATCHAT_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LauncherFlags {
    pub(crate) url: String,
    pub(crate) embedded_available: bool,
}

impl From<LauncherOptions> for LauncherFlags {
    fn from(options: LauncherOptions) -> Self {
        Self {
            url: options.url,
            embedded_available: crate::capability::embedded_view_available(),
        }
    }
}
