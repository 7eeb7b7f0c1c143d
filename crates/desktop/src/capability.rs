//! Startup probes for the two capabilities the launcher degrades over.

/// Whether the runtime can create an interactive window at all.
///
/// On Linux and the BSDs a Wayland or X11 display server must be reachable;
/// macOS and Windows GUI processes always have a windowing session.
#[cfg(all(unix, not(target_os = "macos")))]
pub(crate) fn windowing_available() -> bool {
    display_server_present(|name| std::env::var_os(name))
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
pub(crate) fn windowing_available() -> bool {
    true
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_server_present(get: impl Fn(&str) -> Option<std::ffi::OsString>) -> bool {
    ["WAYLAND_DISPLAY", "DISPLAY"]
        .iter()
        .any(|name| get(name).is_some_and(|value| !value.is_empty()))
}

/// Computed once at startup and carried in the launcher flags; the embedded
/// renderer is only compiled in behind the `embedded-view` feature.
pub(crate) fn embedded_view_available() -> bool {
    cfg!(feature = "embedded-view")
}

#[cfg(all(test, unix, not(target_os = "macos")))]
mod tests {
    use std::collections::HashMap;
    use std::ffi::OsString;

    use super::display_server_present;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, OsString> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), OsString::from(value)))
            .collect()
    }

    #[test]
    fn no_display_variables_means_headless() {
        assert!(!display_server_present(|_| None));
    }

    #[test]
    fn x11_display_counts() {
        let env = env_of(&[("DISPLAY", ":0")]);
        assert!(display_server_present(|name| env.get(name).cloned()));
    }

    #[test]
    fn wayland_display_counts() {
        let env = env_of(&[("WAYLAND_DISPLAY", "wayland-1")]);
        assert!(display_server_present(|name| env.get(name).cloned()));
    }

    #[test]
    fn empty_display_variable_is_ignored() {
        let env = env_of(&[("DISPLAY", "")]);
        assert!(!display_server_present(|name| env.get(name).cloned()));
    }
}
