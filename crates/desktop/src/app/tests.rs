//! Exercised flows ensure the launcher degrades gracefully across both capability gaps.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    use crate::app::desktop::{headless_fallback, CatchatLauncher};
    use crate::app::message::Message;
    use crate::app::options::{LauncherFlags, CATCHAT_URL};
    use crate::app::state::{StatusToast, ToastKind};
    use crate::launch::Opener;

    #[derive(Default)]
    struct Recorded {
        browser: Vec<String>,
        embedded: Vec<(String, String)>,
    }

    struct RecordingOpener {
        calls: Arc<Mutex<Recorded>>,
        fail_browser: bool,
    }

    impl Opener for RecordingOpener {
        fn open_browser(&self, url: &str) -> Result<(), String> {
            self.calls.lock().browser.push(url.to_string());
            if self.fail_browser {
                Err("no default browser".into())
            } else {
                Ok(())
            }
        }

        fn start_embedded(&self, url: &str, title: &str) -> Result<(), String> {
            self.calls
                .lock()
                .embedded
                .push((url.to_string(), title.to_string()));
            Ok(())
        }
    }

    fn init_app(
        embedded_available: bool,
        fail_browser: bool,
    ) -> (CatchatLauncher, Arc<Mutex<Recorded>>) {
        let calls = Arc::new(Mutex::new(Recorded::default()));
        let opener = RecordingOpener {
            calls: Arc::clone(&calls),
            fail_browser,
        };
        let flags = LauncherFlags {
            url: CATCHAT_URL.to_string(),
            embedded_available,
        };
        let (app, _) = CatchatLauncher::with_opener(flags, Box::new(opener));
        (app, calls)
    }

    #[test]
    fn headless_fallback_opens_browser_exactly_once() {
        let calls = Arc::new(Mutex::new(Recorded::default()));
        let opener = RecordingOpener {
            calls: Arc::clone(&calls),
            fail_browser: false,
        };
        let telemetry = crate::telemetry::Handle::new();

        headless_fallback(&opener, &telemetry, CATCHAT_URL);

        let recorded = calls.lock();
        assert_eq!(recorded.browser.len(), 1);
        assert_eq!(recorded.browser[0], CATCHAT_URL);
        assert!(recorded.embedded.is_empty());
        if telemetry.is_enabled() {
            assert_eq!(telemetry.events_len(), 1);
        }
    }

    #[test]
    fn headless_fallback_browser_failure_is_nonfatal() {
        let calls = Arc::new(Mutex::new(Recorded::default()));
        let opener = RecordingOpener {
            calls: Arc::clone(&calls),
            fail_browser: true,
        };
        let telemetry = crate::telemetry::Handle::new();

        headless_fallback(&opener, &telemetry, CATCHAT_URL);

        assert_eq!(calls.lock().browser.len(), 1);
    }

    #[test]
    fn browser_action_opens_fixed_url_once() {
        for embedded_available in [false, true] {
            let (mut app, calls) = init_app(embedded_available, false);

            let _ = app.react(Message::OpenBrowserPressed);

            let recorded = calls.lock();
            assert_eq!(recorded.browser.len(), 1);
            assert_eq!(recorded.browser[0], CATCHAT_URL);
            assert!(recorded.embedded.is_empty());
        }
    }

    #[test]
    fn embedded_action_without_capability_reports_and_keeps_running() {
        let (mut app, calls) = init_app(false, false);

        let _ = app.react(Message::OpenEmbeddedPressed);

        assert!(calls.lock().embedded.is_empty());
        let toast = app.status.as_ref().expect("diagnostic toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("embedded-view"));

        // The launcher still dispatches further actions afterwards.
        let _ = app.react(Message::OpenBrowserPressed);
        assert_eq!(calls.lock().browser.len(), 1);
    }

    #[test]
    fn embedded_action_with_capability_starts_exactly_one_view() {
        let (mut app, calls) = init_app(true, false);

        let _ = app.react(Message::OpenEmbeddedPressed);

        {
            let recorded = calls.lock();
            assert_eq!(recorded.embedded.len(), 1);
            assert_eq!(recorded.embedded[0].0, CATCHAT_URL);
            assert!(recorded.browser.is_empty());
        }
        assert_eq!(app.status.as_ref().map(|t| t.kind), Some(ToastKind::Info));
    }

    #[test]
    fn browser_failure_is_nonfatal_and_unhandled() {
        let (mut app, calls) = init_app(false, true);

        let _ = app.react(Message::OpenBrowserPressed);

        assert_eq!(calls.lock().browser.len(), 1);
        assert!(app.status.is_none());

        // Still idling: a second press dispatches again.
        let _ = app.react(Message::OpenBrowserPressed);
        assert_eq!(calls.lock().browser.len(), 2);
    }

    #[test]
    fn toast_expires_on_tick() {
        let (mut app, _calls) = init_app(true, false);
        let stale = Instant::now()
            .checked_sub(Duration::from_secs(7))
            .expect("instant arithmetic");
        app.status = Some(StatusToast {
            message: "done".into(),
            kind: ToastKind::Info,
            created_at: stale,
        });

        let _ = app.react(Message::Tick);

        assert!(app.status.is_none());
    }

    #[test]
    fn theme_toggle_flips_palette() {
        let (mut app, _calls) = init_app(true, false);
        let before = app.theme.clone();

        let _ = app.react(Message::ToggleTheme);

        assert!(app.theme != before);
    }
}
