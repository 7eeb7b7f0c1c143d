//! Side-effecting URL launching behind a seam the update loop can fake.

/// Boundary between the update loop and the outside world. Production code
/// uses [`SystemOpener`]; tests substitute a recording fake.
pub(crate) trait Opener: Send {
    /// Hand the URL to the operating system's default browser.
    fn open_browser(&self, url: &str) -> Result<(), String>;

    /// Start the embedded rendering window and return without waiting on it.
    fn start_embedded(&self, url: &str, title: &str) -> Result<(), String>;
}

pub(crate) struct SystemOpener;

impl Opener for SystemOpener {
    fn open_browser(&self, url: &str) -> Result<(), String> {
        webbrowser::open(url).map_err(|err| err.to_string())
    }

    #[cfg(all(feature = "embedded-view", target_os = "macos"))]
    fn start_embedded(&self, _url: &str, _title: &str) -> Result<(), String> {
        // tao event loops must be created on the main thread on macOS, and
        // the iced loop already owns it.
        Err("the embedded view is not supported on macOS in this build; use Open in Browser".into())
    }

    #[cfg(all(feature = "embedded-view", not(target_os = "macos")))]
    fn start_embedded(&self, url: &str, title: &str) -> Result<(), String> {
        let url = url.to_string();
        let title = title.to_string();
        // The embedded event loop blocks until its window closes, so it gets
        // a dedicated thread and the iced loop returns to idle immediately.
        std::thread::Builder::new()
            .name("embedded-view".into())
            .spawn(move || {
                if let Err(err) = embedded::run_window(&url, &title) {
                    tracing::warn!(error = %err, "embedded view exited with an error");
                }
            })
            .map(|_| ())
            .map_err(|err| err.to_string())
    }

    #[cfg(not(feature = "embedded-view"))]
    fn start_embedded(&self, _url: &str, _title: &str) -> Result<(), String> {
        Err("embedded view support is not compiled into this build".into())
    }
}

#[cfg(all(test, feature = "embedded-view", target_os = "macos"))]
mod tests_macos {
    #[test]
    fn embedded_start_is_rejected_off_the_main_thread_platform() {
        use super::{Opener, SystemOpener};

        let err = SystemOpener
            .start_embedded("https://example.com/", "x")
            .unwrap_err();
        assert!(err.contains("macOS"));
    }
}

#[cfg(all(feature = "embedded-view", not(target_os = "macos")))]
mod embedded {
    use anyhow::{Context, Result};
    use tao::event::{Event, WindowEvent};
    use tao::event_loop::{ControlFlow, EventLoopBuilder};
    use tao::window::WindowBuilder;
    use wry::WebViewBuilder;

    /// Runs a webview pointed at `url` until its window is closed. Blocking;
    /// callers own the thread this runs on.
    pub(super) fn run_window(url: &str, title: &str) -> Result<()> {
        let mut builder = EventLoopBuilder::new();
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            use tao::platform::unix::EventLoopBuilderExtUnix;
            builder.with_any_thread(true);
        }
        #[cfg(target_os = "windows")]
        {
            use tao::platform::windows::EventLoopBuilderExtWindows;
            builder.with_any_thread(true);
        }
        let mut event_loop = builder.build();

        let window = WindowBuilder::new()
            .with_title(title)
            .build(&event_loop)
            .context("create embedded window")?;

        let webview_builder = WebViewBuilder::new().with_url(url);
        #[cfg(not(all(unix, not(target_os = "macos"))))]
        let webview = webview_builder.build(&window).context("create webview")?;
        #[cfg(all(unix, not(target_os = "macos")))]
        let webview = {
            use tao::platform::unix::WindowExtUnix;
            use wry::WebViewBuilderExtUnix;

            let vbox = window
                .default_vbox()
                .context("tao window has no gtk container")?;
            webview_builder.build_gtk(vbox).context("create webview")?
        };

        use tao::platform::run_return::EventLoopExtRunReturn;
        event_loop.run_return(move |event, _, control_flow| {
            // Keep the webview alive until the loop exits.
            let _ = &webview;
            *control_flow = ControlFlow::Wait;
            if let Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } = event
            {
                *control_flow = ControlFlow::Exit;
            }
        });

        Ok(())
    }
}
