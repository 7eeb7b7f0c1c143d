//! Collects lightweight launcher telemetry so capability gaps show up during prototyping.

use parking_lot::Mutex;

#[derive(Debug, Clone)]
pub enum Event {
    AppStarted,
    BrowserOpened,
    BrowserOpenFailed { error: String },
    EmbeddedViewStarted,
    EmbeddedViewUnavailable,
    HeadlessFallback,
}

pub struct Handle {
    #[cfg(feature = "telemetry")]
    events: Mutex<Vec<Event>>,
}

impl Handle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "telemetry")]
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, event: Event) {
        #[cfg(feature = "telemetry")]
        {
            match &event {
                Event::AppStarted => tracing::debug!("launcher telemetry app started"),
                Event::BrowserOpened => tracing::debug!("launcher telemetry browser opened"),
                Event::BrowserOpenFailed { error } => {
                    tracing::debug!(error = %error, "launcher telemetry browser open failed")
                }
                Event::EmbeddedViewStarted => {
                    tracing::debug!("launcher telemetry embedded view started")
                }
                Event::EmbeddedViewUnavailable => {
                    tracing::debug!("launcher telemetry embedded view unavailable")
                }
                Event::HeadlessFallback => {
                    tracing::debug!("launcher telemetry headless fallback")
                }
            }
            self.events.lock().push(event);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = event;
        }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        cfg!(feature = "telemetry")
    }

    #[cfg(test)]
    pub(crate) fn events_len(&self) -> usize {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().len()
        }
        #[cfg(not(feature = "telemetry"))]
        {
            0
        }
    }
}
