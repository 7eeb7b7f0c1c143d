//! Desktop crate facade exposing the iced-based Catchat launcher.

mod app;
mod capability;
mod launch;
mod telemetry;

pub use app::{run, LauncherOptions, CATCHAT_URL};
