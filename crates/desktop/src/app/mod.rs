//! Launcher application wiring that composes views, state, and launching seams.

pub use self::desktop::run;
pub use self::options::{LauncherOptions, CATCHAT_URL};

mod desktop;
mod helpers;
mod message;
mod options;
mod state;
mod theme;
mod update;
mod views;

#[cfg(test)]
mod tests;
