pub use catchat_desktop as desktop;
pub use catchat_desktop::{LauncherOptions, CATCHAT_URL};
