//! View composition for the launcher shell.

mod actions;
mod layout;
mod status;
mod styles;

pub(crate) use layout::compose as compose_root;
