//! Shared state models for the launcher shell.

use std::time::Instant;

#[derive(Debug, Clone)]
pub(crate) struct StatusToast {
    pub(crate) message: String,
    pub(crate) kind: ToastKind,
    pub(crate) created_at: Instant,
}

impl StatusToast {
    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self::with_kind(message, ToastKind::Info)
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self::with_kind(message, ToastKind::Error)
    }

    fn with_kind(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Info,
    Error,
}
