//! Transient user-facing notices.
//!
//! The terminal analogue of the original UI's snackbar: controllers queue
//! [`Notice`]s as they react to results, and the presentation layer drains
//! the queue and shows the latest one for a few seconds.

/// Severity of a notice, used only for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A dismissible one-line message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Creates an informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}
