//! Structured user-facing notifications.
//!
//! DESIGN
//! ======
//! State machines return a [`Notice`] instead of raising a blocking alert, so
//! the presentation layer decides how feedback is rendered (notice bar,
//! stderr line, inline message).

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::fmt;

use serde::Serialize;

/// Severity of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Informational confirmation (logout).
    Info,
    /// A completed action (report submitted).
    Success,
    /// User input is missing; nothing was attempted.
    Warning,
    /// An attempted action failed.
    Error,
}

impl NoticeLevel {
    /// Lowercase name used for CSS modifiers and log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single dismiss-to-continue notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Whether the notice reports something the user has to fix or retry.
    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(self.level, NoticeLevel::Warning | NoticeLevel::Error)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.as_str(), self.message)
    }
}
