use std::fmt;

use crate::models::status::ModerationStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A form field failed validation; carries the human-readable reason.
    Validation(String),
    /// A moderation action was applied to an entity that already left `pending`.
    InvalidTransition {
        from: ModerationStatus,
        to: ModerationStatus,
    },
    Hash(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(reason) => write!(f, "{reason}"),
            AppError::InvalidTransition { from, to } => {
                write!(f, "Cannot move from '{}' to '{}'", from.code(), to.code())
            }
            AppError::Hash(e) => write!(f, "Hash error: {e}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Wrap a field-validator reason (see `auth::validate`).
    pub fn validation(reason: impl Into<String>) -> Self {
        AppError::Validation(reason.into())
    }
}
