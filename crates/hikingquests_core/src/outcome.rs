//! Failure kind to caller-facing outcome mapping.
//!
//! # Responsibility
//! - Give every service failure a stable status and machine-readable code.
//! - Withhold internal details of unexpected failures unless asked to expose them.
//!
//! # Invariants
//! - The mapping is total: every `QuestServiceError` yields exactly one outcome.
//! - Unexpected failures are always logged with full detail.

use crate::model::quest::QuestTransitionError;
use crate::service::error::QuestServiceError;
use log::error;
use serde::Serialize;

/// Public message returned for failures that are not the caller's fault.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Caller-facing failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InvalidState,
    Unexpected,
}

impl ErrorKind {
    /// HTTP-style status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            Self::InvalidArgument => 400,
            Self::NotFound => 404,
            Self::InvalidState => 409,
            Self::Unexpected => 500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::InvalidState => "invalid_state",
            Self::Unexpected => "unexpected",
        }
    }
}

/// Serializable failure outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Maps a service failure to its outcome.
    ///
    /// `expose_details` only affects unexpected failures; their underlying
    /// error text is attached when set (development mode).
    pub fn from_service_error(err: &QuestServiceError, expose_details: bool) -> Self {
        let status = err.kind().status_code();

        match err {
            QuestServiceError::Unexpected(inner) => {
                error!("event=unexpected_error module=outcome status=error error={inner:?}");
                Self {
                    status,
                    code: "unexpected_error",
                    message: UNEXPECTED_ERROR_MESSAGE.to_string(),
                    details: expose_details.then(|| inner.to_string()),
                }
            }
            other => Self {
                status,
                code: error_code(other),
                message: other.to_string(),
                details: None,
            },
        }
    }
}

/// Stable machine-readable code for a service failure.
pub fn error_code(err: &QuestServiceError) -> &'static str {
    match err {
        QuestServiceError::InvalidArgument(_) => "invalid_argument",
        QuestServiceError::NothingToUpdate => "nothing_to_update",
        QuestServiceError::NotFound(_) => "quest_not_found",
        QuestServiceError::InvalidState(reason) => match reason {
            QuestTransitionError::AlreadyInProgress => "already_in_progress",
            QuestTransitionError::AlreadyCompleted => "already_completed",
            QuestTransitionError::NotInProgress => "not_in_progress",
        },
        QuestServiceError::Unexpected(_) => "unexpected_error",
    }
}
