//! Shared error type for the quest use-case services.

use crate::db::DbError;
use crate::model::quest::{QuestTransitionError, QuestValidationError};
use crate::outcome::ErrorKind;
use crate::repo::quest_repo::{QuestLookup, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, QuestServiceError>;

/// Failure surfaced by quest services to their caller.
///
/// Entity and repository failures are carried through unchanged; only
/// storage transport problems collapse into `Unexpected`.
#[derive(Debug)]
pub enum QuestServiceError {
    /// Caller data violates a field invariant.
    InvalidArgument(QuestValidationError),
    /// An update request carried no title and no description.
    NothingToUpdate,
    /// Referenced quest does not exist.
    NotFound(QuestLookup),
    /// Requested transition is illegal for the current status.
    InvalidState(QuestTransitionError),
    /// Any other propagated failure.
    Unexpected(RepoError),
}

impl QuestServiceError {
    /// Collapses this error into its caller-facing kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::NothingToUpdate => ErrorKind::InvalidArgument,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl Display for QuestServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "{err}"),
            Self::NothingToUpdate => write!(
                f,
                "At least one field (Title or Description) must be provided for update."
            ),
            Self::NotFound(lookup) => write!(f, "Quest not found ({lookup})."),
            Self::InvalidState(err) => write!(f, "{err}"),
            Self::Unexpected(err) => write!(f, "{err}"),
        }
    }
}

impl Error for QuestServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::InvalidState(err) => Some(err),
            Self::Unexpected(err) => Some(err),
            Self::NothingToUpdate | Self::NotFound(_) => None,
        }
    }
}

impl From<QuestValidationError> for QuestServiceError {
    fn from(value: QuestValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

impl From<QuestTransitionError> for QuestServiceError {
    fn from(value: QuestTransitionError) -> Self {
        Self::InvalidState(value)
    }
}

impl From<RepoError> for QuestServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(lookup) => Self::NotFound(lookup),
            other => Self::Unexpected(other),
        }
    }
}

impl From<DbError> for QuestServiceError {
    fn from(value: DbError) -> Self {
        Self::Unexpected(RepoError::Db(value))
    }
}
