//! Quest domain model.
//!
//! # Responsibility
//! - Define the quest record tracked by the quest log.
//! - Own field validation and lifecycle transition rules.
//!
//! # Invariants
//! - `id` is assigned once and never reused for another quest.
//! - `title` and `description` are never blank and never exceed their limits.
//! - `status` only moves forward: `Planned -> InProgress -> Completed`.
//! - Fields are private; every mutation goes through a validating method.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a quest.
pub type QuestId = Uuid;

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Quest lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    /// Created but not started.
    Planned,
    /// Started, not yet finished.
    InProgress,
    /// Finished. Terminal.
    Completed,
}

/// Field-level validation failures for quest data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestValidationError {
    NilId,
    EmptyTitle,
    EmptyDescription,
    TitleTooLong { chars: usize, max: usize },
    DescriptionTooLong { chars: usize, max: usize },
}

impl Display for QuestValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "quest id cannot be nil"),
            Self::EmptyTitle => write!(f, "Title cannot be null or empty."),
            Self::EmptyDescription => write!(f, "Description cannot be null or empty."),
            Self::TitleTooLong { chars, max } => {
                write!(f, "Title cannot exceed {max} characters (got {chars}).")
            }
            Self::DescriptionTooLong { chars, max } => {
                write!(f, "Description cannot exceed {max} characters (got {chars}).")
            }
        }
    }
}

impl Error for QuestValidationError {}

/// Rejected lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestTransitionError {
    /// `start()` on a quest that is already in progress.
    AlreadyInProgress,
    /// `start()` or `complete()` on a completed quest.
    AlreadyCompleted,
    /// `complete()` on a quest that was never started.
    NotInProgress,
}

impl Display for QuestTransitionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInProgress => write!(f, "Quest is already in progress."),
            Self::AlreadyCompleted => write!(f, "Quest is already completed."),
            Self::NotInProgress => write!(f, "Quest must be in progress to be completed."),
        }
    }
}

impl Error for QuestTransitionError {}

/// A quest in the quest log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestItemWire")]
pub struct QuestItem {
    id: QuestId,
    title: String,
    description: String,
    status: QuestStatus,
}

impl QuestItem {
    /// Creates a planned quest with a freshly generated ID.
    ///
    /// # Errors
    /// - Blank or over-long `title` / `description`.
    pub fn create(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, QuestValidationError> {
        let title = title.into();
        let description = description.into();
        validate_title(&title)?;
        validate_description(&description)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: QuestStatus::Planned,
        })
    }

    /// Rebuilds a quest from persisted state.
    ///
    /// Used by storage read paths. Field rules are re-checked so a corrupt
    /// row cannot produce a quest that violates invariants.
    pub fn restore(
        id: QuestId,
        title: impl Into<String>,
        description: impl Into<String>,
        status: QuestStatus,
    ) -> Result<Self, QuestValidationError> {
        if id.is_nil() {
            return Err(QuestValidationError::NilId);
        }
        let title = title.into();
        let description = description.into();
        validate_title(&title)?;
        validate_description(&description)?;

        Ok(Self {
            id,
            title,
            description,
            status,
        })
    }

    pub fn id(&self) -> QuestId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> QuestStatus {
        self.status
    }

    /// Replaces the title after validation. On error the title is unchanged.
    pub fn update_title(
        &mut self,
        new_title: impl Into<String>,
    ) -> Result<(), QuestValidationError> {
        let new_title = new_title.into();
        validate_title(&new_title)?;
        self.title = new_title;
        Ok(())
    }

    /// Replaces the description after validation. On error the description is unchanged.
    pub fn update_description(
        &mut self,
        new_description: impl Into<String>,
    ) -> Result<(), QuestValidationError> {
        let new_description = new_description.into();
        validate_description(&new_description)?;
        self.description = new_description;
        Ok(())
    }

    /// Moves a planned quest to `InProgress`.
    pub fn start(&mut self) -> Result<(), QuestTransitionError> {
        match self.status {
            QuestStatus::InProgress => Err(QuestTransitionError::AlreadyInProgress),
            QuestStatus::Completed => Err(QuestTransitionError::AlreadyCompleted),
            QuestStatus::Planned => {
                self.status = QuestStatus::InProgress;
                Ok(())
            }
        }
    }

    /// Moves an in-progress quest to `Completed`.
    pub fn complete(&mut self) -> Result<(), QuestTransitionError> {
        match self.status {
            QuestStatus::Completed => Err(QuestTransitionError::AlreadyCompleted),
            QuestStatus::Planned => Err(QuestTransitionError::NotInProgress),
            QuestStatus::InProgress => {
                self.status = QuestStatus::Completed;
                Ok(())
            }
        }
    }
}

/// Returns whether a caller-supplied text carries any content.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

fn validate_title(title: &str) -> Result<(), QuestValidationError> {
    if title.trim().is_empty() {
        return Err(QuestValidationError::EmptyTitle);
    }
    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(QuestValidationError::TitleTooLong {
            chars,
            max: MAX_TITLE_CHARS,
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), QuestValidationError> {
    if description.trim().is_empty() {
        return Err(QuestValidationError::EmptyDescription);
    }
    let chars = description.chars().count();
    if chars > MAX_DESCRIPTION_CHARS {
        return Err(QuestValidationError::DescriptionTooLong {
            chars,
            max: MAX_DESCRIPTION_CHARS,
        });
    }
    Ok(())
}

#[derive(Deserialize)]
struct QuestItemWire {
    id: QuestId,
    title: String,
    description: String,
    status: QuestStatus,
}

impl TryFrom<QuestItemWire> for QuestItem {
    type Error = QuestValidationError;

    fn try_from(value: QuestItemWire) -> Result<Self, Self::Error> {
        Self::restore(value.id, value.title, value.description, value.status)
    }
}
