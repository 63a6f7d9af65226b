//! Quest management use-cases: add, update, delete.
//!
//! # Invariants
//! - Every field change goes through the entity's validating methods.
//! - An update with nothing to apply is rejected before storage is touched.
//! - Deleting an absent quest is reported as `NotFound`.

use crate::model::quest::{has_text, QuestId, QuestItem};
use crate::repo::quest_repo::{QuestLookup, QuestRepository};
use crate::service::error::{QuestServiceError, ServiceResult};
use log::{info, warn};

/// Input for creating a quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddQuestRequest {
    pub title: String,
    pub description: String,
}

/// Partial update input. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateQuestRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateQuestRequest {
    /// Returns whether at least one field carries non-blank text.
    pub fn has_changes(&self) -> bool {
        has_text(self.title.as_deref()) || has_text(self.description.as_deref())
    }
}

pub struct QuestManagementService<R: QuestRepository> {
    repo: R,
}

impl<R: QuestRepository> QuestManagementService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a planned quest and hands it to the repository.
    ///
    /// Validation failures propagate unchanged and nothing is persisted.
    pub fn add_quest(&self, request: AddQuestRequest) -> ServiceResult<QuestItem> {
        let quest = QuestItem::create(request.title, request.description)?;
        self.repo.add(&quest)?;
        info!(
            "event=quest_add module=service status=ok quest_id={}",
            quest.id()
        );
        Ok(quest)
    }

    /// Applies a partial update to an existing quest.
    ///
    /// # Errors
    /// - `NothingToUpdate` when neither field has text.
    /// - `NotFound` when `id` is unknown.
    /// - `InvalidArgument` when a supplied field fails validation.
    pub fn update_quest(&self, id: QuestId, request: UpdateQuestRequest) -> ServiceResult<()> {
        if !request.has_changes() {
            return Err(QuestServiceError::NothingToUpdate);
        }

        let mut quest = self.repo.get_by_id(id)?;
        if let Some(title) = request.title {
            quest.update_title(title)?;
        }
        if let Some(description) = request.description {
            quest.update_description(description)?;
        }
        self.repo.update(&quest)?;

        info!("event=quest_update module=service status=ok quest_id={id}");
        Ok(())
    }

    pub fn delete_quest(&self, id: QuestId) -> ServiceResult<()> {
        if !self.repo.delete(id)? {
            warn!("event=quest_delete module=service status=not_found quest_id={id}");
            return Err(QuestServiceError::NotFound(QuestLookup::Id(id)));
        }
        info!("event=quest_delete module=service status=ok quest_id={id}");
        Ok(())
    }
}
