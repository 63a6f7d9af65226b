//! Read-only quest projections.

use crate::model::quest::{QuestId, QuestItem};
use crate::repo::quest_repo::QuestRepository;
use crate::service::error::ServiceResult;

/// Query facade. Never mutates storage.
pub struct QuestQueryService<R: QuestRepository> {
    repo: R,
}

impl<R: QuestRepository> QuestQueryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_by_id(&self, id: QuestId) -> ServiceResult<QuestItem> {
        Ok(self.repo.get_by_id(id)?)
    }

    /// Case-insensitive exact title lookup.
    pub fn get_by_title(&self, title: &str) -> ServiceResult<QuestItem> {
        Ok(self.repo.get_by_title(title)?)
    }

    pub fn get_all(&self) -> ServiceResult<Vec<QuestItem>> {
        Ok(self.repo.get_all()?)
    }
}
