//! Quest lifecycle use-cases.
//!
//! # Invariants
//! - Transition rules live in `QuestItem`; this service only loads,
//!   delegates and persists.
//! - A rejected transition is never persisted.

use crate::model::quest::{QuestId, QuestItem, QuestTransitionError};
use crate::repo::quest_repo::QuestRepository;
use crate::service::error::ServiceResult;
use log::{info, warn};

pub struct QuestWorkflowService<R: QuestRepository> {
    repo: R,
}

impl<R: QuestRepository> QuestWorkflowService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// `Planned -> InProgress`.
    pub fn start_quest(&self, id: QuestId) -> ServiceResult<()> {
        self.transition(id, "quest_start", QuestItem::start)
    }

    /// `InProgress -> Completed`.
    pub fn complete_quest(&self, id: QuestId) -> ServiceResult<()> {
        self.transition(id, "quest_complete", QuestItem::complete)
    }

    fn transition(
        &self,
        id: QuestId,
        event: &'static str,
        apply: fn(&mut QuestItem) -> Result<(), QuestTransitionError>,
    ) -> ServiceResult<()> {
        let mut quest = self.repo.get_by_id(id)?;
        let from = quest.status();

        if let Err(err) = apply(&mut quest) {
            warn!(
                "event={event} module=service status=rejected quest_id={id} from={from:?} reason={err:?}"
            );
            return Err(err.into());
        }

        self.repo.update(&quest)?;
        info!(
            "event={event} module=service status=ok quest_id={id} from={from:?} to={:?}",
            quest.status()
        );
        Ok(())
    }
}
