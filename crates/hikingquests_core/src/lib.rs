//! Core domain logic for HikingQuests.
//! This crate is the single source of truth for quest invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod outcome;
pub mod repo;
pub mod service;

pub use db::{with_unit_of_work, UnitOfWork};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::quest::{QuestId, QuestItem, QuestStatus, QuestTransitionError, QuestValidationError};
pub use outcome::{ApiError, ErrorKind};
pub use repo::quest_repo::{
    QuestLookup, QuestRepository, RepoError, RepoResult, SqliteQuestRepository,
};
pub use service::error::{QuestServiceError, ServiceResult};
pub use service::management_service::{
    AddQuestRequest, QuestManagementService, UpdateQuestRequest,
};
pub use service::query_service::QuestQueryService;
pub use service::seed::{seed_default_quests, seed_quests};
pub use service::workflow_service::QuestWorkflowService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
