//! Starter data for an empty quest log.

use crate::db::with_unit_of_work;
use crate::repo::quest_repo::QuestRepository;
use crate::service::error::ServiceResult;
use crate::service::management_service::{AddQuestRequest, QuestManagementService};
use log::info;
use rusqlite::Connection;

const DEFAULT_QUESTS: &[(&str, &str)] = &[
    ("Walk 5 km", "Walk 5 km or more on a forest path."),
    ("Catch a trout", "Catch a trout in a lake or a mountain stream."),
    (
        "Build a campfire",
        "Build a campfire using materials you find around the camp.",
    ),
    (
        "Find a porcini mushroom",
        "Locate a porcini mushroom in the forest.",
    ),
    (
        "Sleep in a tent",
        "Spend at least 1 night in the forest sleeping in a tent.",
    ),
];

/// Inserts the starter quests through `repo` when the log is empty.
///
/// Returns how many quests were inserted, which is zero when any quest
/// already exists. The caller owns the commit.
pub fn seed_quests<R: QuestRepository>(repo: R) -> ServiceResult<usize> {
    if !repo.get_all()?.is_empty() {
        return Ok(0);
    }

    let service = QuestManagementService::new(&repo);
    for (title, description) in DEFAULT_QUESTS {
        service.add_quest(AddQuestRequest {
            title: (*title).to_string(),
            description: (*description).to_string(),
        })?;
    }

    info!(
        "event=db_seed module=service status=ok inserted={}",
        DEFAULT_QUESTS.len()
    );
    Ok(DEFAULT_QUESTS.len())
}

/// Seeds an empty log inside its own unit of work.
pub fn seed_default_quests(conn: &mut Connection) -> ServiceResult<usize> {
    with_unit_of_work(conn, |repo| seed_quests(repo))
}
