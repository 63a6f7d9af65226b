//! Command execution and JSON response envelopes.
//!
//! # Responsibility
//! - Wire repository and services for one command.
//! - Own the unit of work: commit on success, roll back on failure.
//! - Map service failures to stable outcomes.
//!
//! # Invariants
//! - Exactly one envelope is produced per command; this layer never panics.
//! - The boundary never issues SQL itself.

use crate::config::{Command, Config};
use hikingquests_core::db::open_db;
use hikingquests_core::{
    core_version, seed_quests, with_unit_of_work, AddQuestRequest, ApiError, QuestItem,
    QuestManagementService, QuestQueryService, QuestRepository, QuestServiceError,
    QuestWorkflowService, ServiceResult, UpdateQuestRequest,
};
use log::{info, warn};
use rusqlite::Connection;
use serde::Serialize;

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;
const STATUS_NO_CONTENT: u16 = 204;

/// Payload of a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Quest(QuestItem),
    Quests(Vec<QuestItem>),
    Seeded { inserted: usize },
    Version { version: &'static str },
}

/// One command result, serialized to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    pub ok: bool,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl CommandResponse {
    fn success(status: u16, data: Option<ResponseData>) -> Self {
        Self {
            ok: true,
            status,
            data,
            error: None,
        }
    }

    fn failure(err: &QuestServiceError, expose_details: bool) -> Self {
        let error = ApiError::from_service_error(err, expose_details);
        Self {
            ok: false,
            status: error.status,
            data: None,
            error: Some(error),
        }
    }
}

/// Opens the configured database and executes `command` against it.
pub fn run(config: &Config, command: Command) -> CommandResponse {
    if command == Command::Version {
        return execute_without_db(command);
    }

    match open_db(&config.db_path) {
        Ok(mut conn) => execute(&mut conn, command, config.expose_error_details),
        Err(err) => {
            CommandResponse::failure(&QuestServiceError::from(err), config.expose_error_details)
        }
    }
}

/// Executes `command` on an already opened connection.
pub fn execute(conn: &mut Connection, command: Command, expose_details: bool) -> CommandResponse {
    let name = command.name();
    let result = with_unit_of_work(conn, |repo| dispatch(&repo, command));

    match result {
        Ok((status, data)) => {
            info!("event=cli_command module=cli status=ok command={name} code={status}");
            CommandResponse::success(status, data)
        }
        Err(err) => {
            warn!(
                "event=cli_command module=cli status=error command={name} kind={}",
                err.kind().as_str()
            );
            CommandResponse::failure(&err, expose_details)
        }
    }
}

fn execute_without_db(command: Command) -> CommandResponse {
    info!(
        "event=cli_command module=cli status=ok command={} code={STATUS_OK}",
        command.name()
    );
    CommandResponse::success(STATUS_OK, Some(version_data()))
}

fn version_data() -> ResponseData {
    ResponseData::Version {
        version: core_version(),
    }
}

fn dispatch<R: QuestRepository>(
    repo: &R,
    command: Command,
) -> ServiceResult<(u16, Option<ResponseData>)> {
    let management = QuestManagementService::new(repo);
    let query = QuestQueryService::new(repo);
    let workflow = QuestWorkflowService::new(repo);

    match command {
        Command::Add { title, description } => {
            let quest = management.add_quest(AddQuestRequest { title, description })?;
            Ok((STATUS_CREATED, Some(ResponseData::Quest(quest))))
        }
        Command::Update {
            id,
            title,
            description,
        } => {
            management.update_quest(id, UpdateQuestRequest { title, description })?;
            Ok((STATUS_NO_CONTENT, None))
        }
        Command::Delete { id } => {
            management.delete_quest(id)?;
            Ok((STATUS_NO_CONTENT, None))
        }
        Command::Get { id } => Ok((STATUS_OK, Some(ResponseData::Quest(query.get_by_id(id)?)))),
        Command::Find { title } => Ok((
            STATUS_OK,
            Some(ResponseData::Quest(query.get_by_title(&title)?)),
        )),
        Command::List => Ok((STATUS_OK, Some(ResponseData::Quests(query.get_all()?)))),
        Command::Start { id } => {
            workflow.start_quest(id)?;
            Ok((STATUS_NO_CONTENT, None))
        }
        Command::Complete { id } => {
            workflow.complete_quest(id)?;
            Ok((STATUS_NO_CONTENT, None))
        }
        Command::Seed => Ok((
            STATUS_OK,
            Some(ResponseData::Seeded {
                inserted: seed_quests(repo)?,
            }),
        )),
        Command::Version => Ok((STATUS_OK, Some(version_data()))),
    }
}
