//! Quest repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD access to the `quests` table by id or title.
//! - Translate "no such row" into a typed `NotFound`.
//!
//! # Invariants
//! - Read paths rehydrate through `QuestItem::restore` and reject invalid
//!   persisted state instead of masking it.
//! - `delete` is idempotent: removing an absent quest is not an error.

use crate::db::DbError;
use crate::model::quest::{QuestId, QuestItem, QuestStatus};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const QUEST_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    status
FROM quests";

pub type RepoResult<T> = Result<T, RepoError>;

/// Key used for a lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestLookup {
    Id(QuestId),
    Title(String),
}

impl Display for QuestLookup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Title(title) => write!(f, "title `{title}`"),
        }
    }
}

/// Repository error for quest persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(QuestLookup),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(lookup) => write!(f, "quest not found: {lookup}"),
            Self::InvalidData(message) => write!(f, "invalid persisted quest data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage port consumed by the quest services.
pub trait QuestRepository {
    /// Persists a new quest. A duplicate id is a storage failure.
    fn add(&self, quest: &QuestItem) -> RepoResult<()>;
    fn get_by_id(&self, id: QuestId) -> RepoResult<QuestItem>;
    /// Case-insensitive exact title match; the oldest quest wins on duplicates.
    /// Case folding covers ASCII letters only, so `Åka` does not match `åka`.
    fn get_by_title(&self, title: &str) -> RepoResult<QuestItem>;
    /// Returns every stored quest in creation order; empty when none exist.
    fn get_all(&self) -> RepoResult<Vec<QuestItem>>;
    /// Overwrites the stored quest with the same id.
    fn update(&self, quest: &QuestItem) -> RepoResult<()>;
    /// Removes a quest. Returns whether a row was actually removed.
    fn delete(&self, id: QuestId) -> RepoResult<bool>;
}

impl<R: QuestRepository + ?Sized> QuestRepository for &R {
    fn add(&self, quest: &QuestItem) -> RepoResult<()> {
        (**self).add(quest)
    }

    fn get_by_id(&self, id: QuestId) -> RepoResult<QuestItem> {
        (**self).get_by_id(id)
    }

    fn get_by_title(&self, title: &str) -> RepoResult<QuestItem> {
        (**self).get_by_title(title)
    }

    fn get_all(&self) -> RepoResult<Vec<QuestItem>> {
        (**self).get_all()
    }

    fn update(&self, quest: &QuestItem) -> RepoResult<()> {
        (**self).update(quest)
    }

    fn delete(&self, id: QuestId) -> RepoResult<bool> {
        (**self).delete(id)
    }
}

/// SQLite-backed quest repository.
///
/// Borrows a connection (or a transaction through deref), so the caller
/// decides whether each call auto-commits or joins a unit of work.
pub struct SqliteQuestRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QuestRepository for SqliteQuestRepository<'_> {
    fn add(&self, quest: &QuestItem) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO quests (id, title, description, status)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                quest.id().to_string(),
                quest.title(),
                quest.description(),
                status_to_db(quest.status()),
            ],
        )?;
        Ok(())
    }

    fn get_by_id(&self, id: QuestId) -> RepoResult<QuestItem> {
        let quest = self
            .conn
            .query_row(
                &format!("{QUEST_SELECT_SQL} WHERE id = ?1;"),
                [id.to_string()],
                read_quest_row,
            )
            .optional()?;

        match quest {
            Some(row) => row,
            None => Err(RepoError::NotFound(QuestLookup::Id(id))),
        }
    }

    fn get_by_title(&self, title: &str) -> RepoResult<QuestItem> {
        let quest = self
            .conn
            .query_row(
                &format!(
                    "{QUEST_SELECT_SQL}
                     WHERE title = ?1 COLLATE NOCASE
                     ORDER BY created_at ASC, rowid ASC
                     LIMIT 1;"
                ),
                [title],
                read_quest_row,
            )
            .optional()?;

        match quest {
            Some(row) => row,
            None => Err(RepoError::NotFound(QuestLookup::Title(title.to_string()))),
        }
    }

    fn get_all(&self) -> RepoResult<Vec<QuestItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{QUEST_SELECT_SQL} ORDER BY created_at ASC, rowid ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut quests = Vec::new();

        while let Some(row) = rows.next()? {
            quests.push(parse_quest_row(row)?);
        }

        Ok(quests)
    }

    fn update(&self, quest: &QuestItem) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE quests
             SET
                title = ?1,
                description = ?2,
                status = ?3,
                updated_at = CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER)
             WHERE id = ?4;",
            params![
                quest.title(),
                quest.description(),
                status_to_db(quest.status()),
                quest.id().to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(QuestLookup::Id(quest.id())));
        }

        Ok(())
    }

    fn delete(&self, id: QuestId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM quests WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }
}

// Row parsing errors are kept inside the closure result so a corrupt row
// surfaces as `InvalidData` rather than a generic SQLite conversion error.
fn read_quest_row(row: &Row<'_>) -> rusqlite::Result<RepoResult<QuestItem>> {
    Ok(parse_quest_row(row))
}

fn parse_quest_row(row: &Row<'_>) -> RepoResult<QuestItem> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in quests.id"))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid quest status `{status_text}` in quests.status"
        ))
    })?;

    let title: String = row.get("title")?;
    let description: String = row.get("description")?;

    QuestItem::restore(id, title, description, status)
        .map_err(|err| RepoError::InvalidData(format!("quest {id}: {err}")))
}

fn status_to_db(status: QuestStatus) -> &'static str {
    match status {
        QuestStatus::Planned => "planned",
        QuestStatus::InProgress => "in_progress",
        QuestStatus::Completed => "completed",
    }
}

fn parse_status(value: &str) -> Option<QuestStatus> {
    match value {
        "planned" => Some(QuestStatus::Planned),
        "in_progress" => Some(QuestStatus::InProgress),
        "completed" => Some(QuestStatus::Completed),
        _ => None,
    }
}
