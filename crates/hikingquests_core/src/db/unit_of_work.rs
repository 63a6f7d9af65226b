//! Transaction-backed commit boundary.
//!
//! # Responsibility
//! - Group one or more repository mutations into a single SQLite transaction.
//! - Leave the commit decision to the caller of the services.
//!
//! # Invariants
//! - Nothing written through `repository()` is visible to other connections
//!   until `commit()` succeeds.
//! - Dropping an uncommitted unit of work rolls it back.

use super::DbResult;
use crate::db::DbError;
use crate::repo::quest_repo::SqliteQuestRepository;
use log::debug;
use rusqlite::{Connection, Transaction};

/// One open transaction plus the repository bound to it.
pub struct UnitOfWork<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> UnitOfWork<'conn> {
    /// Starts a new unit of work on `conn`.
    pub fn begin(conn: &'conn mut Connection) -> DbResult<Self> {
        let tx = conn.transaction()?;
        debug!("event=uow_begin module=db status=ok");
        Ok(Self { tx })
    }

    /// Returns a repository that reads and writes inside this transaction.
    pub fn repository(&self) -> SqliteQuestRepository<'_> {
        SqliteQuestRepository::new(&self.tx)
    }

    /// Durably applies every pending mutation.
    pub fn commit(self) -> DbResult<()> {
        self.tx.commit()?;
        debug!("event=uow_commit module=db status=ok");
        Ok(())
    }

    /// Discards every pending mutation.
    pub fn rollback(self) -> DbResult<()> {
        self.tx.rollback()?;
        debug!("event=uow_rollback module=db status=ok");
        Ok(())
    }
}

/// Runs `work` inside one unit of work and commits only when it succeeds.
///
/// On `Err` the transaction is dropped, which rolls it back.
pub fn with_unit_of_work<T, E>(
    conn: &mut Connection,
    work: impl FnOnce(SqliteQuestRepository<'_>) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<DbError>,
{
    let uow = UnitOfWork::begin(conn)?;
    let value = work(uow.repository())?;
    uow.commit()?;
    Ok(value)
}
