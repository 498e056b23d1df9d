use super::error::Result;
use super::migrations::init_with_migrations;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use rusqlite::{Connection, OpenFlags, Transaction};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of database connections for one SQLite file.
///
/// Holds only the location: every operation opens its own connection and
/// closes it when done, so no connection outlives a single call.
#[derive(Debug, Clone)]
pub struct DbConnection {
    path: PathBuf,
}

impl DbConnection {
    /// Prepares the database file and brings its schema up to date.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let db = Self { path };
        let mut conn = db.connect()?;
        init_with_migrations(&mut conn)?;
        msg_debug!(Message::DbOpened(db.path.display().to_string()));

        Ok(db)
    }

    /// Points at `path` without touching its schema, for inspecting the
    /// migration state as it is.
    pub fn unmigrated(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Opens the existing file read-only. Fails instead of creating it.
    pub fn connect_read_only(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Runs `op` on a fresh connection inside one transaction.
    ///
    /// Commits when `op` returns `Ok`; rolls back and returns the original
    /// error otherwise. A failed rollback is logged and never replaces that
    /// error.
    pub fn in_transaction<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        match op(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback() {
                    msg_warning!(Message::RollbackFailed(rollback.to_string()));
                }
                Err(e)
            }
        }
    }
}
