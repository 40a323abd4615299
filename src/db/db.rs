use super::migrations::{get_db_version, MigrationManager};
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DB_FILE_NAME: &str = "tack.db";

/// How long a connection waits on another process's lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const DROP_SCHEMA: &str = "DROP TABLE IF EXISTS tasks; DROP TABLE IF EXISTS migrations;";
const DELETE_ALL_TASKS: &str = "DELETE FROM tasks";

/// Handle on one database file.
///
/// `Db` holds only the location. Connections are opened per operation and
/// closed when it returns, so no lock outlives the call that took it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Db {
    location: PathBuf,
}

impl Db {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Db { location: location.into() }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Creates the database file and schema if they are missing.
    ///
    /// Safe to call on every start: migrations already recorded in the
    /// ledger are skipped.
    pub fn initialize(&self) -> TaskResult<()> {
        if let Some(parent) = self.location.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(TaskError::storage)?;
        }

        let mut conn = self.connect(OpenFlags::SQLITE_OPEN_CREATE)?;
        MigrationManager::new().run_migrations(&mut conn)?;
        msg_debug!(Message::DbInitialized(self.location.display().to_string()));
        Ok(())
    }

    /// Removes every table, including the migration ledger.
    pub fn drop_schema(&self) -> TaskResult<()> {
        self.with_transaction(|tx| {
            tx.execute_batch(DROP_SCHEMA)?;
            Ok(())
        })?;
        msg_debug!(Message::DbDropped(self.location.display().to_string()));
        Ok(())
    }

    /// Deletes all task rows and keeps the schema. Returns the number removed.
    pub fn purge_all(&self) -> TaskResult<usize> {
        let removed = self.with_transaction(|tx| Ok(tx.execute(DELETE_ALL_TASKS, [])?))?;
        msg_debug!(Message::TasksPurged(removed));
        Ok(removed)
    }

    /// Runs `f` inside one immediate transaction.
    ///
    /// Commits when `f` returns `Ok`; any `Err` drops the transaction, which
    /// rolls it back. The connection is closed on every path out, unwinding
    /// included.
    pub fn with_transaction<T, F>(&self, f: F) -> TaskResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> TaskResult<T>,
    {
        self.transaction(TransactionBehavior::Immediate, f)
    }

    /// Like [`with_transaction`](Self::with_transaction) but deferred: no
    /// write lock is taken up front, so reads proceed while another process
    /// holds a pending write.
    pub fn with_read_transaction<T, F>(&self, f: F) -> TaskResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> TaskResult<T>,
    {
        self.transaction(TransactionBehavior::Deferred, f)
    }

    /// Highest applied schema version, 0 for an empty or dropped database.
    pub fn schema_version(&self) -> TaskResult<u32> {
        let conn = self.connect(OpenFlags::empty())?;
        Ok(get_db_version(&conn)?)
    }

    fn transaction<T, F>(&self, behavior: TransactionBehavior, f: F) -> TaskResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> TaskResult<T>,
    {
        let mut conn = self.connect(OpenFlags::empty())?;
        let tx = conn.transaction_with_behavior(behavior)?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    // Without SQLITE_OPEN_CREATE a wrong location is an error instead of a
    // fresh empty file.
    fn connect(&self, extra: OpenFlags) -> TaskResult<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX | OpenFlags::SQLITE_OPEN_URI | extra;
        let conn = Connection::open_with_flags(&self.location, flags)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}
