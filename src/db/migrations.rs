//! Versioned schema bootstrap.
//!
//! Each migration is applied at most once per database; the `migrations`
//! ledger records which versions ran. This is what makes
//! [`Db::initialize`](super::db::Db::initialize) idempotent.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rusqlite::Connection;
//! use tack::db::migrations::{get_db_version, MigrationManager};
//!
//! let mut conn = Connection::open("tack.db")?;
//! MigrationManager::new().run_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), rusqlite::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::{params, Connection, Result, Transaction};

/// Ledger of applied migrations.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// One schema change.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of every migration, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the task table. Levels, title and tag JSON carry their
        // own CHECK constraints.
        self.add_migration(1, "create_tasks_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id TEXT NOT NULL PRIMARY KEY,
        title TEXT NOT NULL CHECK (length(trim(title)) > 0),
        urgency INTEGER NOT NULL CHECK (urgency BETWEEN 0 AND 4),
        importance INTEGER NOT NULL CHECK (importance BETWEEN 0 AND 4),
        tags TEXT NOT NULL DEFAULT '[]' CHECK (json_valid(tags) AND json_type(tags) = 'array'),
        folder TEXT,
        description TEXT
    )",
                [],
            )?;
            Ok(())
        });

        // Version 2: `show` with no id looks tasks up by folder on every cd.
        self.add_migration(2, "index_tasks_folder", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_folder ON tasks(folder)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the ledger's highest version.
    ///
    /// All pending migrations share one transaction: either the database ends
    /// up at the latest version or it stays where it was.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    /// Highest recorded version; 0 when the ledger is empty or missing.
    ///
    /// Any other failure (locked or corrupt file) is returned as an error.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let has_ledger: bool = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')",
            [],
            |row| row.get(0),
        )?;
        if !has_ledger {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    /// `(version, name, applied_at)` for every applied migration, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
