//! Database layer for tack.
//!
//! Built on SQLite through `rusqlite`:
//!
//! - [`db`]: the storage engine. Knows the file location, creates the schema
//!   and runs closures inside transactions.
//! - [`migrations`]: versioned schema changes recorded in a ledger table.
//! - [`tasks`]: the task repository (add, search, edit, remove).
//!
//! ```rust,no_run
//! use tack::db::{db::Db, tasks::Tasks};
//! use tack::libs::task::TaskFilter;
//!
//! let db = Db::new("/tmp/tack.db");
//! db.initialize()?;
//! let urgent = Tasks::new(db).search(&TaskFilter { urgency: Some(4), ..TaskFilter::all() })?;
//! # Ok::<(), tack::libs::error::TaskError>(())
//! ```

pub mod db;
pub mod migrations;
pub mod tasks;
