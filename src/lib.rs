//! # tack - tasks anchored to folders
//!
//! A command-line tool to create and manage tasks and todo lists. Every task
//! carries an urgency and an importance level, a set of tags, an optional
//! description and, optionally, the folder it belongs to, so `tack show`
//! run from a project directory lists the work left there.
//!
//! ## Layout
//!
//! - [`db`]: SQLite storage engine, schema migrations and the task repository
//! - [`libs`]: task model, path normalization, errors, configuration,
//!   output rendering and user-facing messages
//! - [`commands`]: the clap command-line interface
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tack::db::{db::Db, tasks::Tasks};
//! use tack::libs::task::{Task, TaskFilter};
//!
//! let db = Db::new("/tmp/tack.db");
//! db.initialize()?;
//!
//! let tasks = Tasks::new(db);
//! let added = tasks.add(&Task::new("Write the changelog", 3, 2).with_tags(["release"]))?;
//! let found = tasks.search(&TaskFilter::by_id(added.id.clone().unwrap_or_default()))?;
//! assert_eq!(found, vec![added]);
//! # Ok::<(), tack::libs::error::TaskError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
