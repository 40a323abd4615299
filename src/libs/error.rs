//! Typed failures of the task storage and query layer.
//!
//! Every repository and storage operation returns [`TaskResult`]. The CLI
//! wraps these in `anyhow` for reporting; library callers can match on the
//! variant to decide how to react.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by the storage, repository and path layers.
pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A task's fields violate an invariant; nothing was written.
    #[error("invalid task: {0}")]
    Validation(String),

    /// A folder or file argument could not be canonicalized.
    #[error("cannot resolve path '{}': {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No task has the requested id.
    #[error("no task with id '{0}'")]
    NotFound(String),

    /// More than one stored task has the requested id.
    #[error("id '{id}' matches {count} tasks, the database is inconsistent")]
    AmbiguousId { id: String, count: usize },

    /// The database could not be opened, created, read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] Box<dyn StdError + Send + Sync>),
}

impl TaskError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn path(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::PathResolution { path: path.into(), source }
    }

    pub fn storage(source: impl StdError + Send + Sync + 'static) -> Self {
        Self::StorageUnavailable(Box::new(source))
    }
}

impl From<rusqlite::Error> for TaskError {
    fn from(err: rusqlite::Error) -> Self {
        Self::storage(err)
    }
}
