//! Display implementation for tack messages.
//!
//! Every piece of user-facing text lives in this one `match`, so wording
//! stays consistent across commands and a message can be found by its
//! variant name.
//!
//! ```rust
//! use tack::libs::messages::Message;
//!
//! assert_eq!(Message::TasksPurged(3).to_string(), "Purged 3 task(s).");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Inserted task {}", id),
            Message::TaskEdited(id) => format!("Updated task {}", id),
            Message::TaskRemoved(id) => format!("Deleted task {}", id),
            Message::TaskNotFound(id) => format!("No task with id '{}'.", id),
            Message::TaskAddedHeader => "Added Task:".to_string(),
            Message::TaskUpdatedHeader => "Updated Task:".to_string(),
            Message::TaskRemovedHeader => "Removed Task:".to_string(),
            Message::TaskEditPreview => "Task after changes:".to_string(),
            Message::ConfirmAddTask => "Are you sure you want to add this task?".to_string(),
            Message::ConfirmEditTask => "Are you sure you want to save these changes?".to_string(),
            Message::ConfirmRemoveTask => "Are you sure you want to remove this task?".to_string(),
            Message::NoChangesDetected => "Nothing to change.".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbInitialized(location) => format!("Task database ready at {}", location),
            Message::DbDropped(location) => format!("Dropped the task database at {}.", location),
            Message::DbMoved(from, to) => format!("Moved the task database from {} to {}.", from, to),
            Message::DbLocation(location) => format!("Database: {}", location),
            Message::DbMoveTargetIsSource(location) => format!("The database is already at {}.", location),
            Message::DbMoveOverwrites(location) => format!("{} already exists and will be replaced.", location),
            Message::TasksPurged(count) => format!("Purged {} task(s).", count),
            Message::ConfirmPurge => "Are you sure you want to purge all tasks?".to_string(),
            Message::ConfirmDrop => "Are you sure you want to drop the database?".to_string(),
            Message::ConfirmMove(destination) => format!("Are you sure you want to move the database to {}?", destination),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::DatabaseVersion(version) => format!("Schema version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::CommandFailed(error) => error.clone(),
        };
        write!(f, "{}", text)
    }
}
