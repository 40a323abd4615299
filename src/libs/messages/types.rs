#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),   // id
    TaskEdited(String),  // id
    TaskRemoved(String), // id
    TaskNotFound(String),
    TaskAddedHeader,
    TaskUpdatedHeader,
    TaskRemovedHeader,
    TaskEditPreview,
    ConfirmAddTask,
    ConfirmEditTask,
    ConfirmRemoveTask,
    NoChangesDetected,

    // === DATABASE MESSAGES ===
    DbInitialized(String), // location
    DbDropped(String),     // location
    DbMoved(String, String), // from, to
    DbLocation(String),
    DbMoveTargetIsSource(String),
    DbMoveOverwrites(String),
    TasksPurged(usize),
    ConfirmPurge,
    ConfirmDrop,
    ConfirmMove(String), // destination

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    DatabaseVersion(u32),
    DatabaseUpToDate,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigParseError(String),

    // === GENERAL MESSAGES ===
    OperationCancelled,
    CommandFailed(String),
}
