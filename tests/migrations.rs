#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tack::db::db::Db;
    use tack::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tack::libs::error::TaskError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        location: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let location = temp_dir.path().join("tack.db");
            MigrationTestContext {
                _temp_dir: temp_dir,
                location,
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Connection::open(&ctx.location).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_corrupt_file_is_an_error_not_version_zero(ctx: &mut MigrationTestContext) {
        std::fs::write(&ctx.location, vec![0x5a_u8; 4096]).unwrap();
        let conn = Connection::open(&ctx.location).unwrap();

        assert!(get_db_version(&conn).is_err());
        assert!(needs_migration(&conn).is_err());

        let db = Db::new(&ctx.location);
        assert!(matches!(db.schema_version(), Err(TaskError::StorageUnavailable(_))));
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.location).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let applied: Vec<(u32, &str)> = history.iter().map(|(v, name, _)| (*v, name.as_str())).collect();
        assert_eq!(applied, vec![(1, "create_tasks_table"), (2, "index_tasks_folder")]);

        assert_eq!(get_db_version(&conn).unwrap(), 2);
        assert!(!needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.location).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        manager.run_migrations(&mut conn).unwrap();

        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_objects_exist(ctx: &mut MigrationTestContext) {
        Db::new(&ctx.location).initialize().unwrap();

        let conn = Connection::open(&ctx.location).unwrap();
        let names: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type IN ('table', 'index') AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(names, vec!["idx_tasks_folder", "migrations", "tasks"]);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_partially_migrated_database_catches_up(ctx: &mut MigrationTestContext) {
        let conn = Connection::open(&ctx.location).unwrap();
        conn.execute_batch(
            "CREATE TABLE migrations (id INTEGER PRIMARY KEY, version INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP);
             CREATE TABLE tasks (id TEXT NOT NULL PRIMARY KEY, title TEXT NOT NULL, urgency INTEGER NOT NULL, importance INTEGER NOT NULL, tags TEXT NOT NULL DEFAULT '[]', folder TEXT, description TEXT);
             INSERT INTO migrations (version, name) VALUES (1, 'create_tasks_table');
             INSERT INTO tasks (id, title, urgency, importance) VALUES ('kept', 'old row', 1, 1);",
        )
        .unwrap();
        drop(conn);

        let db = Db::new(&ctx.location);
        db.initialize().unwrap();
        assert_eq!(db.schema_version().unwrap(), 2);

        let conn = Connection::open(&ctx.location).unwrap();
        let title: String = conn.query_row("SELECT title FROM tasks WHERE id = 'kept'", [], |row| row.get(0)).unwrap();
        assert_eq!(title, "old row");
    }
}
