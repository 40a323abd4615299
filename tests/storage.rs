#[cfg(test)]
mod tests {
    use tack::db::db::Db;
    use tack::db::tasks::Tasks;
    use tack::libs::error::{TaskError, TaskResult};
    use tack::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::new(temp_dir.path().join("tack.db"));
            db.initialize().unwrap();
            StorageTestContext { temp_dir, db }
        }
    }

    fn count(db: &Db) -> usize {
        Tasks::new(db.clone()).search(&TaskFilter::all()).unwrap().len()
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_initialize_is_idempotent(ctx: &mut StorageTestContext) {
        let tasks = Tasks::new(ctx.db.clone());
        let added = tasks.add(&Task::new("Keep me", 1, 1)).unwrap();

        ctx.db.initialize().unwrap();
        ctx.db.initialize().unwrap();

        let found = tasks.search(&TaskFilter::all()).unwrap();
        assert_eq!(found, vec![added]);
        assert_eq!(ctx.db.schema_version().unwrap(), 2);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_initialize_creates_missing_directories(ctx: &mut StorageTestContext) {
        let nested = Db::new(ctx.temp_dir.path().join("a").join("b").join("tasks.db"));
        nested.initialize().unwrap();

        assert!(nested.location().exists());
        assert_eq!(count(&nested), 0);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_missing_database_is_not_created(ctx: &mut StorageTestContext) {
        let location = ctx.temp_dir.path().join("never-initialized.db");
        let tasks = Tasks::new(Db::new(&location));

        let result = tasks.search(&TaskFilter::all());
        assert!(matches!(result, Err(TaskError::StorageUnavailable(_))));
        assert!(!location.exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_failing_closure_rolls_back(ctx: &mut StorageTestContext) {
        let result: TaskResult<()> = ctx.db.with_transaction(|tx| {
            tx.execute(
                "INSERT INTO tasks (id, title, urgency, importance) VALUES ('abc', 'half done', 1, 1)",
                [],
            )?;
            Err(TaskError::validation("abort"))
        });

        assert!(matches!(result, Err(TaskError::Validation(_))));
        assert_eq!(count(&ctx.db), 0);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_successful_closure_commits(ctx: &mut StorageTestContext) {
        let inserted = ctx
            .db
            .with_transaction(|tx| {
                Ok(tx.execute(
                    "INSERT INTO tasks (id, title, urgency, importance) VALUES ('abc', 'done', 1, 1)",
                    [],
                )?)
            })
            .unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(count(&ctx.db), 1);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_search_runs_beside_pending_writer(ctx: &mut StorageTestContext) {
        let tasks = Tasks::new(ctx.db.clone());
        let committed = tasks.add(&Task::new("committed", 2, 2)).unwrap();

        let writer = rusqlite::Connection::open(ctx.db.location()).unwrap();
        writer
            .execute_batch(
                "BEGIN IMMEDIATE;
                 INSERT INTO tasks (id, title, urgency, importance) VALUES ('pending', 'uncommitted', 1, 1);",
            )
            .unwrap();

        let started = std::time::Instant::now();
        let found = tasks.search(&TaskFilter::all()).unwrap();
        assert_eq!(found, vec![committed]);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));

        writer.execute_batch("ROLLBACK;").unwrap();
        assert_eq!(count(&ctx.db), 1);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_purge_all_keeps_schema(ctx: &mut StorageTestContext) {
        let tasks = Tasks::new(ctx.db.clone());
        for title in ["one", "two", "three"] {
            tasks.add(&Task::new(title, 2, 2)).unwrap();
        }

        assert_eq!(tasks.purge_all().unwrap(), 3);
        assert!(tasks.search(&TaskFilter::all()).unwrap().is_empty());

        tasks.add(&Task::new("after purge", 2, 2)).unwrap();
        assert_eq!(count(&ctx.db), 1);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_drop_schema_until_reinitialized(ctx: &mut StorageTestContext) {
        let tasks = Tasks::new(ctx.db.clone());
        tasks.add(&Task::new("gone", 2, 2)).unwrap();

        tasks.drop_schema().unwrap();
        assert!(matches!(tasks.search(&TaskFilter::all()), Err(TaskError::StorageUnavailable(_))));
        assert_eq!(ctx.db.schema_version().unwrap(), 0);

        ctx.db.initialize().unwrap();
        assert!(tasks.search(&TaskFilter::all()).unwrap().is_empty());
        assert_eq!(ctx.db.schema_version().unwrap(), 2);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_check_constraints_reject_raw_writes(ctx: &mut StorageTestContext) {
        let bad_rows = [
            "INSERT INTO tasks (id, title, urgency, importance) VALUES ('a', 'x', 9, 1)",
            "INSERT INTO tasks (id, title, urgency, importance) VALUES ('b', 'x', 1, -1)",
            "INSERT INTO tasks (id, title, urgency, importance) VALUES ('c', '   ', 1, 1)",
            "INSERT INTO tasks (id, title, urgency, importance, tags) VALUES ('d', 'x', 1, 1, 'not json')",
            "INSERT INTO tasks (id, title, urgency, importance, tags) VALUES ('e', 'x', 1, 1, '{}')",
        ];

        for sql in bad_rows {
            let result = ctx.db.with_transaction(|tx| Ok(tx.execute(sql, [])?));
            assert!(matches!(result, Err(TaskError::StorageUnavailable(_))), "accepted: {}", sql);
        }
        assert_eq!(count(&ctx.db), 0);
    }
}
