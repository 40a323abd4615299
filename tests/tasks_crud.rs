#[cfg(test)]
mod tests {
    use tack::db::db::Db;
    use tack::db::tasks::Tasks;
    use tack::libs::error::TaskError;
    use tack::libs::task::{Task, TaskFilter, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::new(temp_dir.path().join("tack.db"));
            db.initialize().unwrap();
            TaskTestContext {
                _temp_dir: temp_dir,
                tasks: Tasks::new(db),
            }
        }
    }

    fn sample() -> Task {
        Task::new("Write report", 3, 1)
            .with_tags(["work", "writing"])
            .with_folder("/srv/reports")
            .with_description("First draft\nthen review")
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_assigns_id_and_round_trips(ctx: &mut TaskTestContext) {
        let added = ctx.tasks.add(&sample()).unwrap();

        let id = added.id.clone().unwrap();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

        let found = ctx.tasks.search(&TaskFilter::by_id(id)).unwrap();
        assert_eq!(found, vec![added.clone()]);

        let mut expected = sample();
        expected.id = added.id.clone();
        assert_eq!(added, expected);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_gives_unique_ids(ctx: &mut TaskTestContext) {
        let first = ctx.tasks.add(&Task::new("Same", 2, 2)).unwrap();
        let second = ctx.tasks.add(&Task::new("Same", 2, 2)).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(ctx.tasks.search(&TaskFilter::all()).unwrap().len(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_normalizes_tags(ctx: &mut TaskTestContext) {
        let mut task = Task::new("Tagged", 2, 2);
        task.tags = [" b ", "a", "b", ""].iter().map(|t| t.to_string()).collect();

        let added = ctx.tasks.add(&task).unwrap();
        let tags: Vec<&str> = added.tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_rejects_supplied_id(ctx: &mut TaskTestContext) {
        let mut task = sample();
        task.id = Some("0123456789abcdef0123456789abcdef".to_string());

        assert!(matches!(ctx.tasks.add(&task), Err(TaskError::Validation(_))));
        assert!(ctx.tasks.search(&TaskFilter::all()).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_rejects_invalid_fields(ctx: &mut TaskTestContext) {
        let invalid = [
            Task::new("", 2, 2),
            Task::new(" \t", 2, 2),
            Task::new("Too urgent", 5, 2),
            Task::new("Too important", 2, 200),
            Task::new("Relative folder", 2, 2).with_folder("projects/tack"),
        ];

        for task in &invalid {
            assert!(matches!(ctx.tasks.add(task), Err(TaskError::Validation(_))), "accepted: {:?}", task);
        }
        assert!(ctx.tasks.search(&TaskFilter::all()).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_accepts_level_bounds(ctx: &mut TaskTestContext) {
        ctx.tasks.add(&Task::new("Lowest", 0, 0)).unwrap();
        ctx.tasks.add(&Task::new("Highest", 4, 4)).unwrap();

        assert_eq!(ctx.tasks.search(&TaskFilter::all()).unwrap().len(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_changes_only_supplied_fields(ctx: &mut TaskTestContext) {
        let added = ctx.tasks.add(&sample()).unwrap();
        let id = added.id.clone().unwrap();

        let patch = TaskPatch {
            urgency: Some(0),
            title: Some(String::new()),
            ..TaskPatch::default()
        };
        let edited = ctx.tasks.edit(&id, &patch).unwrap();

        let mut expected = added.clone();
        expected.urgency = 0;
        assert_eq!(edited, expected);
        assert_eq!(ctx.tasks.search(&TaskFilter::by_id(id)).unwrap(), vec![expected]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_replaces_tags_and_text(ctx: &mut TaskTestContext) {
        let added = ctx.tasks.add(&sample()).unwrap();
        let id = added.id.clone().unwrap();

        let patch = TaskPatch {
            title: Some("Publish report".to_string()),
            tags: vec!["done".to_string()],
            description: Some("Sent".to_string()),
            ..TaskPatch::default()
        };
        let edited = ctx.tasks.edit(&id, &patch).unwrap();

        assert_eq!(edited.title, "Publish report");
        assert_eq!(edited.tags.iter().collect::<Vec<_>>(), vec!["done"]);
        assert_eq!(edited.description.as_deref(), Some("Sent"));
        assert_eq!(edited.folder, added.folder);
        assert_eq!(edited.importance, added.importance);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_rejects_invalid_result(ctx: &mut TaskTestContext) {
        let added = ctx.tasks.add(&sample()).unwrap();
        let id = added.id.clone().unwrap();

        let patch = TaskPatch {
            importance: Some(7),
            ..TaskPatch::default()
        };
        assert!(matches!(ctx.tasks.edit(&id, &patch), Err(TaskError::Validation(_))));
        assert_eq!(ctx.tasks.search(&TaskFilter::by_id(id)).unwrap(), vec![added]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_unknown_id(ctx: &mut TaskTestContext) {
        let patch = TaskPatch {
            urgency: Some(1),
            ..TaskPatch::default()
        };
        let result = ctx.tasks.edit("missing", &patch);
        assert!(matches!(result, Err(TaskError::NotFound(id)) if id == "missing"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_needs_the_full_id(ctx: &mut TaskTestContext) {
        let added = ctx.tasks.add(&sample()).unwrap();
        let prefix = added.id.clone().unwrap()[..8].to_string();

        let patch = TaskPatch {
            urgency: Some(1),
            ..TaskPatch::default()
        };
        assert!(matches!(ctx.tasks.edit(&prefix, &patch), Err(TaskError::NotFound(_))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_remove_returns_deleted_task(ctx: &mut TaskTestContext) {
        let keep = ctx.tasks.add(&Task::new("Keep", 2, 2)).unwrap();
        let added = ctx.tasks.add(&sample()).unwrap();
        let id = added.id.clone().unwrap();

        let removed = ctx.tasks.remove(&id).unwrap();
        assert_eq!(removed, added);

        assert!(ctx.tasks.search(&TaskFilter::by_id(id.clone())).unwrap().is_empty());
        assert_eq!(ctx.tasks.search(&TaskFilter::all()).unwrap(), vec![keep]);
        assert!(matches!(ctx.tasks.remove(&id), Err(TaskError::NotFound(_))));
    }
}
