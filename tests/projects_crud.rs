#[cfg(test)]
mod tests {
    use projects::db::db::DbConnection;
    use projects::db::error::DbError;
    use projects::db::projects::ProjectDao;
    use projects::libs::project::Project;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ProjectTestContext {
        _temp_dir: TempDir,
        db: DbConnection,
        dao: ProjectDao,
    }

    impl TestContext for ProjectTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = DbConnection::open(temp_dir.path().join("projects.db")).unwrap();
            ProjectTestContext {
                _temp_dir: temp_dir,
                dao: ProjectDao::new(db.clone()),
                db,
            }
        }
    }

    fn hours(text: &str) -> Option<Decimal> {
        Some(Decimal::from_str(text).unwrap())
    }

    fn named(name: &str) -> Project {
        Project::new(name, None, None, Some(1), None)
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_insert_and_fetch_round_trip(ctx: &mut ProjectTestContext) {
        let project = Project::new("Demo", hours("12.50"), hours("10.00"), Some(4), Some("n"));
        let saved = ctx.dao.insert_project(project).unwrap();
        let id = saved.project_id.unwrap();
        assert!(id > 0);

        let fetched = ctx.dao.fetch_project_by_id(id).unwrap().unwrap();
        assert_eq!(fetched, saved);
        assert_eq!(fetched.name(), "Demo");
        assert_eq!(fetched.estimated_hours.unwrap().to_string(), "12.50");
        assert_eq!(fetched.actual_hours.unwrap().to_string(), "10.00");
        assert_eq!(fetched.difficulty, Some(4));
        assert_eq!(fetched.notes.as_deref(), Some("n"));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_unset_fields_come_back_unset(ctx: &mut ProjectTestContext) {
        let saved = ctx.dao.insert_project(Project::new("Bare", None, None, None, None)).unwrap();

        let fetched = ctx.dao.fetch_project_by_id(saved.project_id.unwrap()).unwrap().unwrap();
        assert_eq!(fetched.estimated_hours, None);
        assert_eq!(fetched.actual_hours, None);
        assert_eq!(fetched.difficulty, None);
        assert_eq!(fetched.notes, None);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_fetch_all_is_ordered_by_name(ctx: &mut ProjectTestContext) {
        for name in ["Zeta", "alpha", "Mid"] {
            ctx.dao.insert_project(named(name)).unwrap();
        }

        let names: Vec<String> = ctx
            .dao
            .fetch_all_projects()
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["alpha", "Mid", "Zeta"]);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_fetch_all_on_empty_table(ctx: &mut ProjectTestContext) {
        assert!(ctx.dao.fetch_all_projects().unwrap().is_empty());
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_fetch_missing_id(ctx: &mut ProjectTestContext) {
        assert_eq!(ctx.dao.fetch_project_by_id(99).unwrap(), None);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_update_project(ctx: &mut ProjectTestContext) {
        let mut project = ctx
            .dao
            .insert_project(Project::new("Original", hours("2.00"), None, Some(2), None))
            .unwrap();

        project.project_name = Some("Renamed".to_string());
        project.actual_hours = hours("3.75");
        project.notes = Some("stained".to_string());
        assert!(ctx.dao.update_project(&project).unwrap());

        let updated = ctx.dao.fetch_project_by_id(project.project_id.unwrap()).unwrap().unwrap();
        assert_eq!(updated, project);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_update_missing_row_returns_false(ctx: &mut ProjectTestContext) {
        let mut ghost = named("Ghost");
        ghost.project_id = Some(42);

        assert!(!ctx.dao.update_project(&ghost).unwrap());
        assert!(ctx.dao.fetch_all_projects().unwrap().is_empty());
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_update_without_id_is_rejected(ctx: &mut ProjectTestContext) {
        let result = ctx.dao.update_project(&named("Unsaved"));
        assert!(matches!(result, Err(DbError::MissingId { .. })));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_delete_missing_row_returns_false(ctx: &mut ProjectTestContext) {
        ctx.dao.insert_project(named("Keep")).unwrap();

        assert!(!ctx.dao.delete_project(1000).unwrap());
        assert_eq!(ctx.dao.fetch_all_projects().unwrap().len(), 1);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_delete_last_row_resets_ids(ctx: &mut ProjectTestContext) {
        let first = ctx.dao.insert_project(named("First")).unwrap();
        let second = ctx.dao.insert_project(named("Second")).unwrap();
        assert_eq!(second.project_id, Some(2));

        assert!(ctx.dao.delete_project(first.project_id.unwrap()).unwrap());
        assert!(ctx.dao.delete_project(second.project_id.unwrap()).unwrap());

        let fresh = ctx.dao.insert_project(named("Fresh")).unwrap();
        assert_eq!(fresh.project_id, Some(1));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_ids_are_not_reused_while_rows_remain(ctx: &mut ProjectTestContext) {
        ctx.dao.insert_project(named("One")).unwrap();
        let two = ctx.dao.insert_project(named("Two")).unwrap();

        assert!(ctx.dao.delete_project(two.project_id.unwrap()).unwrap());

        let three = ctx.dao.insert_project(named("Three")).unwrap();
        assert_eq!(three.project_id, Some(3));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_failed_operation_rolls_back(ctx: &mut ProjectTestContext) {
        let result: Result<(), DbError> = ctx.db.in_transaction(|tx| {
            tx.execute("INSERT INTO project (project_name) VALUES ('Half done')", [])?;
            tx.execute("INSERT INTO no_such_table (x) VALUES (1)", [])?;
            Ok(())
        });

        assert!(matches!(result, Err(DbError::Sqlite(_))));
        assert!(ctx.dao.fetch_all_projects().unwrap().is_empty());

        // The rolled-back insert did not consume an id either.
        let saved = ctx.dao.insert_project(named("After")).unwrap();
        assert_eq!(saved.project_id, Some(1));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_successful_operation_commits(ctx: &mut ProjectTestContext) {
        let count: i64 = ctx
            .db
            .in_transaction(|tx| {
                tx.execute("INSERT INTO project (project_name) VALUES ('Direct')", [])?;
                Ok(tx.query_row("SELECT COUNT(*) FROM project", [], |row| row.get(0))?)
            })
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(ctx.dao.fetch_all_projects().unwrap()[0].name(), "Direct");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_id_beyond_i32_is_rejected_and_rolled_back(ctx: &mut ProjectTestContext) {
        ctx.db
            .in_transaction(|tx| {
                tx.execute("INSERT INTO project (project_id, project_name) VALUES (2147483647, 'Edge')", [])?;
                Ok(())
            })
            .unwrap();

        let result = ctx.dao.insert_project(named("Overflow"));
        assert!(matches!(result, Err(DbError::KeyOutOfRange(2147483648))));

        let names: Vec<String> = ctx
            .dao
            .fetch_all_projects()
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Edge"]);
    }
}
