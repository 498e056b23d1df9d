#[cfg(test)]
mod tests {
    use projects::db::db::DbConnection;
    use projects::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("data").join("projects.db");
            MigrationTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        // Opening also creates the missing parent directory.
        let db = DbConnection::open(&ctx.db_path).unwrap();
        assert!(ctx.db_path.exists());

        let conn = db.connect().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&conn).unwrap());

        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('project') ORDER BY cid")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(
            columns,
            vec!["project_id", "project_name", "estimated_hours", "actual_hours", "difficulty", "notes"]
        );
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        std::fs::create_dir_all(ctx.db_path.parent().unwrap()).unwrap();
        let conn = DbConnection::unmigrated(&ctx.db_path).connect().unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
        assert!(MigrationManager::new().get_migration_history(&conn).unwrap().is_empty());

        // Reading the version leaves the schema alone.
        let tables: i64 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(tables, 0);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_read_only_inspection(ctx: &mut MigrationTestContext) {
        let missing = DbConnection::unmigrated(&ctx.db_path);
        assert!(missing.connect_read_only().is_err());
        assert!(!ctx.db_path.exists());

        DbConnection::open(&ctx.db_path).unwrap();
        let conn = DbConnection::unmigrated(&ctx.db_path).connect_read_only().unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&conn).unwrap());
        assert_eq!(MigrationManager::new().get_migration_history(&conn).unwrap().len(), 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let conn = DbConnection::open(&ctx.db_path).unwrap().connect().unwrap();
        let history = MigrationManager::new().get_migration_history(&conn).unwrap();

        assert!(!history.is_empty());
        for (i, (version, name, _applied_at)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
            assert!(!name.is_empty());
        }
        assert_eq!(history[0].1, "create_project_table");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        std::fs::create_dir_all(ctx.db_path.parent().unwrap()).unwrap();
        let mut conn = DbConnection::unmigrated(&ctx.db_path).connect().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 1);

        // Reopening an up-to-date file is a no-op as well.
        DbConnection::open(&ctx.db_path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), version1);
    }
}
