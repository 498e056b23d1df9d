#[cfg(test)]
mod tests {
    use projects::libs::config::{Config, DatabaseConfig, DB_PATH_ENV};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Each test gets its own directory for the config file.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join("config.json")
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.database.path, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: DatabaseConfig {
                path: Some(ctx.temp_dir.path().join("work.db")),
            },
        };
        config.save_to(&ctx.config_path()).unwrap();

        let loaded = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_json_is_reported(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "{ not json").unwrap();

        let err = Config::read_from(&ctx.config_path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse configuration"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_path_resolution(ctx: &mut ConfigTestContext) {
        let configured = ctx.temp_dir.path().join("configured.db");
        let config = Config {
            database: DatabaseConfig {
                path: Some(configured.clone()),
            },
        };

        // The only test touching this variable, so it cannot race with another.
        std::env::remove_var(DB_PATH_ENV);
        assert_eq!(config.database_path().unwrap(), configured);

        let overridden = ctx.temp_dir.path().join("override.db");
        std::env::set_var(DB_PATH_ENV, &overridden);
        assert_eq!(config.database_path().unwrap(), overridden);

        std::env::set_var(DB_PATH_ENV, "   ");
        assert_eq!(config.database_path().unwrap(), configured);

        std::env::remove_var(DB_PATH_ENV);
    }
}
