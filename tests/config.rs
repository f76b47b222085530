#[cfg(test)]
mod tests {
    use folder_sync::libs::config::{Config, RcloneConfig};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the per-user data directory at a temporary home.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rclone.binary, "rclone");
        assert!(config.rclone.progress);
        assert_eq!(config.rclone.timeout_secs, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_and_delete(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());

        let config = Config {
            rclone: RcloneConfig {
                binary: "/opt/rclone/bin/rclone".to_string(),
                progress: false,
                timeout_secs: Some(3600),
            },
        };
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);

        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"rclone": {"timeout_secs": 60}}"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.rclone.binary, "rclone");
        assert!(config.rclone.progress);
        assert_eq!(config.rclone.timeout_secs, Some(60));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(Config::read_from(&path).is_err());
    }
}
