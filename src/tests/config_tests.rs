#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::{self, AppConfig, SecurityConfig, DEFAULT_SECRET_KEY};

    fn write_temp_config(content: &str) -> tempfile::NamedTempFile {
        let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.url, "sqlite://instance/clothing_store.db");
        assert_eq!(config.database.max_connections, 8);
        assert_eq!(config.app.secret_key, DEFAULT_SECRET_KEY);
        assert!(config.app.debug);
        assert!(config.app.seed_demo_data);
        assert_eq!(config.app.frontend_dir, "frontend");
        assert!(config.security.is_none());
        assert!(config::validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_server_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        let err = config::validate(&config).unwrap_err();
        assert!(err.to_string().contains("invalid server.port"));
    }

    #[test]
    fn test_invalid_pool_size() {
        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(config::validate(&config).is_err());
        config.database.max_connections = 65;
        assert!(config::validate(&config).is_err());
    }

    #[test]
    fn test_empty_secret_and_url_rejected() {
        let mut config = AppConfig::default();
        config.app.secret_key = "  ".to_string();
        assert!(config::validate(&config).is_err());

        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(config::validate(&config).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let temp_file = write_temp_config(
            r#"
[server]
host = "127.0.0.1"
port = 9000

[app]
seed_demo_data = false
frontend_dir = "public"

[security]
enable_hsts = true
csp = "default-src 'self'"
"#,
        );

        let config = config::load_with(Some(temp_file.path())).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert!(!config.app.seed_demo_data);
        assert_eq!(config.app.frontend_dir, "public");
        let security: SecurityConfig = config.security.unwrap();
        assert_eq!(security.enable_hsts, Some(true));
        assert_eq!(security.csp.as_deref(), Some("default-src 'self'"));
    }

    #[test]
    fn test_invalid_file_value_is_rejected() {
        let temp_file = write_temp_config("[database]\nmax_connections = 0\n");
        assert!(config::load_with(Some(temp_file.path())).is_err());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("instance/test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        assert!(!db_path.parent().unwrap().exists());
        config::ensure_sqlite_parent_dir(&db_url).unwrap();
        assert!(db_path.parent().unwrap().exists());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir_ignores_memory_and_other_schemes() {
        assert!(config::ensure_sqlite_parent_dir("sqlite::memory:").is_ok());
        assert!(config::ensure_sqlite_parent_dir("postgres://localhost/db").is_ok());
    }
}
