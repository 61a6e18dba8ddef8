use std::path::Path;

use serde::Deserialize;

/// Secret shipped in `config/default.toml`; fine for local development only.
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreAppConfig {
    pub secret_key: String,
    pub debug: bool,
    pub seed_demo_data: bool,
    pub frontend_dir: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SecurityConfig {
    pub enable_hsts: Option<bool>,
    pub hsts_max_age: Option<u64>,
    pub hsts_include_subdomains: Option<bool>,
    pub csp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub app: StoreAppConfig,
    pub security: Option<SecurityConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        let defaults: &str = include_str!("../config/default.toml");
        match ::config::Config::builder()
            .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
            .build()
        {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => panic!("Failed to deserialize default config: {}", e),
            },
            Err(e) => panic!("Failed to parse default config: {}", e),
        }
    }
}

/// Loads the configuration (embedded defaults -> clothing_store.toml ->
/// `CLOTHING_STORE_CONFIG` file -> env).
pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let custom_path = std::env::var("CLOTHING_STORE_CONFIG").ok();
    load_with(custom_path.as_deref().map(Path::new))
}

/// Same layering as [`load`], with an explicit extra config file instead of
/// the one named by `CLOTHING_STORE_CONFIG`.
pub fn load_with(extra_file: Option<&Path>) -> anyhow::Result<AppConfig> {
    let defaults: &str = include_str!("../config/default.toml");
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
        // Optional local file: clothing_store.toml (in CWD)
        .add_source(::config::File::with_name("clothing_store").required(false));

    if let Some(path) = extra_file {
        builder = builder.add_source(::config::File::from(path).required(false));
    }
    builder = builder.add_source(::config::Environment::with_prefix("CLOTHING_STORE").separator("__"));

    // Plain variables understood by the usual deployment scripts win over everything else
    builder = builder
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
        .set_override_option("app.secret_key", std::env::var("SECRET_KEY").ok())?
        .set_override_option("app.debug", std::env::var("DEBUG").ok())?;

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

pub fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    if cfg.database.url.trim().is_empty() {
        return Err(anyhow::anyhow!("database.url must not be empty"));
    }
    if cfg.database.max_connections == 0 || cfg.database.max_connections > 64 {
        return Err(anyhow::anyhow!("database.max_connections must be in 1..=64"));
    }
    if cfg.app.secret_key.trim().is_empty() {
        return Err(anyhow::anyhow!("app.secret_key must not be empty"));
    }
    Ok(())
}

/// Logs warnings for settings that are legal but risky. Called once the
/// subscriber is installed.
pub fn warn_insecure(cfg: &AppConfig) {
    if !cfg.app.debug && cfg.app.secret_key == DEFAULT_SECRET_KEY {
        tracing::warn!("app.secret_key still has the development default; set SECRET_KEY in production");
    }
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }
}

/// Creates the parent directory of a file-backed SQLite url
/// (`sqlite://instance/clothing_store.db` -> `instance/`).
pub fn ensure_sqlite_parent_dir(url: &str) -> anyhow::Result<()> {
    let path = match url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:")) {
        Some(p) => p,
        None => return Ok(()),
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
