//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Artifact storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served as the static front end.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    65535
}

fn default_static_dir() -> String {
    "public".to_string()
}

/// Artifact storage settings.
///
/// `backend` selects the provider: `local` (default) writes reports under
/// `root`; `s3` targets any S3-compatible endpoint and requires the
/// `endpoint`, `bucket`, `access_key_id`, `secret_access_key`, and
/// `region` fields.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Storage backend: `local` or `s3`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Root directory for the local backend.
    #[serde(default = "default_storage_root")]
    pub root: String,
    /// S3 endpoint URL.
    pub endpoint: Option<String>,
    /// S3 bucket name.
    pub bucket: Option<String>,
    /// S3 access key ID.
    pub access_key_id: Option<String>,
    /// S3 secret access key.
    pub secret_access_key: Option<String>,
    /// S3 region.
    pub region: Option<String>,
    /// Storage key of the optional report logo.
    #[serde(default = "default_logo_key")]
    pub logo_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            root: default_storage_root(),
            endpoint: None,
            bucket: None,
            access_key_id: None,
            secret_access_key: None,
            region: None,
            logo_key: default_logo_key(),
        }
    }
}

fn default_backend() -> String {
    "local".to_string()
}

fn default_storage_root() -> String {
    "./reports".to_string()
}

fn default_logo_key() -> String {
    "img/dpa.png".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ABACO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
