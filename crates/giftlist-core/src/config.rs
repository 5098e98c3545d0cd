//! Application configuration.
//!
//! Everything is read from environment variables with fallback defaults.
//! Binaries load a `.env` file first; tests go through
//! [`AppConfig::from_lookup`] so they never touch the process environment.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Selects the storage backend.
pub const ENV_BACKEND: &str = "GIFTLIST_BACKEND";
/// Full SQLite connection URL. Overrides `DB_DIR` and `DB_NAME`.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Directory holding the SQLite file.
pub const ENV_DB_DIR: &str = "DB_DIR";
/// File stem of the SQLite database.
pub const ENV_DB_NAME: &str = "DB_NAME";
/// Path of the JSON gift file.
pub const ENV_GIFTS_FILE: &str = "GIFTS_FILE";
/// HTTP listen address.
pub const ENV_HOST: &str = "HOST";
/// HTTP listen port.
pub const ENV_PORT: &str = "PORT";

pub const DEFAULT_DB_DIR: &str = "data";
pub const DEFAULT_DB_NAME: &str = "casamento_db";
pub const DEFAULT_GIFTS_FILE: &str = "data/gifts.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown storage backend {0:?} (expected \"sqlite\" or \"json\")")]
    UnknownBackend(String),

    #[error("Invalid port {0:?}")]
    InvalidPort(String),
}

/// Storage backend kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Sqlite,
    Json,
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Resolved storage location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Relational table in a SQLite database.
    Sqlite { url: String },
    /// Flat JSON file of gift records.
    Json { path: PathBuf },
}

impl StoreBackend {
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Sqlite { .. } => BackendKind::Sqlite,
            Self::Json { .. } => BackendKind::Json,
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: StoreBackend,
    pub http: HttpConfig,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let kind = match get(ENV_BACKEND) {
            Some(raw) => raw.parse()?,
            None => BackendKind::default(),
        };

        let backend = match kind {
            BackendKind::Sqlite => {
                let url = get(ENV_DATABASE_URL).unwrap_or_else(|| {
                    let dir = get(ENV_DB_DIR).unwrap_or_else(|| DEFAULT_DB_DIR.to_string());
                    let name = get(ENV_DB_NAME).unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
                    sqlite_url(&dir, &name)
                });
                StoreBackend::Sqlite { url }
            }
            BackendKind::Json => StoreBackend::Json {
                path: PathBuf::from(
                    get(ENV_GIFTS_FILE).unwrap_or_else(|| DEFAULT_GIFTS_FILE.to_string()),
                ),
            },
        };

        let host = get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get(ENV_PORT) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            backend,
            http: HttpConfig { host, port },
        })
    }
}

/// Build a SQLite URL for `<dir>/<name>.db`.
fn sqlite_url(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    format!("sqlite://{dir}/{name}.db")
}
