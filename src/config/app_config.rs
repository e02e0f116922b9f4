use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::enrollment::StorageConfig;
use crate::infrastructure::lookup::LookupConfig;
use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageSettings,
    pub services: ServicesConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where enrollments are persisted
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `memory` or `postgres`
    #[serde(rename = "type")]
    pub storage_type: String,
    pub url: Option<String>,
    pub max_connections: u32,
}

/// Locations of the user and course services
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub users_url: String,
    pub courses_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            storage_type: "memory".to_string(),
            url: None,
            max_connections: 10,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            users_url: "http://localhost:8081".to_string(),
            courses_url: "http://localhost:8082".to_string(),
            token: None,
            timeout_secs: 5,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` variables.
    ///
    /// A value that fails to parse is an error, never a silent default.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }

    pub fn storage_config(&self) -> Result<StorageConfig, DomainError> {
        StorageConfig::from_settings(
            &self.storage.storage_type,
            self.storage.url.as_deref(),
            self.storage.max_connections,
        )
    }
}

impl ServicesConfig {
    fn lookup(&self, base_url: &str) -> LookupConfig {
        let config =
            LookupConfig::new(base_url).with_timeout(Duration::from_secs(self.timeout_secs));

        match self.token {
            Some(ref token) => config.with_token(token.clone()),
            None => config,
        }
    }

    pub fn users(&self) -> LookupConfig {
        self.lookup(&self.users_url)
    }

    pub fn courses(&self) -> LookupConfig {
        self.lookup(&self.courses_url)
    }
}
