//! Repository factory for runtime storage selection

use std::sync::Arc;

use crate::domain::enrollment::EnrollmentRepository;
use crate::domain::DomainError;

use super::in_memory_repository::InMemoryEnrollmentRepository;
use super::postgres_repository::{PostgresConfig, PostgresEnrollmentRepository};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    InMemory,
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Build from a storage type name and optional connection settings
    pub fn from_settings(
        storage_type: &str,
        url: Option<&str>,
        max_connections: u32,
    ) -> Result<Self, DomainError> {
        let parsed = StorageType::parse(storage_type).ok_or_else(|| {
            DomainError::configuration(format!("Unknown storage type '{}'", storage_type))
        })?;

        match parsed {
            StorageType::InMemory => Ok(Self::InMemory),
            StorageType::Postgres => {
                let url = url.filter(|u| !u.is_empty()).ok_or_else(|| {
                    DomainError::configuration("storage.url is required for postgres storage")
                })?;

                Ok(Self::Postgres(
                    PostgresConfig::new(url).with_max_connections(max_connections),
                ))
            }
        }
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Factory for creating enrollment repositories
#[derive(Debug)]
pub struct EnrollmentRepositoryFactory;

impl EnrollmentRepositoryFactory {
    /// Creates a repository based on the configuration
    pub async fn create(
        config: &StorageConfig,
    ) -> Result<Arc<dyn EnrollmentRepository>, DomainError> {
        match config {
            StorageConfig::InMemory => Ok(Arc::new(InMemoryEnrollmentRepository::new())),
            StorageConfig::Postgres(pg_config) => {
                let repository = PostgresEnrollmentRepository::connect(pg_config).await?;
                repository.ensure_table().await?;
                Ok(Arc::new(repository))
            }
        }
    }
}
