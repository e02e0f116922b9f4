//! Enrollment infrastructure implementations

mod factory;
mod in_memory_repository;
mod postgres_repository;
mod service;

pub use factory::{EnrollmentRepositoryFactory, StorageConfig, StorageType};
pub use in_memory_repository::InMemoryEnrollmentRepository;
pub use postgres_repository::{PostgresConfig, PostgresEnrollmentRepository};
pub use service::EnrollmentService;
