//! Enrollment API
//!
//! Tracks which users are enrolled in which courses. Users and courses are
//! owned by their own services and are only looked up, never stored here.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::enrollment::{EnrollmentRepositoryFactory, EnrollmentService};
use infrastructure::lookup::{HttpCourseClient, HttpUserClient};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.storage_config()?;
    info!("Storage backend: {:?}", storage_config.storage_type());

    let repository = EnrollmentRepositoryFactory::create(&storage_config).await?;

    let users = HttpUserClient::new(&config.services.users())?;
    let courses = HttpCourseClient::new(&config.services.courses())?;
    info!(
        users_url = %config.services.users_url,
        courses_url = %config.services.courses_url,
        "Lookup clients configured"
    );

    let enrollment_service = EnrollmentService::new(repository, Arc::new(users), Arc::new(courses));

    Ok(AppState::new(
        Arc::new(enrollment_service),
        config.pagination.clone(),
    ))
}
