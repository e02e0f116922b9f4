//! Application state for shared services

use std::sync::Arc;

use crate::config::PaginationConfig;
use crate::domain::{DomainError, Enrollment, EnrollmentFilters, EnrollmentRepository};
use crate::infrastructure::enrollment::EnrollmentService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub enrollment_service: Arc<dyn EnrollmentServiceTrait>,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new(
        enrollment_service: Arc<dyn EnrollmentServiceTrait>,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            enrollment_service,
            pagination,
        }
    }
}

/// Trait for enrollment service operations
#[async_trait::async_trait]
pub trait EnrollmentServiceTrait: Send + Sync {
    async fn create(&self, user_id: &str, course_id: &str) -> Result<Enrollment, DomainError>;
    async fn get(&self, id: &str) -> Result<Enrollment, DomainError>;
    async fn get_all(
        &self,
        filters: &EnrollmentFilters,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Enrollment>, DomainError>;
    async fn update(&self, id: &str, status: Option<&str>) -> Result<(), DomainError>;
    async fn count(&self, filters: &EnrollmentFilters) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: EnrollmentRepository + ?Sized + 'static> EnrollmentServiceTrait for EnrollmentService<R> {
    async fn create(&self, user_id: &str, course_id: &str) -> Result<Enrollment, DomainError> {
        EnrollmentService::create(self, user_id, course_id).await
    }

    async fn get(&self, id: &str) -> Result<Enrollment, DomainError> {
        EnrollmentService::get(self, id).await
    }

    async fn get_all(
        &self,
        filters: &EnrollmentFilters,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Enrollment>, DomainError> {
        EnrollmentService::get_all(self, filters, offset, limit).await
    }

    async fn update(&self, id: &str, status: Option<&str>) -> Result<(), DomainError> {
        EnrollmentService::update(self, id, status).await
    }

    async fn count(&self, filters: &EnrollmentFilters) -> Result<usize, DomainError> {
        EnrollmentService::count(self, filters).await
    }
}
