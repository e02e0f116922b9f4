//! In-memory enrollment repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::enrollment::{
    Enrollment, EnrollmentFilters, EnrollmentId, EnrollmentRepository, EnrollmentStatus,
    NewEnrollment,
};
use crate::domain::DomainError;

/// In-memory implementation of EnrollmentRepository
///
/// Records are kept in insertion order, which is also creation order.
/// Data is lost when the process terminates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnrollmentRepository {
    enrollments: Arc<RwLock<Vec<Enrollment>>>,
}

impl InMemoryEnrollmentRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn create(&self, enrollment: NewEnrollment) -> Result<Enrollment, DomainError> {
        let mut enrollments = self.enrollments.write().await;
        let created = enrollment.into_enrollment(EnrollmentId::generate(), Utc::now());

        enrollments.push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, DomainError> {
        let enrollments = self.enrollments.read().await;
        Ok(enrollments.iter().find(|e| e.id() == id).cloned())
    }

    async fn get_all(
        &self,
        filters: &EnrollmentFilters,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Enrollment>, DomainError> {
        let enrollments = self.enrollments.read().await;

        let result = enrollments
            .iter()
            .filter(|e| filters.matches(e))
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(result)
    }

    async fn update(
        &self,
        id: &EnrollmentId,
        status: Option<EnrollmentStatus>,
    ) -> Result<(), DomainError> {
        let mut enrollments = self.enrollments.write().await;

        let enrollment = enrollments
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| DomainError::not_found(id.as_str()))?;

        enrollment.apply_status(status, Utc::now());
        Ok(())
    }

    async fn count(&self, filters: &EnrollmentFilters) -> Result<usize, DomainError> {
        let enrollments = self.enrollments.read().await;
        Ok(enrollments.iter().filter(|e| filters.matches(e)).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::repository_tests::{
        test_repository_contract, test_repository_pagination,
    };

    #[tokio::test]
    async fn test_contract() {
        let repo = InMemoryEnrollmentRepository::new();
        test_repository_contract(&repo).await;
    }

    #[tokio::test]
    async fn test_pagination() {
        let repo = InMemoryEnrollmentRepository::new();
        test_repository_pagination(&repo).await;
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = InMemoryEnrollmentRepository::new();

        let a = repo.create(NewEnrollment::new("u1", "c1").unwrap()).await.unwrap();
        let b = repo.create(NewEnrollment::new("u1", "c1").unwrap()).await.unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(repo.count(&EnrollmentFilters::new()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_leaves_other_records_untouched() {
        let repo = InMemoryEnrollmentRepository::new();

        let a = repo.create(NewEnrollment::new("u1", "c1").unwrap()).await.unwrap();
        let b = repo.create(NewEnrollment::new("u2", "c1").unwrap()).await.unwrap();

        repo.update(a.id(), Some(EnrollmentStatus::Studying))
            .await
            .unwrap();

        let other = repo.get(b.id()).await.unwrap().unwrap();
        assert_eq!(other, b);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryEnrollmentRepository::new();
        let clone = repo.clone();

        repo.create(NewEnrollment::new("u1", "c1").unwrap()).await.unwrap();

        assert_eq!(clone.count(&EnrollmentFilters::new()).await.unwrap(), 1);
    }
}
