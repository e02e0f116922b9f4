//! Enrollment repository trait

use async_trait::async_trait;

use super::entity::{Enrollment, EnrollmentId, NewEnrollment};
use super::status::EnrollmentStatus;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Equality filters for listing and counting enrollments.
///
/// An unset field does not constrain the result; set fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentFilters {
    pub user_id: Option<String>,
    pub course_id: Option<String>,
}

impl EnrollmentFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by user. An empty string leaves the filter unset.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = non_empty(user_id.into());
        self
    }

    /// Filter by course. An empty string leaves the filter unset.
    pub fn with_course_id(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = non_empty(course_id.into());
        self
    }

    pub fn matches(&self, enrollment: &Enrollment) -> bool {
        if let Some(ref user_id) = self.user_id {
            if enrollment.user_id() != user_id {
                return false;
            }
        }

        if let Some(ref course_id) = self.course_id {
            if enrollment.course_id() != course_id {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Repository for persisting enrollments.
///
/// Implementations own identifier and timestamp generation and must return
/// listings in creation order so that offset pagination is stable.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Persist a new enrollment, assigning its identifier and timestamps
    async fn create(&self, enrollment: NewEnrollment) -> Result<Enrollment, DomainError>;

    /// Get an enrollment by ID
    async fn get(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, DomainError>;

    /// List enrollments matching the filters, oldest first.
    /// `limit` of `None` returns everything after `offset`.
    async fn get_all(
        &self,
        filters: &EnrollmentFilters,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Enrollment>, DomainError>;

    /// Update the status of an existing enrollment.
    /// Fails with `NotFound` when no record has the given ID.
    async fn update(
        &self,
        id: &EnrollmentId,
        status: Option<EnrollmentStatus>,
    ) -> Result<(), DomainError>;

    /// Count enrollments matching the filters, ignoring pagination
    async fn count(&self, filters: &EnrollmentFilters) -> Result<usize, DomainError>;
}
