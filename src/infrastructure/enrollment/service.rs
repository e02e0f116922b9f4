//! Enrollment service for enrollment management

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::enrollment::{
    validate_course_id, validate_status_input, validate_user_id, Enrollment, EnrollmentFilters,
    EnrollmentId, EnrollmentRepository, NewEnrollment,
};
use crate::domain::lookup::{CourseLookup, UserLookup};
use crate::domain::DomainError;

/// Enrollment service
///
/// Checks that the referenced user and course exist before persisting a new
/// enrollment, and restricts updates to known status values. Errors from
/// the lookups and the repository are returned unchanged.
pub struct EnrollmentService<R: EnrollmentRepository + ?Sized> {
    repository: Arc<R>,
    users: Arc<dyn UserLookup>,
    courses: Arc<dyn CourseLookup>,
}

impl<R: EnrollmentRepository + ?Sized> std::fmt::Debug for EnrollmentService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrollmentService").finish_non_exhaustive()
    }
}

impl<R: EnrollmentRepository + ?Sized> EnrollmentService<R> {
    /// Create a new enrollment service
    pub fn new(
        repository: Arc<R>,
        users: Arc<dyn UserLookup>,
        courses: Arc<dyn CourseLookup>,
    ) -> Self {
        Self {
            repository,
            users,
            courses,
        }
    }

    /// Enroll a user in a course.
    ///
    /// The user is looked up before the course, so when both are missing
    /// the user error is the one reported.
    pub async fn create(&self, user_id: &str, course_id: &str) -> Result<Enrollment, DomainError> {
        validate_user_id(user_id)?;
        validate_course_id(course_id)?;

        info!(user_id = %user_id, course_id = %course_id, "Creating enrollment");

        if let Err(e) = self.users.get(user_id).await {
            warn!(user_id = %user_id, error = %e, "User lookup failed");
            return Err(e);
        }

        if let Err(e) = self.courses.get(course_id).await {
            warn!(course_id = %course_id, error = %e, "Course lookup failed");
            return Err(e);
        }

        let enrollment = self
            .repository
            .create(NewEnrollment::new(user_id, course_id)?)
            .await?;

        info!(id = %enrollment.id(), "Enrollment created");
        Ok(enrollment)
    }

    /// Get an enrollment by ID
    pub async fn get(&self, id: &str) -> Result<Enrollment, DomainError> {
        let enrollment_id = Self::enrollment_id(id)?;

        self.repository
            .get(&enrollment_id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// List enrollments matching the filters, oldest first
    pub async fn get_all(
        &self,
        filters: &EnrollmentFilters,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Enrollment>, DomainError> {
        debug!(?filters, offset, ?limit, "Listing enrollments");
        self.repository.get_all(filters, offset, limit).await
    }

    /// Update the status of an enrollment.
    ///
    /// With no status the repository is still called, which verifies the
    /// enrollment exists and refreshes its update timestamp.
    pub async fn update(&self, id: &str, status: Option<&str>) -> Result<(), DomainError> {
        info!(id = %id, status = ?status, "Updating enrollment");

        let status = validate_status_input(status)?;
        let enrollment_id = Self::enrollment_id(id)?;

        self.repository.update(&enrollment_id, status).await
    }

    /// Count enrollments matching the filters
    pub async fn count(&self, filters: &EnrollmentFilters) -> Result<usize, DomainError> {
        self.repository.count(filters).await
    }

    /// A blank id can never match a stored enrollment.
    fn enrollment_id(id: &str) -> Result<EnrollmentId, DomainError> {
        EnrollmentId::new(id).map_err(|_| DomainError::not_found(id))
    }
}
