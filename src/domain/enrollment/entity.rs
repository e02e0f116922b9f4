//! Enrollment entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::EnrollmentStatus;
use super::validation::{validate_course_id, validate_user_id};
use crate::domain::DomainError;

/// Enrollment identifier, assigned by the repository on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnrollmentId(String);

impl EnrollmentId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(DomainError::validation("enrollment id is required"));
        }

        Ok(Self(id))
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EnrollmentId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EnrollmentId> for String {
    fn from(id: EnrollmentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for EnrollmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An enrollment that has not been persisted yet.
///
/// The status is fixed to `Pending`; there is no way to start elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnrollment {
    user_id: String,
    course_id: String,
    status: EnrollmentStatus,
}

impl NewEnrollment {
    pub fn new(
        user_id: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let user_id = user_id.into();
        let course_id = course_id.into();
        validate_user_id(&user_id)?;
        validate_course_id(&course_id)?;

        Ok(Self {
            user_id,
            course_id,
            status: EnrollmentStatus::Pending,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    /// Materialize the record with storage-assigned identity and timestamps
    pub fn into_enrollment(self, id: EnrollmentId, now: DateTime<Utc>) -> Enrollment {
        Enrollment {
            id,
            user_id: self.user_id,
            course_id: self.course_id,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Enrollment entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    id: EnrollmentId,
    user_id: String,
    course_id: String,
    status: EnrollmentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Enrollment {
    /// Rebuild an enrollment from persisted fields
    pub fn restore(
        id: EnrollmentId,
        user_id: impl Into<String>,
        course_id: impl Into<String>,
        status: EnrollmentStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            course_id: course_id.into(),
            status,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> &EnrollmentId {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Apply a status update. `None` only refreshes the update timestamp.
    pub fn apply_status(&mut self, status: Option<EnrollmentStatus>, now: DateTime<Utc>) {
        if let Some(status) = status {
            self.status = status;
        }

        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_enrollment_id_valid() {
        let id = EnrollmentId::new("e1").unwrap();
        assert_eq!(id.as_str(), "e1");
        assert_eq!(id.to_string(), "e1");
    }

    #[test]
    fn test_enrollment_id_blank() {
        assert!(EnrollmentId::new("").is_err());
        assert!(EnrollmentId::new("  ").is_err());
    }

    #[test]
    fn test_enrollment_id_generate_unique() {
        assert_ne!(EnrollmentId::generate(), EnrollmentId::generate());
    }

    #[test]
    fn test_new_enrollment_is_pending() {
        let new = NewEnrollment::new("u1", "c1").unwrap();

        assert_eq!(new.user_id(), "u1");
        assert_eq!(new.course_id(), "c1");
        assert_eq!(new.status(), EnrollmentStatus::Pending);
    }

    #[test]
    fn test_new_enrollment_requires_ids() {
        assert_eq!(
            NewEnrollment::new("", "c1").unwrap_err(),
            DomainError::UserIdRequired
        );
        assert_eq!(
            NewEnrollment::new("u1", "").unwrap_err(),
            DomainError::CourseIdRequired
        );
    }

    #[test]
    fn test_into_enrollment() {
        let now = Utc::now();
        let id = EnrollmentId::new("e1").unwrap();
        let enrollment = NewEnrollment::new("u1", "c1")
            .unwrap()
            .into_enrollment(id.clone(), now);

        assert_eq!(enrollment.id(), &id);
        assert_eq!(enrollment.status(), EnrollmentStatus::Pending);
        assert_eq!(enrollment.created_at(), now);
        assert_eq!(enrollment.updated_at(), now);
    }

    #[test]
    fn test_apply_status() {
        let created = Utc::now();
        let mut enrollment = NewEnrollment::new("u1", "c1")
            .unwrap()
            .into_enrollment(EnrollmentId::generate(), created);

        let later = created + Duration::seconds(5);
        enrollment.apply_status(Some(EnrollmentStatus::Active), later);

        assert_eq!(enrollment.status(), EnrollmentStatus::Active);
        assert_eq!(enrollment.updated_at(), later);
        assert_eq!(enrollment.created_at(), created);
        assert_eq!(enrollment.user_id(), "u1");
        assert_eq!(enrollment.course_id(), "c1");
    }

    #[test]
    fn test_apply_no_status_touches_only_timestamp() {
        let created = Utc::now();
        let mut enrollment = NewEnrollment::new("u1", "c1")
            .unwrap()
            .into_enrollment(EnrollmentId::generate(), created);

        let later = created + Duration::seconds(5);
        enrollment.apply_status(None, later);

        assert_eq!(enrollment.status(), EnrollmentStatus::Pending);
        assert_eq!(enrollment.updated_at(), later);
    }
}
