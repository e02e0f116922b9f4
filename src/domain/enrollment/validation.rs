//! Enrollment input validation

use super::status::EnrollmentStatus;
use crate::domain::DomainError;

/// Validate a referenced user identifier
pub fn validate_user_id(user_id: &str) -> Result<(), DomainError> {
    if user_id.trim().is_empty() {
        return Err(DomainError::UserIdRequired);
    }

    Ok(())
}

/// Validate a referenced course identifier
pub fn validate_course_id(course_id: &str) -> Result<(), DomainError> {
    if course_id.trim().is_empty() {
        return Err(DomainError::CourseIdRequired);
    }

    Ok(())
}

/// Parse an optional raw status into the closed status set.
///
/// `None` passes through untouched and an empty string is `StatusRequired`.
/// Anything else outside the set, whitespace included, is `InvalidStatus`.
pub fn validate_status_input(
    status: Option<&str>,
) -> Result<Option<EnrollmentStatus>, DomainError> {
    match status {
        None => Ok(None),
        Some("") => Err(DomainError::StatusRequired),
        Some(raw) => raw.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("u1").is_ok());
        assert_eq!(validate_user_id(""), Err(DomainError::UserIdRequired));
        assert_eq!(validate_user_id("   "), Err(DomainError::UserIdRequired));
    }

    #[test]
    fn test_validate_course_id() {
        assert!(validate_course_id("c1").is_ok());
        assert_eq!(validate_course_id(""), Err(DomainError::CourseIdRequired));
    }

    #[test]
    fn test_validate_status_input() {
        assert_eq!(validate_status_input(None), Ok(None));
        assert_eq!(
            validate_status_input(Some("active")),
            Ok(Some(EnrollmentStatus::Active))
        );
        assert_eq!(
            validate_status_input(Some("")),
            Err(DomainError::StatusRequired)
        );
        assert_eq!(
            validate_status_input(Some("   ")),
            Err(DomainError::invalid_status("   "))
        );
        assert_eq!(
            validate_status_input(Some("Active")),
            Err(DomainError::invalid_status("Active"))
        );
        assert_eq!(
            validate_status_input(Some("bogus")),
            Err(DomainError::invalid_status("bogus"))
        );
    }
}
