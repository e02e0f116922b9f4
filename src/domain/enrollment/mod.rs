//! Enrollment domain module
//!
//! An enrollment links a user to a course and tracks where the learner is
//! in that course through a fixed set of statuses. User and course records
//! live in other services and are only referenced by identifier.

mod entity;
mod repository;
mod status;
mod validation;

pub use entity::{Enrollment, EnrollmentId, NewEnrollment};
pub use repository::{EnrollmentFilters, EnrollmentRepository};
pub use status::EnrollmentStatus;
pub use validation::{validate_course_id, validate_status_input, validate_user_id};

#[cfg(test)]
pub use repository::MockEnrollmentRepository;
#[cfg(test)]
pub use repository::tests as repository_tests;
