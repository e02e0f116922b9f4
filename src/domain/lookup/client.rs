//! Lookup client traits

use async_trait::async_trait;

use super::entity::{Course, User};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Confirms that a user exists in the user directory.
///
/// Returns `UserNotFound` when the directory has no such user and
/// `Upstream` for transport or server failures.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn get(&self, id: &str) -> Result<User, DomainError>;
}

/// Confirms that a course exists in the course catalog.
///
/// Returns `CourseNotFound` when the catalog has no such course and
/// `Upstream` for transport or server failures.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CourseLookup: Send + Sync {
    async fn get(&self, id: &str) -> Result<Course, DomainError>;
}
