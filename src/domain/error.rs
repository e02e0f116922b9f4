use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("user id is required")]
    UserIdRequired,

    #[error("course id is required")]
    CourseIdRequired,

    #[error("status is required")]
    StatusRequired,

    #[error("invalid '{status}' status")]
    InvalidStatus { status: String },

    #[error("enrollment '{id}' doesn't exist")]
    NotFound { id: String },

    #[error("user '{id}' doesn't exist")]
    UserNotFound { id: String },

    #[error("course '{id}' doesn't exist")]
    CourseNotFound { id: String },

    #[error("{service} service error: {message}")]
    Upstream { service: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn invalid_status(status: impl Into<String>) -> Self {
        Self::InvalidStatus {
            status: status.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound { id: id.into() }
    }

    pub fn course_not_found(id: impl Into<String>) -> Self {
        Self::CourseNotFound { id: id.into() }
    }

    pub fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Caller-input problems that should never be retried
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UserIdRequired
                | Self::CourseIdRequired
                | Self::StatusRequired
                | Self::InvalidStatus { .. }
                | Self::Validation { .. }
        )
    }

    /// A referenced entity (enrollment, user or course) does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::UserNotFound { .. } | Self::CourseNotFound { .. }
        )
    }
}
