//! Domain layer - Core business entities and logic

pub mod enrollment;
pub mod error;
pub mod lookup;
pub mod pagination;

pub use enrollment::{
    Enrollment, EnrollmentFilters, EnrollmentId, EnrollmentRepository, EnrollmentStatus,
    NewEnrollment,
};
pub use error::DomainError;
pub use lookup::{Course, CourseLookup, User, UserLookup};
pub use pagination::PageMeta;
