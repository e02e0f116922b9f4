//! Infrastructure layer - Storage and external service implementations

pub mod enrollment;
pub mod logging;
pub mod lookup;
