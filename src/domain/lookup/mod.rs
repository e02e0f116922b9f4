//! External entity lookups
//!
//! Users and courses are owned by their own services. Enrollments only need
//! to know that a referenced entity exists before they are created.

mod entity;
mod client;

pub use client::{CourseLookup, UserLookup};
pub use entity::{Course, User};

#[cfg(test)]
pub use client::{MockCourseLookup, MockUserLookup};
