//! Enrollment status values

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Status of an enrollment
///
/// Any status may be set from any other through an update; membership in
/// this set is the only rule enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    /// Initial status of every new enrollment
    #[default]
    Pending,
    Active,
    Studying,
    Inactive,
}

impl EnrollmentStatus {
    pub const ALL: [EnrollmentStatus; 4] = [
        Self::Pending,
        Self::Active,
        Self::Studying,
        Self::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Studying => "studying",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::invalid_status(s))
    }
}
