//! The student record held by a [`Roster`](super::Roster).
//!
//! The on-disk field order (`name`, `year`, `email`, `specialization`) is the
//! declaration order below; serde emits fields in that order.

use serde::{Deserialize, Serialize};

/// One student. Immutable once built; the roster only reads it through the
/// accessors.
///
/// `year` doubles as the age compared by
/// [`Roster::filter_by_min_age`](super::Roster::filter_by_min_age).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    year: i64,
    email: String,
    specialization: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        year: i64,
        email: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            email: email.into(),
            specialization: specialization.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Unique key within a roster (not enforced).
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }
}
