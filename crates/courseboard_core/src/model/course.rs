//! Closed set of known course identifiers.
//!
//! # Responsibility
//! - Enumerate every course a store can be scoped to.
//! - Round-trip course identifiers to their exact persisted spelling.
//!
//! # Invariants
//! - The set is closed: persisted text naming an unknown course is rejected
//!   at the load boundary instead of being carried as an opaque string.
//! - Serialized form is the canonical uppercase identifier (`CSF111`).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the fixed, known course identifiers scoping a store.
///
/// Doubles as the map key of `CourseStore`, so the serde representation must
/// stay the bare identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Course {
    Csf111,
    Mathf112,
    Mathf113,
    Eeef111,
    Phyf111,
    Bitsf110,
    Bitsf111,
    Bitsf112,
    Phyf110,
    Chemf110,
    Biof110,
    Mef112,
}

impl Course {
    /// Every known course, in canonical declaration order.
    pub const ALL: [Course; 12] = [
        Course::Csf111,
        Course::Mathf112,
        Course::Mathf113,
        Course::Eeef111,
        Course::Phyf111,
        Course::Bitsf110,
        Course::Bitsf111,
        Course::Bitsf112,
        Course::Phyf110,
        Course::Chemf110,
        Course::Biof110,
        Course::Mef112,
    ];

    /// Canonical identifier as persisted and displayed.
    pub fn as_str(self) -> &'static str {
        match self {
            Course::Csf111 => "CSF111",
            Course::Mathf112 => "MATHF112",
            Course::Mathf113 => "MATHF113",
            Course::Eeef111 => "EEEF111",
            Course::Phyf111 => "PHYF111",
            Course::Bitsf110 => "BITSF110",
            Course::Bitsf111 => "BITSF111",
            Course::Bitsf112 => "BITSF112",
            Course::Phyf110 => "PHYF110",
            Course::Chemf110 => "CHEMF110",
            Course::Biof110 => "BIOF110",
            Course::Mef112 => "MEF112",
        }
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown course identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCourse(pub String);

impl Display for UnknownCourse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown course identifier: `{}`", self.0)
    }
}

impl std::error::Error for UnknownCourse {}

impl FromStr for Course {
    type Err = UnknownCourse;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Course::ALL
            .into_iter()
            .find(|course| course.as_str() == value)
            .ok_or_else(|| UnknownCourse(value.to_string()))
    }
}
