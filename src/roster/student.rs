//! Student Record Module
//!
//! Defines the student record held by the roster.

use serde::{Deserialize, Serialize};

// == Student Record ==
/// A single student record.
///
/// The `id` is assigned by the roster and never changes afterwards;
/// `name`, `age` and `grade` are mutable through the update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Roster-assigned identifier, unique and starting at 1
    pub id: u32,
    /// Full name, never empty
    pub name: String,
    /// Age in years, never negative
    pub age: i32,
    /// Grade on a 0-100 scale, never negative
    pub grade: f64,
}

impl Student {
    // == Constructor ==
    /// Creates a new student record.
    pub fn new(id: u32, name: impl Into<String>, age: i32, grade: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            grade,
        }
    }
}
