//! Request DTOs for the student API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Candidate student record for the add and update operations.
///
/// Fields are serde-defaulted so that a body with a missing field still
/// deserializes: a missing `name` becomes empty and fails validation, while
/// missing `age`/`grade` become zero, which is valid.
///
/// # Fields
/// - `name`: Student name, must be non-empty
/// - `age`: Age in years, must not be negative
/// - `grade`: Grade, must not be negative
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentPayload {
    /// Student name
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Grade on a 0-100 scale
    pub grade: f64,
}

impl StudentPayload {
    /// Validates the candidate record
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.age < 0 {
            return Some("Age cannot be negative".to_string());
        }
        if self.grade < 0.0 {
            return Some("Grade cannot be negative".to_string());
        }
        None
    }
}
