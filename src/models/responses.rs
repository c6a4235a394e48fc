//! Response DTOs for the student API
//!
//! Defines the structure of outgoing HTTP response bodies. List, get and
//! update responses carry the student record itself; the DTOs here cover
//! the remaining envelopes.

use serde::Serialize;

/// Response body for the delete operation (DELETE /api/Students/DeleteStudent/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message
    pub message: String,
    /// The id that was deleted
    pub id: u32,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: u32) -> Self {
        Self {
            message: format!("Student with ID:{} has been deleted.", id),
            id,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
