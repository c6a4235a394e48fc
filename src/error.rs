//! Error types for the student API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Student Error Enum ==
/// Unified error type for the student API.
#[derive(Error, Debug)]
pub enum StudentError {
    /// Requested id is below the valid range (ids start at 1)
    #[error("Not accepted ID {0}")]
    IdNotAccepted(i64),

    /// Candidate record failed field validation
    #[error("Invalid student data.")]
    InvalidStudent,

    /// No student with the given id exists
    #[error("Student with ID {0} not found.")]
    NotFound(u32),

    /// The roster holds no records
    #[error("No Students Found.")]
    NoStudents,
}

// == IntoResponse Implementation ==
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = match &self {
            StudentError::IdNotAccepted(_) => StatusCode::BAD_REQUEST,
            StudentError::InvalidStudent => StatusCode::BAD_REQUEST,
            StudentError::NotFound(_) => StatusCode::NOT_FOUND,
            StudentError::NoStudents => StatusCode::NOT_FOUND,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the student API.
pub type Result<T> = std::result::Result<T, StudentError>;
