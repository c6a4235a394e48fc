//! API Handlers
//!
//! HTTP request handlers for each student API endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use tracing::warn;

use crate::error::{Result, StudentError};
use crate::models::{DeleteResponse, HealthResponse, StudentPayload};
use crate::roster::{Roster, Student};

/// Application state shared across all handlers.
///
/// Holds the roster behind Arc<RwLock<>>; every operation runs under a
/// single guard, which keeps id assignment and reads consistent when
/// requests are served concurrently.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe student roster
    pub roster: Arc<RwLock<Roster>>,
}

impl AppState {
    /// Creates a new AppState with the given roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes the roster with the startup seed records.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(Roster::seeded(config.passing_grade))
    }
}

/// Ids start at 1; anything lower is rejected before touching the roster.
///
/// Path ids are extracted as i64 so negative values reach this check
/// instead of failing extraction.
fn accept_id(id: i64) -> Result<u32> {
    if id < 1 {
        return Err(StudentError::IdNotAccepted(id));
    }
    Ok(id as u32)
}

/// Handler for GET /api/Students/All
///
/// Returns every student in insertion order.
pub async fn list_all_handler(State(state): State<AppState>) -> Json<Vec<Student>> {
    let roster = state.roster.read().await;
    Json(roster.all())
}

/// Handler for GET /api/Students/Passed
///
/// Returns the students whose grade meets the passing threshold.
/// The list may be empty.
pub async fn list_passed_handler(State(state): State<AppState>) -> Json<Vec<Student>> {
    let roster = state.roster.read().await;
    Json(roster.passed())
}

/// Handler for GET /api/Students/AverageGrade
///
/// Returns the arithmetic mean of all grades, or 404 when the roster
/// is empty.
pub async fn average_grade_handler(State(state): State<AppState>) -> Result<Json<f64>> {
    let roster = state.roster.read().await;
    let average = roster.average_grade()?;

    Ok(Json(average))
}

/// Handler for GET /api/Students/GetStudentById/:id
///
/// Retrieves a single student by id.
pub async fn get_student_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>> {
    let id = accept_id(id)?;

    let roster = state.roster.read().await;
    let student = roster.get(id)?;

    Ok(Json(student))
}

/// Handler for POST /api/Students/AddStudent
///
/// Validates the candidate record, stores it with a freshly assigned id,
/// and answers 201 with a Location header pointing at the get-by-id route.
pub async fn add_student_handler(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayload>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Student>)> {
    // Validate before any mutation
    if let Some(reason) = payload.validate() {
        warn!("Rejected student payload: {}", reason);
        return Err(StudentError::InvalidStudent);
    }

    // Acquire write lock and append the record
    let mut roster = state.roster.write().await;
    let student = roster.add(payload.name, payload.age, payload.grade);

    let location = format!("/api/Students/GetStudentById/{}", student.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student),
    ))
}

/// Handler for DELETE /api/Students/DeleteStudent/:id
///
/// Removes a student and returns a confirmation message.
pub async fn delete_student_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let id = accept_id(id)?;

    // Acquire write lock and remove the record
    let mut roster = state.roster.write().await;
    roster.remove(id)?;

    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for PUT /api/Students/UpdateStudent/:id
///
/// Validates the candidate record, then replaces name, age and grade of
/// the matching student in place. The id never changes.
pub async fn update_student_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<Student>> {
    let id = accept_id(id)?;

    if let Some(reason) = payload.validate() {
        warn!("Rejected student payload: {}", reason);
        return Err(StudentError::InvalidStudent);
    }

    // Acquire write lock and overwrite the mutable fields
    let mut roster = state.roster.write().await;
    let student = roster.update(id, payload.name, payload.age, payload.grade)?;

    Ok(Json(student))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
