//! API Routes
//!
//! Configures the Axum router with all student API endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_student_handler, average_grade_handler, delete_student_handler, get_student_handler,
    health_handler, list_all_handler, list_passed_handler, update_student_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/Students/All` - List every student
/// - `GET /api/Students/Passed` - List students at or above the passing grade
/// - `GET /api/Students/AverageGrade` - Average grade across the roster
/// - `GET /api/Students/GetStudentById/:id` - Retrieve a student by id
/// - `POST /api/Students/AddStudent` - Add a new student
/// - `DELETE /api/Students/DeleteStudent/:id` - Delete a student
/// - `PUT /api/Students/UpdateStudent/:id` - Update a student
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/Students/All", get(list_all_handler))
        .route("/api/Students/Passed", get(list_passed_handler))
        .route("/api/Students/AverageGrade", get(average_grade_handler))
        .route("/api/Students/GetStudentById/:id", get(get_student_handler))
        .route("/api/Students/AddStudent", post(add_student_handler))
        .route(
            "/api/Students/DeleteStudent/:id",
            delete(delete_student_handler),
        )
        .route(
            "/api/Students/UpdateStudent/:id",
            put(update_student_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
