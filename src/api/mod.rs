//! API Module
//!
//! HTTP handlers and routing for the student records REST API.
//!
//! # Endpoints
//! - `GET /api/Students/All` - List every student
//! - `GET /api/Students/Passed` - List students at or above the passing grade
//! - `GET /api/Students/AverageGrade` - Average grade across the roster
//! - `GET /api/Students/GetStudentById/:id` - Retrieve a student by id
//! - `POST /api/Students/AddStudent` - Add a new student
//! - `DELETE /api/Students/DeleteStudent/:id` - Delete a student
//! - `PUT /api/Students/UpdateStudent/:id` - Update a student
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
