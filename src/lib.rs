//! Student API - A lightweight in-memory student records server
//!
//! Provides CRUD operations over a seeded in-memory student roster.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;

pub use api::AppState;
pub use config::Config;
