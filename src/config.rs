//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::roster::DEFAULT_PASSING_GRADE;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Minimum grade counted as a pass
    pub passing_grade: f64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PASSING_GRADE` - Minimum passing grade (default: 50.0)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            passing_grade: env::var("PASSING_GRADE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PASSING_GRADE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            passing_grade: DEFAULT_PASSING_GRADE,
        }
    }
}
