//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),
}

impl AppError {
    /// Shorthand for the missing-variable case.
    pub fn missing_env(name: &str) -> Self {
        AppError::MissingEnv { name: name.to_string() }
    }
}
