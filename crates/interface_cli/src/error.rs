//! CLI error handling

use thiserror::Error;

use domain_claims::IntakeError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to build intake pipeline: {0}")]
    Intake(#[from] IntakeError),

    #[error("Failed to process {locator}: {source}")]
    Document {
        locator: String,
        #[source]
        source: IntakeError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
