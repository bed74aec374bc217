//! Error types for the CLI application.

use coltype_engine::EngineError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Classification or parse error
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Process exit code for this error
    ///
    /// 2 for invalid input, 3 when the column has no confident label, 4 when
    /// no column is parseable, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_)
            | CliError::Engine(EngineError::InvalidInput(_))
            | CliError::Engine(EngineError::Csv(_)) => 2,
            CliError::Engine(EngineError::NoConfidentLabel { .. }) => 3,
            CliError::Engine(EngineError::NoParseableColumn(_)) => 4,
            _ => 1,
        }
    }
}
