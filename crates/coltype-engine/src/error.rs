//! Error types for the engine

use coltype_domain::Label;
use thiserror::Error;

/// Errors that abort a classification or parse request
#[derive(Error, Debug)]
pub enum EngineError {
    /// Missing file, unknown column, empty file or an unusable argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The column did not classify as the label the caller needs
    #[error("No confident label for column '{column}': {detail}")]
    NoConfidentLabel {
        /// Column that was classified
        column: String,
        /// What was expected and what was found
        detail: String,
    },

    /// No column of the file classifies as a parseable label
    #[error("No parseable column found: {0}")]
    NoParseableColumn(String),

    /// Invalid engine configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV decoding or encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single value failed label validation at parse time
///
/// Recorded per row; never aborts the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse '{value}' as {label}: {reason}")]
pub struct ValueParseFailure {
    /// Label the value was parsed as
    pub label: Label,
    /// Raw input value
    pub value: String,
    /// Why the value was refused
    pub reason: String,
}

impl ValueParseFailure {
    /// Create a new failure record
    pub fn new(label: Label, value: &str, reason: impl Into<String>) -> Self {
        Self {
            label,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
