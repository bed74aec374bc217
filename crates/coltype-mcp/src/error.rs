//! Error types for tool server operations.

use coltype_engine::EngineError;
use thiserror::Error;

/// Tool server error types
#[derive(Error, Debug)]
pub enum McpError {
    /// Missing file, unknown column, path outside the data directory
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested column did not classify as the needed label
    #[error("{0}")]
    NoConfidentLabel(String),

    /// No column of the file can be parsed
    #[error("{0}")]
    NoParseableColumn(String),

    /// Tool name not in the fixed tool set
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Request line is not valid JSON, lacks `tool`, or has bad args
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Invalid server or engine configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Error kind as it appears in `error.kind` on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            McpError::InvalidInput(_) => "InvalidInput",
            McpError::NoConfidentLabel(_) => "NoConfidentLabel",
            McpError::NoParseableColumn(_) => "NoParseableColumn",
            McpError::UnknownTool(_) => "UnknownTool",
            McpError::MalformedRequest(_) => "MalformedRequest",
            McpError::Config(_) => "Config",
            McpError::Json(_) => "Json",
            McpError::Io(_) => "Io",
        }
    }
}

impl From<EngineError> for McpError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput(msg) => McpError::InvalidInput(msg),
            e @ EngineError::NoConfidentLabel { .. } => McpError::NoConfidentLabel(e.to_string()),
            e @ EngineError::NoParseableColumn(_) => McpError::NoParseableColumn(e.to_string()),
            EngineError::Config(msg) => McpError::Config(msg),
            // A file that is not valid CSV is bad input, not a server fault
            EngineError::Csv(e) => McpError::InvalidInput(format!("CSV error: {}", e)),
            EngineError::Io(e) => McpError::Io(e),
        }
    }
}
