//! Dispatch protocol types (line-delimited JSON)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::McpError;

/// One request line
#[derive(Debug, Deserialize)]
pub struct Request {
    /// Request ID, echoed back unchanged
    #[serde(default)]
    pub id: Option<Value>,
    /// Tool name
    #[serde(default)]
    pub tool: Option<String>,
    /// Tool arguments
    #[serde(default)]
    pub args: Value,
}

/// Success response
#[derive(Debug, Serialize)]
pub struct Response {
    /// Request ID
    pub id: Option<Value>,
    /// Tool result
    pub result: Value,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Request ID, `null` when the line could not be decoded
    pub id: Option<Value>,
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error kind, e.g. `InvalidInput` or `UnknownTool`
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl Response {
    /// Create a new success response
    pub fn new(id: Option<Value>, result: Value) -> Self {
        Self { id, result }
    }
}

impl ErrorResponse {
    /// Create an error response from a server error
    pub fn new(id: Option<Value>, err: &McpError) -> Self {
        Self {
            id,
            error: ErrorDetail {
                kind: err.kind().to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// The fixed tool set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// List CSV files in the data directory
    ListFiles,
    /// Classify one column of a file
    ColumnPrediction,
    /// Parse one column of a file and write the result
    ParseFile,
    /// List the tool names
    ListTools,
}

impl Tool {
    /// All tools, in the order `list_tools` reports them
    pub const ALL: [Tool; 4] = [
        Tool::ListFiles,
        Tool::ColumnPrediction,
        Tool::ParseFile,
        Tool::ListTools,
    ];

    /// Wire name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Tool::ListFiles => "list_files",
            Tool::ColumnPrediction => "column_prediction",
            Tool::ParseFile => "parse_file",
            Tool::ListTools => "list_tools",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = McpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| McpError::UnknownTool(s.to_string()))
    }
}
