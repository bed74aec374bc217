//! coltype tool server
//!
//! Line-delimited JSON dispatcher over stdio. Each request line is
//! `{"id": ..., "tool": ..., "args": {...}}` and gets exactly one response
//! line, `{"id": ..., "result": ...}` or `{"id": ..., "error": {"kind", "message"}}`.
//!
//! Provides 4 tools:
//! - `list_files` - CSV files in the data directory
//! - `column_prediction` - Classify one column of a file
//! - `parse_file` - Parse the phone or company column of a file to CSV
//! - `list_tools` - Names of the tools above
//!
//! # Example
//!
//! ```no_run
//! use coltype_mcp::{McpServer, ServerConfig};
//!
//! let server = McpServer::new(ServerConfig::from_env().unwrap()).unwrap();
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod protocol;
mod server;
mod tools;

pub use config::ServerConfig;
pub use error::McpError;
pub use protocol::{ErrorDetail, ErrorResponse, Request, Response, Tool};
pub use server::McpServer;
