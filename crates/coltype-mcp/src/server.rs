//! Tool server implementation

use coltype_engine::Engine;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::McpError;
use crate::protocol::{ErrorResponse, Request, Response, Tool};
use crate::tools::{self, Workspace};

/// Tool server
///
/// Handles dispatch requests one line at a time, in order.
pub struct McpServer {
    engine: Engine,
    workspace: Workspace,
}

impl McpServer {
    /// Create a new server, loading the reference tables once
    pub fn new(config: ServerConfig) -> Result<Self, McpError> {
        let engine = Engine::new(config.engine)?;
        info!(
            data_dir = %config.data_dir.display(),
            output_dir = %config.output_dir.display(),
            "Tool server configured"
        );
        Ok(Self {
            engine,
            workspace: Workspace::new(config.data_dir, config.output_dir),
        })
    }

    /// Run the server on stdin/stdout until stdin closes
    pub fn run(&self) -> Result<(), McpError> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(BufReader::new(stdin.lock()), stdout.lock())
    }

    /// Run the server over any line source and sink
    ///
    /// A line that is not UTF-8 gets a `MalformedRequest` response; only
    /// read and write failures stop the loop.
    pub fn run_with<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<(), McpError> {
        info!("Tool server started");

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    let err = McpError::MalformedRequest(format!("invalid UTF-8: {}", e));
                    warn!("Request failed: {}", err);
                    self.error_value(None, &err)
                }
            };
            write_response(&mut writer, &response)?;
        }

        info!("Tool server stopped");
        Ok(())
    }

    /// Handle one request line and build its response
    pub fn handle_line(&self, line: &str) -> Value {
        debug!("Received request: {}", line);

        let raw: Value = match serde_json::from_str(line) {
            Ok(raw) => raw,
            Err(e) => {
                let err = McpError::MalformedRequest(format!("invalid JSON: {}", e));
                return self.error_value(None, &err);
            }
        };

        // Keep the id even when the rest of the request is unusable
        let id = raw.get("id").cloned();
        let request: Request = match serde_json::from_value(raw) {
            Ok(request) => request,
            Err(e) => return self.error_value(id, &McpError::MalformedRequest(e.to_string())),
        };

        match self.handle_request(&request) {
            Ok(result) => serde_json::to_value(Response::new(request.id, result))
                .unwrap_or_else(|e| self.error_value(id, &McpError::Json(e))),
            Err(err) => {
                warn!(kind = err.kind(), "Request failed: {}", err);
                self.error_value(request.id, &err)
            }
        }
    }

    fn handle_request(&self, request: &Request) -> Result<Value, McpError> {
        let name = request
            .tool
            .as_deref()
            .ok_or_else(|| McpError::MalformedRequest("missing tool".to_string()))?;
        let tool: Tool = name.parse()?;
        let args = if request.args.is_null() {
            json!({})
        } else {
            request.args.clone()
        };

        match tool {
            Tool::ListFiles => {
                let result = tools::handle_list_files(&self.workspace)?;
                Ok(serde_json::to_value(result)?)
            }
            Tool::ColumnPrediction => {
                let params: tools::ColumnPredictionParams = parse_args(tool, args)?;
                let result =
                    tools::handle_column_prediction(&self.engine, &self.workspace, params)?;
                Ok(serde_json::to_value(result)?)
            }
            Tool::ParseFile => {
                let params: tools::ParseFileParams = parse_args(tool, args)?;
                let result = tools::handle_parse_file(&self.engine, &self.workspace, params)?;
                Ok(serde_json::to_value(result)?)
            }
            Tool::ListTools => {
                let names: Vec<&str> = Tool::ALL.iter().map(Tool::name).collect();
                Ok(json!({ "tools": names }))
            }
        }
    }

    fn error_value(&self, id: Option<Value>, err: &McpError) -> Value {
        // Strings and a JSON id only
        serde_json::to_value(ErrorResponse::new(id, err)).unwrap_or(Value::Null)
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(tool: Tool, args: Value) -> Result<T, McpError> {
    serde_json::from_value(args)
        .map_err(|e| McpError::MalformedRequest(format!("invalid arguments for {}: {}", tool, e)))
}

fn write_response<W: Write>(writer: &mut W, response: &Value) -> Result<(), McpError> {
    let response_str = serde_json::to_string(response)?;
    writeln!(writer, "{}", response_str)?;
    writer.flush()?;
    debug!("Sent response: {}", response_str);
    Ok(())
}
