//! coltype tool server - Main entry point

use coltype_mcp::{McpServer, ServerConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr; stdout carries the responses
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load server configuration: {}", e);
            std::process::exit(1);
        }
    };

    let server = match McpServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to create tool server: {}", e);
            std::process::exit(1);
        }
    };

    // Blocks until stdin closes
    if let Err(e) = server.run() {
        eprintln!("Tool server error: {}", e);
        std::process::exit(1);
    }
}
