//! Server configuration from the environment

use coltype_engine::EngineConfig;
use std::env;
use std::path::PathBuf;

use crate::error::McpError;

/// Directory holding the CSV files tools may read
pub const DATA_DIR_VAR: &str = "COLTYPE_DATA_DIR";
/// Directory parse results are written to
pub const OUTPUT_DIR_VAR: &str = "COLTYPE_OUTPUT_DIR";
/// Optional engine TOML file
pub const CONFIG_VAR: &str = "COLTYPE_CONFIG";

/// Where the server reads input and writes output, and how it classifies
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory holding the CSV files tools may read
    pub data_dir: PathBuf,
    /// Directory parse results are written to
    pub output_dir: PathBuf,
    /// Engine configuration
    pub engine: EngineConfig,
}

impl ServerConfig {
    /// Default engine configuration over the given directories
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
            engine: EngineConfig::default(),
        }
    }

    /// Read `COLTYPE_DATA_DIR`, `COLTYPE_OUTPUT_DIR` and `COLTYPE_CONFIG`
    pub fn from_env() -> Result<Self, McpError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, McpError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_VAR).unwrap_or_else(|| "data".to_string());
        let output_dir = lookup(OUTPUT_DIR_VAR).unwrap_or_else(|| "output".to_string());

        let engine = match lookup(CONFIG_VAR) {
            Some(path) => EngineConfig::from_file(&path)?,
            None => EngineConfig::default(),
        };

        Ok(Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
            engine,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_variables() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.engine.min_confidence, EngineConfig::default().min_confidence);
    }

    #[test]
    fn test_variables_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let engine_path = dir.path().join("engine.toml");
        std::fs::write(&engine_path, "min_confidence = 0.8\n").unwrap();

        let vars: HashMap<&str, String> = HashMap::from([
            (DATA_DIR_VAR, "/srv/in".to_string()),
            (OUTPUT_DIR_VAR, "/srv/out".to_string()),
            (CONFIG_VAR, engine_path.display().to_string()),
        ]);
        let config = ServerConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/in"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/out"));
        assert_eq!(config.engine.min_confidence, 0.8);
    }

    #[test]
    fn test_missing_engine_config_fails() {
        let result = ServerConfig::from_lookup(|key| {
            (key == CONFIG_VAR).then(|| "/nonexistent/engine.toml".to_string())
        });
        assert!(result.is_err());
    }
}
