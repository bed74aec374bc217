//! Tool implementations

mod column_prediction;
mod list_files;
mod parse_file;

pub use column_prediction::{
    handle_column_prediction, ColumnPredictionParams, PredictionResult, ScoreInfo,
};
pub use list_files::{handle_list_files, ListFilesResult};
pub use parse_file::{handle_parse_file, ParseFileParams, ParseSummary, RowInfo};

use crate::error::McpError;
use std::path::{Component, Path, PathBuf};

/// The directories the tools read from and write to
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    output_dir: PathBuf,
}

impl Workspace {
    /// Create a workspace over a data and an output directory
    pub fn new(data_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            data_dir,
            output_dir,
        }
    }

    /// Directory holding the input CSV files
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory parse results are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolve a client-supplied file name inside the data directory
    ///
    /// Absolute paths and any `..` component are refused.
    pub fn resolve(&self, file: &str) -> Result<PathBuf, McpError> {
        let relative = Path::new(file);
        if file.trim().is_empty() {
            return Err(McpError::InvalidInput("file name is empty".to_string()));
        }
        let confined = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !confined {
            return Err(McpError::InvalidInput(format!(
                "file '{}' is outside the data directory",
                file
            )));
        }
        Ok(self.data_dir.join(relative))
    }

    /// Where the parse result for `file` goes
    ///
    /// `sub/phone.csv` becomes `<output_dir>/sub/phone_parsed.csv`, so files
    /// with the same name in different subdirectories do not collide.
    pub fn output_path(&self, file: &str) -> Result<PathBuf, McpError> {
        let input = self.resolve(file)?;
        let relative = input.strip_prefix(&self.data_dir).unwrap_or(input.as_path());
        let stem = relative
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| McpError::InvalidInput(format!("file '{}' has no name", file)))?;

        let mut path = self.output_dir.clone();
        if let Some(parent) = relative.parent() {
            path.extend(
                parent
                    .components()
                    .filter(|c| matches!(c, Component::Normal(_))),
            );
        }
        path.push(format!("{}_parsed.csv", stem));
        Ok(path)
    }
}
