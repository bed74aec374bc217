//! List files tool - CSV files available in the data directory

use coltype_engine::list_csv_files;
use serde::Serialize;

use super::Workspace;
use crate::error::McpError;

/// Result of listing files
#[derive(Debug, Serialize)]
pub struct ListFilesResult {
    /// CSV file names, sorted
    pub files: Vec<String>,
}

/// Handle list_files tool invocation
pub fn handle_list_files(workspace: &Workspace) -> Result<ListFilesResult, McpError> {
    let files = list_csv_files(workspace.data_dir())?;
    Ok(ListFilesResult { files })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("phone.csv"), "phone\n555-123-4567\n").unwrap();
        std::fs::write(dir.path().join("readme.md"), "# data\n").unwrap();

        let ws = Workspace::new(dir.path().to_path_buf(), dir.path().join("out"));
        let result = handle_list_files(&ws).unwrap();
        assert_eq!(result.files, vec!["phone.csv"]);
    }

    #[test]
    fn test_missing_data_dir_is_invalid_input() {
        let ws = Workspace::new("/nonexistent/data".into(), "/nonexistent/out".into());
        assert!(matches!(
            handle_list_files(&ws),
            Err(McpError::InvalidInput(_))
        ));
    }
}
