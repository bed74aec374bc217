//! Column prediction tool - Classify one column of a data file

use coltype_domain::ClassificationResult;
use coltype_engine::{Engine, Table};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Workspace;
use crate::error::McpError;

/// Parameters for column prediction
#[derive(Debug, Deserialize)]
pub struct ColumnPredictionParams {
    /// File name inside the data directory
    #[serde(alias = "file_path")]
    pub file: String,
    /// Column header, or zero-based index
    #[serde(alias = "column_name")]
    pub column: String,
}

/// Match count of one label
#[derive(Debug, Serialize)]
pub struct ScoreInfo {
    /// Label name
    pub label: String,
    /// Values the label's matcher accepted
    pub match_count: usize,
}

/// Result of classifying a column
#[derive(Debug, Serialize)]
pub struct PredictionResult {
    /// File the column came from
    pub file: String,
    /// Column that was classified
    pub column: String,
    /// Winning label, or `Other`
    pub label: String,
    /// Values matching the winning label
    pub match_count: usize,
    /// Non-blank values considered
    pub total_count: usize,
    /// `match_count / total_count`
    pub confidence: f64,
    /// Every classifiable label, in evaluation order
    pub scores: Vec<ScoreInfo>,
}

impl PredictionResult {
    fn new(file: String, column: String, result: &ClassificationResult) -> Self {
        Self {
            file,
            column,
            label: result.label.to_string(),
            match_count: result.match_count,
            total_count: result.total_count,
            confidence: result.confidence(),
            scores: result
                .scores
                .iter()
                .map(|s| ScoreInfo {
                    label: s.label.to_string(),
                    match_count: s.match_count,
                })
                .collect(),
        }
    }
}

/// Handle column_prediction tool invocation
pub fn handle_column_prediction(
    engine: &Engine,
    workspace: &Workspace,
    params: ColumnPredictionParams,
) -> Result<PredictionResult, McpError> {
    let path = workspace.resolve(&params.file)?;
    let table = Table::from_path(&path)?;
    let result = engine.classify_column(&table, &params.column)?;

    debug!(
        file = %params.file,
        column = %params.column,
        label = %result.label,
        "Column classified"
    );
    Ok(PredictionResult::new(params.file, params.column, &result))
}
