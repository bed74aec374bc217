//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use coltype_domain::ClassificationResult;
use coltype_engine::ParsedTable;
use colored::*;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a column classification.
    pub fn format_prediction(&self, column: &str, result: &ClassificationResult) -> Result<String> {
        match self.format {
            OutputFormat::Quiet => Ok(result.label.to_string()),
            OutputFormat::Json => self.format_prediction_json(column, result),
            OutputFormat::Table => Ok(self.format_prediction_table(column, result)),
        }
    }

    fn format_prediction_json(&self, column: &str, result: &ClassificationResult) -> Result<String> {
        let scores: Vec<serde_json::Value> = result
            .scores
            .iter()
            .map(|s| {
                serde_json::json!({
                    "label": s.label.as_str(),
                    "match_count": s.match_count,
                })
            })
            .collect();

        let value = serde_json::json!({
            "column": column,
            "label": result.label.as_str(),
            "match_count": result.match_count,
            "total_count": result.total_count,
            "confidence": result.confidence(),
            "scores": scores,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_prediction_table(&self, column: &str, result: &ClassificationResult) -> String {
        let headline = format!(
            "Column '{}': {} ({}/{} values, {:.0}%)",
            column,
            result.label,
            result.match_count,
            result.total_count,
            result.confidence() * 100.0
        );
        let headline = if result.is_confident() {
            self.success(&headline)
        } else {
            self.warning(&headline)
        };

        let mut builder = Builder::default();
        builder.push_record(["Label", "Matches", "Ratio"]);
        for score in &result.scores {
            builder.push_record([
                score.label.to_string(),
                score.match_count.to_string(),
                format!("{:.2}", score.ratio(result.total_count)),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", headline, table)
    }

    /// Format the outcome of a parse.
    pub fn format_parse_summary(&self, parsed: &ParsedTable, output: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Quiet => Ok(output.display().to_string()),
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "column": parsed.column,
                    "label": parsed.label.as_str(),
                    "output_file": output.display().to_string(),
                    "row_count": parsed.rows.len(),
                    "parsed_count": parsed.parsed_count(),
                    "unparsed_count": parsed.unparsed_count(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut lines = vec![self.success(&format!(
                    "Parsed column '{}' as {}: {} parsed, {} unparsed",
                    parsed.column,
                    parsed.label,
                    parsed.parsed_count(),
                    parsed.unparsed_count()
                ))];
                if parsed.unparsed_count() > 0 {
                    lines.push(self.warning("Unparsed rows are kept with parsed=false"));
                }
                lines.push(self.info(&format!("Wrote {}", output.display())));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a file listing.
    pub fn format_files(&self, files: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(files)?),
            OutputFormat::Table if files.is_empty() => Ok(self.colorize("No CSV files found.", "yellow")),
            OutputFormat::Table | OutputFormat::Quiet => Ok(files.join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
