//! Parse file tool - Decompose the phone or company column of a file

use coltype_domain::{Label, ParsedRecord};
use coltype_engine::{Engine, ParsedRow, Selection, Table};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::Workspace;
use crate::error::McpError;

/// Parameters for parsing a file
#[derive(Debug, Deserialize)]
pub struct ParseFileParams {
    /// File name inside the data directory
    #[serde(alias = "file_path")]
    pub file: String,
    /// Column to parse, by header or zero-based index
    #[serde(default, alias = "column_name")]
    pub column: Option<String>,
    /// Label to parse as (`phone`, `company`, `PhoneNumber`, ...)
    #[serde(default)]
    pub label: Option<String>,
    /// Embed the parsed rows in the response
    #[serde(default)]
    pub inline: bool,
}

/// One parsed row as returned inline
#[derive(Debug, Serialize)]
pub struct RowInfo {
    /// Raw input value
    pub original: String,
    /// Calling code, phones only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// National digits, phones only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<String>,
    /// Calling-code region, phones only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Company name without its legal suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_name: Option<String>,
    /// Legal suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Whether the row parsed
    pub parsed: bool,
    /// Why the row did not parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ParsedRow> for RowInfo {
    fn from(row: &ParsedRow) -> Self {
        let mut info = RowInfo {
            original: row.original.clone(),
            country_code: None,
            digits: None,
            region: None,
            base_name: None,
            suffix: None,
            parsed: row.is_parsed(),
            error: None,
        };
        match &row.outcome {
            Ok(ParsedRecord::Phone(phone)) => {
                info.country_code = phone.country_code.clone();
                info.digits = Some(phone.digits.clone());
                info.region = phone.region.clone();
            }
            Ok(ParsedRecord::Company(company)) => {
                info.base_name = Some(company.base_name.clone());
                info.suffix = company.suffix.clone();
            }
            Err(failure) => info.error = Some(failure.reason.clone()),
        }
        info
    }
}

/// Result of parsing a file
#[derive(Debug, Serialize)]
pub struct ParseSummary {
    /// Input file
    pub file: String,
    /// Column that was parsed
    pub column: String,
    /// Label the column was parsed as
    pub label: String,
    /// Path of the written CSV
    pub output_file: String,
    /// Input rows
    pub row_count: usize,
    /// Rows that produced a record
    pub parsed_count: usize,
    /// Rows flagged as unparsed
    pub unparsed_count: usize,
    /// Parsed rows, when requested inline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<RowInfo>>,
}

/// Handle parse_file tool invocation
///
/// Selects the column, parses every row and writes
/// `<output_dir>/<subdirs>/<file stem>_parsed.csv`.
pub fn handle_parse_file(
    engine: &Engine,
    workspace: &Workspace,
    params: ParseFileParams,
) -> Result<ParseSummary, McpError> {
    let label = match params.label.as_deref() {
        Some(name) => Some(
            Label::parse(name)
                .ok_or_else(|| McpError::InvalidInput(format!("Unknown label: {}", name)))?,
        ),
        None => None,
    };

    let path = workspace.resolve(&params.file)?;
    let table = Table::from_path(&path)?;
    let selection = Selection {
        column: params.column,
        label,
    };
    let parsed = engine.parse_table(&table, &selection)?;

    let output_path = workspace.output_path(&params.file)?;
    parsed.write_to_path(&output_path)?;

    info!(
        file = %params.file,
        column = %parsed.column,
        parsed = parsed.parsed_count(),
        unparsed = parsed.unparsed_count(),
        output = %output_path.display(),
        "File parsed"
    );

    Ok(ParseSummary {
        file: params.file,
        column: parsed.column.clone(),
        label: parsed.label.to_string(),
        output_file: output_path.display().to_string(),
        row_count: parsed.rows.len(),
        parsed_count: parsed.parsed_count(),
        unparsed_count: parsed.unparsed_count(),
        rows: params
            .inline
            .then(|| parsed.rows.iter().map(RowInfo::from).collect()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_with(name: &str, contents: &str) -> (tempfile::TempDir, Workspace) {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join(name), contents).unwrap();
        let ws = Workspace::new(data, dir.path().join("output"));
        (dir, ws)
    }

    fn params(file: &str) -> ParseFileParams {
        ParseFileParams {
            file: file.to_string(),
            column: None,
            label: None,
            inline: false,
        }
    }

    #[test]
    fn test_params_defaults_and_aliases() {
        let params: ParseFileParams =
            serde_json::from_str(r#"{"file_path": "a.csv", "column_name": "phone"}"#).unwrap();
        assert_eq!(params.file, "a.csv");
        assert_eq!(params.column.as_deref(), Some("phone"));
        assert!(params.label.is_none());
        assert!(!params.inline);
    }

    #[test]
    fn test_writes_output_file() {
        let (_dir, ws) = workspace_with(
            "companies.csv",
            "id,company\n1,Acme Corp\n2,Globex Inc\n3,Initech LLC\n",
        );

        let summary = handle_parse_file(&Engine::default(), &ws, params("companies.csv")).unwrap();
        assert_eq!(summary.column, "company");
        assert_eq!(summary.label, "CompanyName");
        assert_eq!(summary.parsed_count, 3);
        assert!(summary.rows.is_none());

        let written = std::fs::read_to_string(ws.output_dir().join("companies_parsed.csv")).unwrap();
        assert!(written.starts_with("original,base_name,suffix,parsed\n"));
        assert!(written.contains("Acme Corp,Acme,Corp,true"));
    }

    #[test]
    fn test_inline_rows() {
        let (_dir, ws) = workspace_with("phone.csv", "phone\n+1-555-123-4567\n555.987.6543\n");
        let mut request = params("phone.csv");
        request.inline = true;

        let summary = handle_parse_file(&Engine::default(), &ws, request).unwrap();
        let rows = summary.rows.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country_code.as_deref(), Some("1"));
        assert_eq!(rows[0].digits.as_deref(), Some("5551234567"));
        assert_eq!(rows[1].country_code, None);
        assert_eq!(rows[1].digits.as_deref(), Some("5559876543"));
    }

    #[test]
    fn test_same_name_in_subdirectory_does_not_overwrite() {
        let (_dir, ws) = workspace_with("phone.csv", "phone\n555-123-4567\n");
        std::fs::create_dir_all(ws.data_dir().join("sub")).unwrap();
        std::fs::write(
            ws.data_dir().join("sub").join("phone.csv"),
            "phone\n555.987.6543\n555.222.3333\n",
        )
        .unwrap();

        let top = handle_parse_file(&Engine::default(), &ws, params("phone.csv")).unwrap();
        let nested = handle_parse_file(&Engine::default(), &ws, params("sub/phone.csv")).unwrap();
        assert_ne!(top.output_file, nested.output_file);

        let top_text = std::fs::read_to_string(&top.output_file).unwrap();
        let nested_text = std::fs::read_to_string(&nested.output_file).unwrap();
        assert_eq!(top_text.lines().count(), 2);
        assert_eq!(nested_text.lines().count(), 3);
    }

    #[test]
    fn test_unknown_label_is_invalid_input() {
        let (_dir, ws) = workspace_with("phone.csv", "phone\n555-123-4567\n");
        let mut request = params("phone.csv");
        request.label = Some("zipcode".into());

        assert!(matches!(
            handle_parse_file(&Engine::default(), &ws, request),
            Err(McpError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_no_parseable_column() {
        let (_dir, ws) = workspace_with("dates.csv", "when\n2024-01-15\n2023-12-31\n");
        assert!(matches!(
            handle_parse_file(&Engine::default(), &ws, params("dates.csv")),
            Err(McpError::NoParseableColumn(_))
        ));
    }
}
