//! Tabular input and output
//!
//! Input files are read once, up front, into named columns. Parse results
//! are written as UTF-8 CSV with a fixed header per label.

use crate::error::{EngineError, ValueParseFailure};
use coltype_domain::{Column, Label, ParsedRecord};
use csv::{ReaderBuilder, WriterBuilder};
use std::io;
use std::path::Path;
use tracing::debug;

/// Header of the phone output file
pub const PHONE_HEADERS: [&str; 5] = ["original", "country_code", "digits", "region", "parsed"];

/// Header of the company output file
pub const COMPANY_HEADERS: [&str; 4] = ["original", "base_name", "suffix", "parsed"];

/// A whole input file as ordered, named columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table directly from columns
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let row_count = columns.iter().map(Column::len).max().unwrap_or(0);
        Self { columns, row_count }
    }

    /// Read a CSV file with a header row
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        if !path.is_file() {
            return Err(EngineError::InvalidInput(format!(
                "File not found: {}",
                path.display()
            )));
        }
        debug!("Reading table from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read CSV data with a header row
    ///
    /// Short rows are padded with empty values; a file without a header or
    /// without any data rows is `InvalidInput`.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, EngineError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(EngineError::InvalidInput("Empty file: no header row".to_string()));
        }

        let mut values: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut row_count = 0;
        for result in reader.records() {
            let record = result?;
            for (idx, column) in values.iter_mut().enumerate() {
                column.push(record.get(idx).unwrap_or_default().to_string());
            }
            row_count += 1;
        }

        if row_count == 0 {
            return Err(EngineError::InvalidInput("Empty file: no data rows".to_string()));
        }

        let columns = headers
            .iter()
            .zip(values)
            .map(|(name, values)| Column::new(name, values))
            .collect();

        Ok(Self { columns, row_count })
    }

    /// Columns in file order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Header names in file order
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Look up a column by header name, or by zero-based index if no header
    /// has that name
    pub fn column(&self, key: &str) -> Option<(usize, &Column)> {
        self.columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.name() == key)
            .or_else(|| {
                let idx: usize = key.trim().parse().ok()?;
                self.columns.get(idx).map(|c| (idx, c))
            })
    }
}

/// CSV files (`.csv`, any case) directly inside `dir`, sorted by name
pub fn list_csv_files(dir: &Path) -> Result<Vec<String>, EngineError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        EngineError::InvalidInput(format!("Cannot read directory {}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv || !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push(name.to_string());
        }
    }
    files.sort();

    debug!("Found {} CSV files in {}", files.len(), dir.display());
    Ok(files)
}

/// One input row and what the parser made of it
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// Raw input value
    pub original: String,
    /// Structured record, or the per-row failure
    pub outcome: Result<ParsedRecord, ValueParseFailure>,
}

impl ParsedRow {
    /// Whether the row parsed
    pub fn is_parsed(&self) -> bool {
        self.outcome.is_ok()
    }

    fn fields(&self, label: Label) -> Vec<String> {
        let mut fields = vec![self.original.clone()];
        match (&self.outcome, label) {
            (Ok(ParsedRecord::Phone(phone)), _) => {
                fields.push(phone.country_code.clone().unwrap_or_default());
                fields.push(phone.digits.clone());
                fields.push(phone.region.clone().unwrap_or_default());
            }
            (Ok(ParsedRecord::Company(company)), _) => {
                fields.push(company.base_name.clone());
                fields.push(company.suffix.clone().unwrap_or_default());
            }
            (Err(_), Label::PhoneNumber) => fields.extend(vec![String::new(); 3]),
            (Err(_), _) => fields.extend(vec![String::new(); 2]),
        }
        fields.push(self.is_parsed().to_string());
        fields
    }
}

/// Parse results for every row of one column
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    /// Source column name
    pub column: String,
    /// Label the column was parsed as
    pub label: Label,
    /// One entry per input row, in row order
    pub rows: Vec<ParsedRow>,
}

impl ParsedTable {
    /// Rows that produced a record
    pub fn parsed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_parsed()).count()
    }

    /// Rows flagged as unparsed
    pub fn unparsed_count(&self) -> usize {
        self.rows.len() - self.parsed_count()
    }

    /// Output header for this table's label
    pub fn headers(&self) -> &'static [&'static str] {
        match self.label {
            Label::PhoneNumber => &PHONE_HEADERS,
            _ => &COMPANY_HEADERS,
        }
    }

    /// Write the table as CSV
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), EngineError> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(self.headers())?;
        for row in &self.rows {
            writer.write_record(row.fields(self.label))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the table as CSV to a file, creating parent directories
    pub fn write_to_path(&self, path: &Path) -> Result<(), EngineError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))?;
        debug!("Wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}
