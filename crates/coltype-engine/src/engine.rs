//! The engine: reference tables, detector and parsers behind one facade

use crate::config::EngineConfig;
use crate::detector::TypeDetector;
use crate::error::{EngineError, ValueParseFailure};
use crate::parsers::{CompanyParser, PhoneParser};
use crate::reference::load_reference_tables;
use crate::selector::{select_column, SelectedColumn, Selection};
use crate::table::{ParsedRow, ParsedTable, Table};
use coltype_domain::traits::StructuredParser;
use coltype_domain::{ClassificationResult, Column, Label, ParsedRecord, ReferenceTables};
use tracing::{debug, info, warn};

/// Classification and extraction engine
///
/// Owns the reference tables, built once, and lends them to every matcher
/// and parser call. All operations are pure functions of their input.
pub struct Engine {
    config: EngineConfig,
    tables: ReferenceTables,
    detector: TypeDetector,
    phone: PhoneParser,
    company: CompanyParser,
}

impl Engine {
    /// Create an engine, loading reference tables per the configuration
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;
        let tables = load_reference_tables(&config.reference)?;
        Self::with_tables(config, tables)
    }

    /// Create an engine around already-built reference tables
    pub fn with_tables(config: EngineConfig, tables: ReferenceTables) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;
        Ok(Self {
            detector: TypeDetector::new(&config),
            phone: PhoneParser::new(config.phone),
            company: CompanyParser,
            config,
            tables,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shared reference tables
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Classify one column
    pub fn classify(&self, column: &Column) -> ClassificationResult {
        self.detector.detect(column, &self.tables)
    }

    /// Classify a column of a table addressed by name or index
    pub fn classify_column(&self, table: &Table, key: &str) -> Result<ClassificationResult, EngineError> {
        let (_, column) = table
            .column(key)
            .ok_or_else(|| EngineError::InvalidInput(format!("Column '{}' not found", key)))?;
        Ok(self.classify(column))
    }

    /// Choose the column of a table to parse
    pub fn select<'a>(&self, table: &'a Table, selection: &Selection) -> Result<SelectedColumn<'a>, EngineError> {
        select_column(table, selection, &self.detector, &self.tables)
    }

    /// Parse a single value as a parseable label
    pub fn parse_value(&self, label: Label, value: &str) -> Result<ParsedRecord, ValueParseFailure> {
        match label {
            Label::PhoneNumber => self.phone.parse(value, &self.tables).map(ParsedRecord::Phone),
            Label::CompanyName => self.company.parse(value, &self.tables).map(ParsedRecord::Company),
            other => Err(ValueParseFailure::new(other, value, "label has no structured parser")),
        }
    }

    /// Parse every row of a column as `label`
    ///
    /// Rows that fail validation are kept and flagged; they never abort the
    /// batch.
    pub fn parse_column(&self, column: &Column, label: Label) -> Result<ParsedTable, EngineError> {
        if !label.has_parser() {
            return Err(EngineError::InvalidInput(format!(
                "Label {} has no structured parser",
                label
            )));
        }

        let rows: Vec<ParsedRow> = column
            .values()
            .iter()
            .map(|value| {
                let outcome = self.parse_value(label, value);
                if let Err(failure) = &outcome {
                    debug!("Row not parsed: {}", failure);
                }
                ParsedRow {
                    original: value.clone(),
                    outcome,
                }
            })
            .collect();

        let parsed = ParsedTable {
            column: column.name().to_string(),
            label,
            rows,
        };

        if parsed.unparsed_count() > 0 {
            warn!(
                column = column.name(),
                unparsed = parsed.unparsed_count(),
                "Some rows failed {} validation",
                label
            );
        }
        Ok(parsed)
    }

    /// Select a column of the table and parse it
    pub fn parse_table(&self, table: &Table, selection: &Selection) -> Result<ParsedTable, EngineError> {
        let selected = self.select(table, selection)?;
        info!(
            column = selected.column.name(),
            label = %selected.classification.label,
            "Parsing column"
        );
        self.parse_column(selected.column, selected.classification.label)
    }
}

impl Default for Engine {
    /// Default configuration with the built-in reference tables
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            detector: TypeDetector::new(&config),
            phone: PhoneParser::new(config.phone),
            company: CompanyParser,
            config,
            tables: ReferenceTables::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_send_and_sync() {
        assert_send_sync::<Engine>();
        assert_send_sync::<TypeDetector>();
    }

    #[test]
    fn test_shared_engine_classifies_columns_in_parallel() {
        let engine = Arc::new(Engine::default());
        let columns = vec![
            Column::from_strs("phone", &["+1-555-123-4567", "555.987.6543"]),
            Column::from_strs("company", &["Acme Corp", "Globex Inc"]),
            Column::from_strs("country", &["France", "Japan"]),
        ];

        let handles: Vec<_> = columns
            .into_iter()
            .map(|column| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.classify(&column).label)
            })
            .collect();
        let labels: Vec<Label> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(labels, vec![Label::PhoneNumber, Label::CompanyName, Label::Country]);
    }

    #[test]
    fn test_parse_value_dispatches_on_label() {
        let engine = Engine::default();
        assert!(matches!(
            engine.parse_value(Label::PhoneNumber, "555-123-4567"),
            Ok(ParsedRecord::Phone(_))
        ));
        assert!(matches!(
            engine.parse_value(Label::CompanyName, "Acme Corp"),
            Ok(ParsedRecord::Company(_))
        ));
        assert!(engine.parse_value(Label::Country, "France").is_err());
    }

    #[test]
    fn test_parse_column_rejects_unparseable_label() {
        let engine = Engine::default();
        let column = Column::from_strs("c", &["France"]);
        assert!(matches!(
            engine.parse_column(&column, Label::Country),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.phone.max_digits = 3;
        assert!(matches!(Engine::new(config), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_classify_column_by_key() {
        let engine = Engine::default();
        let table = Table::from_columns(vec![Column::from_strs("phone", &["555-123-4567"])]);
        assert_eq!(engine.classify_column(&table, "phone").unwrap().label, Label::PhoneNumber);
        assert!(engine.classify_column(&table, "email").is_err());
    }
}
