//! Column selector - picks the column of a file worth parsing

use crate::detector::TypeDetector;
use crate::error::EngineError;
use crate::table::Table;
use coltype_domain::{ClassificationResult, Column, Label, ReferenceTables};
use tracing::debug;

/// What the caller asked to parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Column name or zero-based index
    pub column: Option<String>,
    /// Label the column must have
    pub label: Option<Label>,
}

impl Selection {
    /// Select a specific column
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            column: Some(name.into()),
            label: None,
        }
    }

    /// Select the first column with a label
    pub fn label(label: Label) -> Self {
        Self {
            column: None,
            label: Some(label),
        }
    }
}

/// A column chosen for parsing, with its classification
#[derive(Debug, Clone)]
pub struct SelectedColumn<'a> {
    /// Position in the file
    pub index: usize,
    /// The column itself
    pub column: &'a Column,
    /// Its classification; always a parseable label
    pub classification: ClassificationResult,
}

/// Apply the selection policy to a table
///
/// - A named column must exist, must not be `Other`, must match the
///   requested label if one was given, and must have a parser.
/// - A requested label alone picks the first column with that label.
/// - With nothing requested, the first PhoneNumber or CompanyName column in
///   file order wins.
pub fn select_column<'a>(
    table: &'a Table,
    selection: &Selection,
    detector: &TypeDetector,
    tables: &ReferenceTables,
) -> Result<SelectedColumn<'a>, EngineError> {
    if let Some(label) = selection.label {
        if !label.has_parser() {
            return Err(EngineError::InvalidInput(format!(
                "Label {} has no structured parser",
                label
            )));
        }
    }

    match &selection.column {
        Some(key) => select_named(table, key, selection.label, detector, tables),
        None => select_first(table, selection.label, detector, tables),
    }
}

fn select_named<'a>(
    table: &'a Table,
    key: &str,
    wanted: Option<Label>,
    detector: &TypeDetector,
    tables: &ReferenceTables,
) -> Result<SelectedColumn<'a>, EngineError> {
    let (index, column) = table
        .column(key)
        .ok_or_else(|| EngineError::InvalidInput(format!("Column '{}' not found", key)))?;
    let classification = detector.detect(column, tables);

    if let Some(wanted) = wanted {
        if classification.label != wanted {
            return Err(EngineError::NoConfidentLabel {
                column: column.name().to_string(),
                detail: format!("expected {}, classified as {}", wanted, classification.label),
            });
        }
    }

    match classification.label {
        Label::Other => Err(EngineError::NoConfidentLabel {
            column: column.name().to_string(),
            detail: format!(
                "{} of {} values matched the strongest label",
                classification.match_count, classification.total_count
            ),
        }),
        label if !label.has_parser() => Err(EngineError::NoParseableColumn(format!(
            "column '{}' is {}, which has no structured parser",
            column.name(),
            label
        ))),
        _ => Ok(SelectedColumn {
            index,
            column,
            classification,
        }),
    }
}

fn select_first<'a>(
    table: &'a Table,
    wanted: Option<Label>,
    detector: &TypeDetector,
    tables: &ReferenceTables,
) -> Result<SelectedColumn<'a>, EngineError> {
    for (index, column) in table.columns().iter().enumerate() {
        let classification = detector.detect(column, tables);
        let accepted = match wanted {
            Some(wanted) => classification.label == wanted,
            None => classification.label.has_parser(),
        };
        debug!(
            column = column.name(),
            label = %classification.label,
            accepted,
            "Considered column"
        );
        if accepted {
            return Ok(SelectedColumn {
                index,
                column,
                classification,
            });
        }
    }

    Err(EngineError::NoParseableColumn(match wanted {
        Some(label) => format!("no column classifies as {}", label),
        None => "no column classifies as PhoneNumber or CompanyName".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn table() -> Table {
        Table::from_columns(vec![
            Column::from_strs("country", &["France", "Spain", "Italy"]),
            Column::from_strs("noise", &["a", "b", "c"]),
            Column::from_strs("company", &["Acme Corp", "Globex Inc", "Initech LLC"]),
            Column::from_strs("phone", &["555-123-4567", "555-987-6543", "555-222-3333"]),
        ])
    }

    fn select(selection: Selection) -> Result<(usize, Label), EngineError> {
        let detector = TypeDetector::new(&EngineConfig::default());
        let table = table();
        select_column(&table, &selection, &detector, &ReferenceTables::builtin())
            .map(|s| (s.index, s.classification.label))
    }

    #[test]
    fn test_first_parseable_column_wins() {
        assert_eq!(select(Selection::default()).unwrap(), (2, Label::CompanyName));
    }

    #[test]
    fn test_label_only() {
        assert_eq!(select(Selection::label(Label::PhoneNumber)).unwrap(), (3, Label::PhoneNumber));
    }

    #[test]
    fn test_named_column() {
        assert_eq!(select(Selection::column("phone")).unwrap(), (3, Label::PhoneNumber));
        assert_eq!(select(Selection::column("3")).unwrap(), (3, Label::PhoneNumber));
    }

    #[test]
    fn test_named_column_errors() {
        assert!(matches!(
            select(Selection::column("missing")),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            select(Selection::column("noise")),
            Err(EngineError::NoConfidentLabel { .. })
        ));
        assert!(matches!(
            select(Selection::column("country")),
            Err(EngineError::NoParseableColumn(_))
        ));
    }

    #[test]
    fn test_named_column_with_wrong_label() {
        let selection = Selection {
            column: Some("company".to_string()),
            label: Some(Label::PhoneNumber),
        };
        assert!(matches!(
            select(selection),
            Err(EngineError::NoConfidentLabel { .. })
        ));
    }

    #[test]
    fn test_unparseable_label_request() {
        assert!(matches!(
            select(Selection::label(Label::Date)),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nothing_to_parse() {
        let detector = TypeDetector::new(&EngineConfig::default());
        let table = Table::from_columns(vec![Column::from_strs("c", &["France", "Peru"])]);
        let result = select_column(&table, &Selection::default(), &detector, &ReferenceTables::builtin());
        assert!(matches!(result, Err(EngineError::NoParseableColumn(_))));
    }
}
