//! Loading the reference tables, with optional file overrides

use crate::config::ReferencePaths;
use crate::error::EngineError;
use coltype_domain::reference::{
    list_entries, BUILTIN_CALLING_CODES, BUILTIN_COUNTRIES, BUILTIN_LEGAL_SUFFIXES,
};
use coltype_domain::ReferenceTables;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info, warn};

/// Build the reference tables once, reading any override files
pub fn load_reference_tables(paths: &ReferencePaths) -> Result<ReferenceTables, EngineError> {
    let countries = read_or_builtin(paths.countries.as_deref(), BUILTIN_COUNTRIES)?;
    let legal_suffixes = read_or_builtin(paths.legal_suffixes.as_deref(), BUILTIN_LEGAL_SUFFIXES)?;
    let calling_codes = read_or_builtin(paths.calling_codes.as_deref(), BUILTIN_CALLING_CODES)?;

    let tables = ReferenceTables::from_lists(&countries, &legal_suffixes, &calling_codes);

    let listed = list_entries(&calling_codes).count();
    if listed > tables.calling_code_count() {
        warn!(
            skipped = listed - tables.calling_code_count(),
            "Skipped malformed or duplicate calling-code lines"
        );
    }

    info!(
        countries = tables.country_count(),
        legal_suffixes = tables.legal_suffix_count(),
        calling_codes = tables.calling_code_count(),
        "Reference tables loaded"
    );
    Ok(tables)
}

fn read_or_builtin(
    path: Option<&Path>,
    builtin: &'static str,
) -> Result<Cow<'static, str>, EngineError> {
    match path {
        Some(path) => {
            debug!("Reading reference list from {}", path.display());
            std::fs::read_to_string(path).map(Cow::Owned).map_err(|e| {
                EngineError::Config(format!(
                    "Failed to read reference list {}: {}",
                    path.display(),
                    e
                ))
            })
        }
        None => Ok(Cow::Borrowed(builtin)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_when_no_overrides() {
        let tables = load_reference_tables(&ReferencePaths::default()).unwrap();
        assert!(tables.is_country("France"));
        assert!(tables.is_legal_suffix("Inc"));
    }

    #[test]
    fn test_override_replaces_one_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suffixes.txt");
        std::fs::write(&path, "# custom\nhf\n").unwrap();

        let paths = ReferencePaths {
            legal_suffixes: Some(path),
            ..ReferencePaths::default()
        };
        let tables = load_reference_tables(&paths).unwrap();
        assert!(tables.is_legal_suffix("HF"));
        assert!(!tables.is_legal_suffix("Inc"));
        assert!(tables.is_country("France"));
    }

    #[test]
    fn test_missing_override_is_config_error() {
        let paths = ReferencePaths {
            countries: Some("/nonexistent/countries.txt".into()),
            ..ReferencePaths::default()
        };
        assert!(matches!(
            load_reference_tables(&paths),
            Err(EngineError::Config(_))
        ));
    }
}
