//! Reference tables - static lookups shared read-only by every matcher and parser

use std::collections::{HashMap, HashSet};

/// Built-in country list, one name per line
pub const BUILTIN_COUNTRIES: &str = include_str!("../data/countries.txt");

/// Built-in legal-entity suffix list, one designator per line
pub const BUILTIN_LEGAL_SUFFIXES: &str = include_str!("../data/legal_suffixes.txt");

/// Built-in ITU calling codes, `<code> <region>` per line
pub const BUILTIN_CALLING_CODES: &str = include_str!("../data/calling_codes.txt");

/// Longest ITU country calling code
pub const MAX_CALLING_CODE_LEN: usize = 3;

/// Immutable lookup tables
///
/// Built once at start-up and passed by reference into every matcher and
/// parser call. Countries and suffixes are stored lowercased; lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    countries: HashSet<String>,
    legal_suffixes: HashSet<String>,
    calling_codes: HashMap<String, String>,
}

impl ReferenceTables {
    /// Tables built from the lists embedded in this crate
    pub fn builtin() -> Self {
        Self::from_lists(
            BUILTIN_COUNTRIES,
            BUILTIN_LEGAL_SUFFIXES,
            BUILTIN_CALLING_CODES,
        )
    }

    /// Build tables from list text
    ///
    /// Each list has one entry per line; blank lines and lines starting with
    /// `#` are ignored. Calling-code lines whose first field is not 1 to 3
    /// ASCII digits are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use coltype_domain::ReferenceTables;
    ///
    /// let tables = ReferenceTables::from_lists("France\n", "# suffixes\nSARL\n", "33 France\n");
    /// assert!(tables.is_country("  france "));
    /// assert!(tables.is_legal_suffix("sarl"));
    /// assert_eq!(tables.calling_code_region("33"), Some("France"));
    /// ```
    pub fn from_lists(countries: &str, legal_suffixes: &str, calling_codes: &str) -> Self {
        Self {
            countries: list_entries(countries).map(str::to_lowercase).collect(),
            legal_suffixes: list_entries(legal_suffixes)
                .map(str::to_lowercase)
                .collect(),
            calling_codes: list_entries(calling_codes)
                .filter_map(parse_calling_code)
                .collect(),
        }
    }

    /// Whether the trimmed value is a known country name
    pub fn is_country(&self, value: &str) -> bool {
        self.countries.contains(&value.trim().to_lowercase())
    }

    /// Whether the whole token is a known legal-entity suffix
    pub fn is_legal_suffix(&self, token: &str) -> bool {
        self.legal_suffixes.contains(&token.to_lowercase())
    }

    /// Region name for a calling code (digits only, no `+`)
    pub fn calling_code_region(&self, code: &str) -> Option<&str> {
        self.calling_codes.get(code).map(String::as_str)
    }

    /// Number of country names
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of legal suffixes
    pub fn legal_suffix_count(&self) -> usize {
        self.legal_suffixes.len()
    }

    /// Number of calling codes
    pub fn calling_code_count(&self) -> usize {
        self.calling_codes.len()
    }
}

/// Meaningful lines of a reference list: trimmed, no blanks, no `#` comments
pub fn list_entries(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn parse_calling_code(line: &str) -> Option<(String, String)> {
    let mut fields = line.split_whitespace();
    let code = fields.next()?;
    if code.is_empty()
        || code.len() > MAX_CALLING_CODE_LEN
        || !code.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let region = fields.collect::<Vec<_>>().join(" ");
    let region = if region.is_empty() {
        format!("+{}", code)
    } else {
        region
    };
    Some((code.to_string(), region))
}
