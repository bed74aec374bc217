//! Structured records produced by the label-specific parsers

use crate::Label;

/// A telephone number split into calling code and subscriber digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPhone {
    /// ITU calling code without the `+`, when one was recognized
    pub country_code: Option<String>,
    /// Remaining decimal digits, no separators
    pub digits: String,
    /// Region name for the calling code
    pub region: Option<String>,
}

impl ParsedPhone {
    /// Canonical form: `+<code><digits>` when a code is known, else the digits
    pub fn canonical(&self) -> String {
        match &self.country_code {
            Some(code) => format!("+{}{}", code, self.digits),
            None => self.digits.clone(),
        }
    }
}

/// A company name split into base name and legal suffix
///
/// `base_name` followed by a space and `suffix` (when present) reconstructs
/// the whitespace-normalized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCompany {
    /// Name without the legal designator
    pub base_name: String,
    /// Legal designator in the input's casing
    pub suffix: Option<String>,
}

impl ParsedCompany {
    /// Rebuild the normalized company name
    ///
    /// # Examples
    ///
    /// ```
    /// use coltype_domain::ParsedCompany;
    ///
    /// let company = ParsedCompany {
    ///     base_name: "Acme Widgets".to_string(),
    ///     suffix: Some("Ltd".to_string()),
    /// };
    /// assert_eq!(company.reconstruct(), "Acme Widgets Ltd");
    /// ```
    pub fn reconstruct(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{} {}", self.base_name, suffix),
            None => self.base_name.clone(),
        }
    }
}

/// A parsed value of either parseable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRecord {
    /// Output of the phone parser
    Phone(ParsedPhone),
    /// Output of the company parser
    Company(ParsedCompany),
}

impl ParsedRecord {
    /// Label this record was parsed as
    pub fn label(&self) -> Label {
        match self {
            ParsedRecord::Phone(_) => Label::PhoneNumber,
            ParsedRecord::Company(_) => Label::CompanyName,
        }
    }
}

/// Trim and collapse every run of whitespace into a single space
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
