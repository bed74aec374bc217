//! Label module - the semantic categories a column can be classified into

use std::fmt;

/// Semantic label of a column
///
/// `Other` is the fallback when no label is confident enough or the
/// strongest labels tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Telephone numbers
    PhoneNumber,

    /// Company names ending in a legal-entity suffix
    CompanyName,

    /// Country names
    Country,

    /// Calendar dates
    Date,

    /// No confident label
    Other,
}

impl Label {
    /// Labels that have a value matcher, in evaluation order.
    ///
    /// The detector ranks these and never produces `Other` from a matcher.
    pub const CLASSIFIABLE: [Label; 4] = [
        Label::PhoneNumber,
        Label::Date,
        Label::Country,
        Label::CompanyName,
    ];

    /// Labels that have a structured parser, in selection priority order.
    pub const PARSEABLE: [Label; 2] = [Label::PhoneNumber, Label::CompanyName];

    /// Get the label name as it appears in output and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::PhoneNumber => "PhoneNumber",
            Label::CompanyName => "CompanyName",
            Label::Country => "Country",
            Label::Date => "Date",
            Label::Other => "Other",
        }
    }

    /// Parse a label leniently: canonical names, snake case and short forms
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "phonenumber" | "phone" => Some(Label::PhoneNumber),
            "companyname" | "company" => Some(Label::CompanyName),
            "country" => Some(Label::Country),
            "date" => Some(Label::Date),
            "other" => Some(Label::Other),
            _ => None,
        }
    }

    /// Whether values of this label can be decomposed by a structured parser
    pub fn has_parser(&self) -> bool {
        Self::PARSEABLE.contains(self)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid label: {}", s))
    }
}
