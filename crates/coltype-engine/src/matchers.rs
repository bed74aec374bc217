//! Value matchers - one pure predicate per classifiable label
//!
//! Each matcher looks at a single value and the shared reference tables and
//! nothing else, so evaluation order across labels never changes a result.

use crate::config::PhoneRules;
use chrono::NaiveDate;
use coltype_domain::traits::ValueMatcher;
use coltype_domain::{Label, ReferenceTables};
use regex::Regex;
use std::sync::LazyLock;

/// Separators removed before a value is checked as a phone number
const PHONE_SEPARATORS: [char; 4] = ['-', '.', '(', ')'];

/// A phone-like value reduced to its digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhoneShape {
    /// Whether the value started with `+`
    pub international: bool,
    /// Decimal digits only
    pub digits: String,
}

/// Strip whitespace and separators; `None` if anything but digits and one
/// leading `+` remains
pub(crate) fn phone_shape(value: &str) -> Option<PhoneShape> {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !PHONE_SEPARATORS.contains(c))
        .collect();

    let (international, rest) = match compact.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, compact.as_str()),
    };

    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(PhoneShape {
        international,
        digits: rest.to_string(),
    })
}

/// Field order of a date layout
#[derive(Debug, Clone, Copy)]
enum FieldOrder {
    YearMonthDay,
    MonthDayYear,
    DayMonthYear,
}

struct DateLayout {
    pattern: Regex,
    order: FieldOrder,
}

fn layout(pattern: &str, order: FieldOrder) -> DateLayout {
    DateLayout {
        pattern: Regex::new(pattern).expect("valid regex"),
        order,
    }
}

static DATE_LAYOUTS: LazyLock<Vec<DateLayout>> = LazyLock::new(|| {
    vec![
        layout(r"^(\d{4})-(\d{1,2})-(\d{1,2})$", FieldOrder::YearMonthDay),
        layout(r"^(\d{4})/(\d{1,2})/(\d{1,2})$", FieldOrder::YearMonthDay),
        layout(r"^(\d{1,2})/(\d{1,2})/(\d{4})$", FieldOrder::MonthDayYear),
        layout(r"^(\d{1,2})-(\d{1,2})-(\d{4})$", FieldOrder::DayMonthYear),
        layout(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$", FieldOrder::DayMonthYear),
    ]
});

/// Interpret a value as a calendar date using the fixed layouts
///
/// Returns `None` when no layout matches or the fields do not form a real
/// date (month 13, April 31, February 30 in any year).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_LAYOUTS.iter().find_map(|layout| {
        let caps = layout.pattern.captures(value)?;
        let a: u32 = caps[1].parse().ok()?;
        let b: u32 = caps[2].parse().ok()?;
        let c: u32 = caps[3].parse().ok()?;
        let (year, month, day) = match layout.order {
            FieldOrder::YearMonthDay => (a, b, c),
            FieldOrder::MonthDayYear => (c, a, b),
            FieldOrder::DayMonthYear => (c, b, a),
        };
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
    })
}

/// Telephone numbers: 7 to 15 digits after stripping separators
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneMatcher {
    rules: PhoneRules,
}

impl PhoneMatcher {
    /// Create a matcher with the given digit bounds
    pub fn new(rules: PhoneRules) -> Self {
        Self { rules }
    }
}

impl ValueMatcher for PhoneMatcher {
    fn label(&self) -> Label {
        Label::PhoneNumber
    }

    fn matches(&self, value: &str, _tables: &ReferenceTables) -> bool {
        // Date layouts such as 2024-01-05 reduce to eight digits; they belong to Date.
        match phone_shape(value) {
            Some(shape) => self.rules.accepts_len(shape.digits.len()) && parse_date(value).is_none(),
            None => false,
        }
    }
}

/// Calendar dates in one of the fixed layouts
#[derive(Debug, Clone, Copy, Default)]
pub struct DateMatcher;

impl ValueMatcher for DateMatcher {
    fn label(&self) -> Label {
        Label::Date
    }

    fn matches(&self, value: &str, _tables: &ReferenceTables) -> bool {
        parse_date(value).is_some()
    }
}

/// Exact, case-insensitive country names
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryMatcher;

impl ValueMatcher for CountryMatcher {
    fn label(&self) -> Label {
        Label::Country
    }

    fn matches(&self, value: &str, tables: &ReferenceTables) -> bool {
        tables.is_country(value)
    }
}

/// Names whose final token is a legal-entity suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyMatcher;

impl ValueMatcher for CompanyMatcher {
    fn label(&self) -> Label {
        Label::CompanyName
    }

    fn matches(&self, value: &str, tables: &ReferenceTables) -> bool {
        split_legal_suffix(value, tables).is_some()
    }
}

/// Split off a trailing legal suffix: `(base tokens, suffix token)`
///
/// A lone suffix with nothing before it is not a company name.
pub(crate) fn split_legal_suffix<'a>(
    value: &'a str,
    tables: &ReferenceTables,
) -> Option<(Vec<&'a str>, &'a str)> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let (suffix, base) = tokens.split_last()?;
    if base.is_empty() || !tables.is_legal_suffix(suffix) {
        return None;
    }
    Some((base.to_vec(), suffix))
}

/// The four matchers in evaluation order
pub fn default_matchers(rules: PhoneRules) -> Vec<Box<dyn ValueMatcher>> {
    vec![
        Box::new(PhoneMatcher::new(rules)),
        Box::new(DateMatcher),
        Box::new(CountryMatcher),
        Box::new(CompanyMatcher),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ReferenceTables {
        ReferenceTables::builtin()
    }

    #[test]
    fn test_phone_accepts_common_formats() {
        let m = PhoneMatcher::default();
        let t = tables();
        for value in [
            "+1-555-123-4567",
            "555.987.6543",
            "(555) 123-4567",
            "+44 20 7946 0958",
            "5551234",
            "  +91 98765 43210  ",
        ] {
            assert!(m.matches(value, &t), "expected phone: {}", value);
        }
    }

    #[test]
    fn test_phone_rejects_letters_and_bad_lengths() {
        let m = PhoneMatcher::default();
        let t = tables();
        for value in [
            "555-CALL-NOW",
            "123456",
            "1234567890123456",
            "+",
            "",
            "1+5551234567",
            "555/123/4567",
        ] {
            assert!(!m.matches(value, &t), "expected non-phone: {}", value);
        }
    }

    #[test]
    fn test_phone_leaves_dates_to_date_matcher() {
        let m = PhoneMatcher::default();
        assert!(!m.matches("2024-01-05", &tables()));
        assert!(!m.matches("05-01-2024", &tables()));
        // Not a valid calendar date, so it stays phone-shaped
        assert!(m.matches("2024-13-45", &tables()));
    }

    #[test]
    fn test_phone_shape() {
        let shape = phone_shape("+1 (555) 123-4567").unwrap();
        assert!(shape.international);
        assert_eq!(shape.digits, "15551234567");
        assert!(phone_shape("12a4").is_none());
    }

    #[test]
    fn test_date_layouts() {
        assert_eq!(parse_date("2024-01-05"), NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(parse_date("2024/1/5"), NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(parse_date("12/25/2023"), NaiveDate::from_ymd_opt(2023, 12, 25));
        assert_eq!(parse_date("25-12-2023"), NaiveDate::from_ymd_opt(2023, 12, 25));
        assert_eq!(parse_date("08.02.2020"), NaiveDate::from_ymd_opt(2020, 2, 8));
        assert_eq!(parse_date(" 2020-02-29 "), NaiveDate::from_ymd_opt(2020, 2, 29));
    }

    #[test]
    fn test_date_rejects_invalid_calendar_values() {
        let m = DateMatcher;
        let t = tables();
        for value in [
            "2024-13-01",
            "2024-00-10",
            "2024-04-31",
            "2023-02-29",
            "13/01/2024",
            "32-01-2024",
            "January 5, 2024",
            "2024-01",
            "",
        ] {
            assert!(!m.matches(value, &t), "expected non-date: {}", value);
        }
    }

    #[test]
    fn test_country_exact_case_insensitive() {
        let m = CountryMatcher;
        let t = tables();
        assert!(m.matches("France", &t));
        assert!(m.matches("  united kingdom ", &t));
        assert!(!m.matches("Frances", &t));
        assert!(!m.matches("Republic of France", &t));
    }

    #[test]
    fn test_company_final_token_suffix() {
        let m = CompanyMatcher;
        let t = tables();
        assert!(m.matches("Acme Corp", &t));
        assert!(m.matches("Globex inc", &t));
        assert!(m.matches("Initech   LLC", &t));
        assert!(m.matches("Wayne Enterprises Inc.", &t));
        assert!(!m.matches("Inc Magazine", &t));
        assert!(!m.matches("LLC", &t));
        assert!(!m.matches("Acme", &t));
    }

    #[test]
    fn test_default_matchers_follow_label_order() {
        let labels: Vec<Label> = default_matchers(PhoneRules::default())
            .iter()
            .map(|m| m.label())
            .collect();
        assert_eq!(labels, Label::CLASSIFIABLE.to_vec());
    }
}
