//! Structured parsers for the two labels that support extraction

use crate::config::PhoneRules;
use crate::error::ValueParseFailure;
use crate::matchers::{phone_shape, split_legal_suffix, PhoneMatcher};
use coltype_domain::traits::{StructuredParser, ValueMatcher};
use coltype_domain::{normalize_whitespace, Label, ParsedCompany, ParsedPhone, ReferenceTables};

/// Splits phone numbers into calling code and digits
///
/// Every value is re-checked against the phone matcher first; anything the
/// detector would reject is a parse failure, never a best-effort guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneParser {
    rules: PhoneRules,
    matcher: PhoneMatcher,
}

impl PhoneParser {
    /// Create a parser with the given digit bounds
    pub fn new(rules: PhoneRules) -> Self {
        Self {
            rules,
            matcher: PhoneMatcher::new(rules),
        }
    }

    /// Find the calling code at the front of `digits`
    ///
    /// Calling codes are prefix-free, so the first known code found while
    /// growing the prefix is the only candidate. It is accepted only if the
    /// remaining digits still form a plausible number.
    fn split_calling_code<'a>(
        &self,
        digits: &'a str,
        tables: &'a ReferenceTables,
    ) -> Option<(&'a str, &'a str, &'a str)> {
        let longest = self.rules.max_country_code_digits.min(digits.len());
        for len in 1..=longest {
            let (code, rest) = digits.split_at(len);
            if let Some(region) = tables.calling_code_region(code) {
                return self
                    .rules
                    .accepts_len(rest.len())
                    .then_some((code, rest, region));
            }
        }
        None
    }
}

impl StructuredParser for PhoneParser {
    type Output = ParsedPhone;
    type Error = ValueParseFailure;

    fn label(&self) -> Label {
        Label::PhoneNumber
    }

    fn parse(&self, value: &str, tables: &ReferenceTables) -> Result<ParsedPhone, ValueParseFailure> {
        let shape = phone_shape(value)
            .filter(|_| self.matcher.matches(value, tables))
            .ok_or_else(|| ValueParseFailure::new(Label::PhoneNumber, value, "not a phone number"))?;

        if shape.international {
            if let Some((code, rest, region)) = self.split_calling_code(&shape.digits, tables) {
                return Ok(ParsedPhone {
                    country_code: Some(code.to_string()),
                    digits: rest.to_string(),
                    region: Some(region.to_string()),
                });
            }
        }

        Ok(ParsedPhone {
            country_code: None,
            digits: shape.digits,
            region: None,
        })
    }
}

/// Splits company names into base name and legal suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyParser;

impl StructuredParser for CompanyParser {
    type Output = ParsedCompany;
    type Error = ValueParseFailure;

    fn label(&self) -> Label {
        Label::CompanyName
    }

    fn parse(&self, value: &str, tables: &ReferenceTables) -> Result<ParsedCompany, ValueParseFailure> {
        let normalized = normalize_whitespace(value);
        if normalized.is_empty() {
            return Err(ValueParseFailure::new(Label::CompanyName, value, "blank value"));
        }

        Ok(match split_legal_suffix(&normalized, tables) {
            Some((base, suffix)) => ParsedCompany {
                base_name: base.join(" "),
                suffix: Some(suffix.to_string()),
            },
            None => ParsedCompany {
                base_name: normalized,
                suffix: None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(value: &str) -> Result<ParsedPhone, ValueParseFailure> {
        PhoneParser::default().parse(value, &ReferenceTables::builtin())
    }

    fn company(value: &str) -> Result<ParsedCompany, ValueParseFailure> {
        CompanyParser.parse(value, &ReferenceTables::builtin())
    }

    #[test]
    fn test_phone_with_country_code() {
        let parsed = phone("+1-555-123-4567").unwrap();
        assert_eq!(parsed.country_code.as_deref(), Some("1"));
        assert_eq!(parsed.digits, "5551234567");
        assert_eq!(parsed.region.as_deref(), Some("North America"));
    }

    #[test]
    fn test_phone_without_plus_has_no_country_code() {
        let parsed = phone("555.987.6543").unwrap();
        assert_eq!(parsed.country_code, None);
        assert_eq!(parsed.digits, "5559876543");
    }

    #[test]
    fn test_phone_two_and_three_digit_codes() {
        let uk = phone("+44 20 7946 0958").unwrap();
        assert_eq!(uk.country_code.as_deref(), Some("44"));
        assert_eq!(uk.digits, "2079460958");

        let ireland = phone("+353 1 234 5678").unwrap();
        assert_eq!(ireland.country_code.as_deref(), Some("353"));
        assert_eq!(ireland.digits, "12345678");
    }

    #[test]
    fn test_phone_code_kept_when_remainder_too_short() {
        // +1 would leave six digits, below the plausible minimum
        let parsed = phone("+1 555 123").unwrap();
        assert_eq!(parsed.country_code, None);
        assert_eq!(parsed.digits, "1555123");
    }

    #[test]
    fn test_phone_unknown_code() {
        // No calling code starts with 0
        let parsed = phone("+0 555 123 4567").unwrap();
        assert_eq!(parsed.country_code, None);
        assert_eq!(parsed.digits, "05551234567");
    }

    #[test]
    fn test_phone_failures() {
        for value in ["", "call me", "12345", "2024-01-05"] {
            let err = phone(value).unwrap_err();
            assert_eq!(err.label, Label::PhoneNumber);
            assert_eq!(err.value, value);
        }
    }

    #[test]
    fn test_company_examples() {
        let cases = [
            ("Acme Corp", "Acme", "Corp"),
            ("Globex Inc", "Globex", "Inc"),
            ("Initech LLC", "Initech", "LLC"),
            ("  Wayne   Enterprises  inc. ", "Wayne Enterprises", "inc."),
        ];
        for (input, base, suffix) in cases {
            let parsed = company(input).unwrap();
            assert_eq!(parsed.base_name, base);
            assert_eq!(parsed.suffix.as_deref(), Some(suffix));
        }
    }

    #[test]
    fn test_company_without_suffix() {
        let parsed = company(" Umbrella   Health ").unwrap();
        assert_eq!(parsed.base_name, "Umbrella Health");
        assert_eq!(parsed.suffix, None);

        let lone = company("LLC").unwrap();
        assert_eq!(lone.base_name, "LLC");
        assert_eq!(lone.suffix, None);
    }

    #[test]
    fn test_company_reconstruction_is_idempotent() {
        let parsed = company("Stark   Industries GmbH").unwrap();
        let again = company(&parsed.reconstruct()).unwrap();
        assert_eq!(parsed, again);
        assert_eq!(parsed.reconstruct(), "Stark Industries GmbH");
    }

    #[test]
    fn test_company_blank_is_failure() {
        let err = company("   ").unwrap_err();
        assert_eq!(err.label, Label::CompanyName);
    }
}
