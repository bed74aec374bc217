//! Configuration for the engine

use crate::error::EngineError;
use coltype_domain::reference::MAX_CALLING_CODE_LEN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Digit bounds used by the phone matcher and parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneRules {
    /// Fewest digits a phone number may have
    pub min_digits: usize,

    /// Most digits a phone number may have (ITU E.164 allows 15)
    pub max_digits: usize,

    /// Longest calling code the parser tries after a leading `+`
    pub max_country_code_digits: usize,
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            min_digits: 7,
            max_digits: 15,
            max_country_code_digits: 3,
        }
    }
}

impl PhoneRules {
    /// Whether a digit count falls inside the plausible range
    pub fn accepts_len(&self, len: usize) -> bool {
        (self.min_digits..=self.max_digits).contains(&len)
    }
}

/// Optional files replacing the built-in reference lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferencePaths {
    /// Country names, one per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<PathBuf>,

    /// Legal-entity suffixes, one per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_suffixes: Option<PathBuf>,

    /// `<code> <region>` calling-code lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calling_codes: Option<PathBuf>,
}

/// Configuration for the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ratio a label must strictly exceed to win a column
    pub min_confidence: f64,

    /// Phone digit bounds
    pub phone: PhoneRules,

    /// Reference list overrides
    pub reference: ReferencePaths,
}

impl Default for EngineConfig {
    /// Majority rule: more than half of the non-blank values must match
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
            phone: PhoneRules::default(),
            reference: ReferencePaths::default(),
        }
    }
}

impl EngineConfig {
    /// Strict preset: a label needs 80% of the values
    pub fn strict() -> Self {
        Self {
            min_confidence: 0.8,
            ..Self::default()
        }
    }

    /// Lenient preset: a label needs 30% of the values
    pub fn lenient() -> Self {
        Self {
            min_confidence: 0.3,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..1.0).contains(&self.min_confidence) {
            return Err("min_confidence must be in [0.0, 1.0)".to_string());
        }
        if self.phone.min_digits == 0 {
            return Err("phone.min_digits must be greater than 0".to_string());
        }
        if self.phone.min_digits > self.phone.max_digits {
            return Err("phone.min_digits cannot exceed phone.max_digits".to_string());
        }
        if self.phone.max_country_code_digits == 0
            || self.phone.max_country_code_digits > MAX_CALLING_CODE_LEN
        {
            return Err(format!(
                "phone.max_country_code_digits must be between 1 and {}",
                MAX_CALLING_CODE_LEN
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents).map_err(EngineError::Config)?;
        config.validate().map_err(EngineError::Config)?;
        Ok(config)
    }
}
