//! coltype Engine
//!
//! Rule-based semantic type detection for table columns, and structured
//! extraction for the labels that support it.
//!
//! # Architecture
//!
//! ```text
//! Column → TypeDetector (matchers) → label → Structured Parser → ParsedTable
//! Table  → Column Selector ────────────┘
//! ```
//!
//! - **Matchers**: one pure predicate per label (phone, date, country, company)
//! - **TypeDetector**: majority rule over the matchers with an `Other` fallback
//! - **Parsers**: phone → calling code + digits, company → base name + suffix
//! - **Selector**: picks the column of a file to parse
//!
//! # Example Usage
//!
//! ```
//! use coltype_engine::Engine;
//! use coltype_domain::{Column, Label};
//!
//! let engine = Engine::default();
//! let column = Column::from_strs("phone", &["+1-555-123-4567", "555.987.6543"]);
//!
//! let result = engine.classify(&column);
//! assert_eq!(result.label, Label::PhoneNumber);
//!
//! let parsed = engine.parse_column(&column, result.label).unwrap();
//! assert_eq!(parsed.parsed_count(), 2);
//! ```

#![warn(missing_docs)]

mod config;
mod detector;
mod engine;
mod error;
mod matchers;
mod parsers;
mod reference;
mod selector;
mod table;


pub use config::{EngineConfig, PhoneRules, ReferencePaths};
pub use detector::{decide, TypeDetector};
pub use engine::Engine;
pub use error::{EngineError, ValueParseFailure};
pub use matchers::{
    default_matchers, parse_date, CompanyMatcher, CountryMatcher, DateMatcher, PhoneMatcher,
};
pub use parsers::{CompanyParser, PhoneParser};
pub use reference::load_reference_tables;
pub use selector::{select_column, SelectedColumn, Selection};
pub use table::{
    list_csv_files, ParsedRow, ParsedTable, Table, COMPANY_HEADERS, PHONE_HEADERS,
};
