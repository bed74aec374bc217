//! coltype Domain Layer
//!
//! Core value types shared by the classification engine, the tool server and
//! the CLI. This crate has no external dependencies and performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Label**: the fixed set of semantic categories a column can take
//! - **Column**: a named, ordered sequence of raw string values
//! - **ClassificationResult**: the winning label plus per-label match counts
//! - **Parsed records**: structured phone numbers and company names
//! - **Reference Tables**: immutable country, legal-suffix and calling-code
//!   lookups, built once and shared by reference
//!
//! ## Architecture
//!
//! Matchers and parsers are expressed as traits here and implemented in
//! `coltype-engine`. Everything in this crate is a pure value type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classification;
pub mod column;
pub mod label;
pub mod parsed;
pub mod reference;
pub mod traits;

// Re-exports for convenience
pub use classification::{ClassificationResult, LabelScore};
pub use column::Column;
pub use label::Label;
pub use parsed::{normalize_whitespace, ParsedCompany, ParsedPhone, ParsedRecord};
pub use reference::ReferenceTables;
