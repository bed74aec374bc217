//! Trait definitions for the classification seams
//!
//! Matchers and parsers are implemented in `coltype-engine`. Both receive the
//! reference tables by reference on every call and hold no other state that
//! changes between calls, so both are `Send + Sync` and one engine can serve
//! several threads.

use crate::{Label, ReferenceTables};

/// Predicate answering "does this single value look like label L"
pub trait ValueMatcher: Send + Sync {
    /// Label this matcher votes for
    fn label(&self) -> Label;

    /// Whether the value matches; must be pure and independent of other matchers
    fn matches(&self, value: &str, tables: &ReferenceTables) -> bool;
}

/// Decomposes one raw value into a structured record
pub trait StructuredParser: Send + Sync {
    /// Structured record produced on success
    type Output;

    /// Error for values the parser refuses
    type Error;

    /// Label whose values this parser accepts
    fn label(&self) -> Label;

    /// Parse a single value
    fn parse(&self, value: &str, tables: &ReferenceTables) -> Result<Self::Output, Self::Error>;
}
