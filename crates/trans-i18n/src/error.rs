//! Errors for the fallible edges of the crate.
//!
//! Lookups never fail: a missing key degrades to the key itself. Only
//! parsing inputs that come from outside (JSON dictionaries, date values)
//! can produce an [`I18nError`].

/// Errors from dictionary loading and date conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    /// A dictionary document could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),
    /// A date-like input did not denote a valid instant.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, I18nError>;
