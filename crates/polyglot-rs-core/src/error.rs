//! Core error types for the polyglot-rs library.
//!
//! This module provides the [`PolyglotError`] enum covering numeric-input
//! errors, locale-lookup errors, template errors, and catalog-loading errors.

use thiserror::Error;

/// The primary error type for the polyglot-rs library.
///
/// The plural-classification entry points surface [`PolyglotError::InvalidNumber`]
/// and [`PolyglotError::UnknownLocale`] directly. Translation resolution never
/// surfaces these; it degrades to returning the message id instead.
#[derive(Error, Debug)]
pub enum PolyglotError {
    // ── Numeric input ────────────────────────────────────────────────

    /// The input could not be parsed into CLDR plural operands.
    ///
    /// Carries the original input for diagnostics. Raised for malformed
    /// decimal strings and for binary floating-point inputs, which cannot
    /// reveal their visible fraction digits (`1.5` vs `1.50`).
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    // ── Locale lookup ────────────────────────────────────────────────

    /// No plural rule is registered for the requested locale identifier.
    ///
    /// Lookup is exact: `pt_PT` and `pt` are distinct registrations.
    #[error("unknown locale: {0:?}")]
    UnknownLocale(String),

    // ── Templates ────────────────────────────────────────────────────

    /// A message template contains invalid placeholder syntax.
    #[error("template syntax error: {0}")]
    TemplateSyntaxError(String),

    // ── Catalog loading ──────────────────────────────────────────────

    /// A translation catalog could not be deserialized.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred while reading a catalog file.
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PolyglotError {
    /// Returns a short stable code identifying the error category.
    ///
    /// Used as a structured log field so operators can filter on error
    /// class without parsing display strings.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidNumber(_) => "invalid_number",
            Self::UnknownLocale(_) => "unknown_locale",
            Self::TemplateSyntaxError(_) => "template_syntax",
            Self::SerializationError(_) => "serialization",
            Self::IoError(_) => "io",
        }
    }
}

/// A convenience type alias for `Result<T, PolyglotError>`.
pub type PolyglotResult<T> = Result<T, PolyglotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_input() {
        let err = PolyglotError::InvalidNumber("1.2.3".into());
        assert_eq!(err.to_string(), "invalid number: \"1.2.3\"");

        let err = PolyglotError::UnknownLocale("xx".into());
        assert_eq!(err.to_string(), "unknown locale: \"xx\"");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PolyglotError::InvalidNumber("x".into()).code(), "invalid_number");
        assert_eq!(PolyglotError::UnknownLocale("x".into()).code(), "unknown_locale");
        assert_eq!(
            PolyglotError::TemplateSyntaxError("x".into()).code(),
            "template_syntax"
        );
        assert_eq!(
            PolyglotError::SerializationError("x".into()).code(),
            "serialization"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PolyglotError = io_err.into();
        assert_eq!(err.code(), "io");
        assert!(err.to_string().contains("file missing"));
    }
}
