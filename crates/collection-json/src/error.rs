//! Error types for Collection+JSON operations.
//!
//! This module provides the main error type [`CollectionJsonError`] which
//! wraps the error conditions of parsing documents, building entities and
//! loading configuration.

use thiserror::Error;

use collection_json_core::ModelError;
use collection_json_parser::error::{Diagnostic, ParseError};

/// The main error type for Collection+JSON operations.
///
/// # Diagnostic Variants
///
/// `MalformedDocument` and `InvalidDocument` both carry the parser's
/// [`ParseError`] with coded diagnostics. The split tells apart "not a
/// Collection+JSON document at all" from "a document whose collection object
/// could not be built".
#[derive(Debug, Error)]
pub enum CollectionJsonError {
    #[error("Not a valid Collection+JSON document: {0}")]
    MalformedDocument(ParseError),

    #[error("Invalid Collection+JSON collection: {0}")]
    InvalidDocument(ParseError),

    #[error("Failed to build entity: {0}")]
    Model(#[from] ModelError),

    #[error("Failed to parse TOML configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<ParseError> for CollectionJsonError {
    fn from(err: ParseError) -> Self {
        if err.is_malformed_document() {
            Self::MalformedDocument(err)
        } else {
            Self::InvalidDocument(err)
        }
    }
}

impl CollectionJsonError {
    /// Returns `true` if the input was not a Collection+JSON document.
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::MalformedDocument(_))
    }

    /// Returns the parser diagnostics, if this error came from parsing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::MalformedDocument(err) | Self::InvalidDocument(err) => err.diagnostics(),
            Self::Model(_) | Self::Config(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use collection_json_parser::error::ErrorCode;

    use super::*;

    #[test]
    fn test_from_parse_error_splits_on_code() {
        let malformed: CollectionJsonError = ParseError::from(
            Diagnostic::error("document has no `collection` key").with_code(ErrorCode::E002),
        )
        .into();
        let invalid: CollectionJsonError =
            ParseError::from(Diagnostic::error("bad field").with_code(ErrorCode::E103)).into();

        assert!(malformed.is_malformed_document());
        assert!(!invalid.is_malformed_document());
        assert_eq!(invalid.diagnostics().len(), 1);
    }

    #[test]
    fn test_display() {
        let err: CollectionJsonError = ParseError::from(
            Diagnostic::error("document has no `collection` key").with_code(ErrorCode::E002),
        )
        .into();

        assert_eq!(
            err.to_string(),
            "Not a valid Collection+JSON document: error[E002]: document has no `collection` key"
        );
    }
}
