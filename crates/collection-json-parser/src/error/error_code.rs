//! Error codes for the Collection+JSON diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document errors (the text is not a Collection+JSON document)
//! - `E1xx` - Construction errors (the `collection` object has the wrong shape)

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Invalid JSON.
    ///
    /// The text could not be parsed as JSON at all.
    E001,

    /// Missing or empty `collection`.
    ///
    /// The root is not an object, has no `collection` key, or the value under
    /// it is empty (`null`, `false`, `0`, `""`, `[]` or `{}`).
    E002,

    /// `collection` is not an object.
    ///
    /// The value under `collection` is present but is a list or scalar.
    E003,

    // =========================================================================
    // Construction Errors (E1xx)
    // =========================================================================
    /// Invalid container element.
    ///
    /// A list such as `items` or `links` held something other than an object.
    E100,

    /// Missing required field.
    ///
    /// A required field such as `href`, `rel` or `name` was absent or `null`.
    E101,

    /// Unknown field.
    ///
    /// An object carried a key its entity does not declare. Reported as a
    /// warning when unknown fields are ignored.
    E102,

    /// Invalid field type.
    ///
    /// A field held the wrong kind of JSON value, e.g. a number for `href`.
    E103,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid JSON",
            ErrorCode::E002 => "missing or empty collection",
            ErrorCode::E003 => "collection is not an object",
            ErrorCode::E100 => "invalid container element",
            ErrorCode::E101 => "missing required field",
            ErrorCode::E102 => "unknown field",
            ErrorCode::E103 => "invalid field type",
        }
    }

    /// Returns `true` for codes meaning the text is not a Collection+JSON
    /// document at all.
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, ErrorCode::E001 | ErrorCode::E002 | ErrorCode::E003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
