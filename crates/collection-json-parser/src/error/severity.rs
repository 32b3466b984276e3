//! Severity levels for diagnostics.
//!
//! Errors abort parsing; warnings accompany a successfully parsed document.

use std::fmt;

/// The severity level of a diagnostic.
///
/// - [`Severity::Error`] means no document was produced
/// - [`Severity::Warning`] means the document was produced but some input was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A fatal problem with the document.
    Error,

    /// Input that was accepted but not represented in the result, such as an
    /// unknown field skipped under lenient decoding.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
