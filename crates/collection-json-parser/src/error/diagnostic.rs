//! A single diagnostic message.

use std::fmt;

use crate::error::{ErrorCode, Severity};

/// A line/column position in the document text, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An error or warning produced while parsing a document.
///
/// Syntax errors are located by [`Location`]; errors in the document's
/// structure are located by the JSON pointer of the offending node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    code: Option<ErrorCode>,
    pointer: Option<String>,
    location: Option<Location>,
    help: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            code: None,
            pointer: None,
            location: None,
            help: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach the JSON pointer of the node this diagnostic is about.
    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = Some(pointer.into());
        self
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(location) = self.location {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let diag = Diagnostic::error("Link is missing required field `rel`")
            .with_code(ErrorCode::E101)
            .with_pointer("/collection/links/0")
            .with_help("add the field");

        assert!(diag.severity().is_error());
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.pointer(), Some("/collection/links/0"));
        assert_eq!(diag.help(), Some("add the field"));
        assert_eq!(diag.location(), None);
    }

    #[test]
    fn test_display_plain() {
        assert_eq!(Diagnostic::error("oops").to_string(), "error: oops");
    }

    #[test]
    fn test_display_with_code_and_location() {
        let diag = Diagnostic::error("expected value")
            .with_code(ErrorCode::E001)
            .with_location(1, 2);

        assert_eq!(diag.to_string(), "error[E001]: expected value at line 1, column 2");
    }

    #[test]
    fn test_display_warning() {
        let diag = Diagnostic::warning("ignored").with_code(ErrorCode::E102);
        assert_eq!(diag.to_string(), "warning[E102]: ignored");
    }
}
