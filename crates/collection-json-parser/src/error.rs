//! Error and diagnostic system for the Collection+JSON parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Locations (line/column for syntax errors, JSON pointers for structure)
//! - Severity levels
//! - Diagnostic collector for accumulating warnings alongside a result
//!
//! # Example
//!
//! ```
//! # use collection_json_parser::error::{Diagnostic, ErrorCode};
//! let diag = Diagnostic::error("Link is missing required field `rel`")
//!     .with_code(ErrorCode::E101)
//!     .with_pointer("/collection/links/0")
//!     .with_help("every link needs both `href` and `rel`");
//!
//! assert_eq!(diag.to_string(), "error[E101]: Link is missing required field `rel`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::{Diagnostic, Location};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
pub use severity::Severity;
