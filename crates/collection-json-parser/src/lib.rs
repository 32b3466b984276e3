//! Collection+JSON document parser.
//!
//! Turns document text into a [`Collection`], reporting failures as
//! [`Diagnostic`](error::Diagnostic)s with error codes and locations.
//!
//! # Example
//!
//! ```
//! use collection_json_parser::{ParseConfig, parse};
//!
//! let text = r#"{"collection": {"version": "1.0", "links": [{"href": "http://x", "rel": "self"}]}}"#;
//! let parsed = parse(text, ParseConfig::default()).unwrap();
//!
//! assert_eq!(parsed.collection().links()[0].rel(), "self");
//! assert!(parsed.warnings().is_empty());
//!
//! let err = parse(r#"{"foo": 1}"#, ParseConfig::default()).unwrap_err();
//! assert!(err.is_malformed_document());
//! ```

pub mod error;

mod config;
mod document;

pub use collection_json_core::decode::UnknownFields;
pub use config::ParseConfig;
pub use document::{COLLECTION_KEY, ParsedDocument, parse, parse_value};
