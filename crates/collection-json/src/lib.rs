//! Collection+JSON - read and write hypermedia collection documents.
//!
//! Typed entities for every part of a Collection+JSON document, parsing from
//! text with coded diagnostics, and emission back to the canonical structure.
//!
//! # Example
//!
//! ```
//! use collection_json::{Collection, Data, Item, Link, from_document};
//!
//! let collection = Collection::new()
//!     .with_href("http://example.org/friends/")
//!     .with_links([Link::new("http://example.org/friends/rss", "feed")])
//!     .with_items([Item::new()
//!         .with_href("http://example.org/friends/jdoe")
//!         .with_data([Data::new("full-name").with_value("J. Doe")])]);
//!
//! let text = collection.to_text();
//! let parsed = from_document(&text).expect("round trip");
//!
//! assert_eq!(parsed, collection);
//! assert_eq!(parsed.items()[0].datum("full-name").unwrap().value().unwrap().as_str(), Some("J. Doe"));
//! ```

pub mod config;

mod error;

pub use collection_json_core::{
    Collection, Container, DEFAULT_VERSION, Data, Entity, Error, Input, Item, Link, ModelError,
    Query, Scalar, StructuralEq, Template,
    decode::{self, UnknownFields},
    equality,
};
pub use collection_json_parser::{
    ParsedDocument,
    error::{Diagnostic, ErrorCode, Location, ParseError, Severity},
};

pub use error::CollectionJsonError;

use log::{debug, info};
use serde_json::Value;

use config::AppConfig;

/// Parse Collection+JSON text with the default (strict) configuration.
///
/// # Errors
///
/// Returns `CollectionJsonError::MalformedDocument` when the text is not
/// JSON or has no usable `collection` object, and
/// `CollectionJsonError::InvalidDocument` when the collection object cannot be
/// built (missing required fields, unknown fields, wrong field types or
/// non-object list elements).
///
/// # Examples
///
/// ```
/// use collection_json::from_document;
///
/// let text = r#"{"collection": {"version": "1.0", "links": [{"href": "http://x", "rel": "self"}]}}"#;
/// assert_eq!(from_document(text).unwrap().links()[0].rel(), "self");
///
/// assert!(from_document("not json").unwrap_err().is_malformed_document());
/// assert!(from_document(r#"{"foo": 1}"#).unwrap_err().is_malformed_document());
/// ```
pub fn from_document(source: &str) -> Result<Collection, CollectionJsonError> {
    DocumentBuilder::default().parse(source)
}

/// Builder for parsing and rendering Collection+JSON documents.
///
/// Holds an [`AppConfig`] so the same decode and emit settings apply to
/// every document handled through it.
///
/// # Examples
///
/// ```
/// use collection_json::{
///     DocumentBuilder, UnknownFields,
///     config::{AppConfig, DecodeConfig, EmitConfig},
/// };
///
/// let config = AppConfig::new(DecodeConfig::new(UnknownFields::Ignore), EmitConfig::default());
/// let builder = DocumentBuilder::new(config);
///
/// let parsed = builder
///     .parse_with_warnings(r#"{"collection": {"version": "1.0", "x-extension": 1}}"#)
///     .expect("unknown keys are skipped");
/// assert_eq!(parsed.warnings().len(), 1);
///
/// let text = builder.render(parsed.collection());
/// assert_eq!(text, r#"{"collection":{"version":"1.0"}}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    config: AppConfig,
}

impl DocumentBuilder {
    /// Create a new document builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse document text into a collection.
    ///
    /// Warnings from lenient decoding are logged and dropped; use
    /// [`DocumentBuilder::parse_with_warnings`] to keep them.
    ///
    /// # Errors
    ///
    /// See [`from_document`].
    pub fn parse(&self, source: &str) -> Result<Collection, CollectionJsonError> {
        self.parse_with_warnings(source)
            .map(ParsedDocument::into_collection)
    }

    /// Parse document text, keeping any warnings alongside the collection.
    ///
    /// # Errors
    ///
    /// See [`from_document`].
    pub fn parse_with_warnings(&self, source: &str) -> Result<ParsedDocument, CollectionJsonError> {
        info!("Parsing document");

        let parsed = collection_json_parser::parse(source, self.config.decode().parse_config())?;

        debug!(warnings = parsed.warnings().len(); "Document parsed successfully");
        Ok(parsed)
    }

    /// Build a collection from an already-decoded JSON document.
    ///
    /// # Errors
    ///
    /// Same as [`DocumentBuilder::parse`], except syntax errors cannot occur.
    pub fn parse_value(&self, document: Value) -> Result<Collection, CollectionJsonError> {
        info!("Parsing document value");

        let parsed =
            collection_json_parser::parse_value(document, self.config.decode().parse_config())?;
        Ok(parsed.into_collection())
    }

    /// Render a collection to text, indented if the emit config asks for it.
    pub fn render(&self, collection: &Collection) -> String {
        let pretty = self.config.emit().pretty();
        debug!(pretty; "Rendering document");

        if pretty {
            collection.to_text_pretty()
        } else {
            collection.to_text()
        }
    }
}
