//! Document text to [`Collection`].
//!
//! Parsing runs in three steps:
//! 1. The text is parsed as JSON (failure: `E001`).
//! 2. The `collection` object is extracted from the root (failure: `E002`
//!    when absent or empty, `E003` when not an object).
//! 3. The object is decoded into a [`Collection`] (failures: `E100`-`E103`).
//!
//! Fields skipped under
//! [`UnknownFields::Ignore`](collection_json_core::decode::UnknownFields::Ignore)
//! come back as `E102` warnings.

use log::{debug, info, trace, warn};
use serde_json::Value;

use collection_json_core::{
    Collection, ModelError,
    decode::{Decoder, IgnoredField},
};

use crate::{
    config::ParseConfig,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Result as DiagnosticResult},
};

/// The root key of every Collection+JSON document.
pub const COLLECTION_KEY: &str = "collection";

const COLLECTION_POINTER: &str = "/collection";

/// A successfully parsed document and any warnings raised along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    collection: Collection,
    warnings: Vec<Diagnostic>,
}

impl ParsedDocument {
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Returns warnings about input that was accepted but dropped.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn into_collection(self) -> Collection {
        self.collection
    }
}

/// Parse Collection+JSON text.
///
/// # Errors
///
/// Returns a [`ParseError`] whose
/// [`is_malformed_document`](ParseError::is_malformed_document) is `true`
/// when the text is not JSON or lacks a usable `collection` object, and
/// `false` when the collection object is there but cannot be decoded.
pub fn parse(source: &str, config: ParseConfig) -> Result<ParsedDocument, ParseError> {
    debug!(len = source.len(), unknown_fields:? = config.unknown_fields(); "Parsing document");

    let root: Value = serde_json::from_str(source).map_err(syntax_error)?;
    parse_value(root, config)
}

/// Parse a document that is already a JSON value, e.g. the body decoded by an
/// HTTP client.
///
/// # Errors
///
/// Same as [`parse`], minus the `E001` syntax case.
pub fn parse_value(root: Value, config: ParseConfig) -> Result<ParsedDocument, ParseError> {
    let body = extract_collection(root)?;

    let mut decoder = Decoder::new(config.unknown_fields());
    let collection: Collection = decoder
        .decode_at(COLLECTION_POINTER, body)
        .map_err(model_error)?;

    let mut collector = DiagnosticCollector::new();
    for ignored in decoder.into_ignored_fields() {
        let diagnostic = ignored_field_warning(ignored);
        warn!(pointer = diagnostic.pointer().unwrap_or_default(); "{diagnostic}");
        collector.emit(diagnostic);
    }
    let warnings = collector.finish()?;

    info!(
        items = collection.items().len(),
        links = collection.links().len(),
        queries = collection.queries().len(),
        warnings = warnings.len();
        "Document parsed"
    );
    trace!(collection:?; "Parsed collection");

    Ok(ParsedDocument {
        collection,
        warnings,
    })
}

/// Pull the `collection` value out of the document root.
fn extract_collection(root: Value) -> DiagnosticResult<Value> {
    let Value::Object(mut root) = root else {
        return Err(Diagnostic::error("document root is not an object")
            .with_code(ErrorCode::E002)
            .with_pointer("")
            .with_help("a Collection+JSON document is an object with a `collection` key"));
    };

    let Some(body) = root.remove(COLLECTION_KEY) else {
        return Err(Diagnostic::error("document has no `collection` key")
            .with_code(ErrorCode::E002)
            .with_pointer("")
            .with_help("a Collection+JSON document is an object with a `collection` key"));
    };

    if !is_truthy(&body) {
        return Err(Diagnostic::error("`collection` is empty")
            .with_code(ErrorCode::E002)
            .with_pointer(COLLECTION_POINTER));
    }

    if !body.is_object() {
        return Err(Diagnostic::error("`collection` is not an object")
            .with_code(ErrorCode::E003)
            .with_pointer(COLLECTION_POINTER));
    }

    Ok(body)
}

/// `null`, `false`, zero, and empty strings, lists and objects are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(values) => !values.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn syntax_error(err: serde_json::Error) -> Diagnostic {
    Diagnostic::error(format!("not valid JSON: {err}"))
        .with_code(ErrorCode::E001)
        .with_location(err.line(), err.column())
}

fn model_error(err: ModelError) -> Diagnostic {
    let pointer = err.path().to_string();
    let diagnostic = match &err {
        ModelError::InvalidElement { .. } => Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E100)
            .with_help("list elements must be objects"),
        ModelError::MissingArgument { .. } => {
            Diagnostic::error(err.to_string()).with_code(ErrorCode::E101)
        }
        ModelError::UnknownArgument { .. } => Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E102)
            .with_help("remove the field, or parse with unknown fields ignored"),
        ModelError::InvalidField { .. } => {
            Diagnostic::error(err.to_string()).with_code(ErrorCode::E103)
        }
    };
    diagnostic.with_pointer(pointer)
}

fn ignored_field_warning(ignored: IgnoredField) -> Diagnostic {
    Diagnostic::warning(format!(
        "ignored unknown field `{}` of {}",
        ignored.field, ignored.entity
    ))
    .with_code(ErrorCode::E102)
    .with_pointer(format!("{}/{}", ignored.path, ignored.field))
}
