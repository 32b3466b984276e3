//! The document-level `error` object.
//!
//! Not to be confused with [`ModelError`](crate::ModelError), which reports
//! failures of this crate. This type is data carried inside a document.

use serde_json::{Map, Value};

use crate::{
    decode::Record,
    entity::{Entity, impl_serialize_via_map},
    error::Result,
    is_present,
};

/// Error information a server attaches to a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    title: Option<String>,
}

impl Error {
    /// Create an error object with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Entity for Error {
    const TYPE_NAME: &'static str = "Error";

    fn decode(mut record: Record<'_>) -> Result<Self> {
        let error = Self {
            code: record.optional_str("code")?,
            message: record.optional_str("message")?,
            title: record.optional_str("title")?,
        };
        record.finish()?;
        Ok(error)
    }

    /// Emits `{"error": {...}}` with absent and empty fields left out.
    fn to_map(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        for (key, field) in [
            ("code", &self.code),
            ("message", &self.message),
            ("title", &self.title),
        ] {
            if is_present(field) {
                fields.insert(key.to_string(), Value::from(field.as_deref()));
            }
        }

        let mut output = Map::new();
        output.insert("error".to_string(), Value::Object(fields));
        output
    }
}

impl_serialize_via_map!(Error);
