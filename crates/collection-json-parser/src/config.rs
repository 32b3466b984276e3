//! Parser settings.

use collection_json_core::decode::UnknownFields;

/// Settings controlling how a document is decoded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    unknown_fields: UnknownFields,
}

impl ParseConfig {
    /// Create a config with the given unknown-field policy.
    pub fn new(unknown_fields: UnknownFields) -> Self {
        Self { unknown_fields }
    }

    /// Returns the unknown-field policy.
    pub fn unknown_fields(&self) -> UnknownFields {
        self.unknown_fields
    }
}
