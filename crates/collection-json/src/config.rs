//! Configuration types for reading and writing documents.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources, such as the TOML accepted by [`AppConfig::from_toml_str`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining decode and emit settings.
//! - [`DecodeConfig`] - Controls how incoming documents are turned into entities.
//! - [`EmitConfig`] - Controls how entities are rendered back to text.
//!
//! # Example
//!
//! ```
//! # use collection_json::{config::AppConfig, UnknownFields};
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     [decode]
//!     unknown_fields = "ignore"
//!
//!     [emit]
//!     pretty = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.decode().unknown_fields(), UnknownFields::Ignore);
//! assert!(config.emit().pretty());
//! ```

use serde::Deserialize;

use collection_json_core::decode::UnknownFields;
use collection_json_parser::ParseConfig;

use crate::error::CollectionJsonError;

/// Top-level configuration combining decode and emit settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Decode configuration section.
    #[serde(default)]
    decode: DecodeConfig,

    /// Emit configuration section.
    #[serde(default)]
    emit: EmitConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(decode: DecodeConfig, emit: EmitConfig) -> Self {
        Self { decode, emit }
    }

    /// Parse configuration from TOML text. Missing sections and keys take
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns `CollectionJsonError::Config` if the text is not valid TOML or
    /// a value has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, CollectionJsonError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the decode configuration.
    pub fn decode(&self) -> &DecodeConfig {
        &self.decode
    }

    /// Returns the emit configuration.
    pub fn emit(&self) -> &EmitConfig {
        &self.emit
    }
}

/// How incoming documents are decoded.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct DecodeConfig {
    /// Policy for keys an entity does not declare.
    #[serde(default)]
    unknown_fields: UnknownFields,
}

impl DecodeConfig {
    pub fn new(unknown_fields: UnknownFields) -> Self {
        Self { unknown_fields }
    }

    /// Returns the [`UnknownFields`] policy.
    pub fn unknown_fields(&self) -> UnknownFields {
        self.unknown_fields
    }

    /// Returns the equivalent parser settings.
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.unknown_fields)
    }
}

/// How documents are rendered to text.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct EmitConfig {
    /// Indent the output instead of emitting compact JSON.
    #[serde(default)]
    pretty: bool,
}

impl EmitConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
