//! Construction of entities from raw JSON records.
//!
//! A [`Decoder`] walks a JSON value top-down, handing each entity a [`Record`]
//! holding the object's fields. The entity takes the fields it declares; what
//! remains when it calls [`Record::finish`] is either rejected or recorded as
//! ignored, depending on the [`UnknownFields`] policy.
//!
//! `null` is treated as absent throughout: a `null` optional field decodes to
//! `None`, a `null` container to an empty container, and a `null` required
//! field to `ModelError::MissingArgument`.
//!
//! # Example
//!
//! ```
//! use collection_json_core::{Link, decode::{Decoder, UnknownFields}};
//! use serde_json::json;
//!
//! let mut decoder = Decoder::new(UnknownFields::Ignore);
//! let link: Link = decoder
//!     .decode(json!({"href": "http://x", "rel": "self", "rank": 1}))
//!     .unwrap();
//!
//! assert_eq!(link.rel(), "self");
//! assert_eq!(decoder.ignored_fields()[0].field, "rank");
//! ```

use log::{debug, trace};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    container::Container,
    entity::Entity,
    error::{ModelError, Result},
    scalar::Scalar,
};

/// How keys an entity does not declare are handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFields {
    /// Fail with `ModelError::UnknownArgument` (default).
    #[default]
    Reject,
    /// Skip the key and record it in [`Decoder::ignored_fields`].
    Ignore,
}

/// A key skipped under [`UnknownFields::Ignore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredField {
    /// Entity whose record carried the key.
    pub entity: &'static str,
    /// The undeclared key.
    pub field: String,
    /// JSON pointer of the record.
    pub path: String,
}

/// Decoding state shared across one top-down walk.
#[derive(Debug, Default)]
pub struct Decoder {
    unknown_fields: UnknownFields,
    ignored: Vec<IgnoredField>,
}

impl Decoder {
    /// Create a decoder with the given unknown-field policy.
    pub fn new(unknown_fields: UnknownFields) -> Self {
        Self {
            unknown_fields,
            ignored: Vec::new(),
        }
    }

    /// Returns the unknown-field policy.
    pub fn unknown_fields(&self) -> UnknownFields {
        self.unknown_fields
    }

    /// Returns the keys skipped so far.
    pub fn ignored_fields(&self) -> &[IgnoredField] {
        &self.ignored
    }

    /// Consumes the decoder, returning the keys it skipped.
    pub fn into_ignored_fields(self) -> Vec<IgnoredField> {
        self.ignored
    }

    /// Decode an entity rooted at the empty JSON pointer.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidElement` if `value` is not an object, or
    /// whatever the entity reports for its fields.
    pub fn decode<T: Entity>(&mut self, value: Value) -> Result<T> {
        self.decode_at(String::new(), value)
    }

    /// Decode an entity whose record sits at `path`.
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode`].
    pub fn decode_at<T: Entity>(&mut self, path: impl Into<String>, value: Value) -> Result<T> {
        let path = path.into();
        match value {
            Value::Object(fields) => T::decode(Record::new(self, T::TYPE_NAME, path, fields)),
            value => Err(ModelError::InvalidElement {
                expected: T::TYPE_NAME,
                value,
                path,
            }),
        }
    }

    fn ignore(&mut self, entity: &'static str, field: String, path: &str) {
        debug!(entity, field = field.as_str(), path; "Ignoring unknown field");
        self.ignored.push(IgnoredField {
            entity,
            field,
            path: path.to_string(),
        });
    }
}

/// The fields of one JSON object, being turned into an entity.
#[derive(Debug)]
pub struct Record<'d> {
    decoder: &'d mut Decoder,
    entity: &'static str,
    path: String,
    fields: Map<String, Value>,
}

impl<'d> Record<'d> {
    /// Wrap `fields` for decoding as `entity`, located at `path`.
    pub fn new(
        decoder: &'d mut Decoder,
        entity: &'static str,
        path: impl Into<String>,
        fields: Map<String, Value>,
    ) -> Self {
        Self {
            decoder,
            entity,
            path: path.into(),
            fields,
        }
    }

    /// Returns the JSON pointer of this record.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn child_path(&self, field: &str) -> String {
        format!("{}/{}", self.path, field)
    }

    /// Take a field, mapping `null` to absence.
    fn take(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field).filter(|value| !value.is_null())
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> ModelError {
        ModelError::InvalidField {
            entity: self.entity,
            field,
            expected,
            path: self.child_path(field),
        }
    }

    /// Take a required string field.
    ///
    /// # Errors
    ///
    /// `MissingArgument` when absent or `null`, `InvalidField` when not a string.
    pub fn required_str(&mut self, field: &'static str) -> Result<String> {
        self.optional_str(field)?
            .ok_or_else(|| ModelError::MissingArgument {
                entity: self.entity,
                field,
                path: self.path.clone(),
            })
    }

    /// Take an optional string field.
    ///
    /// # Errors
    ///
    /// `InvalidField` when present but not a string.
    pub fn optional_str(&mut self, field: &'static str) -> Result<Option<String>> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(self.invalid(field, "a string")),
        }
    }

    /// Take an optional scalar field.
    ///
    /// # Errors
    ///
    /// `InvalidField` when present but an array or object.
    pub fn optional_scalar(&mut self, field: &'static str) -> Result<Option<Scalar>> {
        match self.take(field) {
            None => Ok(None),
            Some(value) => Scalar::from_value(value)
                .map(Some)
                .ok_or_else(|| self.invalid(field, "a string, number or boolean")),
        }
    }

    /// Take a nested entity stored as an object under `field`.
    ///
    /// # Errors
    ///
    /// `InvalidField` when present but not an object, plus whatever the nested
    /// entity reports.
    pub fn optional_entity<T: Entity>(&mut self, field: &'static str) -> Result<Option<T>> {
        match self.take(field) {
            None => Ok(None),
            Some(value @ Value::Object(_)) => {
                let path = self.child_path(field);
                self.decoder.decode_at(path, value).map(Some)
            }
            Some(_) => Err(self.invalid(field, "an object")),
        }
    }

    /// Take a list of records under `field` as a typed container named after it.
    ///
    /// # Errors
    ///
    /// `InvalidField` when present but not an array, `InvalidElement` for any
    /// element that is not an object, plus whatever the elements report.
    pub fn container<T: Entity>(&mut self, field: &'static str) -> Result<Container<T>> {
        let values = match self.take(field) {
            None => Vec::new(),
            Some(Value::Array(values)) => values,
            Some(_) => return Err(self.invalid(field, "an array")),
        };

        let base = self.child_path(field);
        trace!(field, path = base.as_str(), len = values.len(); "Decoding container");

        let elements = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| self.decoder.decode_at(format!("{base}/{index}"), value))
            .collect::<Result<Vec<T>>>()?;

        Ok(Container::from_elements(field, elements))
    }

    /// Complete decoding, applying the unknown-field policy to leftover keys.
    ///
    /// # Errors
    ///
    /// `UnknownArgument` for the first leftover key under
    /// [`UnknownFields::Reject`].
    pub fn finish(self) -> Result<()> {
        let Self {
            decoder,
            entity,
            path,
            fields,
        } = self;

        match decoder.unknown_fields {
            UnknownFields::Reject => match fields.into_iter().next() {
                Some((field, _)) => Err(ModelError::UnknownArgument {
                    entity,
                    field,
                    path,
                }),
                None => Ok(()),
            },
            UnknownFields::Ignore => {
                for (field, _) in fields {
                    decoder.ignore(entity, field, &path);
                }
                Ok(())
            }
        }
    }
}
