//! The [`Entity`] trait shared by every node of the document tree.

use serde_json::{Map, Value};

use crate::{
    decode::{Decoder, Record},
    error::Result,
};

/// A node of the Collection+JSON document tree.
///
/// Entities are decoded from raw records (the JSON object holding their
/// fields) and emitted back to their canonical mapping form.
pub trait Entity: Sized {
    /// Name used in diagnostics, e.g. `"Link"`.
    const TYPE_NAME: &'static str;

    /// Build the entity from a record, consuming the fields it declares.
    ///
    /// Implementations must call [`Record::finish`] once every declared field
    /// has been taken, so undeclared keys are reported.
    fn decode(record: Record<'_>) -> Result<Self>;

    /// Returns the canonical mapping form of this entity.
    ///
    /// Optional fields without a value are omitted, never emitted as `null`.
    fn to_map(&self) -> Map<String, Value>;

    /// Returns [`Entity::to_map`] wrapped as a JSON value.
    fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    /// Build the entity from a raw JSON value with strict decoding.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidElement` when `value` is not an object, and
    /// the field-level errors of [`Entity::decode`] otherwise.
    fn from_value(value: Value) -> Result<Self> {
        Decoder::default().decode(value)
    }
}

/// Implements `serde::Serialize` for an entity by emitting its mapping form.
macro_rules! impl_serialize_via_map {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> std::result::Result<S::Ok, S::Error> {
                    serde::Serialize::serialize(&$crate::Entity::to_map(self), serializer)
                }
            }
        )+
    };
}

pub(crate) use impl_serialize_via_map;
