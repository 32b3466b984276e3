//! Typed, named sequences of entities.
//!
//! A [`Container`] holds elements of exactly one entity type and knows the key
//! it is emitted under. It is read-only once built: it dereferences to a slice
//! for indexing and iteration but exposes nothing that could insert an
//! element without going through the type check.
//!
//! # Example
//!
//! ```
//! use collection_json_core::{Container, Input, Link, ModelError};
//! use serde_json::json;
//!
//! let links = Container::<Link>::new(
//!     "links",
//!     [
//!         Input::from(Link::new("http://x", "self")),
//!         Input::from(json!({"href": "http://y", "rel": "next"})),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(links[1].rel(), "next");
//!
//! let err = Container::<Link>::new("links", [Input::from(json!(1))]).unwrap_err();
//! assert!(matches!(err, ModelError::InvalidElement { expected: "Link", .. }));
//! ```

use std::{borrow::Cow, ops::Deref};

use serde_json::{Map, Value};

use crate::{
    Collection, Data, Error, Item, Link, Query, Template,
    decode::Decoder,
    entity::Entity,
    error::Result,
};

/// Either an already-built entity or a raw JSON value to decode into one.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    /// An instance of the target type, kept as-is.
    Built(T),
    /// A raw value; must be an object whose keys are the entity's fields.
    Raw(Value),
}

impl<T: Entity> Input<T> {
    /// Normalizes the input to an entity, decoding raw values strictly.
    ///
    /// # Errors
    ///
    /// `ModelError::InvalidElement` when a raw value is not an object, and
    /// the entity's field errors otherwise.
    pub fn into_entity(self) -> Result<T> {
        self.into_entity_at(&mut Decoder::default(), "")
    }

    fn into_entity_at(self, decoder: &mut Decoder, path: &str) -> Result<T> {
        match self {
            Self::Built(entity) => Ok(entity),
            Self::Raw(value) => decoder.decode_at(path, value),
        }
    }
}

impl<T> From<Value> for Input<T> {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl<T> From<Map<String, Value>> for Input<T> {
    fn from(record: Map<String, Value>) -> Self {
        Self::Raw(Value::Object(record))
    }
}

macro_rules! impl_input_from_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Input<$ty> {
                fn from(entity: $ty) -> Self {
                    Self::Built(entity)
                }
            }
        )+
    };
}

impl_input_from_entity!(Collection, Data, Error, Item, Link, Query, Template);

/// An ordered sequence of `T`, emitted under a field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<T> {
    name: Cow<'static, str>,
    elements: Vec<T>,
}

impl<T: Entity> Container<T> {
    /// Build a container from a mix of built entities and raw records.
    ///
    /// # Errors
    ///
    /// `ModelError::InvalidElement` for the first input that is neither a `T`
    /// nor an object, with its index as the path. Field errors from decoding
    /// a record are reported the same way.
    pub fn new<I>(name: impl Into<Cow<'static, str>>, inputs: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Input<T>>,
    {
        let mut decoder = Decoder::default();
        let elements = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                Into::<Input<T>>::into(input).into_entity_at(&mut decoder, &format!("/{index}"))
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Self {
            name: name.into(),
            elements,
        })
    }

    /// Returns the canonical form: `{name: [element, ...]}`.
    pub fn to_map(&self) -> Map<String, Value> {
        let elements = self.elements.iter().map(Entity::to_value).collect();
        let mut output = Map::new();
        output.insert(self.name.to_string(), Value::Array(elements));
        output
    }
}

impl<T> Container<T> {
    /// Build a container from already-typed elements.
    pub fn from_elements(
        name: impl Into<Cow<'static, str>>,
        elements: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            name: name.into(),
            elements: elements.into_iter().collect(),
        }
    }

    /// Create an empty container.
    pub fn empty(name: impl Into<Cow<'static, str>>) -> Self {
        Self::from_elements(name, [])
    }

    /// Returns the key this container is emitted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the container, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Deref for Container<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: Entity> serde::Serialize for Container<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_map(), serializer)
    }
}
