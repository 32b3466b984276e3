//! Write templates.

use serde_json::{Map, Value};

use crate::{
    container::Container,
    data::Data,
    decode::Record,
    entity::{Entity, impl_serialize_via_map},
    error::Result,
};

/// The fields a client should fill in to create or update an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    data: Container<Data>,
}

impl Template {
    pub fn new(data: impl IntoIterator<Item = Data>) -> Self {
        Self {
            data: Container::from_elements("data", data),
        }
    }

    pub fn data(&self) -> &Container<Data> {
        &self.data
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new([])
    }
}

impl Entity for Template {
    const TYPE_NAME: &'static str = "Template";

    fn decode(mut record: Record<'_>) -> Result<Self> {
        let template = Self {
            data: record.container("data")?,
        };
        record.finish()?;
        Ok(template)
    }

    /// Emits `{"template": {"data": [...]}}`; the `data` key is always present.
    fn to_map(&self) -> Map<String, Value> {
        let mut output = Map::new();
        output.insert("template".to_string(), Value::Object(self.data.to_map()));
        output
    }
}

impl_serialize_via_map!(Template);
