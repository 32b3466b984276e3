//! The `data` entry: a named value with an optional display prompt.

use serde_json::{Map, Value};

use crate::{
    decode::Record,
    entity::{Entity, impl_serialize_via_map},
    error::Result,
    scalar::Scalar,
};

/// A single name/value pair, as found in items, queries and templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    name: String,
    value: Option<Scalar>,
    prompt: Option<String>,
}

impl Data {
    /// Create a data entry with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            prompt: None,
        }
    }

    /// Returns a copy with the value set.
    pub fn with_value(mut self, value: impl Into<Scalar>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns a copy with the prompt set.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&Scalar> {
        self.value.as_ref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Scalar>) {
        self.value = value;
    }

    pub fn set_prompt(&mut self, prompt: Option<String>) {
        self.prompt = prompt;
    }
}

impl Entity for Data {
    const TYPE_NAME: &'static str = "Data";

    fn decode(mut record: Record<'_>) -> Result<Self> {
        let data = Self {
            name: record.required_str("name")?,
            value: record.optional_scalar("value")?,
            prompt: record.optional_str("prompt")?,
        };
        record.finish()?;
        Ok(data)
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut output = Map::new();
        output.insert("name".to_string(), Value::from(self.name.as_str()));
        if let Some(value) = &self.value {
            output.insert("value".to_string(), value.into());
        }
        if let Some(prompt) = &self.prompt {
            output.insert("prompt".to_string(), Value::from(prompt.as_str()));
        }
        output
    }
}

impl_serialize_via_map!(Data);
