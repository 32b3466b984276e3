//! Query templates.

use std::fmt;

use serde_json::{Map, Value};

use crate::{
    container::Container,
    data::Data,
    decode::Record,
    entity::{Entity, impl_serialize_via_map},
    error::Result,
};

/// A queryable link whose parameters are described by `data` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    href: String,
    rel: String,
    name: Option<String>,
    prompt: Option<String>,
    data: Container<Data>,
}

impl Query {
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            name: None,
            prompt: None,
            data: Container::empty("data"),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Returns a copy whose parameters are `data`, replacing any present.
    pub fn with_data(mut self, data: impl IntoIterator<Item = Data>) -> Self {
        self.data = Container::from_elements("data", data);
        self
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn data(&self) -> &Container<Data> {
        &self.data
    }
}

impl Entity for Query {
    const TYPE_NAME: &'static str = "Query";

    fn decode(mut record: Record<'_>) -> Result<Self> {
        let query = Self {
            href: record.required_str("href")?,
            rel: record.required_str("rel")?,
            name: record.optional_str("name")?,
            prompt: record.optional_str("prompt")?,
            data: record.container("data")?,
        };
        record.finish()?;
        Ok(query)
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut output = Map::new();
        output.insert("href".to_string(), Value::from(self.href.as_str()));
        output.insert("rel".to_string(), Value::from(self.rel.as_str()));
        if let Some(name) = &self.name {
            output.insert("name".to_string(), Value::from(name.as_str()));
        }
        if let Some(prompt) = &self.prompt {
            output.insert("prompt".to_string(), Value::from(prompt.as_str()));
        }
        if !self.data.is_empty() {
            output.extend(self.data.to_map());
        }
        output
    }
}

impl_serialize_via_map!(Query);

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Query: rel='{}'", self.rel)?;
        if let Some(name) = &self.name {
            write!(f, " name='{name}'")?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_to_map_skips_empty_data() {
        let query = Query::new("http://example.org/search", "search").with_prompt("Search");

        assert_eq!(
            query.to_value(),
            json!({"href": "http://example.org/search", "rel": "search", "prompt": "Search"})
        );
    }

    #[test]
    fn test_to_map_with_data() {
        let query = Query::new("http://example.org/search", "search")
            .with_name("by-name")
            .with_data([Data::new("search").with_value("")]);

        assert_eq!(
            query.to_value(),
            json!({
                "href": "http://example.org/search",
                "rel": "search",
                "name": "by-name",
                "data": [{"name": "search", "value": ""}],
            })
        );
    }

    #[test]
    fn test_decode_empty_data_list() {
        let query = Query::from_value(json!({"href": "h", "rel": "search", "data": []})).unwrap();

        assert!(query.data().is_empty());
        assert_eq!(query, Query::new("h", "search"));
    }
}
