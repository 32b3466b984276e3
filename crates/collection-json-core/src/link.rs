//! Hypermedia links.

use std::fmt;

use serde_json::{Map, Value};

use crate::{
    decode::Record,
    entity::{Entity, impl_serialize_via_map},
    error::Result,
};

/// A relation from a collection or item to another resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    href: String,
    rel: String,
    name: Option<String>,
    render: Option<String>,
    prompt: Option<String>,
}

impl Link {
    /// Create a link with its two required fields.
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            name: None,
            render: None,
            prompt: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns a copy with the render hint set (`"link"` or `"image"` by convention).
    pub fn with_render(mut self, render: impl Into<String>) -> Self {
        self.render = Some(render.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
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

    pub fn render(&self) -> Option<&str> {
        self.render.as_deref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }
}

impl Entity for Link {
    const TYPE_NAME: &'static str = "Link";

    fn decode(mut record: Record<'_>) -> Result<Self> {
        let link = Self {
            href: record.required_str("href")?,
            rel: record.required_str("rel")?,
            name: record.optional_str("name")?,
            render: record.optional_str("render")?,
            prompt: record.optional_str("prompt")?,
        };
        record.finish()?;
        Ok(link)
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut output = Map::new();
        output.insert("href".to_string(), Value::from(self.href.as_str()));
        output.insert("rel".to_string(), Value::from(self.rel.as_str()));
        for (key, field) in [
            ("name", &self.name),
            ("render", &self.render),
            ("prompt", &self.prompt),
        ] {
            if let Some(value) = field {
                output.insert(key.to_string(), Value::from(value.as_str()));
            }
        }
        output
    }
}

impl_serialize_via_map!(Link);

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Link: rel='{}'", self.rel)?;
        if let Some(name) = &self.name {
            write!(f, " name='{name}'")?;
        }
        if let Some(render) = &self.render {
            write!(f, " render='{render}'")?;
        }
        write!(f, ">")
    }
}
