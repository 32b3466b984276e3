//! Items: the resource entries of a collection.

use serde_json::{Map, Value};

use crate::{
    container::Container,
    data::Data,
    decode::Record,
    entity::{Entity, impl_serialize_via_map},
    error::Result,
    is_present,
    link::Link,
};

/// One resource in a collection, described by its data and links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    href: Option<String>,
    data: Container<Data>,
    links: Container<Link>,
}

impl Item {
    /// Create an item with no href, data or links.
    pub fn new() -> Self {
        Self {
            href: None,
            data: Container::empty("data"),
            links: Container::empty("links"),
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_data(mut self, data: impl IntoIterator<Item = Data>) -> Self {
        self.data = Container::from_elements("data", data);
        self
    }

    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links = Container::from_elements("links", links);
        self
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn data(&self) -> &Container<Data> {
        &self.data
    }

    pub fn links(&self) -> &Container<Link> {
        &self.links
    }

    /// Returns the first data entry called `name`.
    pub fn datum(&self, name: &str) -> Option<&Data> {
        self.data.iter().find(|data| data.name() == name)
    }

    pub fn set_href(&mut self, href: Option<String>) {
        self.href = href;
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Item {
    const TYPE_NAME: &'static str = "Item";

    fn decode(mut record: Record<'_>) -> Result<Self> {
        let item = Self {
            href: record.optional_str("href")?,
            data: record.container("data")?,
            links: record.container("links")?,
        };
        record.finish()?;
        Ok(item)
    }

    /// Emits a flat mapping: href (when non-empty), then the data and links
    /// containers when they hold anything.
    fn to_map(&self) -> Map<String, Value> {
        let mut output = Map::new();
        if is_present(&self.href) {
            output.insert("href".to_string(), Value::from(self.href.as_deref()));
        }
        if !self.data.is_empty() {
            output.extend(self.data.to_map());
        }
        if !self.links.is_empty() {
            output.extend(self.links.to_map());
        }
        output
    }
}

impl_serialize_via_map!(Item);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Scalar;

    #[test]
    fn test_empty_item() {
        assert_eq!(Item::new().to_value(), json!({}));
    }

    #[test]
    fn test_to_map() {
        let item = Item::new()
            .with_href("http://example.org/friends/jdoe")
            .with_data([Data::new("full-name").with_value("J. Doe").with_prompt("Full Name")])
            .with_links([Link::new("http://examples.org/blogs/jdoe", "blog").with_prompt("Blog")]);

        assert_eq!(
            item.to_value(),
            json!({
                "href": "http://example.org/friends/jdoe",
                "data": [{"name": "full-name", "value": "J. Doe", "prompt": "Full Name"}],
                "links": [{"href": "http://examples.org/blogs/jdoe", "rel": "blog", "prompt": "Blog"}],
            })
        );
    }

    #[test]
    fn test_decode() {
        let item = Item::from_value(json!({
            "href": "http://x/1",
            "data": [{"name": "a", "value": 1}],
        }))
        .unwrap();

        assert_eq!(item.href(), Some("http://x/1"));
        assert_eq!(item.datum("a").and_then(Data::value), Some(&Scalar::from(1)));
        assert!(item.links().is_empty());
        assert_eq!(item.links().name(), "links");
    }

    #[test]
    fn test_decode_rejects_non_record_data() {
        assert!(Item::from_value(json!({"data": ["a"]})).is_err());
    }
}
