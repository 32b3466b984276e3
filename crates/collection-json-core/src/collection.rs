//! The document root.

use serde_json::{Map, Value};

use crate::{
    container::Container,
    decode::Record,
    entity::{Entity, impl_serialize_via_map},
    error::Result,
    error_object::Error,
    item::Item,
    link::Link,
    query::Query,
    template::Template,
};

/// Version emitted when none is given.
pub const DEFAULT_VERSION: &str = "1.0";

/// A Collection+JSON document.
///
/// Owns every other entity of the document. Containers are always present,
/// possibly empty; `error` and `template` are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    version: String,
    href: Option<String>,
    error: Option<Error>,
    template: Option<Template>,
    items: Container<Item>,
    links: Container<Link>,
    queries: Container<Query>,
}

impl Collection {
    /// Create an empty collection at the default version.
    pub fn new() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            href: None,
            error: None,
            template: None,
            items: Container::empty("items"),
            links: Container::empty("links"),
            queries: Container::empty("queries"),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_error(mut self, error: Error) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items = Container::from_elements("items", items);
        self
    }

    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links = Container::from_elements("links", links);
        self
    }

    pub fn with_queries(mut self, queries: impl IntoIterator<Item = Query>) -> Self {
        self.queries = Container::from_elements("queries", queries);
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn items(&self) -> &Container<Item> {
        &self.items
    }

    pub fn links(&self) -> &Container<Link> {
        &self.links
    }

    pub fn queries(&self) -> &Container<Query> {
        &self.queries
    }

    pub fn set_href(&mut self, href: Option<String>) {
        self.href = href;
    }

    pub fn set_error(&mut self, error: Option<Error>) {
        self.error = error;
    }

    pub fn set_template(&mut self, template: Option<Template>) {
        self.template = template;
    }

    /// Replace the items, keeping the container's field name.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items = Container::from_elements("items", items);
    }

    /// Renders the document as compact JSON text.
    pub fn to_text(&self) -> String {
        self.to_value().to_string()
    }

    /// Renders the document as indented JSON text.
    pub fn to_text_pretty(&self) -> String {
        format!("{:#}", self.to_value())
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Collection {
    const TYPE_NAME: &'static str = "Collection";

    /// Decodes the mapping found under the document's `"collection"` key.
    fn decode(mut record: Record<'_>) -> Result<Self> {
        let collection = Self {
            version: record
                .optional_str("version")?
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            href: record.optional_str("href")?,
            links: record.container("links")?,
            items: record.container("items")?,
            queries: record.container("queries")?,
            template: record.optional_entity("template")?,
            error: record.optional_entity("error")?,
        };
        record.finish()?;
        Ok(collection)
    }

    /// Emits `{"collection": {...}}`.
    ///
    /// `version` always comes first, then `href` when set, then links, items,
    /// queries, template and error, each only when non-empty or present.
    fn to_map(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("version".to_string(), Value::from(self.version.as_str()));
        if let Some(href) = &self.href {
            body.insert("href".to_string(), Value::from(href.as_str()));
        }
        if !self.links.is_empty() {
            body.extend(self.links.to_map());
        }
        if !self.items.is_empty() {
            body.extend(self.items.to_map());
        }
        if !self.queries.is_empty() {
            body.extend(self.queries.to_map());
        }
        if let Some(template) = &self.template {
            body.extend(template.to_map());
        }
        if let Some(error) = &self.error {
            body.extend(error.to_map());
        }

        let mut output = Map::new();
        output.insert("collection".to_string(), Value::Object(body));
        output
    }
}

impl_serialize_via_map!(Collection);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{Data, Input, ModelError};

    fn friends() -> Collection {
        Collection::new()
            .with_href("http://example.org/friends/")
            .with_links([Link::new("http://example.org/friends/rss", "feed")])
            .with_items([Item::new()
                .with_href("http://example.org/friends/jdoe")
                .with_data([Data::new("full-name").with_value("J. Doe")])])
            .with_queries([Query::new("http://example.org/friends/search", "search")
                .with_prompt("Search")
                .with_data([Data::new("search").with_value("")])])
            .with_template(Template::new([Data::new("full-name").with_prompt("Full Name")]))
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(
            Collection::new().to_value(),
            json!({"collection": {"version": "1.0"}})
        );
    }

    #[test]
    fn test_to_map() {
        assert_eq!(
            friends().to_value(),
            json!({"collection": {
                "version": "1.0",
                "href": "http://example.org/friends/",
                "links": [{"href": "http://example.org/friends/rss", "rel": "feed"}],
                "items": [{
                    "href": "http://example.org/friends/jdoe",
                    "data": [{"name": "full-name", "value": "J. Doe"}],
                }],
                "queries": [{
                    "href": "http://example.org/friends/search",
                    "rel": "search",
                    "prompt": "Search",
                    "data": [{"name": "search", "value": ""}],
                }],
                "template": {"data": [{"name": "full-name", "prompt": "Full Name"}]},
            }})
        );
    }

    #[test]
    fn test_to_text_key_order() {
        let collection = Collection::new()
            .with_error(Error::new().with_title("t"))
            .with_items([Item::new().with_href("i")])
            .with_links([Link::new("l", "self")])
            .with_href("h");

        assert_eq!(
            collection.to_text(),
            r#"{"collection":{"version":"1.0","href":"h","links":[{"href":"l","rel":"self"}],"items":[{"href":"i"}],"error":{"title":"t"}}}"#
        );
    }

    #[test]
    fn test_decode_round_trip() {
        let collection = friends();
        let body = collection.to_value()["collection"].clone();

        assert_eq!(Collection::from_value(body).unwrap(), collection);
    }

    #[test]
    fn test_decode_defaults() {
        let collection = Collection::from_value(json!({"href": "h", "version": null})).unwrap();

        assert_eq!(collection.version(), "1.0");
        assert_eq!(collection.items().name(), "items");
        assert!(collection.error().is_none());
        assert!(collection.template().is_none());
    }

    #[test]
    fn test_decode_rejects_unknown_key() {
        let err = Collection::from_value(json!({"version": "1.0", "foo": 1})).unwrap_err();

        assert!(matches!(err, ModelError::UnknownArgument { entity: "Collection", .. }));
    }

    #[test]
    fn test_raw_error_and_template_inputs() {
        let error = Input::<Error>::from(json!({"message": "oops"})).into_entity().unwrap();
        let template = Input::<Template>::from(json!({"data": [{"name": "q"}]}))
            .into_entity()
            .unwrap();
        let collection = Collection::new().with_error(error).with_template(template);

        assert_eq!(collection.error().and_then(Error::message), Some("oops"));
        assert_eq!(collection.template().map(|t| t.data().len()), Some(1));
    }

    #[test]
    fn test_reassign_and_reemit() {
        let mut collection = friends();
        collection.set_items([]);
        collection.set_template(None);
        collection.set_error(Some(Error::new().with_message("gone")));

        let value = collection.to_value();
        assert!(value["collection"].get("items").is_none());
        assert!(value["collection"].get("template").is_none());
        assert_eq!(value["collection"]["error"], json!({"message": "gone"}));
    }

    #[test]
    fn test_to_text_pretty_parses_back_equal() {
        let collection = friends();
        let reparsed: Value = serde_json::from_str(&collection.to_text_pretty()).unwrap();

        assert_eq!(reparsed, collection.to_value());
    }
}
