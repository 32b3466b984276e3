//! Collection+JSON Core Types
//!
//! This crate provides the object model for Collection+JSON hypermedia
//! documents. It includes:
//!
//! - **Container**: Homogeneous, named, serializable sequences ([`container::Container`])
//! - **Entities**: The document tree ([`Collection`], [`Item`], [`Link`], [`Query`],
//!   [`Template`], [`Data`] and the document-level [`Error`])
//! - **Decoding**: Construction of entities from raw JSON records ([`decode`] module)
//! - **Equality**: Type-aware structural comparison ([`equality::StructuralEq`])
//!
//! Parsing document text with diagnostics lives in `collection-json-parser`.
//!
//! # Example
//!
//! ```
//! use collection_json_core::{Collection, Link};
//!
//! let collection = Collection::new()
//!     .with_href("http://example.org/friends/")
//!     .with_links([Link::new("http://example.org/friends/rss", "feed")]);
//!
//! assert_eq!(collection.links()[0].rel(), "feed");
//! assert_eq!(
//!     collection.to_text(),
//!     r#"{"collection":{"version":"1.0","href":"http://example.org/friends/","links":[{"href":"http://example.org/friends/rss","rel":"feed"}]}}"#
//! );
//! ```

pub mod container;
pub mod decode;
pub mod equality;

mod collection;
mod data;
mod entity;
mod error;
mod error_object;
mod item;
mod link;
mod query;
mod scalar;
mod template;

pub use collection::{Collection, DEFAULT_VERSION};
pub use container::{Container, Input};
pub use data::Data;
pub use entity::Entity;
pub use equality::StructuralEq;
pub use error::{ModelError, Result};
pub use error_object::Error;
pub use item::Item;
pub use link::Link;
pub use query::Query;
pub use scalar::Scalar;
pub use template::Template;

/// Returns `true` when an optional string carries a non-empty value.
///
/// Emission treats empty strings the same way as absent ones.
pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}
