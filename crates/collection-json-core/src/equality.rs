//! Structural equality across concrete types.
//!
//! Every entity and [`Container`](crate::Container) derives `PartialEq`, which
//! compares all fields including container names and element order. That
//! only works between values of the same static type. [`StructuralEq`] lifts
//! the comparison to `&dyn Any` so a value can be compared with anything: two
//! values are structurally equal iff they have the same concrete type and
//! compare equal.
//!
//! # Example
//!
//! ```
//! use collection_json_core::{Container, Item, StructuralEq};
//!
//! let items = Container::<Item>::empty("items");
//! let plain: Vec<Item> = Vec::new();
//!
//! // Same contents, different concrete types.
//! assert!(items.is_empty() && plain.is_empty());
//! assert!(!items.structural_eq(&plain));
//! assert!(items.structural_eq(&Container::<Item>::empty("items")));
//! ```

use std::any::Any;

/// Equality that first requires both sides to share a concrete type.
pub trait StructuralEq {
    /// Returns `true` iff `other` is a `Self` and equal to `self`.
    fn structural_eq(&self, other: &dyn Any) -> bool;

    /// Negation of [`StructuralEq::structural_eq`].
    fn structural_ne(&self, other: &dyn Any) -> bool {
        !self.structural_eq(other)
    }
}

impl<T: PartialEq + Any> StructuralEq for T {
    fn structural_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}
