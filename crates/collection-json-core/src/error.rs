//! Error types for building the Collection+JSON object model.
//!
//! Every variant carries the JSON pointer of the node that failed, relative to
//! wherever decoding started. Direct construction starts at the empty pointer,
//! document parsing starts at `/collection`.

use serde_json::Value;
use thiserror::Error;

/// A type alias for `Result<T, ModelError>`.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while constructing entities or containers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A container input was neither an instance of the element type nor a
    /// record convertible to it.
    #[error("invalid value for {expected} at `{path}`: {value}")]
    InvalidElement {
        expected: &'static str,
        value: Value,
        path: String,
    },

    /// A required field was not supplied (or was `null`).
    #[error("{entity} is missing required field `{field}` at `{path}`")]
    MissingArgument {
        entity: &'static str,
        field: &'static str,
        path: String,
    },

    /// A record carried a key the entity does not declare.
    #[error("{entity} got an unexpected field `{field}` at `{path}`")]
    UnknownArgument {
        entity: &'static str,
        field: String,
        path: String,
    },

    /// A field was present but held the wrong kind of JSON value.
    #[error("{entity} field `{field}` at `{path}` must be {expected}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
        path: String,
    },
}

impl ModelError {
    /// Returns the JSON pointer of the node that caused this error.
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidElement { path, .. }
            | Self::MissingArgument { path, .. }
            | Self::UnknownArgument { path, .. }
            | Self::InvalidField { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_invalid_element_display() {
        let err = ModelError::InvalidElement {
            expected: "Link",
            value: json!(1),
            path: "/links/0".to_string(),
        };

        assert_eq!(err.to_string(), "invalid value for Link at `/links/0`: 1");
        assert_eq!(err.path(), "/links/0");
    }

    #[test]
    fn test_missing_argument_display() {
        let err = ModelError::MissingArgument {
            entity: "Data",
            field: "name",
            path: "/collection/template/data/2".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Data is missing required field `name` at `/collection/template/data/2`"
        );
    }
}
