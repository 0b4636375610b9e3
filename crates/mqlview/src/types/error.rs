//! Errors surfaced by the view-model.

use serde_json::Value;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while constructing or lazily loading a
/// resource. Lookup misses are `Option`, never errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A resource was constructed from an absent or non-mapping value.
    #[error("resource record must be a JSON object, got {got}")]
    Construction {
        /// JSON type of the rejected value.
        got: &'static str,
    },

    /// The query session failed during a lazy load. Propagated unchanged;
    /// the view-model never retries.
    #[error("query session failed")]
    Session(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A session response did not match the expected record shape.
    #[error("malformed query response")]
    Shape(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a collaborator failure.
    pub fn session<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Session(Box::new(source))
    }

    /// Reject a non-mapping resource record.
    pub(crate) fn construction(value: &Value) -> Self {
        let got = match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Self::Construction { got }
    }
}
