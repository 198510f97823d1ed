//! Error types for registry lookups and schema parsing.

use thiserror::Error;

/// Errors from the network type registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("No type registry for network '{network}'")]
    NetworkNotFound { network: String },

    #[error("Type registry for '{network}' is invalid: {source}")]
    InvalidDocument {
        network: String,
        #[source]
        source: SchemaError,
    },
}

/// Errors raised while parsing a type-registry document into a `TypeSchema`.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid version range '{suffix}' on type '{name}'")]
    InvalidVersionRange { name: String, suffix: String },

    #[error("Invalid definition for '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
