//! The read-only registry trait.

use crate::digest::DocumentDigest;
use crate::error::RegistryError;
use crate::schema::TypeSchema;

/// A thread-safe, read-only source of per-network type-registry documents.
/// The embedded implementation lives in `chaintypes-registry`.
pub trait TypeRegistry: Send + Sync {
    /// The raw JSON document for `network`, exactly as stored.
    fn document(&self, network: &str) -> Result<&str, RegistryError>;

    /// Network names with a document, sorted.
    fn networks(&self) -> Vec<&str>;

    fn len(&self) -> usize {
        self.networks().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, network: &str) -> bool {
        self.document(network).is_ok()
    }

    /// Parse the document for `network` into a `TypeSchema`.
    fn schema(&self, network: &str) -> Result<TypeSchema, RegistryError> {
        let document = self.document(network)?;
        TypeSchema::from_json(document).map_err(|source| RegistryError::InvalidDocument {
            network: network.to_string(),
            source,
        })
    }

    fn digest(&self, network: &str) -> Result<DocumentDigest, RegistryError> {
        Ok(DocumentDigest::of(self.document(network)?.as_bytes()))
    }
}
