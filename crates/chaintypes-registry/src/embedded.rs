//! The process-wide table of embedded type-registry documents.
//!
//! Documents are compiled in with `include_str!` and indexed once, on first
//! use. Nothing is written after initialization, so concurrent readers need
//! no locking. Parsed `TypeSchema`s are cached per network on first request.

use chaintypes_core::{DocumentDigest, Network, RegistryError, TypeRegistry, TypeSchema};
use once_cell::sync::{Lazy, OnceCell};
use std::collections::BTreeMap;
use tracing::debug;

struct Entry {
    document: &'static str,
    parsed: OnceCell<TypeSchema>,
}

/// network slug → entry
static NETWORK_TYPES: Lazy<BTreeMap<&'static str, Entry>> = Lazy::new(|| {
    Network::ALL
        .into_iter()
        .map(|network| {
            let entry = Entry {
                document: for_network(network),
                parsed: OnceCell::new(),
            };
            (network.slug(), entry)
        })
        .collect()
});

/// The embedded document for a known network.
pub const fn for_network(network: Network) -> &'static str {
    match network {
        Network::Polkadot => include_str!("../networks/polkadot.json"),
        Network::Kusama => include_str!("../networks/kusama.json"),
        Network::Westend => include_str!("../networks/westend.json"),
        Network::Moonbeam => include_str!("../networks/moonbeam.json"),
        Network::Moonriver => include_str!("../networks/moonriver.json"),
        Network::Moonbase => include_str!("../networks/moonbase.json"),
    }
}

fn entry(network: &str) -> Result<&'static Entry, RegistryError> {
    NETWORK_TYPES.get(network).ok_or_else(|| {
        debug!(network, "no embedded type registry");
        RegistryError::NetworkNotFound {
            network: network.to_string(),
        }
    })
}

/// Return the JSON type-registry document for `network`, byte-for-byte as
/// embedded. Matching is exact and case-sensitive.
pub fn lookup(network: &str) -> Result<&'static str, RegistryError> {
    let entry = entry(network)?;
    debug!(network, bytes = entry.document.len(), "type registry lookup");
    Ok(entry.document)
}

/// The document for `network` parsed into a `TypeSchema`.
/// Parsing happens at most once per network per process.
pub fn schema(network: &str) -> Result<&'static TypeSchema, RegistryError> {
    let entry = entry(network)?;
    entry.parsed.get_or_try_init(|| {
        debug!(network, "parsing embedded type registry");
        TypeSchema::from_json(entry.document).map_err(|source| RegistryError::InvalidDocument {
            network: network.to_string(),
            source,
        })
    })
}

/// SHA-256 of the embedded document bytes.
pub fn digest(network: &str) -> Result<DocumentDigest, RegistryError> {
    lookup(network).map(|doc| DocumentDigest::of(doc.as_bytes()))
}

/// All network names with an embedded document, sorted.
pub fn networks() -> Vec<&'static str> {
    NETWORK_TYPES.keys().copied().collect()
}

pub fn contains(network: &str) -> bool {
    NETWORK_TYPES.contains_key(network)
}

/// Number of embedded documents.
pub fn len() -> usize {
    NETWORK_TYPES.len()
}

/// `TypeRegistry` handle over the embedded table. Zero-sized; every instance
/// reads the same static data.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRegistry;

impl EmbeddedRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl TypeRegistry for EmbeddedRegistry {
    fn document(&self, network: &str) -> Result<&str, RegistryError> {
        lookup(network)
    }

    fn networks(&self) -> Vec<&str> {
        networks()
    }

    fn len(&self) -> usize {
        len()
    }

    fn contains(&self, network: &str) -> bool {
        contains(network)
    }

    fn schema(&self, network: &str) -> Result<TypeSchema, RegistryError> {
        schema(network).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_entry_per_network() {
        assert_eq!(len(), Network::ALL.len());
        for network in Network::ALL {
            assert!(contains(network.slug()));
            assert_eq!(lookup(network.slug()).unwrap(), for_network(network));
        }
    }

    #[test]
    fn networks_are_sorted() {
        assert_eq!(
            networks(),
            ["kusama", "moonbase", "moonbeam", "moonriver", "polkadot", "westend"]
        );
    }

    #[test]
    fn repeated_lookup_returns_same_slice() {
        let a = lookup("moonbeam").unwrap();
        let b = lookup("moonbeam").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn schema_is_parsed_once() {
        let a = schema("westend").unwrap();
        let b = schema("westend").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn unknown_network_everywhere() {
        assert!(matches!(
            lookup("rococo"),
            Err(RegistryError::NetworkNotFound { network }) if network == "rococo"
        ));
        assert!(schema("rococo").is_err());
        assert!(digest("rococo").is_err());
        assert!(!contains("rococo"));
    }

    #[test]
    fn trait_object_matches_free_functions() {
        let registry: Box<dyn TypeRegistry> = Box::new(EmbeddedRegistry::new());
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.networks(), networks());
        assert_eq!(registry.document("kusama").unwrap(), lookup("kusama").unwrap());
        assert_eq!(&registry.schema("kusama").unwrap(), schema("kusama").unwrap());
        assert_eq!(registry.digest("kusama").unwrap(), digest("kusama").unwrap());
    }
}
