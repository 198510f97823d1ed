//! # chaintypes-registry
//!
//! Type-registry documents for Substrate-based networks, compiled into the
//! binary. Each document is the JSON a SCALE decoder loads on top of its base
//! type registry for that network.
//!
//! Networks: `polkadot`, `kusama`, `westend`, `moonbeam`, `moonriver`, `moonbase`.
//!
//! ```
//! let doc = chaintypes_registry::lookup("polkadot")?;
//! assert!(doc.starts_with('{'));
//! # Ok::<(), chaintypes_core::RegistryError>(())
//! ```
//!
//! Callers that prefer a trait object can use [`EmbeddedRegistry`], which
//! implements `chaintypes_core::TypeRegistry`.

pub mod embedded;

pub use embedded::{contains, digest, for_network, len, lookup, networks, schema, EmbeddedRegistry};
