//! # chaintypes-core
//!
//! Core types shared across the ChainTypes crates: network identifiers,
//! the typed view of a type-registry document, document digests, and the
//! `TypeRegistry` read trait implemented by `chaintypes-registry`.

pub mod digest;
pub mod error;
pub mod network;
pub mod registry;
pub mod schema;
pub mod version;

pub use digest::DocumentDigest;
pub use error::{RegistryError, SchemaError};
pub use network::Network;
pub use registry::TypeRegistry;
pub use schema::{EnumDef, Field, TypeDef, TypeEntry, TypeSchema};
pub use version::{TypeKey, VersionRange};
