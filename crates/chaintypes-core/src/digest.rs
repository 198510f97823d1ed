//! SHA-256 digests of embedded documents.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// `0x`-prefixed, lowercase hex SHA-256 of a document's bytes.
/// Pins a document's exact content independent of its JSON meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentDigest(pub String);

impl DocumentDigest {
    pub fn of(bytes: &[u8]) -> Self {
        Self(format!("0x{}", hex::encode(Sha256::digest(bytes))))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_digest() {
        assert_eq!(
            DocumentDigest::of(b"").as_hex(),
            "0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_is_sensitive_to_whitespace() {
        assert_ne!(DocumentDigest::of(b"{}"), DocumentDigest::of(b"{ }"));
    }
}
