//! Identifiers for the networks that ship an embedded type registry.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A Substrate-based network with a bundled type-registry document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Polkadot,
    Kusama,
    Westend,
    Moonbeam,
    Moonriver,
    Moonbase,
}

impl Network {
    /// Every network with an embedded document.
    pub const ALL: [Network; 6] = [
        Network::Polkadot,
        Network::Kusama,
        Network::Westend,
        Network::Moonbeam,
        Network::Moonriver,
        Network::Moonbase,
    ];

    /// The lookup key for this network, e.g. `"kusama"`.
    pub const fn slug(self) -> &'static str {
        match self {
            Network::Polkadot => "polkadot",
            Network::Kusama => "kusama",
            Network::Westend => "westend",
            Network::Moonbeam => "moonbeam",
            Network::Moonriver => "moonriver",
            Network::Moonbase => "moonbase",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Network {
    type Err = RegistryError;

    /// Exact, case-sensitive match on the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.slug() == s)
            .ok_or_else(|| RegistryError::NetworkNotFound {
                network: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_roundtrips_through_from_str() {
        for n in Network::ALL {
            assert_eq!(n.slug().parse::<Network>().unwrap(), n);
            assert_eq!(n.to_string(), n.slug());
        }
    }

    #[test]
    fn unknown_and_miscased_names_rejected() {
        assert!(matches!(
            "unknown-network".parse::<Network>(),
            Err(RegistryError::NetworkNotFound { network }) if network == "unknown-network"
        ));
        assert!("Kusama".parse::<Network>().is_err());
        assert!("".parse::<Network>().is_err());
    }

    #[test]
    fn serde_uses_slug() {
        let json = serde_json::to_string(&Network::Moonriver).unwrap();
        assert_eq!(json, "\"moonriver\"");
        let back: Network = serde_json::from_str("\"westend\"").unwrap();
        assert_eq!(back, Network::Westend);
    }
}
