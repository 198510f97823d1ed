//! Type-name keys with optional spec-version range suffixes.
//!
//! Registry documents annotate some type names with the runtime spec versions
//! they apply to: `"Weight#1058-?"` applies from spec version 1058 onward,
//! `"DispatchInfo#1019-1061"` applies to 1019 through 1061 inclusive.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Inclusive range of runtime spec versions. `end == None` is open-ended (`?`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionRange {
    pub start: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
}

impl VersionRange {
    pub fn contains(&self, spec_version: u32) -> bool {
        spec_version >= self.start && self.end.map_or(true, |end| spec_version <= end)
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}-?", self.start),
        }
    }
}

/// A parsed document key: the bare type name plus its version range, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeKey {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<VersionRange>,
}

impl TypeKey {
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: None,
        }
    }
}

impl FromStr for TypeKey {
    type Err = SchemaError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let Some((name, suffix)) = raw.split_once('#') else {
            return Ok(TypeKey::unversioned(raw));
        };
        let invalid = || SchemaError::InvalidVersionRange {
            name: name.to_string(),
            suffix: suffix.to_string(),
        };

        let (start, end) = suffix.split_once('-').ok_or_else(invalid)?;
        let start: u32 = start.parse().map_err(|_| invalid())?;
        let end = match end {
            "?" => None,
            n => Some(n.parse::<u32>().map_err(|_| invalid())?),
        };
        if end.is_some_and(|end| end < start) {
            return Err(invalid());
        }

        Ok(TypeKey {
            name: name.to_string(),
            range: Some(VersionRange { start, end }),
        })
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.range {
            Some(range) => write!(f, "{}#{}", self.name, range),
            None => f.write_str(&self.name),
        }
    }
}
