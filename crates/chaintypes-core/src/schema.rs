//! Typed view of a type-registry document.
//!
//! A document is a JSON object mapping type names to definitions:
//!
//! ```json
//! {
//!   "Address": "AccountId",
//!   "Bond": {"type": "struct", "type_mapping": [["owner", "AccountId"], ["amount", "Balance"]]},
//!   "ProxyType": {"type": "enum", "value_list": ["Any", "NonTransfer"]}
//! }
//! ```
//!
//! Parsing only checks shape. Alias targets are not resolved and
//! version-ranged entries are not narrowed to a spec version; both are left
//! to the decoder consuming the schema.

use crate::error::SchemaError;
use crate::version::TypeKey;
use indexmap::IndexMap;
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use std::str::FromStr;

/// A named, typed slot: a struct field or an enum variant with a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

/// The two enum encodings found in registry documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumDef {
    /// `type_mapping`: variants carrying a payload type (`"Null"` for none).
    Variants(Vec<Field>),
    /// `value_list`: C-like variants without payloads.
    Values(Vec<String>),
}

/// A single definition in a registry document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    /// Decode as the named type.
    Alias(String),
    /// Ordered fields (order matters for SCALE decode).
    Struct(Vec<Field>),
    Enum(EnumDef),
}

impl TypeDef {
    pub fn as_alias(&self) -> Option<&str> {
        match self {
            TypeDef::Alias(target) => Some(target),
            _ => None,
        }
    }

    /// Short label for display: `"alias"`, `"struct"` or `"enum"`.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeDef::Alias(_) => "alias",
            TypeDef::Struct(_) => "struct",
            TypeDef::Enum(_) => "enum",
        }
    }

    fn from_raw(name: &str, raw: RawTypeDef) -> Result<Self, SchemaError> {
        let invalid = |reason: &str| SchemaError::InvalidDefinition {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let composite = match raw {
            RawTypeDef::Alias(target) => return Ok(TypeDef::Alias(target)),
            RawTypeDef::Composite(c) => c,
        };

        match (composite.kind.as_str(), composite.type_mapping, composite.value_list) {
            ("struct", Some(mapping), None) => Ok(TypeDef::Struct(fields(mapping))),
            ("struct", _, Some(_)) => Err(invalid("struct cannot declare value_list")),
            ("struct", None, None) => Err(invalid("struct is missing type_mapping")),
            ("enum", Some(mapping), None) => {
                Ok(TypeDef::Enum(EnumDef::Variants(fields(mapping))))
            }
            ("enum", None, Some(values)) => Ok(TypeDef::Enum(EnumDef::Values(values))),
            ("enum", Some(_), Some(_)) => {
                Err(invalid("enum declares both type_mapping and value_list"))
            }
            ("enum", None, None) => Err(invalid("enum is missing type_mapping or value_list")),
            (other, _, _) => Err(invalid(&format!("unknown definition type '{other}'"))),
        }
    }

    fn to_raw(&self) -> RawTypeDef {
        let composite = |kind: &str,
                         type_mapping: Option<Vec<(String, String)>>,
                         value_list: Option<Vec<String>>| {
            RawTypeDef::Composite(RawComposite {
                kind: kind.to_string(),
                type_mapping,
                value_list,
            })
        };
        match self {
            TypeDef::Alias(target) => RawTypeDef::Alias(target.clone()),
            TypeDef::Struct(f) => composite("struct", Some(pairs(f)), None),
            TypeDef::Enum(EnumDef::Variants(f)) => composite("enum", Some(pairs(f)), None),
            TypeDef::Enum(EnumDef::Values(v)) => composite("enum", None, Some(v.clone())),
        }
    }
}

impl Serialize for TypeDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

/// Wire shape of a definition, before validation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawTypeDef {
    Alias(String),
    Composite(RawComposite),
}

#[derive(Debug, Serialize, Deserialize)]
struct RawComposite {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    type_mapping: Option<Vec<(String, String)>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_list: Option<Vec<String>>,
}

fn fields(mapping: Vec<(String, String)>) -> Vec<Field> {
    mapping
        .into_iter()
        .map(|(name, ty)| Field { name, ty })
        .collect()
}

fn pairs(fields: &[Field]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|f| (f.name.clone(), f.ty.clone()))
        .collect()
}

/// One document entry: its parsed key and definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    pub key: TypeKey,
    pub def: TypeDef,
}

/// A parsed type-registry document. Entries keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSchema {
    /// raw key (including any `#range` suffix) → entry
    entries: IndexMap<String, TypeEntry>,
}

impl TypeSchema {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let raw: IndexMap<String, RawTypeDef> = serde_json::from_str(json)?;
        let mut entries = IndexMap::with_capacity(raw.len());
        for (raw_key, raw_def) in raw {
            let key: TypeKey = raw_key.parse()?;
            let def = TypeDef::from_raw(&raw_key, raw_def)?;
            entries.insert(raw_key, TypeEntry { key, def });
        }
        Ok(Self { entries })
    }

    /// Look up a definition by its exact document key, e.g. `"Weight#1058-?"`.
    pub fn get(&self, raw_key: &str) -> Option<&TypeDef> {
        self.entries.get(raw_key).map(|e| &e.def)
    }

    /// Every entry whose bare name is `name`, versioned or not, in document order.
    pub fn definitions(&self, name: &str) -> Vec<&TypeEntry> {
        self.entries
            .values()
            .filter(|e| e.key.name == name)
            .collect()
    }

    /// All alias entries as (key, target) pairs.
    pub fn aliases(&self) -> Vec<(&TypeKey, &str)> {
        self.entries
            .values()
            .filter_map(|e| e.def.as_alias().map(|target| (&e.key, target)))
            .collect()
    }

    /// Entries carrying a version-range suffix.
    pub fn versioned(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.values().filter(|e| e.key.range.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for TypeSchema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl Serialize for TypeSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (raw_key, entry) in &self.entries {
            map.serialize_entry(raw_key, &entry.def)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionRange;

    const SAMPLE: &str = r#"{
        "Address": "AccountId",
        "Bond": {"type_mapping": [["owner", "AccountId"], ["amount", "Balance"]], "type": "struct"},
        "DispatchResult": {"type": "enum", "type_mapping": [["Ok", "Null"], ["Error", "DispatchError"]]},
        "ProxyType": {"type": "enum", "value_list": ["Any", "NonTransfer", "Staking"]},
        "Keys#28-29": "SessionKeys5",
        "Keys#30-?": "SessionKeys6"
    }"#;

    #[test]
    fn parses_every_definition_shape() {
        let schema = TypeSchema::from_json(SAMPLE).unwrap();
        assert_eq!(schema.len(), 6);

        assert_eq!(schema.get("Address"), Some(&TypeDef::Alias("AccountId".into())));

        match schema.get("Bond").unwrap() {
            TypeDef::Struct(fields) => {
                assert_eq!(fields[0], Field { name: "owner".into(), ty: "AccountId".into() });
                assert_eq!(fields[1].name, "amount");
            }
            other => panic!("expected struct, got {other:?}"),
        }

        assert!(matches!(
            schema.get("DispatchResult"),
            Some(TypeDef::Enum(EnumDef::Variants(v))) if v.len() == 2 && v[0].ty == "Null"
        ));
        assert!(matches!(
            schema.get("ProxyType"),
            Some(TypeDef::Enum(EnumDef::Values(v))) if v == &["Any", "NonTransfer", "Staking"]
        ));
    }

    #[test]
    fn document_order_is_preserved() {
        let schema = TypeSchema::from_json(SAMPLE).unwrap();
        let keys: Vec<String> = schema.iter().map(|e| e.key.to_string()).collect();
        assert_eq!(
            keys,
            ["Address", "Bond", "DispatchResult", "ProxyType", "Keys#28-29", "Keys#30-?"]
        );
    }

    #[test]
    fn definitions_collects_versioned_candidates() {
        let schema = TypeSchema::from_json(SAMPLE).unwrap();
        let keys = schema.definitions("Keys");
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].key.range, Some(VersionRange { start: 28, end: Some(29) }));
        assert_eq!(keys[1].key.range, Some(VersionRange { start: 30, end: None }));
        assert_eq!(schema.versioned().count(), 2);
        assert!(schema.definitions("Missing").is_empty());
        assert!(schema.get("Keys").is_none());
    }

    #[test]
    fn aliases_listed() {
        let schema = TypeSchema::from_json(SAMPLE).unwrap();
        let targets: Vec<&str> = schema.aliases().into_iter().map(|(_, t)| t).collect();
        assert_eq!(targets, ["AccountId", "SessionKeys5", "SessionKeys6"]);
    }

    #[test]
    fn serialization_keeps_document_shape() {
        let schema = TypeSchema::from_json(SAMPLE).unwrap();
        let value = serde_json::to_value(&schema).unwrap();
        let original: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(value, original);
    }

    #[test]
    fn rejects_bad_definitions() {
        let cases = [
            r#"{"A": {"type": "struct"}}"#,
            r#"{"A": {"type": "struct", "value_list": ["X"]}}"#,
            r#"{"A": {"type": "enum"}}"#,
            r#"{"A": {"type": "enum", "type_mapping": [], "value_list": []}}"#,
            r#"{"A": {"type": "set", "value_list": ["X"]}}"#,
        ];
        for json in cases {
            assert!(
                matches!(
                    TypeSchema::from_json(json),
                    Err(SchemaError::InvalidDefinition { ref name, .. }) if name == "A"
                ),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_object_documents_and_bad_ranges() {
        assert!(matches!(TypeSchema::from_json("[]"), Err(SchemaError::Json(_))));
        assert!(matches!(TypeSchema::from_json(""), Err(SchemaError::Json(_))));
        assert!(matches!(TypeSchema::from_json(r#"{"A": 1}"#), Err(SchemaError::Json(_))));
        assert!(matches!(
            TypeSchema::from_json(r#"{"A#x-?": "B"}"#),
            Err(SchemaError::InvalidVersionRange { .. })
        ));
    }
}
