//! `chaintypes inspect` — print every definition of one type name.

use anyhow::{bail, Result};
use chaintypes_core::{
    schema::{EnumDef, Field, TypeDef},
    version::VersionRange,
    TypeRegistry,
};
use serde::Serialize;

#[derive(Serialize)]
struct Definition<'a> {
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<VersionRange>,
    definition: &'a TypeDef,
}

pub fn run(registry: &impl TypeRegistry, network: &str, type_name: &str, json: bool) -> Result<()> {
    let schema = registry.schema(network)?;
    let entries = schema.definitions(type_name);
    if entries.is_empty() {
        bail!("type '{type_name}' is not defined in the {network} registry");
    }

    if json {
        let rows: Vec<Definition<'_>> = entries
            .iter()
            .map(|e| Definition {
                key: e.key.to_string(),
                range: e.key.range,
                definition: &e.def,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for entry in entries {
        let applies = match entry.key.range {
            Some(range) => format!("spec versions {range}"),
            None => "all spec versions".to_string(),
        };
        println!("{} ({}, {applies})", entry.key, entry.def.kind());
        match &entry.def {
            TypeDef::Alias(target) => println!("  = {target}"),
            TypeDef::Struct(fields) | TypeDef::Enum(EnumDef::Variants(fields)) => {
                print_fields(fields)
            }
            TypeDef::Enum(EnumDef::Values(values)) => {
                for value in values {
                    println!("  - {value}");
                }
            }
        }
    }
    Ok(())
}

fn print_fields(fields: &[Field]) {
    for field in fields {
        println!("  - {}: {}", field.name, field.ty);
    }
}
