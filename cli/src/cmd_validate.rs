//! `chaintypes validate` — parse every embedded document.

use anyhow::{bail, Result};
use chaintypes_core::TypeRegistry;

pub fn run(registry: &impl TypeRegistry) -> Result<()> {
    let mut failed = 0usize;
    for network in registry.networks() {
        match registry.schema(network) {
            Ok(schema) => {
                let versioned = schema.versioned().count();
                println!(
                    "✓ {network:<10} {} types ({versioned} versioned, {} aliases)",
                    schema.len(),
                    schema.aliases().len()
                );
            }
            Err(e) => {
                tracing::error!(network, error = %e, "type registry failed to parse");
                println!("✗ {network:<10} {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} type registr{} failed validation", if failed == 1 { "y" } else { "ies" });
    }
    Ok(())
}
