//! ChainTypes CLI — inspect the type-registry documents compiled into ChainTypes.
//!
//! # Commands
//! ```text
//! chaintypes networks  [--digest]
//! chaintypes show      <network> [--pretty]
//! chaintypes inspect   <network> <type> [--json]
//! chaintypes validate
//! chaintypes info
//! ```

use anyhow::{Context, Result};
use chaintypes_core::TypeRegistry;
use chaintypes_observability::{init_tracing, LogConfig};
use chaintypes_registry::EmbeddedRegistry;
use clap::{Parser, Subcommand};

mod cmd_inspect;
mod cmd_validate;

#[derive(Parser)]
#[command(
    name = "chaintypes",
    about = "Per-network SCALE type registries — ChainTypes CLI",
    long_about = "
ChainTypes CLI: list, print and inspect the type-registry documents embedded
for Polkadot, Kusama, Westend, Moonbeam, Moonriver and Moonbase.

ENVIRONMENT VARIABLES:
  CHAINTYPES_LOG        Log level or filter directives (default: warn)
  CHAINTYPES_LOG_JSON   Emit JSON logs when set to true
",
    version
)]
struct Cli {
    /// Log level or filter directives, e.g. `debug` or `warn,chaintypes_registry=debug`
    #[arg(long, global = true, env = "CHAINTYPES_LOG", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "CHAINTYPES_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List networks with an embedded type registry
    Networks {
        /// Also print the SHA-256 digest of each document
        #[arg(long)]
        digest: bool,
    },

    /// Print a network's type-registry document
    Show {
        /// Network name, e.g. kusama
        network: String,
        /// Pretty-print instead of emitting the stored bytes
        #[arg(long)]
        pretty: bool,
    },

    /// Show every definition of a type name, including versioned variants
    Inspect {
        /// Network name, e.g. kusama
        network: String,
        /// Bare type name, e.g. Address
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse every embedded document and report problems
    Validate,

    /// Show build and table info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&LogConfig {
        level: cli.log_level,
        json: cli.log_json,
        ..LogConfig::default()
    });

    let registry = EmbeddedRegistry::new();

    match cli.command {
        Commands::Networks { digest } => cmd_networks(&registry, digest),
        Commands::Show { network, pretty } => cmd_show(&registry, &network, pretty),
        Commands::Inspect { network, type_name, json } => {
            cmd_inspect::run(&registry, &network, &type_name, json)
        }
        Commands::Validate => cmd_validate::run(&registry),
        Commands::Info => cmd_info(&registry),
    }
}

fn cmd_networks(registry: &impl TypeRegistry, digest: bool) -> Result<()> {
    for network in registry.networks() {
        if digest {
            println!("{network:<10} {}", registry.digest(network)?);
        } else {
            println!("{network}");
        }
    }
    Ok(())
}

fn cmd_show(registry: &impl TypeRegistry, network: &str, pretty: bool) -> Result<()> {
    if pretty {
        let schema = registry.schema(network)?;
        let out = serde_json::to_string_pretty(&schema)
            .with_context(|| format!("serializing type registry for '{network}'"))?;
        println!("{out}");
    } else {
        println!("{}", registry.document(network)?);
    }
    Ok(())
}

fn cmd_info(registry: &impl TypeRegistry) -> Result<()> {
    println!("ChainTypes v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Embedded type registries: {}", registry.len());
    for network in registry.networks() {
        let bytes = registry.document(network)?.len();
        let types = registry.schema(network)?.len();
        println!("  {network:<10} {types:>3} types  {bytes:>5} bytes");
    }
    Ok(())
}
