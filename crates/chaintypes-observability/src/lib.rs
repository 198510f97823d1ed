//! # chaintypes-observability
//!
//! Logging initialisation for ChainTypes binaries. Library crates only emit
//! `tracing` events; installing a subscriber is left to the binary.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig};
