//! confgen - hardware-aware configuration generator for fastfetch
//!
//! confgen composes a fixed tree of display modules, probes which of
//! them produce usable output on the current machine, prunes the rest,
//! decorates the survivors with box-drawing connectors and category
//! colors, and writes the result to the fastfetch config path.

pub mod catalog;
pub mod document;
pub mod error;
pub mod probe;
pub mod theme;
pub mod tree;
pub mod writer;

// Re-exports for convenience
pub use catalog::{default_forest, EXEMPT_KINDS, SCHEMA_URL};
pub use document::{ConfigDocument, Padding};
pub use error::{ConfgenError, ConfgenResult};
pub use probe::{disqualified_kinds, run_probe, ProbeEntry};
pub use tree::{flatten, Node};
pub use writer::{default_config_path, write_config};
