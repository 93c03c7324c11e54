//! Default configuration values - single source of truth

/// Default schema (database) name, empty when the source carries none
pub const SCHEMA_NAME: &str = "";

/// Default output directory for generated artifacts
pub const OUTPUT_DIR: &str = "./generated";

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;
