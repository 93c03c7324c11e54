//! modelbase-codegen: Generate persistence-capable model types from table schema
//!
//! This crate provides both a CLI tool and a library. It reads the column
//! metadata of one table (from `CREATE TABLE` DDL via the built-in
//! [`schema::DdlSchemaProvider`], or any other [`schema::SchemaProvider`])
//! and emits a Rust model type that compiles against the `modelbase` runtime
//! crate:
//!
//! - Private backing fields with public getters, and setters for everything
//!   except auto-increment columns
//! - Finder methods: a unique lookup on the primary-key column, multi-result
//!   lookups on every other column
//! - A `fill_model`/`create`/`commit`/`save` persistence set keyed on the
//!   table's single primary-key column
//!
//! A run either produces one complete artifact, written atomically, or
//! returns a typed error with nothing on disk.
//!
//! # Library usage
//!
//! ```rust,ignore
//! modelbase_codegen::GeneratorBuilder::new("schema.sql", "contact")
//!     .output_dir("src/generated")
//!     .generate()?;
//! ```
//!
//! # CLI usage
//!
//! ```bash
//! modelbase-codegen --schema schema.sql --table contact --output ./src/generated generate
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod schema;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use config::CodegenConfig;
pub use error::{CodegenError, Result};

use codegen::{EmitterConfig, ModelEmitter};
use schema::{DdlSchemaProvider, SchemaProvider, Table};

/// Main entry point: generate one model artifact for the configured table.
///
/// Returns the artifact path (the would-be path in dry-run mode).
pub fn generate(config: &CodegenConfig) -> Result<PathBuf> {
    info!("Parsing schema: {:?}", config.schema_file);
    let provider = DdlSchemaProvider::from_file(&config.schema_file)?;
    generate_with_provider(&provider, config)
}

/// Generate using any schema provider.
///
/// This is the seam for callers that wire live database introspection in
/// place of DDL parsing.
pub fn generate_with_provider(
    provider: &dyn SchemaProvider,
    config: &CodegenConfig,
) -> Result<PathBuf> {
    let columns = provider.get_columns(&config.table, &config.schema_name)?;
    debug!("Table `{}`: {} columns", config.table, columns.len());
    let table = Table::new(config.table.clone(), columns)?;

    let emitter_config = emitter_config_for(config);
    let emitter = ModelEmitter::new(&emitter_config, &table);

    if config.dry_run {
        let source = emitter.render()?;
        info!(
            "Dry run - would write {} ({} bytes)",
            emitter_config.artifact_name,
            source.len()
        );
        return Ok(config.output_dir.join(&emitter_config.artifact_name));
    }

    let path = emitter.write_artifact(&config.output_dir)?;
    info!("Generated {}", path.display());
    Ok(path)
}

/// Resolve artifact naming: defaults from the table name, overridden by
/// explicit config values
fn emitter_config_for(config: &CodegenConfig) -> EmitterConfig {
    let mut emitter_config = EmitterConfig::for_table(&config.table);
    if let Some(type_name) = &config.type_name {
        emitter_config.type_name = type_name.clone();
    }
    if let Some(artifact_name) = &config.artifact_name {
        emitter_config.artifact_name = artifact_name.clone();
    }
    emitter_config
}

/// Builder pattern for programmatic use
pub struct GeneratorBuilder {
    config: CodegenConfig,
}

impl GeneratorBuilder {
    /// Create a new builder for the given schema file and table
    pub fn new(schema_file: impl AsRef<Path>, table: impl Into<String>) -> Self {
        Self {
            config: CodegenConfig::default_for(schema_file.as_ref().to_path_buf(), table),
        }
    }

    /// Set the output directory for the generated artifact
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the schema (database) name
    pub fn schema_name(mut self, name: &str) -> Self {
        self.config.schema_name = name.to_string();
        self
    }

    /// Override the generated type name
    pub fn type_name(mut self, name: &str) -> Self {
        self.config.type_name = Some(name.to_string());
        self
    }

    /// Override the artifact file name
    pub fn artifact_name(mut self, name: &str) -> Self {
        self.config.artifact_name = Some(name.to_string());
        self
    }

    /// Enable dry run mode (preview without writing files)
    pub fn dry_run(mut self) -> Self {
        self.config.dry_run = true;
        self
    }

    /// Generate the code
    pub fn generate(self) -> Result<PathBuf> {
        self.config.validate()?;
        generate(&self.config)
    }
}
