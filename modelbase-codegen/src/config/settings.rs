//! Configuration settings for modelbase-codegen

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;
use crate::error::{CodegenError, Result};

/// Main configuration struct for code generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Path to the SQL schema file
    #[serde(default)]
    pub schema_file: PathBuf,

    /// Table to generate a model for
    #[serde(default)]
    pub table: String,

    /// Schema (database) name the table lives in
    #[serde(default = "default_schema_name")]
    pub schema_name: String,

    /// Name of the generated type; defaults to `{Pascal}Base`
    #[serde(default)]
    pub type_name: Option<String>,

    /// Artifact file name; defaults to `{snake}_base.rs`
    #[serde(default)]
    pub artifact_name: Option<String>,

    /// Output directory for the generated artifact
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Dry run mode - preview without writing files
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_schema_name() -> String {
    defaults::SCHEMA_NAME.to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_DIR)
}
fn default_dry_run() -> bool {
    defaults::DRY_RUN
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            schema_file: PathBuf::new(),
            table: String::new(),
            schema_name: default_schema_name(),
            type_name: None,
            artifact_name: None,
            output_dir: default_output_dir(),
            dry_run: default_dry_run(),
            log_level: None,
        }
    }
}

impl CodegenConfig {
    /// Create a default config for the given schema file and table
    pub fn default_for(schema_file: PathBuf, table: impl Into<String>) -> Self {
        Self {
            schema_file,
            table: table.into(),
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CodegenConfig = toml::from_str(&content).map_err(|e| {
            CodegenError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from config file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            // Try default locations
            builder = builder.add_source(File::with_name("modelbase-codegen").required(false));
        }

        // Override with environment variables (MODELBASE_*)
        builder = builder.add_source(Environment::with_prefix("MODELBASE").separator("_"));

        let config: CodegenConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.schema_file.as_os_str().is_empty() {
            return Err(CodegenError::ValidationError(
                "schema_file is required".into(),
            ));
        }

        if !self.schema_file.exists() {
            return Err(CodegenError::ValidationError(format!(
                "Schema file not found: {}",
                self.schema_file.display()
            )));
        }

        if self.table.trim().is_empty() {
            return Err(CodegenError::ValidationError("table is required".into()));
        }

        Ok(())
    }
}
