//! CLI entry point for modelbase-codegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use modelbase_codegen::config::CodegenConfig;
use modelbase_codegen::schema::{DdlSchemaProvider, SchemaProvider, Table};

#[derive(Parser)]
#[command(name = "modelbase-codegen")]
#[command(about = "Generate persistence-capable model types from MySQL table schema")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to SQL schema file (overrides config)
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Table to generate a model for (overrides config)
    #[arg(short, long)]
    table: Option<String>,

    /// Schema (database) name (overrides config)
    #[arg(long)]
    schema_name: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the model artifact
    Generate,
    /// Inspect schema (dump the parsed table metadata as JSON)
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = if let Some(config_path) = &cli.config {
        CodegenConfig::from_file(config_path)?
    } else {
        CodegenConfig::default()
    };

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    // Apply CLI overrides
    if let Some(schema) = cli.schema {
        config.schema_file = schema;
    }
    if let Some(table) = cli.table {
        config.table = table;
    }
    if let Some(schema_name) = cli.schema_name {
        config.schema_name = schema_name;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    // Validate configuration
    config.validate()?;

    if let Some(Commands::Inspect) = &cli.command {
        return inspect_table(&config);
    }

    // Generate code
    info!(
        "Generating model for table `{}` from {:?}",
        config.table, config.schema_file
    );
    let path = modelbase_codegen::generate(&config)?;
    info!("Code generation completed successfully: {}", path.display());
    Ok(())
}

fn inspect_table(config: &CodegenConfig) -> Result<()> {
    let provider = DdlSchemaProvider::from_file(&config.schema_file)?;
    let columns = provider.get_columns(&config.table, &config.schema_name)?;
    let table = Table::new(config.table.clone(), columns)?;

    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
