//! Model emitter: sequences declarations and writes the artifact

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::decl::ModelUnit;
use super::{field_generator, naming, persistence_generator, printer};
use crate::error::Result;
use crate::schema::Table;

/// Names for one emitted artifact.
///
/// Always explicit: table name, generated type name, and artifact file name
/// travel together and are never inferred from ambient state.
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    pub table_name: String,
    pub type_name: String,
    pub artifact_name: String,
}

impl EmitterConfig {
    /// Default naming for a table: `contact` -> `ContactBase` in
    /// `contact_base.rs`
    pub fn for_table(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            type_name: naming::to_type_name(table_name),
            artifact_name: naming::to_artifact_name(table_name),
        }
    }
}

/// Sequences the declaration blocks for one table and writes the artifact.
///
/// The sequence is header, per-column blocks in schema order, persistence
/// block, trailer. Any failure along the way aborts the run with nothing
/// written; the artifact only appears on disk after the whole unit rendered.
pub struct ModelEmitter<'a> {
    config: &'a EmitterConfig,
    table: &'a Table,
}

impl<'a> ModelEmitter<'a> {
    pub fn new(config: &'a EmitterConfig, table: &'a Table) -> Self {
        Self { config, table }
    }

    /// Assemble the full declaration sequence
    pub fn build(&self) -> Result<ModelUnit> {
        let mut decls = Vec::new();
        for column in &self.table.columns {
            decls.extend(field_generator::field_declarations(
                &self.config.table_name,
                column,
            )?);
        }
        decls.extend(persistence_generator::persistence_declarations(self.table)?);

        Ok(ModelUnit {
            type_name: self.config.type_name.clone(),
            table_name: self.config.table_name.clone(),
            decls,
        })
    }

    /// Render the artifact source without touching the filesystem
    pub fn render(&self) -> Result<String> {
        Ok(printer::render_unit(&self.build()?))
    }

    /// Render and write the artifact atomically.
    ///
    /// The source is completed in memory first, then written to a temp file
    /// in the target directory and renamed into place. Failure on any path
    /// drops the temp file, so a failed run leaves no artifact behind.
    pub fn write_artifact(&self, output_dir: &Path) -> Result<PathBuf> {
        let source = self.render()?;

        std::fs::create_dir_all(output_dir)?;
        let mut tmp = NamedTempFile::new_in(output_dir)?;
        tmp.write_all(source.as_bytes())?;

        let path = output_dir.join(&self.config.artifact_name);
        tmp.persist(&path).map_err(|e| e.error)?;
        debug!("Wrote {}", path.display());

        super::format_file(&path);
        Ok(path)
    }
}
