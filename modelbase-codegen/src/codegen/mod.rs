//! Code generation module

mod decl;
mod emitter;
mod field_generator;
mod naming;
mod persistence_generator;
mod printer;
mod typemap;

pub use decl::*;
pub use emitter::*;
pub use field_generator::*;
pub use naming::*;
pub use persistence_generator::*;
pub use printer::*;
pub use typemap::*;

use std::path::Path;

/// Best-effort rustfmt on a generated file.
pub(crate) fn format_file(path: &Path) {
    let _ = std::process::Command::new("rustfmt").arg(path).status();
}
