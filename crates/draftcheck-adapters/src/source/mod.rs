//! Draft source adapters.

mod directory;
mod file;
mod memory;

use std::io;
use std::path::Path;

use draftcheck_core::{
    application::{ApplicationError, ports::DraftSource},
    error::{DraftcheckError, DraftcheckResult},
};

pub use directory::DirectorySource;
pub use file::DocumentSource;
pub use memory::InMemorySource;

/// Pick the source for a path given on the command line.
///
/// Directories are walked for documents with one of `extensions`; anything
/// else is read as a single document.
pub fn source_for_path(
    path: &Path,
    extensions: &[String],
    recursive: bool,
) -> DraftcheckResult<Box<dyn DraftSource>> {
    let metadata =
        std::fs::metadata(path).map_err(|e| map_io_error(path, e, "read metadata"))?;

    if metadata.is_dir() {
        Ok(Box::new(
            DirectorySource::new(path)
                .with_extensions(extensions.iter().cloned())
                .recursive(recursive),
        ))
    } else {
        Ok(Box::new(DocumentSource::new(path)))
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> DraftcheckError {
    ApplicationError::SourceUnavailable {
        location: path.display().to_string(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
