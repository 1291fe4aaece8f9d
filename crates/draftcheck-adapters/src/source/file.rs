//! Single-document source.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use draftcheck_core::{
    application::{ApplicationError, ports::DraftSource},
    domain::DraftSubmission,
    error::DraftcheckResult,
};

use super::map_io_error;
use crate::document::{DocumentFormat, parse_submissions};

/// Reads submissions from one JSON or TOML file.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    path: PathBuf,
}

impl DocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the file without the empty-document check.
    pub(crate) fn read(&self) -> DraftcheckResult<Vec<DraftSubmission>> {
        let format = DocumentFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| map_io_error(&self.path, e, "read file"))?;

        parse_submissions(&content, format, &self.location())
    }
}

impl DraftSource for DocumentSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> DraftcheckResult<Vec<DraftSubmission>> {
        let submissions = self.read()?;
        if submissions.is_empty() {
            return Err(ApplicationError::EmptySource {
                location: self.location(),
            }
            .into());
        }

        debug!(count = submissions.len(), "Document parsed");
        Ok(submissions)
    }
}
