//! Directory source.
//!
//! Walks a directory tree and reads every draft document in it, in file-name
//! order so reports are stable between runs.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use draftcheck_core::{
    application::{ApplicationError, ports::DraftSource},
    domain::DraftSubmission,
    error::DraftcheckResult,
};

use super::file::DocumentSource;
use crate::document::DocumentFormat;

/// Reads every document below a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extensions: Vec<String>,
    recursive: bool,
}

impl DirectorySource {
    /// Source over `root`, recursing and accepting `.json` and `.toml`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DocumentFormat::DEFAULT_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            recursive: true,
        }
    }

    /// Restrict discovery to these extensions (without the dot).
    ///
    /// An empty list keeps the current set. Extensions no parser understands
    /// are dropped with a warning.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut accepted = Vec::new();
        for ext in extensions {
            let ext = ext.into().trim_start_matches('.').to_ascii_lowercase();
            if DocumentFormat::from_extension(&ext).is_some() {
                accepted.push(ext);
            } else {
                warn!(extension = %ext, "Ignoring unsupported draft extension");
            }
        }
        if !accepted.is_empty() {
            self.extensions = accepted;
        }
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }

    /// Document paths below the root, sorted by file name per directory.
    pub fn discover(&self) -> DraftcheckResult<Vec<PathBuf>> {
        let mut walker = WalkDir::new(&self.root).sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let mut paths = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::SourceUnavailable {
                location: self.location(),
                reason: e.to_string(),
            })?;

            if entry.file_type().is_file() && self.accepts(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}

impl DraftSource for DirectorySource {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self) -> DraftcheckResult<Vec<DraftSubmission>> {
        let paths = self.discover()?;
        debug!(documents = paths.len(), "Documents discovered");

        let mut submissions = Vec::new();
        for path in paths {
            submissions.extend(DocumentSource::new(path).read()?);
        }

        if submissions.is_empty() {
            return Err(ApplicationError::EmptySource {
                location: self.location(),
            }
            .into());
        }
        Ok(submissions)
    }
}
